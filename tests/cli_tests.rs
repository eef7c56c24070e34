use clap::Parser;
use love_link::cli::commands::{GenerateArgs, cmd_generate, cmd_open, cmd_respond, cmd_share};
use love_link::cli::config::{
    AppConfig, Cli, Commands, DEFAULT_BASE_URL, load_config, resolve_base_url, resolve_channel,
    resolve_trace_path,
};
use love_link::link::link_model::StatusKind;
use love_link::outcome::outcome_model::Choice;
use love_link::share::share_targets::ShareChannel;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_generate_minimal() {
    let cli = Cli::parse_from(["love-link", "generate", "--name", "Sam"]);
    match cli.command {
        Commands::Generate {
            name,
            status,
            to,
            msg,
            base_url,
            copy,
            share,
        } => {
            assert_eq!(name, "Sam");
            assert!(status.is_none());
            assert_eq!(to, "");
            assert_eq!(msg, "");
            assert!(base_url.is_none());
            assert!(!copy);
            assert!(share.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_generate_all_args() {
    let cli = Cli::parse_from([
        "love-link",
        "-vv",
        "generate",
        "--name",
        "Sam",
        "--status",
        "complicated",
        "--to",
        "Alex",
        "--msg",
        "hi there",
        "--base-url",
        "https://love.example.com/",
        "--copy",
        "--share",
        "x",
        "--trace",
        "trace.jsonl",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"));
    match cli.command {
        Commands::Generate {
            status,
            to,
            msg,
            base_url,
            copy,
            share,
            ..
        } => {
            assert_eq!(status, Some(StatusKind::Complicated));
            assert_eq!(to, "Alex");
            assert_eq!(msg, "hi there");
            assert_eq!(base_url.as_deref(), Some("https://love.example.com/"));
            assert!(copy);
            assert_eq!(share, Some(ShareChannel::X));
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_rejects_unknown_status() {
    let result = Cli::try_parse_from(["love-link", "generate", "--status", "married"]);
    assert!(result.is_err());
}

#[test]
fn cli_parse_respond() {
    let cli = Cli::parse_from([
        "love-link",
        "respond",
        "https://love.example.com/?from=Sam",
        "--answer",
        "no",
    ]);
    match cli.command {
        Commands::Respond { url, answer, copy } => {
            assert_eq!(url, "https://love.example.com/?from=Sam");
            assert_eq!(answer, Choice::Decline);
            assert!(!copy);
        }
        _ => panic!("Expected Respond command"),
    }
}

#[test]
fn cli_parse_open_and_share() {
    let cli = Cli::parse_from(["love-link", "open", "?from=Sam"]);
    assert!(matches!(cli.command, Commands::Open { ref url } if url == "?from=Sam"));

    let cli = Cli::parse_from(["love-link", "share", "https://x.example/?from=Sam"]);
    match cli.command {
        Commands::Share { channel, .. } => assert!(channel.is_none()),
        _ => panic!("Expected Share command"),
    }
}

#[test]
fn cli_parse_play_with_format() {
    let cli = Cli::parse_from([
        "love-link",
        "play",
        "tests/fixtures/scripts",
        "--format",
        "junit",
        "-o",
        "report.xml",
    ]);
    match cli.command {
        Commands::Play {
            path,
            format,
            output,
        } => {
            assert_eq!(path, "tests/fixtures/scripts");
            assert_eq!(format, "junit");
            assert_eq!(output.as_deref(), Some("report.xml"));
        }
        _ => panic!("Expected Play command"),
    }
}

// ============================================================================
// Config loading and resolution
// ============================================================================

#[test]
fn missing_config_uses_defaults() {
    let config = load_config(Some("does/not/exist.yaml"));
    assert_eq!(config.link.base_url, DEFAULT_BASE_URL);
    assert!(config.trace.path.is_none());
    assert_eq!(config.share.channel, ShareChannel::WhatsApp);
}

#[test]
fn partial_config_fills_defaults() {
    let config: AppConfig = serde_yaml::from_str("share:\n  channel: x\n").unwrap();
    assert_eq!(config.share.channel, ShareChannel::X);
    assert_eq!(config.link.base_url, DEFAULT_BASE_URL);
}

#[test]
fn cli_values_win_over_config() {
    let config: AppConfig = serde_yaml::from_str(
        "link:\n  base_url: https://cfg.example/\ntrace:\n  path: cfg.jsonl\nshare:\n  channel: x\n",
    )
    .unwrap();

    assert_eq!(resolve_base_url(None, &config), "https://cfg.example/");
    assert_eq!(
        resolve_base_url(Some("https://cli.example/"), &config),
        "https://cli.example/"
    );
    assert_eq!(resolve_trace_path(None, &config), Some("cfg.jsonl"));
    assert_eq!(resolve_trace_path(Some("cli.jsonl"), &config), Some("cli.jsonl"));
    assert_eq!(resolve_channel(None, &config), ShareChannel::X);
    assert_eq!(
        resolve_channel(Some(ShareChannel::WhatsApp), &config),
        ShareChannel::WhatsApp
    );
}

// ============================================================================
// generate command
// ============================================================================

#[test]
fn generate_reports_missing_fields() {
    let args = GenerateArgs {
        name: "Sam".into(),
        ..Default::default()
    };
    let generated = cmd_generate(&args, "https://love.example.com/", false, None, None, 0).unwrap();
    assert!(!generated);

    let generated = cmd_generate(
        &GenerateArgs::default(),
        "https://love.example.com/",
        false,
        None,
        None,
        0,
    )
    .unwrap();
    assert!(!generated);
}

#[test]
fn generate_succeeds_with_name_and_status() {
    let args = GenerateArgs {
        name: "Sam".into(),
        status: Some(StatusKind::Taken),
        to: "Alex".into(),
        msg: String::new(),
    };
    let generated = cmd_generate(&args, "https://love.example.com/", false, None, None, 0).unwrap();
    assert!(generated);
}

#[test]
fn generate_rejects_bad_base_url() {
    let args = GenerateArgs {
        name: "Sam".into(),
        status: Some(StatusKind::Taken),
        ..Default::default()
    };
    assert!(cmd_generate(&args, "not a url", false, None, None, 0).is_err());
}

// ============================================================================
// open / respond / share with bare query strings
// ============================================================================

#[test]
fn open_accepts_bare_query_on_base() {
    assert!(cmd_open("from=Sam&status=single", "https://love.example.com/", 0).is_ok());
    assert!(cmd_open("https://love.example.com/?from=Sam", "https://love.example.com/", 0).is_ok());
    assert!(cmd_open("from=Sam", "not a url", 0).is_err());
}

#[test]
fn respond_accepts_bare_query_but_needs_a_sender() {
    let base = "https://love.example.com/";
    assert!(cmd_respond("from=Sam&msg=will you?", base, Choice::Accept, false, None).is_ok());
    assert!(cmd_respond("to=Alex", base, Choice::Accept, false, None).is_err());
}

#[test]
fn share_accepts_bare_query() {
    assert!(cmd_share("from=Sam&to=Alex", "https://love.example.com/", ShareChannel::X).is_ok());
}
