use clap::Parser;
use love_link::cli::commands::{
    GenerateArgs, cmd_generate, cmd_open, cmd_play, cmd_respond, cmd_share,
};
use love_link::cli::config::{
    Cli, Commands, load_config, resolve_base_url, resolve_channel, resolve_trace_path,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // CLI > config > defaults
    let trace_path = resolve_trace_path(cli.trace.as_deref(), &config);

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
            let base_url = resolve_base_url(base_url.as_deref(), &config);
            let args = GenerateArgs { name, status, to, msg };
            let generated = cmd_generate(&args, &base_url, copy, share, trace_path, cli.verbose)?;
            if !generated {
                std::process::exit(1);
            }
        }
        Commands::Open { url } => {
            cmd_open(&url, &resolve_base_url(None, &config), cli.verbose)?;
        }
        Commands::Respond { url, answer, copy } => {
            let base_url = resolve_base_url(None, &config);
            cmd_respond(&url, &base_url, answer, copy, trace_path)?;
        }
        Commands::Share { url, channel } => {
            let base_url = resolve_base_url(None, &config);
            cmd_share(&url, &base_url, resolve_channel(channel, &config))?;
        }
        Commands::Play {
            path,
            format,
            output,
        } => {
            let all_passed = cmd_play(&path, &format, output.as_deref(), trace_path, cli.verbose)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
