use crate::flow::controller::{FlowController, new_generator};
use crate::flow::flow_model::{Effect, FlowAction, Notice};
use crate::link::codec::{decode, parse_base, raw_param, resolve_location};
use crate::link::link_model::{KEY_TO, StatusKind};
use crate::outcome::outcome_model::Choice;
use crate::render::console::{ConsoleRenderer, apply_effects, format_outcome, format_screen};
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::SuiteReport;
use crate::script::error::ScriptError;
use crate::script::runner::ScriptRunner;
use crate::script::script_model::SessionScript;
use crate::share::clipboard::{SystemClipboard, copy_link, copy_reply};
use crate::share::share_targets::{ShareChannel, share_url};
use crate::trace::logger::TraceLogger;

// ============================================================================
// generate subcommand
// ============================================================================

/// Form fields collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub name: String,
    pub status: Option<StatusKind>,
    pub to: String,
    pub msg: String,
}

/// Walk Welcome → Status → Generate and build the link. Returns whether a
/// link was produced; validation failures are reported on stderr.
pub fn cmd_generate(
    args: &GenerateArgs,
    base_url: &str,
    copy: bool,
    share: Option<ShareChannel>,
    trace_path: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let base = parse_base(base_url)?;
    let mut controller =
        FlowController::new(new_generator(&base)).with_tracer(TraceLogger::from_option(trace_path));
    let mut renderer = ConsoleRenderer::new();

    let mut actions = vec![FlowAction::SetName(args.name.clone()), FlowAction::ToStatus];
    if let Some(status) = args.status {
        actions.push(FlowAction::PickStatus(status));
    }
    actions.extend([
        FlowAction::ToGenerate,
        FlowAction::SetTo(args.to.clone()),
        FlowAction::SetMsg(args.msg.clone()),
        FlowAction::GenerateLink,
    ]);

    let mut last_notice: Option<Notice> = None;
    for action in actions {
        let effects = controller.dispatch(action);
        for effect in &effects {
            if let Effect::Notice(n) = effect {
                last_notice = Some(*n);
            }
        }
        apply_effects(&mut renderer, &effects, controller.state());
    }

    if verbose > 0 {
        eprint!("{}", renderer.take());
    }

    let state = controller.state();
    let Some(link) = state.link.clone() else {
        if let Some(error) = state.validation {
            eprintln!("{}", error);
        }
        if let Some(notice) = last_notice {
            eprintln!("{}", notice);
        }
        return Ok(false);
    };

    println!("{}", link);

    if copy {
        let notice = copy_link(&mut SystemClipboard::new(), &link);
        eprintln!("{}", notice);
    }

    if let Some(channel) = share {
        println!("{}", share_url(channel, &link, &state.form.name, &state.form.to));
    }

    Ok(true)
}

// ============================================================================
// open / respond / share subcommands
// ============================================================================

pub fn cmd_open(
    url: &str,
    base_url: &str,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let controller = FlowController::open_on(url, base_url)?;
    if verbose > 0 {
        eprintln!("Session mode: {:?}", controller.state().mode);
    }
    print!("{}", format_screen(controller.state()));
    Ok(())
}

pub fn cmd_respond(
    url: &str,
    base_url: &str,
    answer: Choice,
    copy: bool,
    trace_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller =
        FlowController::open_on(url, base_url)?.with_tracer(TraceLogger::from_option(trace_path));
    if !controller.state().is_receiver() {
        return Err(format!("'{}' carries no sender; nothing to answer", url).into());
    }

    let effects = controller.dispatch(FlowAction::Respond(answer));
    for effect in &effects {
        if let Effect::Outcome(outcome) = effect {
            print!("{}", format_outcome(outcome));

            if copy {
                if let Some(reply) = &outcome.reply_text {
                    let notice = copy_reply(&mut SystemClipboard::new(), reply);
                    eprintln!("{}", notice);
                }
            }
        }
    }

    Ok(())
}

pub fn cmd_share(
    url: &str,
    base_url: &str,
    channel: ShareChannel,
) -> Result<(), Box<dyn std::error::Error>> {
    let link = resolve_location(url, base_url)?;
    let payload = decode(link.as_str());
    let to = raw_param(link.as_str(), KEY_TO).unwrap_or_default();
    println!("{}", share_url(channel, link.as_str(), &payload.from, &to));
    Ok(())
}

// ============================================================================
// play subcommand
// ============================================================================

/// Replay session scripts and return whether all passed.
pub fn cmd_play(
    path: &str,
    format: &str,
    output: Option<&str>,
    trace_path: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scripts = load_scripts(path)?;

    if scripts.is_empty() {
        eprintln!("No session scripts found at: {}", path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Replaying {} session scripts...", scripts.len());
    }

    let runner = ScriptRunner::new().with_trace(trace_path);
    let start = std::time::Instant::now();

    let mut results = Vec::new();
    for script in &scripts {
        if verbose > 0 {
            eprintln!("  Replaying: {}", script.name);
        }
        results.push(runner.run(script));
    }

    let report = SuiteReport::from_results(path, results)
        .with_duration(start.elapsed().as_millis());
    let all_passed = report.all_passed();

    let output_content = match format {
        "junit" => generate_junit_xml(&report),
        _ => format_console_report(&report, verbose),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Load session scripts from a single YAML file or a directory of YAML files.
pub fn load_scripts(path: &str) -> Result<Vec<SessionScript>, ScriptError> {
    let io_err = |source| ScriptError::Io {
        path: path.to_string(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(io_err)?;
    if !metadata.is_dir() {
        return Ok(vec![load_script(path)?]);
    }

    let mut scripts = Vec::new();
    for entry in std::fs::read_dir(path).map_err(io_err)? {
        let p = entry.map_err(io_err)?.path();
        if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            scripts.push(load_script(&p.to_string_lossy())?);
        }
    }
    // Sort by name for deterministic order
    scripts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(scripts)
}

fn load_script(path: &str) -> Result<SessionScript, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ScriptError::Yaml {
        path: path.to_string(),
        source,
    })
}
