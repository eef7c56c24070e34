use crate::{
    flow::{
        controller::FlowController,
        flow_model::{FlowAction, FlowState},
    },
    link::link_model::status_chip,
    render::console::{ConsoleRenderer, Renderer, apply_effects, format_screen},
    script::{
        context::ScriptContext,
        error::ScriptError,
        script_model::{
            Expectation, ExpectationResult, ScriptResult, ScriptStep, SessionScript, SessionStep,
        },
    },
    share::clipboard::{copy_link, copy_reply},
    trace::logger::TraceLogger,
};

/// Replays a [`SessionScript`] through the flow controller.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    /// Append a JSONL trace of every session opened during replay
    pub trace_path: Option<String>,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(mut self, path: Option<&str>) -> Self {
        self.trace_path = path.map(str::to_string);
        self
    }

    /// Replay a script. Errors stop the replay and are reported in the
    /// result rather than returned.
    pub fn run(&self, script: &SessionScript) -> ScriptResult {
        let mut ctx = ScriptContext::new();
        let mut renderer = ConsoleRenderer::new();

        let mut controller = match self.open(&script.start_url) {
            Ok(c) => c,
            Err(e) => {
                return ScriptResult {
                    script_name: script.name.clone(),
                    passed: false,
                    steps_run: 0,
                    expectation_results: ctx.expectation_results,
                    error: Some(format!("Failed to open start_url: {}", e)),
                    transcript: renderer.take(),
                };
            }
        };
        renderer.out.push_str(&format_screen(controller.state()));

        for (i, step) in script.steps.iter().enumerate() {
            ctx.current_step = i;

            if let Err(e) = self.execute_step(step, i, &mut controller, &mut ctx, &mut renderer) {
                return ScriptResult {
                    script_name: script.name.clone(),
                    passed: false,
                    steps_run: i + 1,
                    expectation_results: ctx.expectation_results,
                    error: Some(format!("Step {} failed: {}", i, e)),
                    transcript: renderer.take(),
                };
            }
        }

        ScriptResult {
            script_name: script.name.clone(),
            passed: ctx.all_passed(),
            steps_run: script.steps.len(),
            expectation_results: ctx.expectation_results,
            error: None,
            transcript: renderer.take(),
        }
    }

    fn open(&self, location: &str) -> Result<FlowController, ScriptError> {
        let controller = FlowController::open(location)?;
        Ok(controller.with_tracer(TraceLogger::from_option(self.trace_path.as_deref())))
    }

    fn execute_step(
        &self,
        step: &ScriptStep,
        step_index: usize,
        controller: &mut FlowController,
        ctx: &mut ScriptContext,
        renderer: &mut ConsoleRenderer,
    ) -> Result<(), ScriptError> {
        match step {
            ScriptStep::Flow(action) => {
                self.dispatch(action.clone(), controller, ctx, renderer);
                Ok(())
            }

            ScriptStep::Session(SessionStep::CopyLink) => {
                let link = controller.state().link.clone().ok_or(ScriptError::NoLink)?;
                let notice = copy_link(&mut ctx.clipboard, &link);
                ctx.last_notice = Some(notice);
                renderer.notice(notice);
                Ok(())
            }

            ScriptStep::Session(SessionStep::CopyReply) => {
                let reply = ctx
                    .last_outcome
                    .as_ref()
                    .and_then(|o| o.reply_text.clone())
                    .ok_or(ScriptError::NoReply)?;
                let notice = copy_reply(&mut ctx.clipboard, &reply);
                ctx.last_notice = Some(notice);
                renderer.notice(notice);
                Ok(())
            }

            ScriptStep::Session(SessionStep::DenyClipboard) => {
                ctx.clipboard.fail = true;
                Ok(())
            }

            ScriptStep::Session(SessionStep::OpenLink { url }) => {
                let location = match url {
                    Some(u) => u.clone(),
                    None => ctx.last_link.clone().ok_or(ScriptError::NoLink)?,
                };
                *controller = self.open(&location)?;
                ctx.last_outcome = None;
                renderer.out.push_str(&format_screen(controller.state()));
                Ok(())
            }

            ScriptStep::Session(SessionStep::Expect { expectations }) => {
                let results = expectations
                    .iter()
                    .map(|e| Self::evaluate_one(e, step_index, controller.state(), ctx))
                    .collect();
                ctx.record(results);
                Ok(())
            }
        }
    }

    fn dispatch(
        &self,
        action: FlowAction,
        controller: &mut FlowController,
        ctx: &mut ScriptContext,
        renderer: &mut dyn Renderer,
    ) {
        let effects = controller.dispatch(action);
        ctx.observe(&effects);
        apply_effects(renderer, &effects, controller.state());
    }

    /// Evaluate a single expectation against the session.
    pub fn evaluate_one(
        expectation: &Expectation,
        step_index: usize,
        state: &FlowState,
        ctx: &ScriptContext,
    ) -> ExpectationResult {
        let (passed, actual) = match expectation {
            Expectation::ScreenIs { expected } => {
                (state.screen == *expected, Some(state.screen.as_str().to_string()))
            }
            Expectation::ModeIs { expected } => {
                (state.mode == *expected, Some(format!("{:?}", state.mode)))
            }
            Expectation::NoticeIs { expected } => (
                ctx.last_notice == Some(*expected),
                ctx.last_notice.map(|n| n.text().to_string()),
            ),
            Expectation::ValidationIs { expected } => {
                (state.validation == *expected, state.validation.map(|v| v.to_string()))
            }
            Expectation::LinkContains { expected } => {
                let link = state.link.clone();
                (link.as_deref().is_some_and(|l| l.contains(expected.as_str())), link)
            }
            Expectation::PayloadFrom { expected } => {
                let from = state.payload.as_ref().map(|p| p.from.clone());
                (from.as_deref() == Some(expected.as_str()), from)
            }
            Expectation::PayloadTo { expected } => {
                let to = state.payload.as_ref().map(|p| p.to.clone());
                (to.as_deref() == Some(expected.as_str()), to)
            }
            Expectation::StatusChip { expected } => {
                let raw = match &state.payload {
                    Some(p) => p.status.clone(),
                    None => state
                        .form
                        .status
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_default(),
                };
                let chip = status_chip(&raw);
                (chip == *expected, Some(chip))
            }
            Expectation::OutcomeTitle { expected } => {
                let title = ctx.last_outcome.as_ref().map(|o| o.title.clone());
                (title.as_deref() == Some(expected.as_str()), title)
            }
            Expectation::ReplyContains { expected } => {
                let reply = ctx.last_outcome.as_ref().and_then(|o| o.reply_text.clone());
                (reply.as_deref().is_some_and(|r| r.contains(expected.as_str())), reply)
            }
            Expectation::ClipboardContains { expected } => {
                let contents = ctx.clipboard.contents.clone();
                (contents.as_deref().is_some_and(|c| c.contains(expected.as_str())), contents)
            }
        };

        ExpectationResult {
            step_index,
            expectation: expectation.clone(),
            passed,
            message: if passed {
                None
            } else {
                Some(format!(
                    "{} did not hold (actual: {})",
                    expectation.name(),
                    actual.as_deref().unwrap_or("none")
                ))
            },
            actual,
        }
    }
}
