use crate::{
    flow::flow_model::{Effect, FlowState, Notice, ScreenName, ValidationError},
    link::link_model::status_chip,
    outcome::outcome_model::OutcomeResult,
};

// ============================================================================
// Renderer collaborator
// ============================================================================

/// Presentation side of a session. The flow controller never waits on it.
pub trait Renderer {
    /// Make exactly `screen` visible.
    fn show_screen(&mut self, screen: ScreenName, state: &FlowState);
    fn notice(&mut self, notice: Notice);
    fn validation(&mut self, error: ValidationError);
    fn link(&mut self, link: &str);
    fn outcome(&mut self, outcome: &OutcomeResult);
}

/// Hand each effect of a transition to the renderer, in order.
pub fn apply_effects(renderer: &mut dyn Renderer, effects: &[Effect], state: &FlowState) {
    for effect in effects {
        match effect {
            Effect::ShowScreen(screen) => renderer.show_screen(*screen, state),
            Effect::Notice(n) => renderer.notice(*n),
            Effect::Validation(v) => renderer.validation(*v),
            Effect::LinkGenerated(link) => renderer.link(link),
            Effect::Outcome(o) => renderer.outcome(o),
        }
    }
}

// ============================================================================
// Console renderer — plain-text views
// ============================================================================

/// Accumulates a plain-text transcript of what a browser would show.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    pub out: String,
    pub quiet_notices: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl Renderer for ConsoleRenderer {
    fn show_screen(&mut self, _screen: ScreenName, state: &FlowState) {
        self.out.push_str(&format_screen(state));
    }

    fn notice(&mut self, notice: Notice) {
        if !self.quiet_notices {
            self.out.push_str(&format!("[{}]\n", notice));
        }
    }

    fn validation(&mut self, error: ValidationError) {
        self.out.push_str(&format!("! {}\n", error));
    }

    fn link(&mut self, link: &str) {
        self.out.push_str(&format!("{}\n", link));
    }

    fn outcome(&mut self, outcome: &OutcomeResult) {
        self.out.push_str(&format_outcome(outcome));
    }
}

/// Plain-text view of the active screen.
///
/// ```text
/// [receiver 100%]
/// Sam is asking you something…
/// Alex, will you be my Valentine?
/// “see you at 8”
/// status: Single
/// [Yes] [No]
/// ```
pub fn format_screen(state: &FlowState) -> String {
    let mut out = String::new();
    let screen = state.screen;

    out.push_str(&format!("[{} {}%]\n", screen.as_str(), screen.progress_percent()));

    match screen {
        ScreenName::Welcome => {
            out.push_str("Hi \u{1f44b}\n");
            out.push_str("What\u{2019}s your name?\n");
        }
        ScreenName::Status => {
            out.push_str(&format!("Nice to meet you, {}\n", state.form.name));
            out.push_str("What\u{2019}s your relationship status?\n");
            let raw = state.form.status.map(|s| s.as_str()).unwrap_or("");
            out.push_str(&format!("{}\n", status_chip(raw)));
        }
        ScreenName::Generate => {
            out.push_str("Who is it for? (optional)\n");
            if let Some(link) = &state.link {
                out.push_str(&format!("Your link: {}\n", link));
            }
        }
        ScreenName::Receiver => {
            if let Some(payload) = &state.payload {
                out.push_str(&format!("{} is asking you something\u{2026}\n", payload.from));
                out.push_str(&format!("{}, will you be my Valentine?\n", payload.to));
                if !payload.msg.is_empty() {
                    out.push_str(&format!("\u{201c}{}\u{201d}\n", payload.msg));
                }
                out.push_str(&format!("{}\n", status_chip(&payload.status)));
                if !state.responded() {
                    out.push_str("[Yes] [No]\n");
                }
            }
        }
    }

    out
}

/// Plain-text view of an outcome card.
pub fn format_outcome(outcome: &OutcomeResult) -> String {
    let mut out = format!("{} {}\n{}\n", outcome.emoji, outcome.title, outcome.body_text);
    if let Some(reply) = &outcome.reply_text {
        out.push_str(&format!("Reply: {}\n", reply));
    }
    out.push_str(&format!("[{}]\n", outcome.follow_up().label()));
    out
}
