use crate::{
    flow::flow_model::{Effect, Notice},
    outcome::outcome_model::OutcomeResult,
    script::script_model::ExpectationResult,
    share::clipboard::MemoryClipboard,
};

/// What a replay has observed so far, beyond the flow state itself.
#[derive(Debug, Default)]
pub struct ScriptContext {
    /// Current step index (0-based)
    pub current_step: usize,

    pub last_notice: Option<Notice>,
    pub last_outcome: Option<OutcomeResult>,

    /// Most recent link generated in any session of this replay
    pub last_link: Option<String>,

    pub clipboard: MemoryClipboard,
    pub expectation_results: Vec<ExpectationResult>,
}

impl ScriptContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the observable parts of a transition's effects.
    pub fn observe(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Notice(n) => self.last_notice = Some(*n),
                Effect::LinkGenerated(link) => self.last_link = Some(link.clone()),
                Effect::Outcome(o) => self.last_outcome = Some(o.clone()),
                Effect::ShowScreen(_) | Effect::Validation(_) => {}
            }
        }
    }

    pub fn record(&mut self, results: Vec<ExpectationResult>) {
        self.expectation_results.extend(results);
    }

    pub fn all_passed(&self) -> bool {
        self.expectation_results.iter().all(|r| r.passed)
    }

    pub fn fail_count(&self) -> usize {
        self.expectation_results.iter().filter(|r| !r.passed).count()
    }
}
