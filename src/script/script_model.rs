use serde::{Deserialize, Serialize};

use crate::flow::flow_model::{FlowAction, Notice, ScreenName, SessionMode, ValidationError};

/// A scripted session: a page location plus the UI actions a user takes.
/// Written as YAML for review and replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionScript {
    /// Human-readable name for this script
    pub name: String,

    /// Page location the session opens at (a generated link starts receiver mode)
    pub start_url: String,

    pub steps: Vec<ScriptStep>,
}

/// One step: either a flow action from the dispatch table, or something
/// done around the flow (clipboard, opening a link, checking expectations).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScriptStep {
    Flow(FlowAction),
    Session(SessionStep),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionStep {
    /// Copy the generated link to the clipboard
    CopyLink,

    /// Copy the decline reply to the clipboard
    CopyReply,

    /// Make every following clipboard write fail
    DenyClipboard,

    /// Open a link in a fresh session; defaults to the last generated link
    OpenLink {
        #[serde(default)]
        url: Option<String>,
    },

    Expect {
        expectations: Vec<Expectation>,
    },
}

/// A check against the session after the preceding steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    ScreenIs { expected: ScreenName },
    ModeIs { expected: SessionMode },

    /// Last notice shown
    NoticeIs { expected: Notice },

    /// Field-level error currently surfaced (`~` for none)
    ValidationIs { expected: Option<ValidationError> },

    LinkContains { expected: String },
    PayloadFrom { expected: String },
    PayloadTo { expected: String },
    StatusChip { expected: String },
    OutcomeTitle { expected: String },
    ReplyContains { expected: String },
    ClipboardContains { expected: String },
}

impl Expectation {
    pub fn name(&self) -> &'static str {
        match self {
            Expectation::ScreenIs { .. } => "ScreenIs",
            Expectation::ModeIs { .. } => "ModeIs",
            Expectation::NoticeIs { .. } => "NoticeIs",
            Expectation::ValidationIs { .. } => "ValidationIs",
            Expectation::LinkContains { .. } => "LinkContains",
            Expectation::PayloadFrom { .. } => "PayloadFrom",
            Expectation::PayloadTo { .. } => "PayloadTo",
            Expectation::StatusChip { .. } => "StatusChip",
            Expectation::OutcomeTitle { .. } => "OutcomeTitle",
            Expectation::ReplyContains { .. } => "ReplyContains",
            Expectation::ClipboardContains { .. } => "ClipboardContains",
        }
    }
}

/// Result of evaluating a single expectation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectationResult {
    /// Which step this expectation belongs to (0-indexed)
    pub step_index: usize,

    pub expectation: Expectation,
    pub passed: bool,

    /// Actual value found (for debugging failures)
    pub actual: Option<String>,

    pub message: Option<String>,
}

/// Result of replaying a complete script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResult {
    pub script_name: String,

    /// Whether all steps ran and every expectation held
    pub passed: bool,

    pub steps_run: usize,
    pub expectation_results: Vec<ExpectationResult>,

    /// Error that stopped the replay (not an expectation failure)
    pub error: Option<String>,

    /// Plain-text rendering of everything shown during the replay
    #[serde(default)]
    pub transcript: String,
}
