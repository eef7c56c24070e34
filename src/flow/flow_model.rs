use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    link::link_model::{AskPayload, StatusKind},
    outcome::outcome_model::{Choice, OutcomeResult},
};

// ============================================================================
// Screens and modes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenName {
    Welcome,
    Status,
    Generate,
    Receiver,
}

impl ScreenName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenName::Welcome => "welcome",
            ScreenName::Status => "status",
            ScreenName::Generate => "generate",
            ScreenName::Receiver => "receiver",
        }
    }

    /// Width of the progress bar while this screen is active.
    pub fn progress_percent(&self) -> u8 {
        match self {
            ScreenName::Welcome => 25,
            ScreenName::Status => 50,
            ScreenName::Generate => 75,
            ScreenName::Receiver => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// The person creating a link
    Generator,
    /// The person who opened someone else's link
    Receiver,
}

// ============================================================================
// Session state
// ============================================================================

/// Generator-side form contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub status: Option<StatusKind>,
    pub to: String,
    pub msg: String,
}

impl FormState {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.status.is_none() && self.to.is_empty() && self.msg.is_empty()
    }

    /// Payload to encode once the form has passed validation.
    pub fn to_payload(&self) -> AskPayload {
        AskPayload {
            from: self.name.clone(),
            to: self.to.clone(),
            status: self
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            msg: self.msg.clone(),
        }
    }
}

/// Everything the flow controller owns for one tab.
///
/// Transitions take the state by value and hand back the next one, so the
/// active screen only ever changes in a single assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    pub mode: SessionMode,
    pub screen: ScreenName,
    pub form: FormState,

    /// Page location links are built on (query and fragment stripped)
    pub base: Url,

    /// Decoded link contents (receiver mode only)
    pub payload: Option<AskPayload>,

    /// Last link generated in this session
    pub link: Option<String>,

    /// Field-level error currently surfaced, if any
    pub validation: Option<ValidationError>,

    /// The receiver's answer, once given
    pub answer: Option<Choice>,
}

impl FlowState {
    pub fn is_receiver(&self) -> bool {
        matches!(self.mode, SessionMode::Receiver)
    }

    pub fn responded(&self) -> bool {
        self.answer.is_some()
    }
}

// ============================================================================
// Actions, effects, errors
// ============================================================================

/// UI action identifiers. This is the dispatch table the presentation layer
/// feeds; it carries no presentation concerns of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum FlowAction {
    SetName(String),
    SetTo(String),
    SetMsg(String),
    PickStatus(StatusKind),
    ToStatus,
    BackToWelcome,
    ToGenerate,
    BackToStatus,
    GenerateLink,
    StartOver,
    Respond(Choice),
}

impl FlowAction {
    pub fn id(&self) -> &'static str {
        match self {
            FlowAction::SetName(_) => "set_name",
            FlowAction::SetTo(_) => "set_to",
            FlowAction::SetMsg(_) => "set_msg",
            FlowAction::PickStatus(_) => "pick_status",
            FlowAction::ToStatus => "to_status",
            FlowAction::BackToWelcome => "back_to_welcome",
            FlowAction::ToGenerate => "to_generate",
            FlowAction::BackToStatus => "back_to_status",
            FlowAction::GenerateLink => "generate_link",
            FlowAction::StartOver => "start_over",
            FlowAction::Respond(_) => "respond",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    MissingName,
    MissingStatus,
}

impl ValidationError {
    /// Screen that owns the missing field.
    pub fn owning_screen(&self) -> ScreenName {
        match self {
            ValidationError::MissingName => ScreenName::Welcome,
            ValidationError::MissingStatus => ScreenName::Status,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingName => write!(f, "Please enter your name"),
            ValidationError::MissingStatus => write!(f, "Please pick a status"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Transient user-facing message (toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    NameRequired,
    NameFirst,
    StatusRequired,
    LinkGenerated,
    LinkCopied,
    LinkCopyFailed,
    ReplyCopied,
    ReplyCopyFailed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::NameRequired => "Drop your name first \u{2728}",
            Notice::NameFirst => "Name first \u{2728}",
            Notice::StatusRequired => "Pick a status (for the plot) \u{1f49e}",
            Notice::LinkGenerated => "Link generated \u{1f498}",
            Notice::LinkCopied => "Link copied \u{2705}",
            Notice::LinkCopyFailed => "Couldn\u{2019}t copy",
            Notice::ReplyCopied => "Reply copied \u{2728}",
            Notice::ReplyCopyFailed => "Couldn\u{2019}t copy (still sending good vibes)",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Instructions for collaborators produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Make exactly this screen visible
    ShowScreen(ScreenName),
    Notice(Notice),
    Validation(ValidationError),
    LinkGenerated(String),
    Outcome(OutcomeResult),
}
