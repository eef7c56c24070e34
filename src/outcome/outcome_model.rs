use serde::{Deserialize, Serialize};

/// The receiver's answer to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Accept,
    Decline,
}

impl std::str::FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "accept" => Ok(Choice::Accept),
            "no" | "decline" => Ok(Choice::Decline),
            other => Err(format!("unknown answer '{}' (expected yes or no)", other)),
        }
    }
}

/// What the receiver sees after answering. Derived once per response and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeResult {
    pub kind: Choice,
    pub emoji: String,
    pub title: String,
    pub body_text: String,

    /// Courteous decline offered for one-click copy (Decline only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_text: Option<String>,
}

/// Follow-up button offered under the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// Start a fresh generator session
    MakeOwnLink,
    /// Copy the composed reply
    SendKindReply,
}

impl FollowUp {
    pub fn label(&self) -> &'static str {
        match self {
            FollowUp::MakeOwnLink => "Make my own link",
            FollowUp::SendKindReply => "Send a kind reply",
        }
    }
}

impl OutcomeResult {
    pub fn follow_up(&self) -> FollowUp {
        match self.kind {
            Choice::Accept => FollowUp::MakeOwnLink,
            Choice::Decline => FollowUp::SendKindReply,
        }
    }
}
