use serde::{Deserialize, Serialize};

/// Shown as the sender when a link carries no usable `from`.
pub const DEFAULT_FROM: &str = "Someone";

/// Shown as the recipient when a link carries no usable `to`.
pub const DEFAULT_TO: &str = "friend";

pub const MAX_NAME_LEN: usize = 30;
pub const MAX_MSG_LEN: usize = 140;

/// Placeholder for a missing or unrecognized relationship status.
pub const UNKNOWN_STATUS_LABEL: &str = "\u{2014}";

// Query parameter keys
pub const KEY_FROM: &str = "from";
pub const KEY_TO: &str = "to";
pub const KEY_STATUS: &str = "status";
pub const KEY_MSG: &str = "msg";

/// Relationship status the sender picks on the Status screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Taken,
    Single,
    Complicated,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [StatusKind::Taken, StatusKind::Single, StatusKind::Complicated];

    /// Wire value used in the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Taken => "taken",
            StatusKind::Single => "single",
            StatusKind::Complicated => "complicated",
        }
    }

    /// Parse a wire value. Anything outside the enumeration is `None`.
    pub fn parse(raw: &str) -> Option<StatusKind> {
        StatusKind::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Taken => "Taken",
            StatusKind::Single => "Single",
            StatusKind::Complicated => "It's complicated",
        }
    }
}

impl std::str::FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKind::parse(&s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown status '{}' (expected taken, single or complicated)", s))
    }
}

/// Display label for a raw status value. Total: unknown and empty values
/// map to an em-dash.
pub fn status_label(raw: &str) -> &'static str {
    StatusKind::parse(raw)
        .map(|k| k.label())
        .unwrap_or(UNKNOWN_STATUS_LABEL)
}

/// Chip text shown on the Status screen once a status is picked.
pub fn status_chip(raw: &str) -> String {
    format!("status: {}", status_label(raw))
}

/// The `{from, to, status, msg}` record carried by a shareable link.
///
/// `status` keeps the raw wire value: a decoded link may carry a value
/// outside [`StatusKind`], which is passed through and only interpreted
/// at display time via [`status_label`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskPayload {
    pub from: String,
    pub to: String,
    pub status: String,
    pub msg: String,
}

impl AskPayload {
    pub fn new(from: &str) -> Self {
        Self {
            from: from.to_string(),
            ..Default::default()
        }
    }

    pub fn with_to(mut self, to: &str) -> Self {
        self.to = to.to_string();
        self
    }

    pub fn with_status(mut self, status: StatusKind) -> Self {
        self.status = status.as_str().to_string();
        self
    }

    pub fn with_msg(mut self, msg: &str) -> Self {
        self.msg = msg.to_string();
        self
    }

    pub fn status_kind(&self) -> Option<StatusKind> {
        StatusKind::parse(&self.status)
    }

    pub fn status_label(&self) -> &'static str {
        status_label(&self.status)
    }
}
