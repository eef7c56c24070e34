use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::flow::flow_model::{Notice, ScreenName, SessionMode, ValidationError};

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub mode: SessionMode,
    pub action: Option<String>,

    pub screen_before: Option<ScreenName>,
    pub screen_after: Option<ScreenName>,

    pub notice: Option<Notice>,
    pub validation: Option<ValidationError>,

    /// Fingerprint of a generated link, never the link itself
    pub link_id: Option<String>,

    pub ignored: bool,
}

impl TraceEvent {
    pub fn now(step: u64, mode: SessionMode) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            mode,
            action: None,
            screen_before: None,
            screen_after: None,
            notice: None,
            validation: None,
            link_id: None,
            ignored: false,
        }
    }

    pub fn with_action(mut self, action: impl ToString) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn with_screens(mut self, before: ScreenName, after: ScreenName) -> Self {
        self.screen_before = Some(before);
        self.screen_after = Some(after);
        self
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn with_validation(mut self, error: ValidationError) -> Self {
        self.validation = Some(error);
        self
    }

    pub fn with_link_id(mut self, link_id: impl ToString) -> Self {
        self.link_id = Some(link_id.to_string());
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }
}
