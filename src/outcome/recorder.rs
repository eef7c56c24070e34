use crate::{
    link::{codec::safe_text, link_model::{AskPayload, DEFAULT_FROM}},
    outcome::outcome_model::{Choice, OutcomeResult},
};

pub const ACCEPT_TITLE: &str = "Yay!";
pub const DECLINE_TITLE: &str = "Fair enough";

/// Map a decoded payload and the receiver's answer to what gets shown.
pub fn outcome(payload: &AskPayload, choice: Choice) -> OutcomeResult {
    let from = safe_text(Some(&payload.from), DEFAULT_FROM);

    match choice {
        Choice::Accept => OutcomeResult {
            kind: Choice::Accept,
            emoji: "\u{1f498}".to_string(),
            title: ACCEPT_TITLE.to_string(),
            body_text: format!("Yay! You just made {} happy \u{1f498}", from),
            reply_text: None,
        },
        Choice::Decline => OutcomeResult {
            kind: Choice::Decline,
            emoji: "\u{1f643}".to_string(),
            title: DECLINE_TITLE.to_string(),
            body_text: format!(
                "Fair enough \u{1f604} Consent is king/queen. {} appreciates the honesty.",
                from
            ),
            reply_text: Some(decline_reply(&from)),
        },
    }
}

/// Reply the receiver can copy and send back after declining.
pub fn decline_reply(from: &str) -> String {
    format!(
        "Hey {} \u{1f49b} Thanks for asking \u{2014} I\u{2019}m going to pass, but you\u{2019}re amazing.",
        from
    )
}
