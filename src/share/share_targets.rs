use serde::{Deserialize, Serialize};

/// External share targets a generated link can be handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareChannel {
    #[serde(alias = "wa")]
    WhatsApp,
    #[serde(alias = "twitter")]
    X,
}

impl std::str::FromStr for ShareChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(ShareChannel::WhatsApp),
            "x" | "twitter" => Ok(ShareChannel::X),
            other => Err(format!("unknown share channel '{}' (expected whatsapp or x)", other)),
        }
    }
}

/// Message posted alongside the link on `channel`.
pub fn share_message(channel: ShareChannel, link: &str, from: &str, to: &str) -> String {
    match channel {
        ShareChannel::WhatsApp => {
            let to_part = if to.is_empty() { String::new() } else { format!(" to {}", to) };
            format!(
                "Hey{}! \u{1f498}\n\n{} made a tiny love link for you:\n{}\n\nOpen it and answer honestly \u{1f62d}",
                to_part, from, link
            )
        }
        ShareChannel::X => {
            let to_part = if to.is_empty() { String::new() } else { format!(", {}", to) };
            format!(
                "Valentine or Nah? \u{1f498}\n{} is asking you something{}...\n{}",
                from, to_part, link
            )
        }
    }
}

/// URL that opens `channel`'s composer prefilled with the share message.
pub fn share_url(channel: ShareChannel, link: &str, from: &str, to: &str) -> String {
    let text = urlencoding::encode(&share_message(channel, link, from, to)).into_owned();
    match channel {
        ShareChannel::WhatsApp => format!("https://wa.me/?text={}", text),
        ShareChannel::X => format!("https://twitter.com/intent/tweet?text={}", text),
    }
}
