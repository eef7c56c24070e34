use love_link::flow::flow_model::Notice;
use love_link::share::{
    clipboard::{Clipboard, MemoryClipboard, copy_link, copy_reply, copy_text},
    share_targets::{ShareChannel, share_message, share_url},
};

const LINK: &str = "https://love.example.com/?from=Sam&to=Alex";

// ============================================================================
// Share targets
// ============================================================================

#[test]
fn whatsapp_message_mentions_recipient() {
    let msg = share_message(ShareChannel::WhatsApp, LINK, "Sam", "Alex");
    assert!(msg.starts_with("Hey to Alex! \u{1f498}"));
    assert!(msg.contains("Sam made a tiny love link for you:"));
    assert!(msg.contains(LINK));
}

#[test]
fn messages_skip_missing_recipient() {
    let wa = share_message(ShareChannel::WhatsApp, LINK, "Sam", "");
    assert!(wa.starts_with("Hey! "));

    let x = share_message(ShareChannel::X, LINK, "Sam", "");
    assert!(x.contains("Sam is asking you something...\n"));
}

#[test]
fn share_urls_point_at_channel_composers() {
    let wa = share_url(ShareChannel::WhatsApp, LINK, "Sam", "Alex");
    assert!(wa.starts_with("https://wa.me/?text=Hey%20to%20Alex"));
    assert!(!wa.contains(' '));
    assert!(!wa.contains('\n'));

    let x = share_url(ShareChannel::X, LINK, "Sam", "Alex");
    assert!(x.starts_with("https://twitter.com/intent/tweet?text=Valentine%20or%20Nah%3F"));
    assert!(x.contains("Sam%20is%20asking%20you%20something%2C%20Alex"));
    // The link itself is encoded inside the text parameter
    assert!(x.contains("https%3A%2F%2Flove.example.com"));
}

#[test]
fn channel_parses_aliases() {
    assert_eq!("whatsapp".parse::<ShareChannel>(), Ok(ShareChannel::WhatsApp));
    assert_eq!("WA".parse::<ShareChannel>(), Ok(ShareChannel::WhatsApp));
    assert_eq!("twitter".parse::<ShareChannel>(), Ok(ShareChannel::X));
    assert!("fax".parse::<ShareChannel>().is_err());
}

// ============================================================================
// Clipboard
// ============================================================================

#[test]
fn copy_link_reports_success() {
    let mut clipboard = MemoryClipboard::new();
    assert_eq!(copy_link(&mut clipboard, LINK), Notice::LinkCopied);
    assert_eq!(clipboard.contents.as_deref(), Some(LINK));
    assert_eq!(Notice::LinkCopied.text(), "Link copied \u{2705}");
}

#[test]
fn denied_clipboard_yields_failure_notices() {
    let mut clipboard = MemoryClipboard::denied();
    assert_eq!(copy_link(&mut clipboard, LINK), Notice::LinkCopyFailed);
    assert_eq!(copy_reply(&mut clipboard, "Hey Sam"), Notice::ReplyCopyFailed);
    assert!(clipboard.contents.is_none());
    assert_eq!(
        Notice::ReplyCopyFailed.to_string(),
        "Couldn\u{2019}t copy (still sending good vibes)"
    );
}

#[test]
fn empty_text_is_never_copied() {
    let mut clipboard = MemoryClipboard::new();
    assert!(!copy_text(&mut clipboard, ""));
    assert!(clipboard.contents.is_none());
    assert!(clipboard.copy("direct"));
    assert_eq!(copy_reply(&mut clipboard, ""), Notice::ReplyCopyFailed);
    assert_eq!(clipboard.contents.as_deref(), Some("direct"));
}
