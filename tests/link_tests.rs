use love_link::link::{
    codec::{
        clamp_len, decode, decode_query, encode, has_sender, link_fingerprint, parse_base,
        raw_param, resolve_location, safe_text,
    },
    error::LinkError,
    link_model::{
        AskPayload, DEFAULT_FROM, DEFAULT_TO, MAX_MSG_LEN, MAX_NAME_LEN, StatusKind, status_chip,
        status_label,
    },
};

const BASE: &str = "https://love.example.com/ask/";

// ============================================================================
// Helpers
// ============================================================================

fn full_payload() -> AskPayload {
    AskPayload::new("Sam")
        .with_to("Alex")
        .with_status(StatusKind::Single)
        .with_msg("dinner at 8?")
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn encode_sets_all_non_empty_fields() {
    let link = encode(&full_payload(), BASE).unwrap();
    assert_eq!(
        link,
        "https://love.example.com/ask/?from=Sam&to=Alex&status=single&msg=dinner+at+8%3F"
    );
}

#[test]
fn encode_omits_empty_optional_keys() {
    let link = encode(&AskPayload::new("Sam"), BASE).unwrap();
    assert_eq!(link, "https://love.example.com/ask/?from=Sam");
    assert!(!link.contains("to="));
    assert!(!link.contains("status="));
    assert!(!link.contains("msg="));
}

#[test]
fn encode_replaces_existing_query_and_clears_fragment() {
    let link = encode(
        &AskPayload::new("Sam"),
        "https://love.example.com/ask/?from=Old&utm=1#intro",
    )
    .unwrap();
    assert_eq!(link, "https://love.example.com/ask/?from=Sam");
}

#[test]
fn encode_clamps_long_name_to_thirty_chars() {
    let long = "A".repeat(200);
    let link = encode(&AskPayload::new(&long), BASE).unwrap();

    let from = raw_param(&link, "from").unwrap();
    assert_eq!(from.chars().count(), MAX_NAME_LEN);
    assert_eq!(from, &long[..30]);
}

#[test]
fn encode_clamps_recipient_and_message() {
    let payload = AskPayload::new("Sam")
        .with_to(&"b".repeat(45))
        .with_msg(&"m".repeat(300));
    let link = encode(&payload, BASE).unwrap();
    let decoded = decode(&link);

    assert_eq!(decoded.to, "b".repeat(MAX_NAME_LEN));
    assert_eq!(decoded.msg, "m".repeat(MAX_MSG_LEN));
}

#[test]
fn encode_clamps_at_exact_boundaries() {
    let name30 = "n".repeat(MAX_NAME_LEN);
    let name31 = "n".repeat(MAX_NAME_LEN + 1);
    let msg140 = "m".repeat(MAX_MSG_LEN);
    let msg141 = "m".repeat(MAX_MSG_LEN + 1);

    let at_limit = decode(
        &encode(&AskPayload::new(&name30).with_to(&name30).with_msg(&msg140), BASE).unwrap(),
    );
    assert_eq!(at_limit.from, name30);
    assert_eq!(at_limit.to, name30);
    assert_eq!(at_limit.msg, msg140);

    let over = decode(
        &encode(&AskPayload::new(&name31).with_to(&name31).with_msg(&msg141), BASE).unwrap(),
    );
    assert_eq!(over.from, name30);
    assert_eq!(over.to, name30);
    assert_eq!(over.msg, msg140);
}

#[test]
fn encode_rejects_bad_base() {
    let err = encode(&AskPayload::new("Sam"), "not a url").unwrap_err();
    assert!(matches!(err, LinkError::InvalidBaseUrl { .. }));

    let err = parse_base("mailto:sam@example.com").unwrap_err();
    assert!(matches!(err, LinkError::UnsupportedBaseUrl(_)));
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decode_without_from_uses_fallback() {
    let payload = decode("https://love.example.com/ask/?to=Alex");
    assert_eq!(payload.from, DEFAULT_FROM);
    assert_eq!(payload.from, "Someone");
    assert_eq!(payload.to, "Alex");
}

#[test]
fn decode_from_only_defaults_the_rest() {
    let payload = decode("?from=Sam");
    assert_eq!(payload.from, "Sam");
    assert_eq!(payload.to, DEFAULT_TO);
    assert_eq!(payload.to, "friend");
    assert_eq!(payload.status, "");
    assert_eq!(payload.msg, "");
}

#[test]
fn decode_trims_and_treats_blank_as_absent() {
    let payload = decode_query("from=%20%20&to=+Alex+&msg=++");
    assert_eq!(payload.from, DEFAULT_FROM);
    assert_eq!(payload.to, "Alex");
    assert_eq!(payload.msg, "");
}

#[test]
fn decode_passes_unknown_status_through() {
    let payload = decode("from=Sam&status=bogus");
    assert_eq!(payload.status, "bogus");
    assert_eq!(payload.status_kind(), None);
    assert_eq!(payload.status_label(), "\u{2014}");
}

#[test]
fn decode_of_empty_input_is_total() {
    let payload = decode("");
    assert_eq!(
        payload,
        AskPayload {
            from: "Someone".into(),
            to: "friend".into(),
            status: String::new(),
            msg: String::new(),
        }
    );
}

#[test]
fn decode_takes_first_value_of_repeated_key() {
    let payload = decode("from=Sam&from=Eve");
    assert_eq!(payload.from, "Sam");
}

#[test]
fn decode_bare_query_with_question_mark_in_value() {
    let payload = decode("from=Sam&msg=will you?");
    assert_eq!(payload.from, "Sam");
    assert_eq!(payload.msg, "will you?");
    assert!(has_sender("from=Sam&msg=will you?"));

    let payload = decode("?from=Sam&msg=really%3F");
    assert_eq!(payload.from, "Sam");
    assert_eq!(payload.msg, "really?");
}

#[test]
fn decode_bare_query_with_url_in_value() {
    let payload = decode("from=Sam&msg=see http://x.y");
    assert_eq!(payload.from, "Sam");
    assert_eq!(payload.msg, "see http://x.y");
    assert!(has_sender("from=Sam&msg=see http://x.y"));
}

#[test]
fn decode_absolute_url_keeps_question_marks_in_query() {
    let payload = decode("https://love.example.com/?from=Sam&msg=will you?");
    assert_eq!(payload.from, "Sam");
    assert_eq!(payload.msg, "will you?");
}

#[test]
fn decode_path_relative_link() {
    let payload = decode("/ask/?from=Sam&to=Alex#top");
    assert_eq!(payload.from, "Sam");
    assert_eq!(payload.to, "Alex");
}

#[test]
fn resolve_location_places_bare_query_on_base() {
    let url = resolve_location("from=Sam&status=single", BASE).unwrap();
    assert_eq!(url.as_str(), "https://love.example.com/ask/?from=Sam&status=single");

    let url = resolve_location("https://other.example/?from=Eve", BASE).unwrap();
    assert_eq!(url.as_str(), "https://other.example/?from=Eve");

    let url = resolve_location("", BASE).unwrap();
    assert_eq!(url.as_str(), BASE);

    assert!(resolve_location("from=Sam", "not a url").is_err());
    assert!(resolve_location("mailto:sam@example.com", BASE).is_err());
}

#[test]
fn decode_ignores_fragment() {
    let payload = decode("https://love.example.com/?from=Sam#msg=nope");
    assert_eq!(payload.msg, "");
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn round_trip_reproduces_non_empty_fields() {
    let payload = AskPayload::new("Sam Lee")
        .with_to("Al & Co")
        .with_status(StatusKind::Complicated)
        .with_msg("meet me at the caf\u{e9} \u{1f498} #1?");
    let decoded = decode(&encode(&payload, BASE).unwrap());
    assert_eq!(decoded, payload);
}

#[test]
fn round_trip_fills_empty_optionals() {
    for status in StatusKind::ALL {
        let payload = AskPayload::new("Sam").with_status(status);
        let decoded = decode(&encode(&payload, BASE).unwrap());

        assert_eq!(decoded.from, "Sam");
        assert_eq!(decoded.to, "friend");
        assert_eq!(decoded.status, status.as_str());
        assert_eq!(decoded.msg, "");
    }

    let decoded = decode(&encode(&AskPayload::new("Sam"), BASE).unwrap());
    assert_eq!(decoded.status, "");
}

// ============================================================================
// Helpers and labels
// ============================================================================

#[test]
fn clamp_len_counts_characters_not_bytes() {
    assert_eq!(clamp_len("h\u{e9}llo", 2), "h\u{e9}");
    assert_eq!(clamp_len("\u{1f498}\u{1f498}\u{1f498}", 2), "\u{1f498}\u{1f498}");
    assert_eq!(clamp_len("short", 30), "short");
    assert_eq!(clamp_len("", 3), "");
}

#[test]
fn safe_text_trims_and_falls_back() {
    assert_eq!(safe_text(Some("  Sam "), "x"), "Sam");
    assert_eq!(safe_text(Some("   "), "x"), "x");
    assert_eq!(safe_text(None, "x"), "x");
}

#[test]
fn status_label_is_total() {
    assert_eq!(status_label("single"), "Single");
    assert_eq!(status_label("taken"), "Taken");
    assert_eq!(status_label("complicated"), "It's complicated");
    assert_eq!(status_label(""), "\u{2014}");
    assert_eq!(status_label("bogus"), "\u{2014}");
    assert_eq!(status_label("Single"), "\u{2014}");
}

#[test]
fn status_chip_wraps_label() {
    assert_eq!(status_chip("taken"), "status: Taken");
    assert_eq!(status_chip(""), "status: \u{2014}");
}

#[test]
fn status_kind_parses_cli_input() {
    assert_eq!("Single".parse::<StatusKind>(), Ok(StatusKind::Single));
    assert_eq!(" complicated ".parse::<StatusKind>(), Ok(StatusKind::Complicated));
    assert!("married".parse::<StatusKind>().is_err());
}

#[test]
fn has_sender_requires_non_empty_from() {
    assert!(has_sender("https://x.example/?from=Sam"));
    assert!(has_sender("from=Sam"));
    assert!(!has_sender("https://x.example/?from="));
    assert!(!has_sender("https://x.example/?from=%20"));
    assert!(!has_sender("https://x.example/?to=Alex"));
    assert!(!has_sender("https://x.example/"));
}

#[test]
fn link_fingerprint_is_short_and_stable() {
    let a = link_fingerprint("https://x.example/?from=Sam");
    let b = link_fingerprint("https://x.example/?from=Sam");
    let c = link_fingerprint("https://x.example/?from=Eve");

    assert_eq!(a.len(), 12);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
}
