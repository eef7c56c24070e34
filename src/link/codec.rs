use url::Url;

use crate::link::{
    error::LinkError,
    link_model::{
        AskPayload, DEFAULT_FROM, DEFAULT_TO, KEY_FROM, KEY_MSG, KEY_STATUS, KEY_TO, MAX_MSG_LEN,
        MAX_NAME_LEN,
    },
};

// ============================================================================
// Text helpers
// ============================================================================

/// Trim `value`; fall back when it is missing or blank.
pub fn safe_text(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Truncate to at most `max` characters. Never errors.
pub fn clamp_len(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Parse a page location that links will be built on.
pub fn parse_base(base: &str) -> Result<Url, LinkError> {
    let url = Url::parse(base).map_err(|source| LinkError::InvalidBaseUrl {
        url: base.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(LinkError::UnsupportedBaseUrl(base.to_string()));
    }
    Ok(url)
}

/// Build the shareable link for `payload` on top of `base`.
///
/// The query is replaced wholesale and the fragment dropped. `from` is
/// always written; `to`, `status` and `msg` are omitted when empty.
/// Non-empty `from` is the caller's responsibility.
pub fn encode_url(payload: &AskPayload, base: &Url) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    {
        let mut query = url.query_pairs_mut();
        query.append_pair(KEY_FROM, &clamp_len(&payload.from, MAX_NAME_LEN));
        if !payload.to.is_empty() {
            query.append_pair(KEY_TO, &clamp_len(&payload.to, MAX_NAME_LEN));
        }
        if !payload.status.is_empty() {
            query.append_pair(KEY_STATUS, &payload.status);
        }
        if !payload.msg.is_empty() {
            query.append_pair(KEY_MSG, &clamp_len(&payload.msg, MAX_MSG_LEN));
        }
    }

    url
}

/// String-in, string-out variant of [`encode_url`].
pub fn encode(payload: &AskPayload, base: &str) -> Result<String, LinkError> {
    let base = parse_base(base)?;
    Ok(encode_url(payload, &base).into())
}

// ============================================================================
// Decoding
// ============================================================================

/// First value for `key` in a form-encoded query, if any.
fn query_value(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Decode a payload from a raw query string (with or without leading `?`).
///
/// Total: missing or blank fields resolve to their fallbacks.
pub fn decode_query(query: &str) -> AskPayload {
    let query = query.strip_prefix('?').unwrap_or(query);

    AskPayload {
        from: safe_text(query_value(query, KEY_FROM).as_deref(), DEFAULT_FROM),
        to: safe_text(query_value(query, KEY_TO).as_deref(), DEFAULT_TO),
        status: safe_text(query_value(query, KEY_STATUS).as_deref(), ""),
        msg: safe_text(query_value(query, KEY_MSG).as_deref(), ""),
    }
}

pub fn decode_url(url: &Url) -> AskPayload {
    decode_query(url.query().unwrap_or(""))
}

/// Decode from either an absolute URL or a bare query string.
pub fn decode(input: &str) -> AskPayload {
    decode_query(&query_part(input))
}

/// Trimmed, non-empty value of a single parameter, without fallbacks.
pub fn raw_param(input: &str, key: &str) -> Option<String> {
    query_value(&query_part(input), key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whether the query carries a non-empty `from`, i.e. the page was opened
/// from a generated link.
pub fn has_sender(input: &str) -> bool {
    raw_param(input, KEY_FROM).is_some()
}

/// Extract the query portion of `input`.
///
/// Only absolute URLs and path-relative links (`/ask/?from=..`) are split
/// on `?`; anything else is a bare query, taken whole minus a leading `?`.
fn query_part(input: &str) -> String {
    let input = input.trim();
    if let Ok(url) = Url::parse(input) {
        return url.query().unwrap_or("").to_string();
    }
    if input.starts_with('/') {
        let path = input.split('#').next().unwrap_or(input);
        return path.split_once('?').map(|(_, q)| q).unwrap_or("").to_string();
    }
    input.strip_prefix('?').unwrap_or(input).to_string()
}

/// Resolve a link the way the CLI accepts it: an absolute URL is used as
/// is, a bare query string is placed on `base`.
pub fn resolve_location(input: &str, base: &str) -> Result<Url, LinkError> {
    let input = input.trim();
    if Url::parse(input).is_ok() {
        return parse_base(input);
    }
    let mut url = parse_base(base)?;
    if input.starts_with('/') {
        return url.join(input).map_err(|source| LinkError::InvalidBaseUrl {
            url: input.to_string(),
            source,
        });
    }
    let query = query_part(input);
    url.set_query((!query.is_empty()).then_some(query.as_str()));
    url.set_fragment(None);
    Ok(url)
}

/// Short, stable fingerprint of a link for traces (no names in logs).
pub fn link_fingerprint(link: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(link.as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..12].to_string()
}
