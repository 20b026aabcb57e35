// Escape handling for values captured out of markup and inlined script blobs.

/// Decode the literal escapes pages commonly leave in embedded URLs.
pub fn unescape(s: &str) -> String {
    s.replace("\\u0025", "%")
        .replace("\\u0026", "&")
        .replace(r"\/", "/")
        .replace(r#"\""#, "\"")
}

/// JSON-in-JSON payloads keep extra escape layers; after `unescape` any
/// backslash left over is noise.
pub fn strip_backslashes(s: &str) -> String {
    s.replace('\\', "")
}

/// Case-insensitive `^https?://`.
pub fn is_http_url(s: &str) -> bool {
    let b = s.as_bytes();
    let http = b.get(..7).is_some_and(|p| p.eq_ignore_ascii_case(b"http://"));
    let https = b.get(..8).is_some_and(|p| p.eq_ignore_ascii_case(b"https://"));
    http || https
}
