use std::sync::LazyLock;

use regex::Regex;

use super::normalize::{is_http_url, strip_backslashes, unescape};
use super::types::{Candidate, Quality, Source};

/// Key names scanned in inlined script/JSON, in priority order.
const KEYS: &[&str] = &[
    "playable_url_quality_hd",
    "playable_url_quality_low",
    "playable_url",
    r#"playable_url_quality_[^"']*"#,
    "hd_src_no_ratelimit",
    "sd_src_no_ratelimit",
    "hd_src",
    "sd_src",
    "playable_url_no_dash",
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEYS.iter()
        .map(|key| {
            let pat = format!(r#"(?i)["']({key})["']\s*:\s*(?:"([^"]+)"|'([^']+)')"#);
            Regex::new(&pat).expect("json key pattern")
        })
        .collect()
});

pub fn scan(text: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    for re in PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            let Some(key) = caps.get(1) else { continue };
            let Some(value) = caps.get(2).or_else(|| caps.get(3)) else { continue };
            let url = strip_backslashes(&unescape(value.as_str()));
            if !is_http_url(&url) { continue; }
            out.push(Candidate::new(url, infer_quality(key.as_str()), Source::JsonBlob));
        }
    }
    out
}

fn infer_quality(key: &str) -> Quality {
    let key = key.to_ascii_lowercase();
    if key.contains("hd") {
        Quality::Hd
    } else if key.contains("sd") || key.contains("low") {
        Quality::Sd
    } else {
        Quality::Unknown
    }
}
