use std::sync::LazyLock;

use regex::Regex;

use super::normalize::{is_http_url, unescape};
use super::types::{Candidate, Quality, Source};

// Each meta strategy accepts the attribute pair in either order.
static OG_VIDEO: LazyLock<[Regex; 2]> = LazyLock::new(|| [
    Regex::new(r#"(?i)<meta[^>]+property=["']og:video(?::url|:secure_url)?["'][^>]+content=["']([^"']+)["'][^>]*>"#)
        .expect("og:video pattern"),
    Regex::new(r#"(?i)<meta[^>]+content=["']([^"']+)["'][^>]+property=["']og:video(?::url|:secure_url)?["'][^>]*>"#)
        .expect("og:video pattern"),
]);

static PLAYER_STREAM: LazyLock<[Regex; 2]> = LazyLock::new(|| [
    Regex::new(r#"(?i)<meta[^>]+(?:name|property)=["']twitter:player:stream(?::source)?["'][^>]+content=["']([^"']+)["'][^>]*>"#)
        .expect("twitter:player:stream pattern"),
    Regex::new(r#"(?i)<meta[^>]+content=["']([^"']+)["'][^>]+(?:name|property)=["']twitter:player:stream(?::source)?["'][^>]*>"#)
        .expect("twitter:player:stream pattern"),
]);

/// `<meta property="og:video|og:video:url|og:video:secure_url" content="...">`
pub fn open_graph(text: &str) -> Vec<Candidate> {
    scan(text, &*OG_VIDEO, Source::OpenGraph)
}

/// `<meta name|property="twitter:player:stream[:source]" content="...">`
pub fn player_stream(text: &str) -> Vec<Candidate> {
    scan(text, &*PLAYER_STREAM, Source::PlayerStream)
}

fn scan(text: &str, patterns: &[Regex], source: Source) -> Vec<Candidate> {
    let mut hits: Vec<(usize, &str)> = Vec::new();
    for re in patterns {
        for caps in re.captures_iter(text) {
            if let (Some(tag), Some(content)) = (caps.get(0), caps.get(1)) {
                hits.push((tag.start(), content.as_str()));
            }
        }
    }
    // document order across both attribute orders
    hits.sort_by_key(|(pos, _)| *pos);

    hits.into_iter()
        .map(|(_, raw)| unescape(raw.trim()))
        .filter(|url| is_http_url(url))
        .map(|url| Candidate::new(url, Quality::Unknown, source))
        .collect()
}
