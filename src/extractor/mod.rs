//! Multi-strategy video URL extraction over raw page text.
//!
//! Every strategy scans the whole input and the results are merged into one
//! URL-keyed [`ResultSet`]: the first strategy to report a URL keeps its
//! quality and source. Pure and synchronous; no I/O.

mod direct_link;
mod json_blob;
mod meta;
mod normalize;
mod result_set;
pub mod types;

pub use normalize::is_http_url;
use result_set::ResultSet;
pub use types::{Candidate, Quality, Source};

pub type Strategy = fn(&str) -> Vec<Candidate>;

/// Strategies in merge priority order.
pub static STRATEGIES: [Strategy; 4] = [
    meta::open_graph,
    json_blob::scan,
    meta::player_stream,
    direct_link::scan,
];

pub fn extract(text: &str) -> Vec<Candidate> {
    extract_with(text, &STRATEGIES)
}

pub fn extract_with(text: &str, strategies: &[Strategy]) -> Vec<Candidate> {
    let mut set = ResultSet::new();
    for strategy in strategies {
        for candidate in strategy(text) {
            set.insert(candidate);
        }
    }
    set.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_tag_end_to_end() {
        let got = extract(r#"<meta property="og:video" content="https://video.example.com/v.mp4">"#);
        assert_eq!(got, [Candidate::new("https://video.example.com/v.mp4", Quality::Unknown, Source::OpenGraph)]);
    }

    #[test]
    fn plain_page_is_not_found() {
        assert!(extract("<html><body>hello</body></html>").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn same_url_from_two_strategies_kept_once() {
        // og tag and direct-link heuristic both see this URL
        let html = r#"<meta property="og:video" content="https://video.example.com/v.mp4">"#;
        let direct = direct_link::scan(html);
        assert_eq!(direct.len(), 1);

        let got = extract(html);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].source, Source::OpenGraph);
    }

    #[test]
    fn earlier_strategy_wins_even_when_later_in_document() {
        let html = r#"
        <script>{"sd_src":"https:\/\/video.example.com\/clip.mp4"}</script>
        <meta property="og:video" content="https://video.example.com/clip.mp4">
        "#;
        let got = extract(html);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].source, Source::OpenGraph);
        assert_eq!(got[0].quality, Quality::Unknown);
    }

    #[test]
    fn merges_all_strategies_in_order() {
        let html = r#"
        <meta name="twitter:player:stream" content="https://t.example.com/stream.mp4">
        <meta property="og:video:secure_url" content="https://og.example.com/v.mp4">
        <script>
          {"playable_url_quality_hd":"https:\/\/video.example.com\/hd.mp4","playable_url":"https:\/\/video.example.com\/plain.mp4"}
        </script>
        <a href="https://video-x.fbcdn.net/raw/clip?_nc_cat=1">raw</a>
        "#;
        let got: Vec<(String, Quality, Source)> = extract(html)
            .into_iter()
            .map(|c| (c.url, c.quality, c.source))
            .collect();
        assert_eq!(got, [
            ("https://og.example.com/v.mp4".to_string(), Quality::Unknown, Source::OpenGraph),
            ("https://video.example.com/hd.mp4".to_string(), Quality::Hd, Source::JsonBlob),
            ("https://video.example.com/plain.mp4".to_string(), Quality::Unknown, Source::JsonBlob),
            ("https://t.example.com/stream.mp4".to_string(), Quality::Unknown, Source::PlayerStream),
            ("https://video-x.fbcdn.net/raw/clip?_nc_cat=1".to_string(), Quality::Unknown, Source::DirectLink),
        ]);
    }

    #[test]
    fn quality_inference_from_json_keys() {
        let hd = extract(r#""playable_url_quality_hd":"https://cdn.example.com/a""#);
        assert_eq!(hd[0].quality, Quality::Hd);
        let plain = extract(r#""playable_url":"https://cdn.example.com/b""#);
        assert_eq!(plain[0].quality, Quality::Unknown);
        let sd = extract(r#""sd_src":"https://cdn.example.com/c""#);
        assert_eq!(sd[0].quality, Quality::Sd);
    }

    #[test]
    fn escapes_normalized_before_keying() {
        let got = extract("\"hd_src\":\"https:\\/\\/cdn.example.com\\/v.mp4?t=1\\u0025202\"");
        assert_eq!(got[0].url, "https://cdn.example.com/v.mp4?t=1%202");
    }

    #[test]
    fn idempotent() {
        let html = r#"
        <meta property="og:video" content="https://video.example.com/v.mp4">
        {"hd_src":"https://video.example.com/hd.mp4","sd_src":"https://video.example.com/sd.mp4"}
        https://video.example.com/direct.mp4
        "#;
        assert_eq!(extract(html), extract(html));
    }

    #[test]
    fn custom_strategy_list() {
        let html = r#"<meta property="og:video" content="https://video.example.com/v.mp4">"#;
        let got = extract_with(html, &[direct_link::scan]);
        assert_eq!(got[0].source, Source::DirectLink);
        assert!(extract_with(html, &[]).is_empty());
    }
}
