use std::sync::LazyLock;

use regex::Regex;

use super::normalize::{is_http_url, unescape};
use super::types::{Candidate, Quality, Source};

// Video CDN hosts start with "video"; require one CDN marker and stop at
// whitespace, quotes, or angle brackets.
static DIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://video[-.\w/%=?&\[\]]+(?:\.mp4|drm|&dl=1|_nc_cat|fbcdn\.net|cdn\.instagram\.com)[^\s"'<>]*"#)
        .expect("direct link pattern")
});

pub fn scan(text: &str) -> Vec<Candidate> {
    DIRECT.find_iter(text)
        .map(|m| unescape(m.as_str()))
        .filter(|url| is_http_url(url))
        .map(|url| Candidate::new(url, Quality::Unknown, Source::DirectLink))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cdn_links() {
        let text = r#"
        src=https://video-ams4-1.xx.fbcdn.net/v/t42.1790-2/abc.mp4?_nc_cat=104&oh=00 next
        <a href="https://video.cdninstagram.com/o1/v/t16/f2/m86/x.mp4?efg=1">x</a>
        "#;
        let got: Vec<String> = scan(text).into_iter().map(|c| c.url).collect();
        assert_eq!(got, [
            "https://video-ams4-1.xx.fbcdn.net/v/t42.1790-2/abc.mp4?_nc_cat=104&oh=00",
            "https://video.cdninstagram.com/o1/v/t16/f2/m86/x.mp4?efg=1",
        ]);
    }

    #[test]
    fn each_marker_alone() {
        for url in [
            "https://video.example.com/v/drm/abc",
            "https://video.example.com/get?id=1&dl=1",
            "https://video.cdn.instagram.com/v/abc",
        ] {
            let got = scan(&format!("<a href=\"{url}\">x</a>"));
            assert_eq!(got.len(), 1, "{url}");
            assert_eq!(got[0].url, url);
        }
    }

    #[test]
    fn dl_flag_needs_ampersand() {
        assert!(scan("https://video.example.com/get?dl=1").is_empty());
    }

    #[test]
    fn requires_marker_and_video_host() {
        let text = "https://video.example.com/watch?v=1 https://cdn.example.com/clip.mp4";
        assert!(scan(text).is_empty());
    }

    #[test]
    fn attribution() {
        let got = scan("https://video.example.com/a.mp4");
        assert_eq!(got, [Candidate::new("https://video.example.com/a.mp4", Quality::Unknown, Source::DirectLink)]);
    }
}
