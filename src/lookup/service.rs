use anyhow::anyhow;
use tracing::Instrument;
use url::Url;

use crate::error::AppError;
use crate::extractor::{self, is_http_url, Candidate, Strategy};
use crate::fetch::PageFetcher;
use crate::telemetry::ctx::LogCtx;
use crate::telemetry::ops::lookup::{Lookup as LookupOp, Phase as LookupPhase};

/// Upper bound on the page prefix kept for "not found" diagnostics.
pub const DEBUG_SNIPPET_CHARS: usize = 2000;

/// Reject absent or non-http(s) source URLs before any network call.
pub fn validate_source_url(raw: Option<&str>) -> Result<&str, AppError> {
    let url = raw.filter(|s| !s.is_empty()).ok_or(AppError::InvalidInput("No URL provided"))?;
    if !is_http_url(url) { return Err(AppError::InvalidInput("Invalid URL")); }
    Ok(url)
}

pub fn debug_snippet(text: &str) -> String {
    text.chars().take(DEBUG_SNIPPET_CHARS).collect()
}

/// Validate, fetch once, and run every extraction strategy over the page.
pub async fn execute(
    fetcher: &dyn PageFetcher,
    raw_url: Option<&str>,
    log: &LogCtx<LookupOp>,
) -> Result<Vec<Candidate>, AppError> {
    execute_with(fetcher, raw_url, &extractor::STRATEGIES, log).await
}

pub async fn execute_with(
    fetcher: &dyn PageFetcher,
    raw_url: Option<&str>,
    strategies: &'static [Strategy],
    log: &LogCtx<LookupOp>,
) -> Result<Vec<Candidate>, AppError> {
    let url = {
        let _s = log.span(&LookupPhase::Validate).entered();
        validate_source_url(raw_url)?
    };
    let host = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)).unwrap_or_default();

    let fetch_span = log.span_kv(&LookupPhase::Fetch, [("host", host.clone()), ("fetcher", fetcher.name().to_string())]);
    let text = fetcher.fetch(url).instrument(fetch_span).await?;
    log.info_kv("📥 fetched", [("host", host), ("bytes", text.len().to_string())]);

    // pattern scanning runs off the async workers; a panic there becomes InternalError
    let scan_span = log.span(&LookupPhase::Scan);
    let (candidates, text) = tokio::task::spawn_blocking(move || {
        let _s = scan_span.entered();
        (extractor::extract_with(&text, strategies), text)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))?;

    log.candidates_summary(&candidates);
    if candidates.is_empty() {
        log.warn("🔍 no video URLs extracted");
        return Err(AppError::NoCandidatesFound { snippet: debug_snippet(&text) });
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{Quality, Source};
    use crate::fetch::FetchError;
    use crate::fetch::testing::StubFetcher;
    use crate::telemetry;

    #[test]
    fn validation() {
        assert!(matches!(validate_source_url(None), Err(AppError::InvalidInput("No URL provided"))));
        assert!(matches!(validate_source_url(Some("")), Err(AppError::InvalidInput("No URL provided"))));
        for bad in ["  ", " https://x.example/", "www.example.com/v", "ftp://example.com/v", "javascript:alert(1)", "//example.com"] {
            assert!(matches!(validate_source_url(Some(bad)), Err(AppError::InvalidInput("Invalid URL"))), "{bad}");
        }
        assert_eq!(validate_source_url(Some("HTTPS://www.example.com/reel/1")).unwrap(), "HTTPS://www.example.com/reel/1");
    }

    #[test]
    fn snippet_is_bounded_on_char_boundaries() {
        let long = "é".repeat(5000);
        let s = debug_snippet(&long);
        assert_eq!(s.chars().count(), DEBUG_SNIPPET_CHARS);
        assert_eq!(debug_snippet("short"), "short");
    }

    #[tokio::test]
    async fn invalid_input_never_fetches() {
        let stub = StubFetcher::ok("<html></html>");
        for raw in [None, Some(""), Some("not a url"), Some("mailto:a@b.c")] {
            let err = execute(&stub, raw, &telemetry::lookup()).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn success_returns_candidates() {
        let stub = StubFetcher::ok(r#"<meta property="og:video" content="https://video.example.com/v.mp4">"#);
        let got = execute(&stub, Some("https://www.example.com/watch/1"), &telemetry::lookup()).await.unwrap();
        assert_eq!(got, [Candidate::new("https://video.example.com/v.mp4", Quality::Unknown, Source::OpenGraph)]);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn not_found_carries_bounded_snippet() {
        let page = format!("<html><body>{}</body></html>", "x".repeat(10_000));
        let stub = StubFetcher::ok(&page);
        let err = execute(&stub, Some("https://www.example.com/p"), &telemetry::lookup()).await.unwrap_err();
        match err {
            AppError::NoCandidatesFound { snippet } => {
                assert_eq!(snippet.len(), DEBUG_SNIPPET_CHARS);
                assert!(snippet.starts_with("<html><body>"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    fn exploding(_text: &str) -> Vec<Candidate> {
        panic!("pattern engine failure")
    }

    static EXPLODING: [Strategy; 1] = [exploding];

    #[tokio::test]
    async fn extraction_panic_is_internal_error() {
        let stub = StubFetcher::ok("<html></html>");
        let err = execute_with(&stub, Some("https://www.example.com/p"), &EXPLODING, &telemetry::lookup()).await.unwrap_err();
        match err {
            AppError::Internal(e) => assert!(e.to_string().starts_with("extraction task failed")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_failure_is_distinct_from_not_found() {
        let stub = StubFetcher::err(FetchError::Timeout { ms: 15_000 });
        let err = execute(&stub, Some("https://www.example.com/p"), &telemetry::lookup()).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(FetchError::Timeout { ms: 15_000 })));
    }
}
