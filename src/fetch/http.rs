use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect, Client};
use tracing::{debug, warn};

use super::{FetchConfig, FetchError, PageFetcher};

/// Fetches pages directly while presenting as a desktop browser.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_ms: u64,
}

impl HttpFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&cfg.accept).context("invalid Accept header")?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&cfg.accept_language).context("invalid Accept-Language header")?);

        let client = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .default_headers(headers)
            .redirect(redirect::Policy::limited(cfg.max_redirects))
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .context("build http client")?;

        Ok(HttpFetcher { client, timeout_ms: cfg.timeout_ms })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout { ms: self.timeout_ms }
        } else {
            FetchError::Network(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().await.map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "remote fetch returned non-2xx");
            return Err(FetchError::UpstreamStatus(status.as_u16()));
        }
        if resp.url().as_str() != url {
            debug!(final_url = %resp.url(), "followed redirect");
        }

        resp.text().await.map_err(|e| self.classify(e))
    }

    fn name(&self) -> &'static str { "direct" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::config::{DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};
    use wiremock::matchers::{method, path};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    // header values carry commas, so compare the raw strings
    struct BrowserHeaders;

    impl Match for BrowserHeaders {
        fn matches(&self, req: &Request) -> bool {
            let get = |name: &str| req.headers.get(name).and_then(|v| v.to_str().ok());
            get("user-agent") == Some(DEFAULT_USER_AGENT)
                && get("accept-language") == Some(DEFAULT_ACCEPT_LANGUAGE)
                && get("accept").is_some_and(|v| v.starts_with("text/html"))
        }
    }

    fn fetcher(timeout_ms: u64) -> HttpFetcher {
        HttpFetcher::new(&FetchConfig::default().with_overrides(Some(timeout_ms), None)).unwrap()
    }

    #[tokio::test]
    async fn sends_browser_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/post/1"))
            .and(BrowserHeaders)
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher(5_000).fetch(&format!("{}/post/1", server.uri())).await.unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn non_2xx_is_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let err = fetcher(5_000).fetch(&server.uri()).await.unwrap_err();
        assert_eq!(err, FetchError::UpstreamStatus(404));
    }

    #[tokio::test]
    async fn follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/new"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let body = fetcher(5_000).fetch(&format!("{}/old", server.uri())).await.unwrap();
        assert_eq!(body, "moved");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let started = std::time::Instant::now();
        let err = fetcher(200).fetch(&server.uri()).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout { ms: 200 });
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // nothing listens on port 9 locally
        let err = fetcher(2_000).fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_) | FetchError::Timeout { .. }));
    }
}
