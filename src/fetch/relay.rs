use async_trait::async_trait;
use url::form_urlencoded;

use super::{FetchError, HttpFetcher, PageFetcher};

const PLACEHOLDER: &str = "{url}";

/// Fetches through a CORS relay: the target is percent-encoded into a URL
/// template and the relay's response body is the page.
pub struct RelayFetcher {
    inner: HttpFetcher,
    template: String,
}

impl RelayFetcher {
    pub fn new(inner: HttpFetcher, template: impl Into<String>) -> Self {
        RelayFetcher { inner, template: template.into() }
    }

    pub fn relay_url(&self, target: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
        if self.template.contains(PLACEHOLDER) {
            self.template.replace(PLACEHOLDER, &encoded)
        } else {
            format!("{}{}", self.template, encoded)
        }
    }
}

#[async_trait]
impl PageFetcher for RelayFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.inner.fetch(&self.relay_url(url)).await
    }

    fn name(&self) -> &'static str { "relay" }
}
