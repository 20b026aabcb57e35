//! Page fetching behind a single async contract.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

pub mod config;
mod http;
mod relay;

pub use config::FetchConfig;
pub use http::HttpFetcher;
pub use relay::RelayFetcher;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Remote fetch timed out after {ms}ms")]
    Timeout { ms: u64 },
    #[error("Remote fetch failed: {0}")]
    UpstreamStatus(u16),
    #[error("Remote fetch failed: {0}")]
    Network(String),
}

/// Retrieve a page body as text. One attempt, no retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    fn name(&self) -> &'static str;
}

/// Direct fetch unless a relay template is configured.
pub fn build(cfg: &FetchConfig) -> Result<Arc<dyn PageFetcher>> {
    let direct = HttpFetcher::new(cfg)?;
    match cfg.relay.as_deref() {
        Some(template) => Ok(Arc::new(RelayFetcher::new(direct, template))),
        None => Ok(Arc::new(direct)),
    }
}
