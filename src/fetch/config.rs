use std::env;

pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub max_redirects: usize,
    /// Relay template such as `https://relay.example/raw?url={url}`; `None` fetches directly.
    pub relay: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            relay: None,
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        let mut cfg = FetchConfig::default();
        if let Some(ms) = env::var("VIDSCOUT_FETCH_TIMEOUT_MS").ok().as_deref().and_then(parse_timeout_ms) {
            cfg.timeout_ms = ms;
        }
        if let Ok(ua) = env::var("VIDSCOUT_USER_AGENT") {
            if !ua.trim().is_empty() { cfg.user_agent = ua; }
        }
        cfg.relay = env::var("VIDSCOUT_RELAY").ok().filter(|s| !s.trim().is_empty());
        cfg
    }

    /// Apply CLI flags on top of the environment.
    pub fn with_overrides(mut self, timeout_ms: Option<u64>, relay: Option<String>) -> Self {
        if let Some(ms) = timeout_ms { self.timeout_ms = ms.max(1); }
        if relay.is_some() { self.relay = relay; }
        self
    }
}

/// Timeouts are at least 1ms; zero would fail every fetch immediately.
fn parse_timeout_ms(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok().map(|ms| ms.max(1))
}
