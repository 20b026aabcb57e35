use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::output::config::truthy;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeConfig {
    pub bind: SocketAddr,
    /// Attach a bounded page prefix to "not found" responses.
    pub debug_snippet: bool,
    /// Attach the underlying failure detail to 500 responses.
    pub expose_errors: bool,
}

impl ServeConfig {
    pub fn from_env() -> Result<Self> {
        let bind = env::var("VIDSCOUT_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Ok(ServeConfig {
            bind: parse_bind(&bind)?,
            debug_snippet: env::var("VIDSCOUT_DEBUG_SNIPPET").ok().as_deref().is_some_and(truthy),
            expose_errors: env::var("VIDSCOUT_EXPOSE_ERRORS").ok().as_deref().is_some_and(truthy),
        })
    }

    pub fn with_overrides(mut self, bind: Option<&str>, debug_snippet: bool, expose_errors: bool) -> Result<Self> {
        if let Some(b) = bind { self.bind = parse_bind(b)?; }
        self.debug_snippet |= debug_snippet;
        self.expose_errors |= expose_errors;
        Ok(self)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            debug_snippet: false,
            expose_errors: false,
        }
    }
}

fn parse_bind(s: &str) -> Result<SocketAddr> {
    s.parse().with_context(|| format!("invalid bind address: {s}"))
}
