use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::time::Instant;

use crate::error::AppError;
use crate::extractor::Candidate;
use crate::fetch::{self, FetchConfig};
use crate::telemetry::{self};
use crate::telemetry::ops::lookup::Phase as LookupPhase;

pub mod service;

/// vidscout lookup <URL>
#[derive(Args, Debug)]
pub struct LookupCmd {
    /// Public page URL (http/https)
    pub url: String,
    #[arg(long)] pub timeout_ms: Option<u64>,
    /// Fetch through a relay, e.g. "https://api.allorigins.win/raw?url={url}"
    #[arg(long)] pub relay: Option<String>,
}

#[derive(Serialize)]
pub struct LookupResult<'a> {
    pub source_url: &'a str,
    pub found: usize,
    pub candidates: &'a [Candidate],
}

pub async fn run(args: LookupCmd) -> Result<()> {
    let started = Instant::now();
    let log = telemetry::lookup();
    let root = log.root_span_kv([
        ("url", args.url.clone()),
        ("timeout_ms", format!("{:?}", args.timeout_ms)),
        ("relay", args.relay.is_some().to_string()),
    ]);
    let _g = root.enter();

    let cfg = FetchConfig::from_env().with_overrides(args.timeout_ms, args.relay);
    let fetcher = fetch::build(&cfg)?;

    let candidates = match service::execute(fetcher.as_ref(), Some(&args.url), &log).await {
        Ok(c) => c,
        Err(AppError::NoCandidatesFound { snippet }) => {
            log.warn_kv("🔍 No video URL found (public videos only).", [("snippet_chars", snippet.chars().count().to_string())]);
            log.debug(format!("page prefix:\n{snippet}"));
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let _s = log.span(&LookupPhase::Respond).entered();
    let result = LookupResult { source_url: &args.url, found: candidates.len(), candidates: &candidates };
    if telemetry::config::json_mode() || !candidates.is_empty() {
        log.result(&result, Some(started))?;
    }
    Ok(())
}
