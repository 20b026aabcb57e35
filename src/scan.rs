// src/scan.rs
use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use crate::extractor;
use crate::lookup::LookupResult;
use crate::telemetry::{self};
use crate::telemetry::ops::scan::Phase as ScanPhase;

#[derive(Args, Debug)]
pub struct ScanCmd {
    /// Saved HTML file; reads stdin when omitted
    pub path: Option<PathBuf>,
}

pub fn run(args: ScanCmd) -> Result<()> {
    let started = Instant::now();
    let log = telemetry::scan();
    let _g = log.root_span_kv([("path", format!("{:?}", args.path))]).entered();

    let text = {
        let _s = log.span(&ScanPhase::Read).entered();
        read_input(args.path.as_ref())?
    };

    let candidates = {
        let _s = log.span(&ScanPhase::Scan).entered();
        extractor::extract(&text)
    };
    log.candidates_summary(&candidates);
    if candidates.is_empty() {
        log.warn("🔍 No video URL found in input");
    }

    let source = args.path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string());
    let result = LookupResult { source_url: &source, found: candidates.len(), candidates: &candidates };
    log.result(&result, Some(started))?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => {
            // pages saved from a browser are not always valid UTF-8
            let bytes = std::fs::read(p).with_context(|| format!("read {}", p.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("read stdin")?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}
