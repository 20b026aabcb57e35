use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Lookup;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Validate, Fetch, Scan, Respond }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Validate => "validate",
        Phase::Fetch => "fetch",
        Phase::Scan => "scan",
        Phase::Respond => "respond",
    }}
    fn span(&self) -> Span { match self {
        Phase::Validate => info_span!("validate"),
        Phase::Fetch => info_span!("fetch"),
        Phase::Scan => info_span!("scan"),
        Phase::Respond => info_span!("respond"),
    }}
}

impl OpMarker for Lookup {
    const NAME: &'static str = "lookup";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("lookup") }
}
