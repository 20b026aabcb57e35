use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Serve;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Bind, Shutdown }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Bind => "bind",
        Phase::Shutdown => "shutdown",
    }}
    fn span(&self) -> Span { match self {
        Phase::Bind => info_span!("bind"),
        Phase::Shutdown => info_span!("shutdown"),
    }}
}

impl OpMarker for Serve {
    const NAME: &'static str = "serve";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("serve") }
}
