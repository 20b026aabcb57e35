use thiserror::Error;

use crate::fetch::FetchError;

pub const NOT_FOUND_MESSAGE: &str = "No video URL found (public videos only).";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    UpstreamUnavailable(#[from] FetchError),
    #[error("{}", NOT_FOUND_MESSAGE)]
    NoCandidatesFound { snippet: String },
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::UpstreamUnavailable(_) => "upstream_unavailable",
            AppError::NoCandidatesFound { .. } => "no_candidates_found",
            AppError::Internal(_) => "internal_error",
        }
    }
}
