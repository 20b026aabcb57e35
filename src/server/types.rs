use serde::{Deserialize, Serialize};

use crate::extractor::Candidate;

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessBody<'a> {
    pub status: &'static str,
    pub data: &'a [Candidate],
}

impl<'a> SuccessBody<'a> {
    pub fn new(data: &'a [Candidate]) -> Self { SuccessBody { status: "success", data } }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody { status: "error", message: message.into(), debug_snippet: None, error: None }
    }
}
