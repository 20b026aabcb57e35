use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Hd,
    Sd,
    Unknown,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Hd => "hd",
            Quality::Sd => "sd",
            Quality::Unknown => "unknown",
        }
    }
}

/// Which strategy reported a candidate first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    #[serde(rename = "og:video")]
    OpenGraph,
    #[serde(rename = "json-blob")]
    JsonBlob,
    #[serde(rename = "twitter:player:stream")]
    PlayerStream,
    #[serde(rename = "direct-link")]
    DirectLink,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::OpenGraph => "og:video",
            Source::JsonBlob => "json-blob",
            Source::PlayerStream => "twitter:player:stream",
            Source::DirectLink => "direct-link",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub url: String,
    pub quality: Quality,
    pub source: Source,
}

impl Candidate {
    pub fn new(url: impl Into<String>, quality: Quality, source: Source) -> Self {
        Candidate { url: url.into(), quality, source }
    }
}
