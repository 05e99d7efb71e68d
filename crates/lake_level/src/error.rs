use thiserror::Error;

use crate::decode::DecodeError;
use crate::parse::DateParseError;
use crate::FetchError;

/// Why a scrape failed. Every variant aborts the whole scrape.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),
    #[error("unreadable document: {0}")]
    Document(#[from] DecodeError),
    #[error("unexpected page structure: {0}")]
    Structure(String),
    #[error(transparent)]
    Date(#[from] DateParseError),
    #[error("could not start runtime: {0}")]
    Runtime(String),
}

impl LevelError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }
}
