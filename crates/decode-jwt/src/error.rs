use std::fmt;

use thiserror::Error;

/// The two token segments that carry JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Header => "header",
            Self::Payload => "payload",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid token format: expected {expected} segments, found {found}")]
    Format { expected: usize, found: usize },

    #[error("failed to decode {segment} segment: {source}")]
    Base64 {
        segment: Segment,
        #[source]
        source: base64::DecodeError,
    },

    #[error("failed to parse {segment} segment as a JSON object: {source}")]
    Json {
        segment: Segment,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to format payload: {0}")]
    Render(#[source] serde_json::Error),

    #[error("failed to read standard input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
