//! Infrastructure-level errors: record fetching

use thiserror::Error;

/// Errors from the record-source boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot read source: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record payload from {origin}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            origin: origin.into(),
            source,
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
