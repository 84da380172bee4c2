//! Record-source boundary trait and transports
//!
//! The core depends on `RecordFetcher` abstractly; any transport (HTTP,
//! local file, in-memory fixture) can satisfy it, which keeps the pipeline
//! testable without network access.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{CompanyRecord, Travel};
use crate::infrastructure::error::{FetchError, FetchResult};

/// Delivers raw company and travel records for a logical source
/// (URL or file path, depending on the transport).
pub trait RecordFetcher: Send + Sync {
    fn fetch_companies(&self, source: &str) -> FetchResult<Vec<CompanyRecord>>;

    fn fetch_travels(&self, source: &str) -> FetchResult<Vec<Travel>>;
}

/// HTTP transport: GET the source URL, decode the JSON body.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<Vec<T>> {
        debug!(url, "fetching records over http");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::http(url, e))?;
        response.json().map_err(|e| FetchError::http(url, e))
    }
}

impl RecordFetcher for HttpFetcher {
    fn fetch_companies(&self, source: &str) -> FetchResult<Vec<CompanyRecord>> {
        self.get_json(source)
    }

    fn fetch_travels(&self, source: &str) -> FetchResult<Vec<Travel>> {
        self.get_json(source)
    }
}

/// File transport: read a local JSON document (fixtures, offline runs).
#[derive(Debug, Default)]
pub struct FileFetcher;

impl FileFetcher {
    fn read_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<Vec<T>> {
        debug!(path, "reading records from file");
        let content =
            fs::read_to_string(Path::new(path)).map_err(|e| FetchError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| FetchError::decode(path, e))
    }
}

impl RecordFetcher for FileFetcher {
    fn fetch_companies(&self, source: &str) -> FetchResult<Vec<CompanyRecord>> {
        self.read_json(source)
    }

    fn fetch_travels(&self, source: &str) -> FetchResult<Vec<Travel>> {
        self.read_json(source)
    }
}

/// Dispatching transport: `http://`/`https://` sources go over HTTP,
/// everything else is treated as a file path. Lets one service run handle
/// mixed sources.
#[derive(Default)]
pub struct AutoFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl AutoFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn pick(&self, source: &str) -> &dyn RecordFetcher {
        if is_url(source) {
            &self.http
        } else {
            &self.file
        }
    }
}

impl RecordFetcher for AutoFetcher {
    fn fetch_companies(&self, source: &str) -> FetchResult<Vec<CompanyRecord>> {
        self.pick(source).fetch_companies(source)
    }

    fn fetch_travels(&self, source: &str) -> FetchResult<Vec<Travel>> {
        self.pick(source).fetch_travels(source)
    }
}

/// Whether a source string names an HTTP(S) endpoint.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
