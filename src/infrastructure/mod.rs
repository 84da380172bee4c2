//! Infrastructure layer: record-source transports
//!
//! This layer implements the fetch boundary the application depends on.

pub mod error;
pub mod traits;

pub use error::{FetchError, FetchResult};
pub use traits::{is_url, AutoFetcher, FileFetcher, HttpFetcher, RecordFetcher};
