//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::FetchError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Domain(e) => domain_exit_code(e),
            CliError::Application(ApplicationError::Domain(e)) => domain_exit_code(e),
            CliError::Application(ApplicationError::Fetch(e)) => match e {
                FetchError::Http { .. } => crate::exitcode::UNAVAILABLE,
                FetchError::Io { .. } => crate::exitcode::IOERR,
                FetchError::Decode { .. } => crate::exitcode::DATAERR,
            },
        }
    }
}

fn domain_exit_code(e: &DomainError) -> i32 {
    match e {
        DomainError::Serialize(_) => crate::exitcode::SOFTWARE,
        _ => crate::exitcode::DATAERR,
    }
}
