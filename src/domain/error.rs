//! Domain-level errors (no I/O concerns)

use thiserror::Error;

/// Domain errors represent data-consistency violations in the record sets.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("company {company_id} references unknown parent: {parent_id}")]
    DanglingReference {
        company_id: String,
        parent_id: String,
    },

    #[error("duplicate company id: {0}")]
    DuplicateId(String),

    #[error("no root company found")]
    NoRoot,

    #[error("multiple root companies found: {ids:?}")]
    MultipleRoots { ids: Vec<String> },

    #[error("cost not computed for company: {0}")]
    CostNotComputed(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
