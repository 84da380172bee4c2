//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod builder;
pub mod entities;
pub mod error;
pub mod render;
pub mod rollup;
pub mod tree;

pub use builder::{BuildOutcome, TreeBuilder};
pub use entities::{CompanyRecord, Travel, ROOT_SENTINEL};
pub use error::{DomainError, TreeResult};
pub use render::CompanyDto;
pub use rollup::rollup_costs;
pub use tree::{CompanyData, CompanyNode, CompanyTree};
