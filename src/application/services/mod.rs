//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the record-source boundary trait but are themselves
//! concrete structs, not traits.

mod report;

pub use report::ReportService;
