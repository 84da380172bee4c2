//! travelcost: rebuilds a company hierarchy from flat records and rolls up
//! travel costs per company.
//!
//! Layers, bottom up: `domain` (tree building and cost rollup), the
//! `infrastructure` record-source boundary, `application` services wiring
//! fetch to rollup, and the `cli` entry surface.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
