//! Domain entities: raw records and core values

use serde::Deserialize;

/// Reserved `parentId` value meaning "this company has no parent".
pub const ROOT_SENTINEL: &str = "0";

/// Flat company record as delivered by the record source.
///
/// Carries only the foreign-key style `parent_id` reference; the actual
/// tree edges are established by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub created_at: String,
}

/// A single travel, attached to its owning company during the build pass.
///
/// Immutable value; `departure`, `destination` and `created_at` are opaque
/// to the core and never enter any computation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Travel {
    pub id: String,
    pub price: f64,
    pub departure: String,
    pub destination: String,
    pub company_id: String,
    pub created_at: String,
}
