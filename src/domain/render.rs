//! Rendering of a rolled-up tree: JSON document and terminal tree view.

use generational_arena::Index;
use serde::Serialize;
use termtree::Tree;

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::tree::CompanyTree;

/// Serializable view of a company node.
///
/// Exposes the node fields and nested children; the internal travel list
/// stays internal. Key names follow the record source (`parentId`,
/// `createdAt`).
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub created_at: String,
    pub cost: f64,
    pub children: Vec<CompanyDto>,
}

/// Convert the tree into its serializable form, children in linking order.
///
/// Fails with `CostNotComputed` when any reachable node has not been through
/// the rollup pass; a cost silently read as zero would be a defect, not a
/// default.
pub fn to_dto(tree: &CompanyTree) -> TreeResult<CompanyDto> {
    let root = tree.root().ok_or(DomainError::NoRoot)?;
    node_to_dto(tree, root)
}

fn node_to_dto(tree: &CompanyTree, idx: Index) -> TreeResult<CompanyDto> {
    let node = tree.node(idx).ok_or(DomainError::NoRoot)?;
    let cost = node
        .data
        .cost
        .ok_or_else(|| DomainError::CostNotComputed(node.data.id.clone()))?;

    let children = node
        .children
        .iter()
        .map(|&child| node_to_dto(tree, child))
        .collect::<TreeResult<Vec<_>>>()?;

    Ok(CompanyDto {
        id: node.data.id.clone(),
        parent_id: node.data.parent_id.clone(),
        name: node.data.name.clone(),
        created_at: node.data.created_at.clone(),
        cost,
        children,
    })
}

/// Pretty-printed JSON document for the whole tree.
pub fn to_json(tree: &CompanyTree) -> TreeResult<String> {
    let dto = to_dto(tree)?;
    Ok(serde_json::to_string_pretty(&dto)?)
}

/// ASCII tree view, one `name (cost)` label per node.
pub fn to_termtree(tree: &CompanyTree) -> TreeResult<Tree<String>> {
    let root = tree.root().ok_or(DomainError::NoRoot)?;
    node_to_termtree(tree, root)
}

fn node_to_termtree(tree: &CompanyTree, idx: Index) -> TreeResult<Tree<String>> {
    let node = tree.node(idx).ok_or(DomainError::NoRoot)?;
    let cost = node
        .data
        .cost
        .ok_or_else(|| DomainError::CostNotComputed(node.data.id.clone()))?;

    let label = format!("{} ({})", node.data.name, cost);
    let leaves = node
        .children
        .iter()
        .map(|&child| node_to_termtree(tree, child))
        .collect::<TreeResult<Vec<_>>>()?;

    Ok(Tree::new(label).with_leaves(leaves))
}
