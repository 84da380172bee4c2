//! Tree builder: reconstructs the company hierarchy from flat records.
//!
//! Three passes over fully materialized record sets:
//! 1. indexing - every company record becomes an arena node, addressable
//!    by id;
//! 2. travel attachment - each travel is appended to its owning company,
//!    travels with an unknown `companyId` are dropped (counted, not fatal);
//! 3. linking - each node is attached to the node its `parentId` resolves
//!    to; the single company whose `parentId` is the sentinel becomes the
//!    root.
//!
//! A `parentId` that is neither the sentinel nor a known company id fails
//! the build. Zero or more than one root candidate fails the build as well;
//! partial trees are never returned.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::entities::{CompanyRecord, Travel, ROOT_SENTINEL};
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::tree::{CompanyData, CompanyTree};

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildOutcome {
    /// The rooted hierarchy with travels attached; costs not yet computed.
    pub tree: CompanyTree,
    /// Travels dropped because their `companyId` resolved to no company.
    pub dropped_travels: usize,
}

/// Constructs a rooted company tree from flat record sets.
pub struct TreeBuilder {
    index: HashMap<String, Index>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Build the hierarchy from company and travel records.
    ///
    /// Children order follows company input order; travel order per company
    /// follows travel input order. The id index is internal to the build and
    /// discarded with the builder.
    #[instrument(level = "debug", skip_all)]
    pub fn build(
        &mut self,
        companies: Vec<CompanyRecord>,
        travels: Vec<Travel>,
    ) -> TreeResult<BuildOutcome> {
        let mut tree = CompanyTree::new();
        self.index.clear();

        self.index_companies(&mut tree, companies)?;
        let dropped_travels = self.attach_travels(&mut tree, travels);
        self.link_companies(&mut tree)?;

        debug!(
            companies = tree.len(),
            dropped_travels, "hierarchy build complete"
        );
        Ok(BuildOutcome {
            tree,
            dropped_travels,
        })
    }

    fn index_companies(
        &mut self,
        tree: &mut CompanyTree,
        companies: Vec<CompanyRecord>,
    ) -> TreeResult<()> {
        for record in companies {
            let id = record.id.clone();
            let data = CompanyData::new(record.id, record.parent_id, record.name, record.created_at);
            let idx = tree.insert_node(data);
            if self.index.insert(id.clone(), idx).is_some() {
                return Err(DomainError::DuplicateId(id));
            }
        }
        Ok(())
    }

    /// Attach each travel to its owning company; returns the drop count.
    fn attach_travels(&mut self, tree: &mut CompanyTree, travels: Vec<Travel>) -> usize {
        let mut dropped = 0;
        for travel in travels {
            match self.index.get(&travel.company_id) {
                Some(&idx) => {
                    if let Some(node) = tree.node_mut(idx) {
                        node.data.travels.push(travel);
                    }
                }
                None => {
                    debug!(
                        travel_id = %travel.id,
                        company_id = %travel.company_id,
                        "dropping travel with unknown owning company"
                    );
                    dropped += 1;
                }
            }
        }
        dropped
    }

    fn link_companies(&mut self, tree: &mut CompanyTree) -> TreeResult<()> {
        let mut root_candidates: Vec<(String, Index)> = Vec::new();

        for idx in tree.indices() {
            let (id, parent_id) = match tree.node(idx) {
                Some(node) => (node.data.id.clone(), node.data.parent_id.clone()),
                None => continue,
            };

            match self.index.get(&parent_id) {
                Some(&parent_idx) => tree.link(parent_idx, idx),
                None if parent_id == ROOT_SENTINEL => root_candidates.push((id, idx)),
                None => {
                    return Err(DomainError::DanglingReference {
                        company_id: id,
                        parent_id,
                    })
                }
            }
        }

        match root_candidates.as_slice() {
            [(_, root_idx)] => {
                tree.set_root(*root_idx);
                Ok(())
            }
            [] => Err(DomainError::NoRoot),
            _ => Err(DomainError::MultipleRoots {
                ids: root_candidates.into_iter().map(|(id, _)| id).collect(),
            }),
        }
    }
}
