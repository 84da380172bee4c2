//! Arena-based company tree.
//!
//! Uses a generational arena for memory-safe node references and O(1)
//! lookups. Nodes are inserted unlinked during the indexing pass and wired
//! to their parents afterwards; iteration order over the arena is insertion
//! order, which keeps rebuilds from identical input structurally identical.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Travel;

/// Data payload for tree nodes representing companies.
#[derive(Debug, Clone)]
pub struct CompanyData {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub created_at: String,
    /// Travels owned directly by this company, in input order
    pub travels: Vec<Travel>,
    /// Total cost of own travels plus all descendants.
    /// None until the rollup pass has run.
    pub cost: Option<f64>,
}

impl CompanyData {
    pub fn new(id: String, parent_id: String, name: String, created_at: String) -> Self {
        Self {
            id,
            parent_id,
            name,
            created_at,
            travels: Vec::new(),
            cost: None,
        }
    }

    /// Sum of the prices of this company's own travels only.
    pub fn travel_total(&self) -> f64 {
        self.travels.iter().map(|t| t.price).sum()
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct CompanyNode {
    /// Company data for this node
    pub data: CompanyData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in linking order
    pub children: Vec<Index>,
}

/// Arena-based tree structure holding one company hierarchy.
#[derive(Debug)]
pub struct CompanyTree {
    /// Arena storage for all tree nodes
    arena: Arena<CompanyNode>,
    /// Index of the root node, None until the builder records it
    root: Option<Index>,
}

impl Default for CompanyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert an unlinked node and return its index.
    #[instrument(level = "trace", skip(self, data))]
    pub fn insert_node(&mut self, data: CompanyData) -> Index {
        self.arena.insert(CompanyNode {
            data,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Attach `child` under `parent`, appending to the parent's child list.
    #[instrument(level = "trace", skip(self))]
    pub fn link(&mut self, parent: Index, child: Index) {
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn set_root(&mut self, idx: Index) {
        self.root = Some(idx);
    }

    #[instrument(level = "trace", skip(self))]
    pub fn node(&self, idx: Index) -> Option<&CompanyNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn node_mut(&mut self, idx: Index) -> Option<&mut CompanyNode> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Node indices in insertion order.
    pub fn indices(&self) -> Vec<Index> {
        self.arena.iter().map(|(idx, _)| idx).collect()
    }

    /// Pre-order traversal from the root.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Post-order traversal from the root (children before parents).
    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

pub struct TreeIterator<'a> {
    tree: &'a CompanyTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a CompanyTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a CompanyNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a CompanyTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a CompanyTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a CompanyNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
