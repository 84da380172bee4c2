//! Bottom-up cost rollup over a built tree.

use tracing::instrument;

use crate::domain::tree::CompanyTree;

/// Compute every node's total cost: own travel prices plus the totals of
/// all children. Post-order, so each child's total is in place before its
/// parent sums it. Returns the root total (0.0 for an empty tree).
///
/// Mutates each node's `cost` field and nothing else. The tree is acyclic
/// by construction (single-parent linking), so traversal terminates.
#[instrument(level = "debug", skip(tree))]
pub fn rollup_costs(tree: &mut CompanyTree) -> f64 {
    let order: Vec<_> = tree.iter_postorder().map(|(idx, _)| idx).collect();

    let mut root_total = 0.0;
    for idx in order {
        let child_total: f64 = match tree.node(idx) {
            Some(node) => node
                .children
                .iter()
                .filter_map(|&child| tree.node(child))
                .filter_map(|child| child.data.cost)
                .sum(),
            None => continue,
        };

        if let Some(node) = tree.node_mut(idx) {
            let total = node.data.travel_total() + child_total;
            node.data.cost = Some(total);
            root_total = total;
        }
    }

    root_total
}
