//! # Core Node Selection
//!
//! Cold-start filtering for the held-out edges.
//!
//! A node is "core" when it is connected enough in BOTH halves of a split:
//! its train degree reaches `k_train` and its test degree reaches `k_test`.
//! Both thresholds are enforced independently; a high degree on one side
//! never compensates for a low degree on the other.

use crate::graph::UndirectedGraph;
use crate::{EdgeSet, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Minimum degrees a node needs in each half to be a core node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreThresholds {
    /// Minimum degree in the train graph.
    pub k_train: usize,
    /// Minimum degree in the test graph.
    pub k_test: usize,
}

impl CoreThresholds {
    /// Create thresholds for the train and test graphs.
    #[must_use]
    pub const fn new(k_train: usize, k_test: usize) -> Self {
        Self { k_train, k_test }
    }
}

impl Default for CoreThresholds {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

// =============================================================================
// CORE NODE SET
// =============================================================================

/// The set of core nodes of one split. Iterates in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreNodeSet {
    nodes: BTreeSet<NodeId>,
}

impl CoreNodeSet {
    /// Check membership.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of core nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Core nodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Consume the set, returning the nodes sorted ascending.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<NodeId> {
        self.nodes.into_iter().collect()
    }
}

impl FromIterator<NodeId> for CoreNodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// Select the core nodes of a split.
///
/// The candidate universe is every node appearing in either half. A node
/// missing from one half counts as degree 0 there.
pub fn select_core_nodes(
    train: &EdgeSet,
    test: &EdgeSet,
    thresholds: CoreThresholds,
) -> CoreNodeSet {
    let train_graph = UndirectedGraph::from_edges(train);
    let test_graph = UndirectedGraph::from_edges(test);

    let train_degrees = train_graph.degrees();
    let test_degrees = test_graph.degrees();

    let universe: BTreeSet<NodeId> = train_graph.nodes().chain(test_graph.nodes()).collect();

    universe
        .into_iter()
        .filter(|n| {
            train_degrees.degree(*n) >= thresholds.k_train
                && test_degrees.degree(*n) >= thresholds.k_test
        })
        .collect()
}

/// Keep the test edges whose endpoints are both core nodes.
///
/// Input order is preserved. An empty result is a valid outcome.
pub fn filter_to_core(test: &EdgeSet, core: &CoreNodeSet) -> EdgeSet {
    let kept = test
        .iter()
        .filter(|e| core.contains(e.u()) && core.contains(e.v()))
        .copied()
        .collect();
    EdgeSet::from_distinct(kept)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(u64, u64)]) -> EdgeSet {
        EdgeSet::from_pairs(pairs.iter().copied()).expect("edges")
    }

    fn ids(core: &CoreNodeSet) -> Vec<u64> {
        core.iter().map(|n| n.0).collect()
    }

    #[test]
    fn default_thresholds() {
        assert_eq!(CoreThresholds::default(), CoreThresholds::new(2, 1));
    }

    #[test]
    fn path_scenario_keeps_two_and_four() {
        let train = set(&[(2, 3), (3, 4)]);
        let test = set(&[(1, 2), (4, 5)]);

        let core = select_core_nodes(&train, &test, CoreThresholds::new(1, 1));
        assert_eq!(ids(&core), vec![2, 4]);

        // No (2, 4) edge exists, so nothing survives.
        let filtered = filter_to_core(&test, &core);
        assert!(filtered.is_empty());
    }

    #[test]
    fn node_absent_from_train_is_excluded() {
        let train = set(&[(1, 2), (2, 3), (1, 3)]);
        let test = set(&[(1, 9)]);

        let core = select_core_nodes(&train, &test, CoreThresholds::new(1, 1));
        assert_eq!(ids(&core), vec![1]);
    }

    #[test]
    fn zero_thresholds_admit_the_whole_universe() {
        let train = set(&[(1, 2)]);
        let test = set(&[(3, 4)]);

        let core = select_core_nodes(&train, &test, CoreThresholds::new(0, 0));
        assert_eq!(ids(&core), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_test_half_gives_empty_core() {
        let train = set(&[(1, 2), (2, 3), (1, 3)]);
        let core = select_core_nodes(&train, &EdgeSet::new(), CoreThresholds::default());
        assert!(core.is_empty());
    }

    #[test]
    fn filter_preserves_order() {
        let test = set(&[(5, 6), (1, 2), (2, 5), (1, 9)]);
        let core: CoreNodeSet = [1, 2, 5, 6].into_iter().map(NodeId).collect();

        let filtered = filter_to_core(&test, &core);
        assert_eq!(filtered, set(&[(5, 6), (1, 2), (2, 5)]));
    }

    #[test]
    fn filter_with_empty_core_is_empty() {
        let test = set(&[(1, 2)]);
        assert!(filter_to_core(&test, &CoreNodeSet::default()).is_empty());
    }
}
