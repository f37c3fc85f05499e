//! # Graph Engine
//!
//! Undirected simple graphs built from an edge list, and the degree index
//! derived from them.
//!
//! All data structures use `BTreeMap`/`BTreeSet` for deterministic ordering.
//! Adjacency is a set per node, so a repeated edge can never inflate a
//! degree.

use crate::{Edge, NodeId};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// GRAPH
// =============================================================================

/// An undirected simple graph.
///
/// The node set is exactly the set of endpoints of the edges it was built
/// from. Nodes without edges never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    /// Adjacency list: node -> neighbours
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,

    /// Number of distinct undirected edges
    edge_count: usize,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of edges.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert_edge(*edge);
        }
        graph
    }

    /// Insert an edge. Returns `false` if it was already present.
    pub fn insert_edge(&mut self, edge: Edge) -> bool {
        let (u, v) = edge.endpoints();
        let inserted = self.adjacency.entry(u).or_default().insert(v);
        if inserted {
            self.adjacency.entry(v).or_default().insert(u);
            self.edge_count = self.edge_count.saturating_add(1);
        }
        inserted
    }

    /// Check if a node appears in the graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Check if the undirected edge `(a, b)` is present.
    #[must_use]
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// Neighbours of a node in ascending order. Empty for absent nodes.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().copied())
    }

    /// Get all nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Get the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the total number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Compute the degree index of this graph.
    #[must_use]
    pub fn degrees(&self) -> DegreeMap {
        DegreeMap::from_graph(self)
    }
}

// =============================================================================
// DEGREE INDEX
// =============================================================================

/// Per-node degree within one graph.
///
/// Built once from a graph and never mutated. Only nodes of that graph are
/// stored; `degree` answers 0 for everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeMap {
    degrees: BTreeMap<NodeId, usize>,
}

impl DegreeMap {
    /// Count the distinct neighbours of every node in `graph`.
    #[must_use]
    pub fn from_graph(graph: &UndirectedGraph) -> Self {
        let degrees = graph
            .adjacency
            .iter()
            .map(|(node, neighbours)| (*node, neighbours.len()))
            .collect();
        Self { degrees }
    }

    /// Degree of `node`, or 0 if the node is not in the graph.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.degrees.get(&node).copied().unwrap_or(0)
    }

    /// Check if `node` was present in the source graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.degrees.contains_key(&node)
    }

    /// Smallest recorded degree, if any.
    #[must_use]
    pub fn min_degree(&self) -> Option<usize> {
        self.degrees.values().copied().min()
    }

    /// Largest recorded degree, if any.
    #[must_use]
    pub fn max_degree(&self) -> Option<usize> {
        self.degrees.values().copied().max()
    }

    /// Number of nodes whose degree is exactly `degree`.
    #[must_use]
    pub fn count_with_degree(&self, degree: usize) -> usize {
        self.degrees.values().filter(|d| **d == degree).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================
