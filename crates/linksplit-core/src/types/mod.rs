//! # Core Type Definitions
//!
//! This module contains the value types shared by every stage of the split:
//! - Node identifiers (`NodeId`)
//! - Normalized undirected edges (`Edge`)
//! - Ordered, duplicate-free edge sequences (`EdgeSet`)
//! - Error types (`SplitError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Keep insertion order where order is observable (`EdgeSet`)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

// =============================================================================
// NODE IDENTIFIER
// =============================================================================

/// Identifier of a node in the observed network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// An undirected edge between two distinct nodes.
///
/// The endpoints are normalized so that `u < v`. `(a, b)` and `(b, a)`
/// therefore build the same `Edge`, which is what makes de-duplication and
/// set membership work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    u: NodeId,
    v: NodeId,
}

impl Edge {
    /// Build a normalized edge.
    ///
    /// Returns `SplitError::SelfLoop` if both endpoints are the same node.
    pub fn new(a: NodeId, b: NodeId) -> Result<Self, SplitError> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { u: a, v: b }),
            std::cmp::Ordering::Greater => Ok(Self { u: b, v: a }),
            std::cmp::Ordering::Equal => Err(SplitError::SelfLoop(a)),
        }
    }

    /// The smaller endpoint.
    #[must_use]
    pub const fn u(&self) -> NodeId {
        self.u
    }

    /// The larger endpoint.
    #[must_use]
    pub const fn v(&self) -> NodeId {
        self.v
    }

    /// Both endpoints as `(smaller, larger)`.
    #[must_use]
    pub const fn endpoints(&self) -> (NodeId, NodeId) {
        (self.u, self.v)
    }
}

// =============================================================================
// EDGE SET
// =============================================================================

/// An ordered sequence of distinct normalized edges.
///
/// Order is significant: the partitioner permutes positions in this
/// sequence, so two sets with the same edges in a different order split
/// differently for the same seed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
}

impl EdgeSet {
    /// Create an empty edge set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an edge set from any sequence of edges.
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut seen = BTreeSet::new();
        let edges = edges.into_iter().filter(|e| seen.insert(*e)).collect();
        Self { edges }
    }

    /// Build an edge set from raw `(a, b)` pairs.
    ///
    /// Fails on the first self-loop. Use `formats::snap` when self-loops
    /// should be skipped instead.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let edges = pairs
            .into_iter()
            .map(|(a, b)| Edge::new(NodeId(a), NodeId(b)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_edges(edges))
    }

    /// Wrap edges already known to be distinct.
    ///
    /// Only used for subsequences of an existing `EdgeSet`.
    pub(crate) fn from_distinct(edges: Vec<Edge>) -> Self {
        debug_assert_eq!(
            edges.iter().collect::<BTreeSet<_>>().len(),
            edges.len(),
            "edges must be distinct"
        );
        Self { edges }
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Edges as a slice, in stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Check membership by normalized form.
    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while preparing a split.
///
/// - No silent failures
/// - Use `Result<T, SplitError>` for fallible operations
/// - Empty outcomes (no core nodes, no test edges) are NOT errors
#[derive(Debug, Error)]
pub enum SplitError {
    /// The test fraction is outside `[0, 1)`.
    #[error("Invalid test fraction: {0} (expected 0 <= f < 1)")]
    InvalidTestFraction(f64),

    /// Any other invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An edge was built from a node to itself.
    #[error("Self-loop on node {0}")]
    SelfLoop(NodeId),

    /// A line of an input file could not be parsed.
    #[error("Malformed input at line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Fetching a remote resource failed.
    #[error("Download failed: {0}")]
    DownloadError(String),
}

impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
