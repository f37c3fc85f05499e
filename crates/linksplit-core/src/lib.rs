//! # linksplit-core
//!
//! The deterministic split engine for linksplit - THE LOGIC.
//!
//! This crate prepares an undirected network for link-prediction
//! evaluation. It partitions the edge set into train and test halves with a
//! seeded permutation, then restricts the test half to "core" nodes that
//! are well connected in both halves, so that cold-start nodes do not leak
//! into the evaluation.
//!
//! ## Pipeline
//!
//! ```text
//! EdgeSet ──► partition ──► (train, test) ──► select_core_nodes ──► CoreNodeSet
//!                              │      │                                  │
//!                              │      └──────────► filter_to_core ◄──────┘
//!                              ▼                         │
//!                         train_edges               test_edges
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure Rust, no async, no network
//! - Every structure is ordered (`BTreeMap`/`BTreeSet`); output is
//!   reproducible for a given seed
//! - Formats work on `Read`/`Write`; file handling lives in the app

// =============================================================================
// MODULES
// =============================================================================

pub mod core_nodes;
pub mod formats;
pub mod graph;
pub mod partition;
pub mod split;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Edge, EdgeSet, NodeId, SplitError};

// =============================================================================
// RE-EXPORTS: Split Engine
// =============================================================================

pub use core_nodes::{CoreNodeSet, CoreThresholds, filter_to_core, select_core_nodes};
pub use graph::{DegreeMap, UndirectedGraph};
pub use partition::{Partition, partition};
pub use split::{SplitConfig, SplitResult, SplitSummary, split};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{EdgeListReport, read_edge_list, read_edges_csv, write_core_nodes, write_edges_csv};
