//! # Split Orchestrator
//!
//! Runs partition → core selection → core filter as one deterministic call.
//!
//! Every parameter arrives through an explicit [`SplitConfig`]; nothing is
//! read from module state, so concurrent calls with different
//! configurations stay independent.

use crate::core_nodes::{CoreThresholds, filter_to_core, select_core_nodes};
use crate::partition::{partition, validate_test_fraction};
use crate::{EdgeSet, NodeId, SplitError};
use serde::{Deserialize, Serialize};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Fraction of edges held out when none is given.
pub const DEFAULT_TEST_FRAC: f64 = 0.2;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Parameters of one split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// Seed of the permutation generator.
    pub seed: u64,
    /// Fraction of edges held out, in `[0, 1)`.
    pub test_frac: f64,
    /// Minimum train degree of a core node.
    pub k_train: usize,
    /// Minimum test degree of a core node.
    pub k_test: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        let thresholds = CoreThresholds::default();
        Self {
            seed: DEFAULT_SEED,
            test_frac: DEFAULT_TEST_FRAC,
            k_train: thresholds.k_train,
            k_test: thresholds.k_test,
        }
    }
}

impl SplitConfig {
    /// Validate the configuration before any computation.
    pub fn validate(&self) -> Result<(), SplitError> {
        validate_test_fraction(self.test_frac)
    }

    /// The core thresholds of this configuration.
    #[must_use]
    pub const fn thresholds(&self) -> CoreThresholds {
        CoreThresholds::new(self.k_train, self.k_test)
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// The artifacts of one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    /// Training edges, unrestricted, in permutation order.
    pub train_edges: EdgeSet,
    /// Held-out edges with both endpoints in the core, in permutation order.
    pub test_edges: EdgeSet,
    /// Core nodes, ascending.
    pub core_nodes: Vec<NodeId>,
    /// Number of held-out edges before core restriction.
    pub test_edges_before_filter: usize,
}

impl SplitResult {
    /// Summarize this result for reporting.
    #[must_use]
    pub fn summary(&self, config: &SplitConfig) -> SplitSummary {
        SplitSummary {
            seed: config.seed,
            test_frac: config.test_frac,
            k_train: config.k_train,
            k_test: config.k_test,
            train_edges: self.train_edges.len(),
            test_edges_before_filter: self.test_edges_before_filter,
            test_edges: self.test_edges.len(),
            core_nodes: self.core_nodes.len(),
        }
    }
}

/// Counts describing a finished split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSummary {
    /// Seed used for the permutation.
    pub seed: u64,
    /// Requested test fraction.
    pub test_frac: f64,
    /// Minimum train degree of a core node.
    pub k_train: usize,
    /// Minimum test degree of a core node.
    pub k_test: usize,
    /// Number of train edges.
    pub train_edges: usize,
    /// Number of test edges before core filtering.
    pub test_edges_before_filter: usize,
    /// Number of test edges after core filtering.
    pub test_edges: usize,
    /// Number of core nodes.
    pub core_nodes: usize,
}

// =============================================================================
// ORCHESTRATION
// =============================================================================

/// Split `edges` into train edges, core-restricted test edges and the sorted
/// core node list.
///
/// Fails before doing any work if the configuration is invalid. Empty core
/// sets and empty test sets are returned as-is.
pub fn split(edges: &EdgeSet, config: &SplitConfig) -> Result<SplitResult, SplitError> {
    config.validate()?;

    let parts = partition(edges, config.seed, config.test_frac)?;
    tracing::debug!(
        train = parts.train.len(),
        test = parts.test.len(),
        seed = config.seed,
        "partitioned edges"
    );

    let core = select_core_nodes(&parts.train, &parts.test, config.thresholds());
    let test_edges = filter_to_core(&parts.test, &core);
    tracing::debug!(
        core_nodes = core.len(),
        test_before = parts.test.len(),
        test_after = test_edges.len(),
        "restricted test edges to core"
    );

    Ok(SplitResult {
        test_edges_before_filter: parts.test.len(),
        train_edges: parts.train,
        test_edges,
        core_nodes: core.into_sorted_vec(),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: u64) -> EdgeSet {
        EdgeSet::from_pairs((0..n).map(|i| (i, (i + 1) % n))).expect("ring")
    }

    #[test]
    fn default_config_matches_reference_pipeline() {
        let config = SplitConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.test_frac, 0.2);
        assert_eq!(config.k_train, 2);
        assert_eq!(config.k_test, 1);
    }

    #[test]
    fn invalid_fraction_fails_before_work() {
        let config = SplitConfig {
            test_frac: 1.0,
            ..SplitConfig::default()
        };
        assert!(matches!(
            split(&ring(10), &config),
            Err(SplitError::InvalidTestFraction(_))
        ));
    }

    #[test]
    fn test_edges_are_inside_core() {
        let edges = ring(200);
        let config = SplitConfig {
            k_train: 1,
            ..SplitConfig::default()
        };
        let result = split(&edges, &config).expect("split");

        for e in &result.test_edges {
            assert!(result.core_nodes.binary_search(&e.u()).is_ok());
            assert!(result.core_nodes.binary_search(&e.v()).is_ok());
        }
        assert!(result.core_nodes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.test_edges_before_filter, 40);
        assert_eq!(result.train_edges.len(), 160);
    }

    #[test]
    fn zero_fraction_has_no_core() {
        let result = split(
            &ring(20),
            &SplitConfig {
                test_frac: 0.0,
                ..SplitConfig::default()
            },
        )
        .expect("split");

        assert_eq!(result.train_edges.len(), 20);
        assert!(result.core_nodes.is_empty());
        assert!(result.test_edges.is_empty());
    }

    #[test]
    fn repeated_split_is_identical() {
        let edges = ring(500);
        let config = SplitConfig::default();
        let a = split(&edges, &config).expect("split");
        let b = split(&edges, &config).expect("split");
        assert_eq!(a, b);
    }

    #[test]
    fn summary_counts() {
        let config = SplitConfig::default();
        let result = split(&ring(50), &config).expect("split");
        let summary = result.summary(&config);

        assert_eq!(summary.train_edges, 40);
        assert_eq!(summary.test_edges_before_filter, 10);
        assert_eq!(summary.test_edges, result.test_edges.len());
        assert_eq!(summary.core_nodes, result.core_nodes.len());
    }
}
