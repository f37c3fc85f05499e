//! # Random Partitioner
//!
//! Seeded train/test partition of an edge set.
//!
//! The permutation is drawn from `ChaCha8Rng`, so the same seed and the same
//! edge count always give the same permutation with this crate, regardless
//! of platform. Splits are not meant to match other implementations.

use crate::{EdgeSet, SplitError};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// The two disjoint halves of a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Edges kept for training.
    pub train: EdgeSet,
    /// Edges held out for evaluation, before core restriction.
    pub test: EdgeSet,
}

/// Check that a test fraction lies in `[0, 1)`.
///
/// NaN is rejected.
pub fn validate_test_fraction(test_frac: f64) -> Result<(), SplitError> {
    if (0.0..1.0).contains(&test_frac) {
        Ok(())
    } else {
        Err(SplitError::InvalidTestFraction(test_frac))
    }
}

/// Number of test edges for `total` edges: `round(test_frac * total)`.
///
/// Ties round to even.
#[allow(clippy::float_arithmetic)]
pub fn test_size(total: usize, test_frac: f64) -> usize {
    let n_test = (test_frac * total as f64).round_ties_even() as usize;
    n_test.min(total)
}

/// Split `edges` into train and test halves.
///
/// A permutation of `0..edges.len()` is drawn from a generator seeded with
/// `seed`. The first `test_size` permuted positions form the test half and
/// the rest form the train half, each in permutation order.
pub fn partition(edges: &EdgeSet, seed: u64, test_frac: f64) -> Result<Partition, SplitError> {
    validate_test_fraction(test_frac)?;

    let all = edges.as_slice();
    let n_test = test_size(all.len(), test_frac);

    let mut order: Vec<usize> = (0..all.len()).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let (test_idx, train_idx) = order.split_at(n_test);
    let pick = |idx: &[usize]| idx.iter().filter_map(|&i| all.get(i).copied()).collect();

    Ok(Partition {
        train: EdgeSet::from_distinct(pick(train_idx)),
        test: EdgeSet::from_distinct(pick(test_idx)),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, NodeId};
    use std::collections::BTreeSet;

    fn path_edges(n: u64) -> EdgeSet {
        EdgeSet::from_pairs((0..n).map(|i| (i, i + 1))).expect("path")
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let edges = path_edges(4);
        for f in [1.0, 1.5, -0.1, f64::NAN] {
            assert!(matches!(
                partition(&edges, 42, f),
                Err(SplitError::InvalidTestFraction(_))
            ));
        }
    }

    #[test]
    fn empty_input_gives_empty_halves() {
        let parts = partition(&EdgeSet::new(), 42, 0.2).expect("partition");
        assert!(parts.train.is_empty());
        assert!(parts.test.is_empty());
    }

    #[test]
    fn sizes_follow_rounding() {
        assert_eq!(test_size(10, 0.2), 2);
        assert_eq!(test_size(4, 0.5), 2);
        assert_eq!(test_size(7, 0.0), 0);
        // 2.5 rounds to even
        assert_eq!(test_size(5, 0.5), 2);
        // 3.5 rounds to even
        assert_eq!(test_size(7, 0.5), 4);
        assert_eq!(test_size(3, 0.99), 3);
    }

    #[test]
    fn halves_partition_the_input() {
        let edges = path_edges(50);
        let parts = partition(&edges, 7, 0.3).expect("partition");

        assert_eq!(parts.test.len(), 15);
        assert_eq!(parts.train.len(), 35);

        let train: BTreeSet<Edge> = parts.train.iter().copied().collect();
        let test: BTreeSet<Edge> = parts.test.iter().copied().collect();
        let all: BTreeSet<Edge> = edges.iter().copied().collect();

        assert!(train.is_disjoint(&test));
        assert_eq!(train.union(&test).copied().collect::<BTreeSet<_>>(), all);
    }

    #[test]
    fn same_seed_same_partition() {
        let edges = path_edges(100);
        let a = partition(&edges, 42, 0.2).expect("partition");
        let b = partition(&edges, 42, 0.2).expect("partition");
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_partition() {
        let edges = path_edges(100);
        let a = partition(&edges, 1, 0.2).expect("partition");
        let b = partition(&edges, 2, 0.2).expect("partition");
        assert_ne!(a.test, b.test);
    }

    #[test]
    fn zero_fraction_keeps_everything_in_train() {
        let edges = path_edges(10);
        let parts = partition(&edges, 42, 0.0).expect("partition");
        assert!(parts.test.is_empty());
        assert_eq!(parts.train.len(), 10);
        assert!(parts.train.contains(&Edge::new(NodeId(0), NodeId(1)).expect("edge")));
    }
}
