//! # Validation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the produced splits are INVALID.
//!
//! ## Tiers
//! - T0: Edge Integrity
//! - T1: Partition
//! - T2: Core Selection
//! - T3: End-to-End Artifacts

use linksplit_core::{
    CoreThresholds, Edge, EdgeSet, NodeId, SplitConfig, SplitError, UndirectedGraph,
    filter_to_core, partition, read_edge_list, read_edges_csv, select_core_nodes, split,
    write_core_nodes, write_edges_csv,
};

fn set(pairs: &[(u64, u64)]) -> EdgeSet {
    EdgeSet::from_pairs(pairs.iter().copied()).expect("edges")
}

// =============================================================================
// TIER T0: EDGE INTEGRITY
// =============================================================================

mod t0_edge_integrity {
    use super::*;

    /// T0.1: Reversed pairs are the same edge.
    #[test]
    fn reversed_pairs_equal() {
        let a = Edge::new(NodeId(1), NodeId(2)).expect("edge");
        let b = Edge::new(NodeId(2), NodeId(1)).expect("edge");
        assert_eq!(a, b);
    }

    /// T0.2: Self-loops never become edges.
    #[test]
    fn self_loop_rejected() {
        let result = Edge::new(NodeId(3), NodeId(3));
        assert!(matches!(result, Err(SplitError::SelfLoop(_))));
    }

    /// T0.3: Parsing drops self-loops and duplicates.
    #[test]
    fn parser_output_is_canonical() {
        let report = read_edge_list("1 2\n2 1\n3 3\n2 3\n".as_bytes()).expect("parse");
        assert_eq!(report.edges, set(&[(1, 2), (2, 3)]));
    }

    /// T0.4: A malformed line fails the whole file.
    #[test]
    fn malformed_line_is_fatal() {
        let result = read_edge_list("1 2\nnot an edge\n".as_bytes());
        assert!(matches!(result, Err(SplitError::MalformedLine { line: 2, .. })));
    }
}

// =============================================================================
// TIER T1: PARTITION
// =============================================================================

mod t1_partition {
    use super::*;

    /// T1.1: Half of four edges go to test.
    #[test]
    fn half_split_sizes() {
        let edges = set(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let parts = partition(&edges, 42, 0.5).expect("partition");
        assert_eq!(parts.test.len(), 2);
        assert_eq!(parts.train.len(), 2);
    }

    /// T1.2: Fractions outside [0, 1) are configuration errors.
    #[test]
    fn fraction_out_of_range() {
        let edges = set(&[(1, 2)]);
        assert!(matches!(
            partition(&edges, 42, 1.0),
            Err(SplitError::InvalidTestFraction(_))
        ));
        assert!(matches!(
            partition(&edges, 42, -0.5),
            Err(SplitError::InvalidTestFraction(_))
        ));
    }

    /// T1.3: The partition is reproducible across runs.
    #[test]
    fn reproducible() {
        let edges = EdgeSet::from_pairs((0..1000).map(|i| (i, i + 1))).expect("path");
        let first = partition(&edges, 42, 0.2).expect("partition");
        for _ in 0..3 {
            assert_eq!(partition(&edges, 42, 0.2).expect("partition"), first);
        }
    }
}

// =============================================================================
// TIER T2: CORE SELECTION
// =============================================================================

mod t2_core_selection {
    use super::*;

    /// T2.1: Triangle degrees.
    #[test]
    fn triangle_degree() {
        let edges = set(&[(1, 2), (2, 3), (1, 3)]);
        let degrees = UndirectedGraph::from_edges(&edges).degrees();
        for n in 1..=3 {
            assert_eq!(degrees.degree(NodeId(n)), 2);
        }
    }

    /// T2.2: Path scenario. Core is {2, 4}; no test edge survives.
    #[test]
    fn path_scenario() {
        let train = set(&[(2, 3), (3, 4)]);
        let test = set(&[(4, 5), (1, 2)]);

        let core = select_core_nodes(&train, &test, CoreThresholds::new(1, 1));
        assert_eq!(core.iter().collect::<Vec<_>>(), vec![NodeId(2), NodeId(4)]);

        assert!(filter_to_core(&test, &core).is_empty());
    }

    /// T2.3: Default thresholds need degree 2 in train.
    #[test]
    fn default_thresholds_need_train_degree_two() {
        // 1 and 2 have train degree 2 via the triangle, 4 has only 1.
        let train = set(&[(1, 2), (2, 3), (1, 3), (3, 4)]);
        let test = set(&[(1, 2), (2, 4)]);

        let core = select_core_nodes(&train, &test, CoreThresholds::default());
        assert_eq!(core.iter().collect::<Vec<_>>(), vec![NodeId(1), NodeId(2)]);
        assert_eq!(filter_to_core(&test, &core), set(&[(1, 2)]));
    }
}

// =============================================================================
// TIER T3: END-TO-END ARTIFACTS
// =============================================================================

mod t3_artifacts {
    use super::*;

    fn grid(n: u64) -> EdgeSet {
        let mut pairs = Vec::new();
        for r in 0..n {
            for c in 0..n {
                let id = r * n + c;
                if c + 1 < n {
                    pairs.push((id, id + 1));
                }
                if r + 1 < n {
                    pairs.push((id, id + n));
                }
            }
        }
        EdgeSet::from_pairs(pairs).expect("grid")
    }

    fn render(config: &SplitConfig, edges: &EdgeSet) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let result = split(edges, config).expect("split");
        let mut train = Vec::new();
        let mut test = Vec::new();
        let mut core = Vec::new();
        write_edges_csv(&mut train, &result.train_edges).expect("train");
        write_edges_csv(&mut test, &result.test_edges).expect("test");
        write_core_nodes(&mut core, &result.core_nodes).expect("core");
        (train, test, core)
    }

    /// T3.1: Persisted artifacts are byte-identical across runs.
    #[test]
    fn artifacts_byte_identical() {
        let edges = grid(12);
        let config = SplitConfig::default();
        assert_eq!(render(&config, &edges), render(&config, &edges));
    }

    /// T3.2: Written tables read back to the same edge sets.
    #[test]
    fn tables_read_back() {
        let edges = grid(8);
        let result = split(&edges, &SplitConfig::default()).expect("split");

        let mut train = Vec::new();
        write_edges_csv(&mut train, &result.train_edges).expect("write");
        assert_eq!(read_edges_csv(train.as_slice()).expect("read"), result.train_edges);
    }

    /// T3.3: Zero fraction leaves nothing to evaluate but is not an error.
    #[test]
    fn zero_fraction_is_empty_not_error() {
        let edges = grid(6);
        let config = SplitConfig {
            test_frac: 0.0,
            ..SplitConfig::default()
        };
        let result = split(&edges, &config).expect("split");

        // Same edges, permutation order.
        assert_eq!(result.train_edges.len(), edges.len());
        assert!(edges.iter().all(|e| result.train_edges.contains(e)));
        assert!(result.core_nodes.is_empty());
        assert!(result.test_edges.is_empty());
    }
}
