//! # Edge Tables
//!
//! The on-disk shape of the split artifacts:
//! - edge tables: header `u,v`, then one normalized `u,v` row per edge
//! - core node list: one id per line, ascending, no trailing newline

use crate::{Edge, EdgeSet, NodeId, SplitError};
use std::io::{BufRead, BufReader, Read, Write};

/// Header row of every edge table.
pub const EDGE_HEADER: &str = "u,v";

/// Write an edge table.
pub fn write_edges_csv<W: Write>(mut writer: W, edges: &EdgeSet) -> Result<(), SplitError> {
    writeln!(writer, "{}", EDGE_HEADER)?;
    for edge in edges {
        writeln!(writer, "{},{}", edge.u(), edge.v())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read an edge table written by [`write_edges_csv`].
///
/// The header is required. Rows are normalized and de-duplicated; a row
/// with equal endpoints is rejected.
pub fn read_edges_csv<R: Read>(reader: R) -> Result<EdgeSet, SplitError> {
    let mut lines = BufReader::new(reader).lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    if header.trim() != EDGE_HEADER {
        return Err(SplitError::MalformedLine {
            line: 1,
            content: header.trim().to_string(),
        });
    }

    let mut edges = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        let row = line.trim();
        if row.is_empty() {
            continue;
        }
        let malformed = || SplitError::MalformedLine {
            line: idx + 2,
            content: row.to_string(),
        };

        let (a, b) = row.split_once(',').ok_or_else(malformed)?;
        let a: u64 = a.trim().parse().map_err(|_| malformed())?;
        let b: u64 = b.trim().parse().map_err(|_| malformed())?;
        edges.push(Edge::new(NodeId(a), NodeId(b))?);
    }

    Ok(EdgeSet::from_edges(edges))
}

/// Write the core node list.
pub fn write_core_nodes<W: Write>(mut writer: W, nodes: &[NodeId]) -> Result<(), SplitError> {
    let body = nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    writer.write_all(body.as_bytes())?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
