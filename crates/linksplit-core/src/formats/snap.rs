//! # SNAP Edge List
//!
//! Parser for the line-oriented SNAP network format:
//!
//! ```text
//! # Directed graph (each unordered pair of nodes is saved once): CA-HepTh.txt
//! # FromNodeId    ToNodeId
//! 3466    937
//! 3466    5233
//! ```
//!
//! Lines starting with `#` and blank lines are skipped. Every other line
//! must hold exactly two whitespace-separated node ids (tab-separated in
//! the published files). Input may be
//! gzip-compressed; this is detected from the magic bytes.

use crate::{Edge, EdgeSet, NodeId, SplitError};
use flate2::bufread::MultiGzDecoder;
use std::collections::BTreeSet;
use std::io::{BufRead, BufReader, Read};

/// First two bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Outcome of parsing one edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeListReport {
    /// The canonical, de-duplicated edges in file order.
    pub edges: EdgeSet,
    /// Data lines read (excluding comments and blanks).
    pub data_lines: usize,
    /// Lines skipped because both ids were equal.
    pub self_loops: usize,
    /// Lines skipped because the normalized edge was already seen.
    pub duplicates: usize,
}

/// Parse a SNAP edge list, plain or gzip-compressed.
///
/// Returns `SplitError::MalformedLine` for the first line that is not two
/// non-negative integers. Nothing is returned for a partially valid file.
pub fn read_edge_list<R: Read>(reader: R) -> Result<EdgeListReport, SplitError> {
    let mut reader = BufReader::new(reader);
    let is_gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if is_gzip {
        parse_lines(BufReader::new(MultiGzDecoder::new(reader)))
    } else {
        parse_lines(reader)
    }
}

fn parse_lines<R: BufRead>(mut reader: R) -> Result<EdgeListReport, SplitError> {
    let mut report = EdgeListReport::default();
    let mut seen = BTreeSet::new();
    let mut edges = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // Undecodable bytes are dropped rather than failing the whole file.
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        report.data_lines += 1;

        let (a, b) = parse_pair(line).ok_or_else(|| SplitError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        })?;

        match Edge::new(NodeId(a), NodeId(b)) {
            Ok(edge) => {
                if seen.insert(edge) {
                    edges.push(edge);
                } else {
                    report.duplicates += 1;
                }
            }
            Err(SplitError::SelfLoop(_)) => report.self_loops += 1,
            Err(e) => return Err(e),
        }
    }

    report.edges = EdgeSet::from_distinct(edges);
    Ok(report)
}

fn parse_pair(line: &str) -> Option<(u64, u64)> {
    let mut fields = line.split_whitespace();
    let a = fields.next()?.parse().ok()?;
    let b = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((a, b))
}

// =============================================================================
// TESTS
// =============================================================================
