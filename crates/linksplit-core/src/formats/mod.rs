//! # Formats Module
//!
//! Text formats read and written around the split.
//!
//! - `snap`: SNAP edge-list input (plain or gzip-compressed)
//! - `csv`: `u,v` edge tables and the core node list
//!
//! Everything here works on `Read`/`Write`. Opening files is the app
//! layer's job.

pub mod csv;
pub mod snap;

pub use csv::{read_edges_csv, write_core_nodes, write_edges_csv};
pub use snap::{EdgeListReport, read_edge_list};
