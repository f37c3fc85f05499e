//! # linksplit
//!
//! Library side of the linksplit binary: CLI definitions, configuration
//! loading and dataset acquisition. The split itself lives in
//! `linksplit-core`.

pub mod cli;
pub mod config;
pub mod fetch;
