//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Each step returns a report; the `cmd_*` wrappers print it either as
//! human-readable text or as a single JSON document.

use crate::config::AppConfig;
use crate::fetch::{FetchOutcome, download_file};
use linksplit_core::{
    SplitError, SplitSummary, UndirectedGraph, read_edge_list, read_edges_csv, split,
    write_core_nodes, write_edges_csv,
};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// =============================================================================
// REPORTS
// =============================================================================

/// Result of the download step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadReport {
    /// Source URL.
    pub url: String,
    /// Local destination.
    pub path: PathBuf,
    /// False when an existing file was kept.
    pub downloaded: bool,
    /// Bytes written, 0 when skipped.
    pub bytes: u64,
}

/// Result of the preprocess step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprocessReport {
    /// Raw edge list read.
    pub input: PathBuf,
    /// Edge table written.
    pub output: PathBuf,
    /// Distinct edges written.
    pub edges: usize,
    /// Non-comment, non-blank lines parsed.
    pub data_lines: usize,
    /// Self-loop lines skipped.
    pub self_loops: usize,
    /// Repeated edges dropped.
    pub duplicates: usize,
}

/// Result of the split step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    /// Counts and parameters of the split.
    pub summary: SplitSummary,
    /// Train edge table written.
    pub train_path: PathBuf,
    /// Core-filtered test edge table written.
    pub test_path: PathBuf,
    /// Core node list written.
    pub core_path: PathBuf,
}

/// Result of the full pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Download step.
    pub download: DownloadReport,
    /// Preprocess step.
    pub preprocess: PreprocessReport,
    /// Split step.
    pub split: SplitReport,
}

/// Node, edge and degree counts of an edge table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeStats {
    /// Edge table read.
    pub input: PathBuf,
    /// Distinct nodes.
    pub node_count: usize,
    /// Distinct edges.
    pub edge_count: usize,
    /// `None` for an empty table.
    pub min_degree: Option<usize>,
    /// `None` for an empty table.
    pub max_degree: Option<usize>,
    /// Nodes with exactly one neighbour.
    pub degree_one_nodes: usize,
}

// =============================================================================
// FILE HELPERS
// =============================================================================

/// Open a file for buffered reading.
fn open_input(path: &Path) -> Result<BufReader<File>, SplitError> {
    let file = File::open(path)
        .map_err(|e| SplitError::IoError(format!("Cannot open '{}': {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Create a file for buffered writing, creating parent directories.
fn create_output(path: &Path) -> Result<BufWriter<File>, SplitError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SplitError::IoError(format!("Cannot create '{}': {}", parent.display(), e))
        })?;
    }
    let file = File::create(path)
        .map_err(|e| SplitError::IoError(format!("Cannot create '{}': {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// DOWNLOAD COMMAND
// =============================================================================

/// Fetch the raw edge list into `raw/`.
///
/// With `force`, an existing file is replaced only after the new download
/// completes.
pub async fn download(config: &AppConfig, force: bool) -> Result<DownloadReport, SplitError> {
    let path = config.raw_path();
    let outcome = download_file(&config.url, &path, force).await?;

    let (downloaded, bytes) = match outcome {
        FetchOutcome::Skipped => (false, 0),
        FetchOutcome::Downloaded { bytes } => (true, bytes),
    };
    Ok(DownloadReport {
        url: config.url.clone(),
        path,
        downloaded,
        bytes,
    })
}

fn print_download(report: &DownloadReport) {
    if report.downloaded {
        println!("Downloaded {} bytes to {}", report.bytes, report.path.display());
    } else {
        println!("Already present: {}", report.path.display());
    }
}

/// Download the raw edge list.
pub async fn cmd_download(
    config: &AppConfig,
    force: bool,
    json_mode: bool,
) -> Result<(), SplitError> {
    let report = download(config, force).await?;

    if json_mode {
        print_json(&report);
    } else {
        print_download(&report);
    }

    Ok(())
}

// =============================================================================
// PREPROCESS COMMAND
// =============================================================================

/// Parse a raw SNAP edge list into a de-duplicated edge table.
///
/// `input` and `output` default to the configured raw and edge table paths.
pub fn preprocess(
    config: &AppConfig,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<PreprocessReport, SplitError> {
    let input = input.map_or_else(|| config.raw_path(), Path::to_path_buf);
    let output = output.map_or_else(|| config.edges_path(), Path::to_path_buf);

    tracing::info!("Parsing edge list {}", input.display());
    let report = read_edge_list(open_input(&input)?)?;
    tracing::info!(
        data_lines = report.data_lines,
        self_loops = report.self_loops,
        duplicates = report.duplicates,
        "parsed edge list"
    );

    write_edges_csv(create_output(&output)?, &report.edges)?;

    Ok(PreprocessReport {
        input,
        output,
        edges: report.edges.len(),
        data_lines: report.data_lines,
        self_loops: report.self_loops,
        duplicates: report.duplicates,
    })
}

fn print_preprocess(report: &PreprocessReport) {
    println!("Saved {} edges to {}", report.edges, report.output.display());
}

/// Parse the raw edge list and print the result.
pub fn cmd_preprocess(
    config: &AppConfig,
    input: Option<&Path>,
    output: Option<&Path>,
    json_mode: bool,
) -> Result<(), SplitError> {
    let report = preprocess(config, input, output)?;

    if json_mode {
        print_json(&report);
    } else {
        print_preprocess(&report);
    }

    Ok(())
}

// =============================================================================
// SPLIT COMMAND
// =============================================================================

/// Split an edge table and write the three artifacts.
///
/// The configuration is validated before anything is read or written.
pub fn split_artifacts(
    config: &AppConfig,
    input: Option<&Path>,
) -> Result<SplitReport, SplitError> {
    config.split.validate()?;
    let input = input.map_or_else(|| config.edges_path(), Path::to_path_buf);

    tracing::info!("Reading edges from {}", input.display());
    let edges = read_edges_csv(open_input(&input)?)?;

    let result = split(&edges, &config.split)?;

    if result.core_nodes.is_empty() {
        tracing::warn!("No node meets the core thresholds");
    }
    if result.test_edges.is_empty() {
        tracing::warn!("No test edge survives core filtering; evaluation would be empty");
    }

    let report = SplitReport {
        summary: result.summary(&config.split),
        train_path: config.train_path(),
        test_path: config.test_path(),
        core_path: config.core_path(),
    };

    write_edges_csv(create_output(&report.train_path)?, &result.train_edges)?;
    write_edges_csv(create_output(&report.test_path)?, &result.test_edges)?;
    write_core_nodes(create_output(&report.core_path)?, &result.core_nodes)?;

    Ok(report)
}

fn print_split(report: &SplitReport) {
    println!("Train edges: {}", report.summary.train_edges);
    println!("Test edges (core-filtered): {}", report.summary.test_edges);
    println!("Core nodes: {}", report.summary.core_nodes);
    println!(
        "Saved: {}, {}, {}",
        report.train_path.display(),
        report.test_path.display(),
        report.core_path.display()
    );
}

/// Split the edge table and print the summary.
pub fn cmd_split(
    config: &AppConfig,
    input: Option<&Path>,
    json_mode: bool,
) -> Result<(), SplitError> {
    let report = split_artifacts(config, input)?;

    if json_mode {
        print_json(&report);
    } else {
        print_split(&report);
    }

    Ok(())
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Download, preprocess and split with the configured values.
pub async fn run_pipeline(config: &AppConfig) -> Result<RunReport, SplitError> {
    config.split.validate()?;

    let download = download(config, false).await?;
    let preprocess = preprocess(config, None, None)?;
    let split = split_artifacts(config, None)?;

    Ok(RunReport {
        download,
        preprocess,
        split,
    })
}

/// Run the full pipeline. In JSON mode the three step reports are printed
/// as one object.
pub async fn cmd_run(config: &AppConfig, json_mode: bool) -> Result<(), SplitError> {
    let report = run_pipeline(config).await?;

    if json_mode {
        print_json(&report);
        return Ok(());
    }

    print_download(&report.download);
    print_preprocess(&report.preprocess);
    print_split(&report.split);

    Ok(())
}

// =============================================================================
// STATS COMMAND
// =============================================================================

/// Count nodes, edges and degrees of an edge table.
pub fn edge_stats(config: &AppConfig, input: Option<&Path>) -> Result<EdgeStats, SplitError> {
    let input = input.map_or_else(|| config.edges_path(), Path::to_path_buf);

    let edges = read_edges_csv(open_input(&input)?)?;
    let graph = UndirectedGraph::from_edges(&edges);
    let degrees = graph.degrees();

    Ok(EdgeStats {
        input,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        min_degree: degrees.min_degree(),
        max_degree: degrees.max_degree(),
        degree_one_nodes: degrees.count_with_degree(1),
    })
}

/// Show node, edge and degree counts of an edge table.
pub fn cmd_stats(
    config: &AppConfig,
    input: Option<&Path>,
    json_mode: bool,
) -> Result<(), SplitError> {
    let stats = edge_stats(config, input)?;

    if json_mode {
        print_json(&stats);
        return Ok(());
    }

    println!("Edge Table Stats");
    println!("================");
    println!("File:  {}", stats.input.display());
    println!();
    println!("Nodes:            {}", stats.node_count);
    println!("Edges:            {}", stats.edge_count);
    println!(
        "Min/Max Degree:   {} / {}",
        stats.min_degree.unwrap_or(0),
        stats.max_degree.unwrap_or(0)
    );
    println!("Degree-1 Nodes:   {}", stats.degree_one_nodes);

    Ok(())
}
