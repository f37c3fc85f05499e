//! # Dataset Acquisition
//!
//! Idempotent download of a remote file to a local path.
//!
//! The body is streamed in chunks to `<path>.part` and renamed into place
//! once complete, so an interrupted transfer never leaves a truncated file
//! behind at the final path. With `force`, an existing file is only
//! replaced once the new body is complete. Transport failures are not
//! retried.

use linksplit_core::SplitError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// Timeout for the whole request.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// What a download call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The destination already existed; nothing was fetched.
    Skipped,
    /// The file was fetched and written.
    Downloaded {
        /// Bytes written.
        bytes: u64,
    },
}

/// Build the HTTP client used for downloads.
pub fn http_client() -> Result<reqwest::Client, SplitError> {
    reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|e| SplitError::DownloadError(e.to_string()))
}

/// Download `url` to `out_path` unless `out_path` already exists and
/// `force` is not set.
///
/// Parent directories are created. A non-success status or a transport
/// error is returned as `SplitError::DownloadError`, and an existing file
/// is left untouched in that case.
pub async fn download_file(
    url: &str,
    out_path: &Path,
    force: bool,
) -> Result<FetchOutcome, SplitError> {
    download_with_client(&http_client()?, url, out_path, force).await
}

/// Same as [`download_file`] with a caller-provided client.
pub async fn download_with_client(
    client: &reqwest::Client,
    url: &str,
    out_path: &Path,
    force: bool,
) -> Result<FetchOutcome, SplitError> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            SplitError::IoError(format!("Cannot create '{}': {}", parent.display(), e))
        })?;
    }

    if !force && out_path.exists() {
        tracing::debug!("{} exists, skipping download", out_path.display());
        return Ok(FetchOutcome::Skipped);
    }

    tracing::info!("Downloading {} to {}", url, out_path.display());

    let mut response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| SplitError::DownloadError(format!("{}: {}", url, e)))?;

    let part_path = part_path(out_path);
    let mut file = tokio::fs::File::create(&part_path).await.map_err(|e| {
        SplitError::IoError(format!("Cannot create '{}': {}", part_path.display(), e))
    })?;

    let mut bytes = 0u64;
    loop {
        let chunk = match response.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&part_path).await;
                return Err(SplitError::DownloadError(format!("{}: {}", url, e)));
            }
        };
        file.write_all(&chunk).await?;
        bytes = bytes.saturating_add(chunk.len() as u64);
    }
    file.flush().await?;
    drop(file);

    tokio::fs::rename(&part_path, out_path).await.map_err(|e| {
        SplitError::IoError(format!("Cannot move download to '{}': {}", out_path.display(), e))
    })?;

    tracing::info!("Downloaded {} bytes", bytes);
    Ok(FetchOutcome::Downloaded { bytes })
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_appends_suffix() {
        assert_eq!(
            part_path(Path::new("data/raw/ca-HepTh.txt.gz")),
            PathBuf::from("data/raw/ca-HepTh.txt.gz.part")
        );
    }
}
