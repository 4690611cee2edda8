//! Blocking HTTP file retrieval.
//!
//! Single-attempt streaming downloads: the manager performs at most one
//! transfer per call, and retries are the caller's decision. Each call
//! opens and closes its own connection and file handle.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use super::error::{ManagerError, ManagerResult};

/// Progress callback: (bytes_downloaded, total_bytes).
///
/// Total is 0 when the server does not report a content length.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Default timeout for catalog downloads. Halo catalogs run to hundreds of
/// megabytes, so this is generous.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Buffer size for streaming downloads (64KB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Trait for fetching a single remote file to a local path.
///
/// Mirrors `RemoteLister`: tests inject an in-memory implementation so the
/// full download workflow runs without network access.
pub trait CatalogFetcher {
    /// Download `url` to `dest`, returning the number of bytes written.
    fn fetch(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> ManagerResult<u64>;
}

impl<F: CatalogFetcher + ?Sized> CatalogFetcher for &F {
    fn fetch(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> ManagerResult<u64> {
        (**self).fetch(url, dest, progress)
    }
}

/// HTTP catalog fetcher backed by a blocking reqwest client.
#[derive(Debug)]
pub struct HttpDownloader {
    client: Client,
    timeout: Duration,
}

impl HttpDownloader {
    /// Create a downloader with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a downloader with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client, timeout }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFetcher for HttpDownloader {
    fn fetch(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> ManagerResult<u64> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ManagerError::CreateDirFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                ManagerError::Timeout {
                    url: url.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                ManagerError::DownloadFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManagerError::DownloadFailed {
                url: url.to_string(),
                reason: format!("GET request failed with status {}", status),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        let file = File::create(dest).map_err(|e| ManagerError::WriteFailed {
            path: dest.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        let mut buffer = vec![0u8; BUFFER_SIZE];
        let mut downloaded = 0u64;

        loop {
            let bytes_read =
                response
                    .read(&mut buffer)
                    .map_err(|e| ManagerError::DownloadFailed {
                        url: url.to_string(),
                        reason: format!("read error: {}", e),
                    })?;

            if bytes_read == 0 {
                break;
            }

            writer
                .write_all(&buffer[..bytes_read])
                .map_err(|e| ManagerError::WriteFailed {
                    path: dest.to_path_buf(),
                    source: e,
                })?;

            downloaded += bytes_read as u64;

            if let Some(ref cb) = progress {
                cb(downloaded, total_size);
            }
        }

        writer.flush().map_err(|e| ManagerError::WriteFailed {
            path: dest.to_path_buf(),
            source: e,
        })?;

        info!(url, bytes = downloaded, "catalog downloaded");
        Ok(downloaded)
    }
}
