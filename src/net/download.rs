//! # Downloads
//!
//! Streams a URL into `<file>.part`, reporting progress over a channel, and
//! renames it into place once the body is complete. A failed or aborted
//! transfer never leaves a half-written file under the final name.

use futures::StreamExt;
use log::{debug, info, warn};
use reqwest::header::{CONTENT_LENGTH, HeaderMap};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadEvent {
    /// Response headers arrived. `total` is 0 when the size is unknown.
    Started { total: u64 },
    /// Bytes written so far.
    Progress { received: u64 },
}

/// The numbered errors listed on the help screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// 1: the target exists and overwriting was not approved.
    FileExists(PathBuf),
    /// 2: the filesystem could not say whether the target exists.
    OverwriteCheck(String),
    /// 3: the server or the transfer failed.
    Transfer(String),
}

impl DownloadError {
    pub fn code(&self) -> u8 {
        match self {
            DownloadError::FileExists(_) => 1,
            DownloadError::OverwriteCheck(_) => 2,
            DownloadError::Transfer(_) => 3,
        }
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::FileExists(path) => {
                write!(f, "ERROR 1: {} already exists", path.display())
            }
            DownloadError::OverwriteCheck(msg) => {
                write!(f, "ERROR 2: can't check for file overwrite ({msg})")
            }
            DownloadError::Transfer(msg) => {
                write!(f, "ERROR 3: can't download file from the server ({msg})")
            }
        }
    }
}

impl std::error::Error for DownloadError {}

/// Temporary name the body is streamed into.
pub fn part_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Fails with error 1 or 2 unless `path` is free to write.
pub fn check_target(path: &Path, overwrite: bool) -> Result<(), DownloadError> {
    match path.try_exists() {
        Ok(true) if !overwrite => Err(DownloadError::FileExists(path.to_path_buf())),
        Ok(_) => Ok(()),
        Err(e) => Err(DownloadError::OverwriteCheck(e.to_string())),
    }
}

fn header_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Size announced by a HEAD request, if the server answers one.
async fn head_length(client: &reqwest::Client, url: &str) -> Option<u64> {
    match client.head(url).send().await {
        Ok(response) if response.status().is_success() => header_length(response.headers()),
        Ok(response) => {
            debug!("HEAD {} returned {}", url, response.status());
            None
        }
        Err(e) => {
            debug!("HEAD {} failed: {}", url, e);
            None
        }
    }
}

/// Downloads `url` to `path`.
///
/// Sends `Started` once, then `Progress` after every chunk. Returns the
/// final path on success. On any failure the `.part` file is removed.
pub async fn download(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
    overwrite: bool,
    events: Sender<DownloadEvent>,
) -> Result<PathBuf, DownloadError> {
    check_target(path, overwrite)?;
    info!("Starting download for {} from {}...", path.display(), url);

    let announced = head_length(client, url).await.filter(|len| *len > 0);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::Transfer(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        warn!("Download of {} failed with {}", url, status);
        return Err(DownloadError::Transfer(format!("HTTP {}", status.as_u16())));
    }

    let total = announced
        .or_else(|| header_length(response.headers()))
        .unwrap_or(0);
    if events.send(DownloadEvent::Started { total }).await.is_err() {
        debug!("Download progress receiver dropped");
    }

    let part = part_path(path);
    let written = stream_to_file(response, &part, &events).await;

    match written {
        Ok(received) => {
            tokio::fs::rename(&part, path).await.map_err(|e| {
                DownloadError::Transfer(format!("can't move {} into place: {e}", part.display()))
            })?;
            info!("Downloaded {} ({} bytes)", path.display(), received);
            Ok(path.to_path_buf())
        }
        Err(e) => {
            warn!("Download of {} failed: {}", url, e);
            remove_partial(path).await;
            Err(e)
        }
    }
}

async fn stream_to_file(
    response: reqwest::Response,
    part: &Path,
    events: &Sender<DownloadEvent>,
) -> Result<u64, DownloadError> {
    let mut file = tokio::fs::File::create(part)
        .await
        .map_err(|e| DownloadError::Transfer(format!("can't create {}: {e}", part.display())))?;

    let mut received = 0u64;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| DownloadError::Transfer(e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| DownloadError::Transfer(e.to_string()))?;
        received += chunk.len() as u64;
        // Receiver gone means the UI stopped listening; keep writing anyway
        let _ = events.send(DownloadEvent::Progress { received }).await;
    }
    file.flush()
        .await
        .map_err(|e| DownloadError::Transfer(e.to_string()))?;
    Ok(received)
}

/// Removes the `.part` file of `path`, if any.
pub async fn remove_partial(path: &Path) {
    let part = part_path(path);
    match tokio::fs::remove_file(&part).await {
        Ok(()) => info!("Removed partial download {}", part.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove {}: {}", part.display(), e),
    }
}

/// Plain GET of `url` saved to `path`, without progress reporting.
pub async fn fetch_to_file(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
) -> Result<u64, DownloadError> {
    info!("Retrieving {} into {}", url, path.display());
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::Transfer(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DownloadError::Transfer(format!(
            "HTTP {}",
            response.status().as_u16()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DownloadError::Transfer(e.to_string()))?;
    tokio::fs::write(path, &body)
        .await
        .map_err(|e| DownloadError::Transfer(e.to_string()))?;
    Ok(body.len() as u64)
}
