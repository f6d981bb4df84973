//! Async single-URL file download.
//!
//! One HTTP GET, streamed to a destination path. No retries, no fallback,
//! no content interpretation; mirror fallback and error aggregation live in
//! the install loop, not here. A failed transfer may leave a partial file
//! behind; the next install attempt truncates and overwrites it.

use futures::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

use crate::error::TransferError;

/// Downloads `url` to `dest`, creating parent directories as needed.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the destination cannot be created or written.
pub async fn download_file(url: &Url, dest: &Path) -> Result<u64, TransferError> {
    info!("Downloading {} to {}", url, dest.display());

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| TransferError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let client = reqwest::Client::new();
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransferError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown error"),
        });
    }

    debug!("Content-Length: {:?}", response.content_length());

    let mut file = File::create(dest)
        .await
        .map_err(|source| TransferError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk)
            .await
            .map_err(|source| TransferError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
        bytes_written += chunk.len() as u64;
    }

    file.flush().await.map_err(|source| TransferError::Io {
        path: dest.to_path_buf(),
        source,
    })?;

    info!(
        "Download complete: {} bytes written to {}",
        bytes_written,
        dest.display()
    );

    Ok(bytes_written)
}
