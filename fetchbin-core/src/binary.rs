//! The `Binary` handle and its install lifecycle.
//!
//! A `Binary` binds a tool name, an ordered list of candidate download URLs
//! (first = primary, rest = fallback mirrors), and an install directory. It
//! is immutable after construction; all lifecycle operations read from it.
//!
//! The installed artifact lives at `<install_dir>/<name>`. Its existence on
//! disk is the only install state there is: no manifest, no version record.
//! Reinstalling overwrites in place, and a half-written file left by a
//! failed transfer is recovered by the next attempt truncating it.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

use crate::downloader::download_file;
use crate::error::{ConstructionError, InstallError, TransferError, UninstallError};
use crate::{fsutil, paths};

// ============================================================================
// Handle
// ============================================================================

/// An immutable handle to a remotely-distributed executable.
#[derive(Debug, Clone)]
pub struct Binary {
    name: String,
    urls: Vec<Url>,
    install_dir: PathBuf,
}

impl Binary {
    /// Creates a handle for `name` with the given candidate URLs.
    ///
    /// URLs are tried in list order at install time; their order is the
    /// fallback priority. `install_dir` defaults to
    /// [`paths::default_install_dir`] when `None`.
    ///
    /// # Errors
    ///
    /// Fails if `urls` is empty or any entry is not a well-formed absolute
    /// URL.
    pub fn create<S: AsRef<str>>(
        name: impl Into<String>,
        urls: &[S],
        install_dir: Option<PathBuf>,
    ) -> Result<Self, ConstructionError> {
        if urls.is_empty() {
            return Err(ConstructionError::EmptyUrlList);
        }

        let urls = urls
            .iter()
            .map(|raw| {
                Url::parse(raw.as_ref()).map_err(|source| ConstructionError::InvalidUrl {
                    input: raw.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            urls,
            install_dir: install_dir.unwrap_or_else(paths::default_install_dir),
        })
    }

    /// The tool name, used as the on-disk file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered candidate URL list (never empty).
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// The directory the artifact is installed into.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// The full path of the installed artifact: `<install_dir>/<name>`.
    pub fn artifact_path(&self) -> PathBuf {
        self.install_dir.join(&self.name)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Returns true if the artifact is present on disk.
    ///
    /// Pure presence check; safe to call repeatedly and concurrently.
    pub fn exists(&self) -> bool {
        self.artifact_path().exists()
    }

    /// Downloads and installs the artifact, trying each candidate URL in
    /// order and stopping at the first success.
    ///
    /// Idempotent: if the artifact already exists this returns immediately
    /// without any network access. On success the artifact is marked
    /// executable. No partial cleanup happens on total failure; the next
    /// attempt overwrites whatever was left behind.
    ///
    /// # Errors
    ///
    /// [`InstallError::AllUrlsFailed`] when every candidate fails; its
    /// message names each attempted URL with the reason it failed.
    pub async fn install(&self) -> Result<(), InstallError> {
        let dest = self.artifact_path();

        if dest.exists() {
            debug!("{} already installed at {}", self.name, dest.display());
            return Ok(());
        }

        info!("Installing {} to {}", self.name, dest.display());

        let mut attempts: Vec<(Url, TransferError)> = Vec::new();
        for url in &self.urls {
            match download_file(url, &dest).await {
                Ok(bytes) => {
                    debug!("Fetched {} ({} bytes) from {}", self.name, bytes, url);
                    fsutil::make_executable(&dest).map_err(|source| {
                        InstallError::Permissions {
                            path: dest.clone(),
                            source,
                        }
                    })?;
                    info!("{} installed at {}", self.name, dest.display());
                    return Ok(());
                }
                Err(err) => {
                    warn!("Download of {} from {} failed: {}", self.name, url, err);
                    attempts.push((url.clone(), err));
                }
            }
        }

        Err(InstallError::AllUrlsFailed { attempts })
    }

    /// Removes the artifact and its containing directory tree.
    ///
    /// Idempotent: an already-absent install dir is success, not an error.
    pub async fn uninstall(&self) -> Result<(), UninstallError> {
        info!("Uninstalling {} from {}", self.name, self.install_dir.display());

        fsutil::remove_recursive(&self.install_dir)
            .await
            .map_err(|source| UninstallError::Io {
                path: self.install_dir.clone(),
                source,
            })
    }
}
