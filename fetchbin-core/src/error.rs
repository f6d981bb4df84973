//! Error types for the shim lifecycle.
//!
//! Each phase of the lifecycle carries its own error enum so callers can
//! tell a handle that never existed (`ConstructionError`) apart from a
//! download that exhausted every mirror (`InstallError`) and a tool that
//! could not even be started (`RunError::Spawn`). A child process exiting
//! non-zero is *not* an error anywhere in this crate; exit codes are normal
//! return values.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

// ============================================================================
// Construction
// ============================================================================

/// Errors raised while building a [`Binary`](crate::Binary) handle.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The candidate URL list was empty.
    #[error("at least one download URL is required")]
    EmptyUrlList,

    /// A candidate was not a well-formed absolute URL.
    #[error("invalid download URL `{input}`: {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },
}

// ============================================================================
// Transfer
// ============================================================================

/// A single-URL download failure.
///
/// Never surfaced to callers on its own; the install loop collects one of
/// these per failed candidate and reports them together in
/// [`InstallError::AllUrlsFailed`].
#[derive(Debug, Error)]
pub enum TransferError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned {code} {reason}")]
    Status { code: u16, reason: &'static str },

    /// The destination file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Install
// ============================================================================

/// Errors raised by [`Binary::install`](crate::Binary::install).
#[derive(Debug, Error)]
pub enum InstallError {
    /// Every candidate URL failed. The message lists each attempted URL with
    /// the reason it failed so operators can see all mirrors that were tried.
    #[error("{}", format_attempts(.attempts))]
    AllUrlsFailed { attempts: Vec<(Url, TransferError)> },

    /// The downloaded artifact could not be marked executable.
    #[error("failed to mark {path} executable: {source}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn format_attempts(attempts: &[(Url, TransferError)]) -> String {
    let mut msg = String::from("failed to download from every candidate URL:");
    for (url, err) in attempts {
        msg.push_str(&format!("\n  {url}: {err}"));
    }
    msg
}

// ============================================================================
// Uninstall
// ============================================================================

/// Errors raised by [`Binary::uninstall`](crate::Binary::uninstall).
///
/// An already-absent install directory is treated as success and never
/// produces one of these.
#[derive(Debug, Error)]
pub enum UninstallError {
    #[error("failed to remove {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Run
// ============================================================================

/// Errors raised by [`Binary::run`](crate::Binary::run).
///
/// "The tool ran and exited non-zero" is not represented here; that comes
/// back as a normal [`RunOutcome`](crate::RunOutcome).
#[derive(Debug, Error)]
pub enum RunError {
    /// The implicit install before the run failed.
    #[error("install before run failed: {0}")]
    Install(#[from] InstallError),

    /// The artifact could not be spawned (missing, not executable, or an
    /// OS-level failure).
    #[error("failed to spawn {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The spawned child could not be awaited.
    #[error("failed waiting for {path}: {source}")]
    Wait {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
