//! Default install-dir resolution.
//!
//! Binaries managed by this crate are project-local: the default location is
//! a `bin/` directory under the current working directory, separate from any
//! system-wide bin dir. Callers that want a different location pass an
//! explicit install dir at handle construction.

use std::path::PathBuf;

/// Subdirectory name under the project root.
const DEFAULT_BIN_SUBDIR: &str = "bin";

/// Returns the default install directory: `<current dir>/bin`.
///
/// Computed on every call, so a process that changes its working directory
/// sees the new location. Falls back to the bare relative path if the
/// current directory cannot be resolved.
pub fn default_install_dir() -> PathBuf {
    std::env::current_dir()
        .map(|dir| dir.join(DEFAULT_BIN_SUBDIR))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BIN_SUBDIR))
}
