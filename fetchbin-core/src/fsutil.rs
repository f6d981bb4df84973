//! Small filesystem helpers shared by the install and uninstall paths.
//!
//! These are plain utilities with no policy: retry, fallback, and error
//! aggregation all belong to the callers.

use std::io;
use std::path::Path;

/// Sets the execute permission bits on `path`.
///
/// No-op on platforms without a POSIX-style permission model (Windows
/// decides executability by extension).
pub fn make_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        use tracing::debug;

        let metadata = std::fs::metadata(path)?;
        let mut permissions = metadata.permissions();
        let current_mode = permissions.mode();
        permissions.set_mode(current_mode | 0o755);
        std::fs::set_permissions(path, permissions)?;

        debug!("Set executable permission on {}", path.display());
    }

    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

/// Removes a file or directory tree, treating absence as success.
pub async fn remove_recursive(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if metadata.is_dir() {
                tokio::fs::remove_dir_all(path).await
            } else {
                tokio::fs::remove_file(path).await
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn make_executable_sets_exec_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("tool");
        std::fs::write(&file_path, "#!/bin/sh\nexit 0\n").unwrap();

        make_executable(&file_path).unwrap();

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o100, 0o100, "owner execute bit should be set");
    }

    #[tokio::test]
    async fn remove_recursive_handles_files_and_dirs() {
        let temp_dir = TempDir::new().unwrap();

        let file_path = temp_dir.path().join("file");
        std::fs::write(&file_path, "x").unwrap();
        remove_recursive(&file_path).await.unwrap();
        assert!(!file_path.exists());

        let dir_path = temp_dir.path().join("dir");
        std::fs::create_dir_all(dir_path.join("nested")).unwrap();
        std::fs::write(dir_path.join("nested").join("file"), "x").unwrap();
        remove_recursive(&dir_path).await.unwrap();
        assert!(!dir_path.exists());
    }

    #[tokio::test]
    async fn remove_recursive_is_fine_with_absent_paths() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("never-existed");

        remove_recursive(&missing).await.unwrap();
        remove_recursive(&missing).await.unwrap();
    }
}
