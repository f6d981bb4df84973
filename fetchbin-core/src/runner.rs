//! Process delegation: spawning the installed artifact.
//!
//! `run` is the transparent front of the shim: it makes sure the artifact is
//! on disk (installing it on demand), spawns it with the caller's argument
//! vector and stdio configuration, and hands back the child's exit status
//! untouched. A non-zero exit is a normal outcome; only a failure to start
//! or await the child is an error.

use std::ffi::OsStr;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

use crate::binary::Binary;
use crate::error::{InstallError, RunError};

// ============================================================================
// Stdio Configuration
// ============================================================================

/// How one of the child's standard streams is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Share the parent's stream.
    #[default]
    Inherit,
    /// Connect the stream to the null device.
    Discard,
    /// Capture the stream through a pipe.
    Piped,
}

impl StdioMode {
    fn to_stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Discard => Stdio::null(),
            Self::Piped => Stdio::piped(),
        }
    }
}

/// Per-stream stdio wiring for a run. Defaults to inheriting all three.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioConfig {
    pub stdin: StdioMode,
    pub stdout: StdioMode,
    pub stderr: StdioMode,
}

impl StdioConfig {
    /// All three streams shared with the parent.
    pub fn inherit() -> Self {
        Self::default()
    }

    /// All three streams connected to the null device.
    pub fn discard() -> Self {
        Self {
            stdin: StdioMode::Discard,
            stdout: StdioMode::Discard,
            stderr: StdioMode::Discard,
        }
    }

    /// Output streams captured, stdin discarded.
    pub fn capture() -> Self {
        Self {
            stdin: StdioMode::Discard,
            stdout: StdioMode::Piped,
            stderr: StdioMode::Piped,
        }
    }
}

// ============================================================================
// Run Outcome
// ============================================================================

/// The result of a completed run.
///
/// `stdout`/`stderr` hold captured bytes only for streams configured as
/// [`StdioMode::Piped`]; inherited or discarded streams leave them `None`.
#[derive(Debug)]
pub struct RunOutcome {
    /// The child's exit status, exactly as the OS reported it.
    pub status: ExitStatus,
    pub stdout: Option<Vec<u8>>,
    pub stderr: Option<Vec<u8>>,
}

impl RunOutcome {
    /// The numeric exit code, if the child exited normally.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// True if the child exited with code zero.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

// ============================================================================
// Runner
// ============================================================================

impl Binary {
    /// Installs the artifact if and only if it is absent.
    ///
    /// The explicit first half of [`run`](Binary::run), exposed so callers
    /// and tests can drive the install step separately from the spawn.
    pub async fn ensure_installed(&self) -> Result<(), InstallError> {
        if self.exists() {
            return Ok(());
        }
        info!("{} not installed, installing before run", self.name());
        self.install().await
    }

    /// Runs the installed artifact with `args`, installing it first if
    /// absent, and waits for it to exit.
    ///
    /// # Errors
    ///
    /// - [`RunError::Install`] if the implicit install fails (the tool never
    ///   started).
    /// - [`RunError::Spawn`] if the artifact cannot be started — distinct
    ///   from the tool running and exiting non-zero, which is a normal
    ///   [`RunOutcome`].
    pub async fn run<S: AsRef<OsStr>>(
        &self,
        args: &[S],
        stdio: StdioConfig,
    ) -> Result<RunOutcome, RunError> {
        self.ensure_installed().await?;

        let path = self.artifact_path();
        debug!(
            "Spawning {} with {} argument(s)",
            path.display(),
            args.len()
        );

        let mut cmd = Command::new(&path);
        cmd.args(args)
            .stdin(stdio.stdin.to_stdio())
            .stdout(stdio.stdout.to_stdio())
            .stderr(stdio.stderr.to_stdio());

        let mut child = cmd.spawn().map_err(|source| RunError::Spawn {
            path: path.clone(),
            source,
        })?;

        let captures = stdio.stdout == StdioMode::Piped || stdio.stderr == StdioMode::Piped;
        let outcome = if captures {
            let output = child
                .wait_with_output()
                .await
                .map_err(|source| RunError::Wait {
                    path: path.clone(),
                    source,
                })?;
            RunOutcome {
                status: output.status,
                stdout: (stdio.stdout == StdioMode::Piped).then_some(output.stdout),
                stderr: (stdio.stderr == StdioMode::Piped).then_some(output.stderr),
            }
        } else {
            let status = child.wait().await.map_err(|source| RunError::Wait {
                path: path.clone(),
                source,
            })?;
            RunOutcome {
                status,
                stdout: None,
                stderr: None,
            }
        };

        debug!("{} exited with {}", path.display(), outcome.status);
        Ok(outcome)
    }
}
