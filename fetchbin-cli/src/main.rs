//! fetchbin — install and run remotely-distributed binaries.
//!
//! The CLI is a thin delegate over `fetchbin-core`: every subcommand names a
//! tool and its candidate URLs, and `run` forwards its trailing arguments to
//! the installed binary, exiting with the child's exit code.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fetchbin_core::{Binary, StdioConfig};

#[derive(Parser, Debug)]
#[command(
    name = "fetchbin",
    version,
    about = "Download, install, and run platform binaries on demand"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The tool a subcommand operates on.
#[derive(Args, Debug, Clone)]
struct Target {
    /// Tool name, used as the installed file name
    #[arg(long)]
    name: String,

    /// Candidate download URL; repeat for fallback mirrors, tried in order
    #[arg(long = "url", required = true)]
    urls: Vec<String>,

    /// Install directory (defaults to ./bin)
    #[arg(long)]
    install_dir: Option<PathBuf>,
}

impl Target {
    fn binary(self) -> Result<Binary> {
        Ok(Binary::create(self.name, &self.urls, self.install_dir)?)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download and install the tool (no-op if already installed)
    Install(Target),
    /// Remove the installed tool and its directory
    Uninstall(Target),
    /// Report whether the tool is installed
    Status(Target),
    /// Run the tool, installing it first if needed
    Run {
        #[command(flatten)]
        target: Target,

        /// Arguments forwarded to the tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Install(target) => {
            let bin = target.binary()?;
            bin.install().await?;
            println!("{} installed at {}", bin.name(), bin.artifact_path().display());
        }
        Commands::Uninstall(target) => {
            let bin = target.binary()?;
            bin.uninstall().await?;
            println!("{} uninstalled", bin.name());
        }
        Commands::Status(target) => {
            let bin = target.binary()?;
            if bin.exists() {
                println!("{} installed at {}", bin.name(), bin.artifact_path().display());
            } else {
                println!("{} is not installed", bin.name());
                std::process::exit(1);
            }
        }
        Commands::Run { target, args } => {
            let bin = target.binary()?;
            debug!("Delegating to {} with {:?}", bin.name(), args);
            let outcome = bin.run(&args, StdioConfig::inherit()).await?;
            // Forward the child's exit code; 1 stands in for signal death.
            std::process::exit(outcome.code().unwrap_or(1));
        }
    }

    Ok(())
}
