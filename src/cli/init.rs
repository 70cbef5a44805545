//! Init command: write a default config file to start from.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use clap::Args;
use std::path::PathBuf;

/// Create a default config file
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Where to write the config (defaults to ./typescale.toml)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() && !self.force {
            return Err(CliError::usage(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to write config: {e}")))?;

        println!("✓ Wrote default config to {}", path.display());
        println!("Edit it, then run: typescale generate --config {}", path.display());
        Ok(())
    }
}
