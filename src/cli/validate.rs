//! Validate command: check a config file without generating anything.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Validate a config file and report violations
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to config file (defaults to ./typescale.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config_path = Config::resolve_path(self.config.clone())
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let config = Config::load_from(&config_path)
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{}: {e}", config_path.display())))?;

        println!("✓ {} is valid", config_path.display());
        Ok(())
    }
}
