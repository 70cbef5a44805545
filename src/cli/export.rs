//! Export command: serialize one format to stdout or a file.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportContext};
use crate::styles::generate_style_definitions;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;

/// Export format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Nested JSON token object
    Json,
    /// Flat line-oriented token listing
    Yaml,
    /// CSS custom properties plus utility classes
    Css,
    /// Tailwind-config-like object literal
    Tailwind,
}

/// Export generated styles in a single format
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to config file (defaults to ./typescale.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config_path = Config::resolve_path(self.config.clone())
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let config = Config::load_from(&config_path)
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid config: {e}")))?;

        let styles = generate_style_definitions(&config);
        let ctx = ExportContext::now();

        let content = match self.format {
            ExportFormat::Json => export::generate_json(&styles, &config, &ctx),
            ExportFormat::Yaml => export::generate_yaml(&styles, &config, &ctx),
            ExportFormat::Css => export::generate_css(&styles, &config, &ctx),
            ExportFormat::Tailwind => export::generate_tailwind_config(&styles, &config, &ctx),
        };

        match &self.output {
            Some(path) => {
                fs::write(path, content).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!("✓ Exported {} styles to {}", styles.len(), path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }
}
