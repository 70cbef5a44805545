//! Generate command: run the pipeline and write every export format.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportContext};
use crate::models::Breakpoint;
use crate::styles::generate_style_definitions;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Generate style definitions and write all export formats
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to config file (defaults to ./typescale.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for the export files
    #[arg(short, long, value_name = "DIR", default_value = "tokens")]
    pub output: PathBuf,
}

impl GenerateArgs {
    /// Execute the generate command
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

        fs::create_dir_all(&self.output).map_err(|e| {
            CliError::io(format!(
                "Failed to create output directory {}: {e}",
                self.output.display()
            ))
        })?;

        let exports: [(&str, String); 4] = [
            ("typescale.json", export::generate_json(&styles, &config, &ctx)),
            ("typescale.txt", export::generate_yaml(&styles, &config, &ctx)),
            ("typescale.css", export::generate_css(&styles, &config, &ctx)),
            (
                "tailwind.config.js",
                export::generate_tailwind_config(&styles, &config, &ctx),
            ),
        ];

        for (file_name, content) in exports {
            let path = self.output.join(file_name);
            fs::write(&path, content)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
            println!("✓ Wrote {}", path.display());
        }

        let mobile_count = styles
            .iter()
            .filter(|s| s.breakpoint == Breakpoint::Mobile)
            .count();
        println!();
        if mobile_count > 0 {
            println!(
                "Generated {} styles ({} desktop, {} mobile) from {}",
                styles.len(),
                styles.len() - mobile_count,
                mobile_count,
                config_path.display()
            );
        } else {
            println!(
                "Generated {} styles from {}",
                styles.len(),
                config_path.display()
            );
        }

        Ok(())
    }
}
