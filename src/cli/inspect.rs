//! Inspect command: print the generated scale tables.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{Breakpoint, StyleDefinition};
use crate::styles::generate_style_definitions;
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Show the generated scales, sizes, and style names
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to config file (defaults to ./typescale.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let config_path = Config::resolve_path(self.config.clone())
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let config = Config::load_from(&config_path)
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid config: {e}")))?;

        let styles = generate_style_definitions(&config);
        print!("{}", render_table(&styles));
        println!();
        println!("{} styles total", styles.len());

        Ok(())
    }
}

/// Renders the style set as a fixed-width text table, one section per
/// category/breakpoint pair.
fn render_table(styles: &[StyleDefinition]) -> String {
    let mut output = String::new();
    let mut current_section = None;

    for style in styles {
        let section = (style.category, style.breakpoint);
        if current_section != Some(section) {
            current_section = Some(section);
            output.push('\n');
            let _ = writeln!(output, "{}", section_header(style));
            let _ = writeln!(
                output,
                "  {:<24} {:>8} {:>8} {:>9}",
                "name", "size", "line", "tracking"
            );
        }

        let _ = writeln!(
            output,
            "  {:<24} {:>7}px {:>7}px {:>8}%",
            style.name, style.font_size, style.line_height, style.letter_spacing
        );
    }

    output
}

fn section_header(style: &StyleDefinition) -> String {
    match style.breakpoint {
        Breakpoint::None => style.category.display_name().to_string(),
        Breakpoint::Desktop | Breakpoint::Mobile => format!(
            "{} ({})",
            style.category.display_name(),
            style.breakpoint.prefix().unwrap_or_default().to_lowercase()
        ),
    }
}
