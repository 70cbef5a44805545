//! Flat line-oriented export: one token per line.
//!
//! Intended for humans and LLM prompts rather than YAML tooling; every
//! style collapses to a single `path: value` line so the whole system
//! can be scanned (or diffed) at a glance.

use crate::config::Config;
use crate::export::{format_px, ExportContext};
use crate::models::{Category, StyleDefinition};
use std::fmt::Write as _;

/// Serializes the style set as flat `jsPath: summary` lines.
#[must_use]
pub fn generate_yaml(styles: &[StyleDefinition], config: &Config, ctx: &ExportContext) -> String {
    let mut output = String::new();

    output.push_str("# typescale design tokens\n");
    let _ = writeln!(output, "# generated: {}", ctx.timestamp());

    for category in Category::ALL {
        let cat = config.categories.get(category);
        if !cat.enabled {
            continue;
        }
        let _ = writeln!(
            output,
            "# {}: {} {}-{} ({})",
            category.as_str(),
            method_label(config, category),
            format_px(cat.scale.min),
            format_px(cat.scale.max),
            cat.font_family
        );
    }
    if config.responsive.mobile_active() {
        let _ = writeln!(
            output,
            "# mobile: x{}",
            config.responsive.mobile.scale_multiplier
        );
    }
    output.push('\n');

    for style in styles {
        let _ = writeln!(
            output,
            "{}: {}/{} {} {} {}%",
            style.mappings.js_path,
            format_px(style.font_size),
            format_px(style.line_height),
            style.font_family,
            style.font_style,
            style.letter_spacing
        );
    }

    output
}

fn method_label(config: &Config, category: Category) -> String {
    serde_json::to_value(config.categories.get(category).scale.method)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_else(|| "modular".to_string())
}
