//! Tailwind config export: a `theme` object literal ready to merge.

use crate::config::Config;
use crate::export::{format_px, ExportContext};
use crate::models::{Breakpoint, Category, StyleDefinition};
use std::fmt::Write as _;

/// Serializes the style set as a Tailwind-config-like object literal.
///
/// Emits `theme.fontFamily` (one entry per enabled category) and
/// `theme.fontSize` keyed `{category}-{size}[-{breakpoint}][-{weight}]`,
/// each entry a `[size, { lineHeight, letterSpacing, fontWeight }]`
/// tuple. The output is a starting point for a real Tailwind setup, not
/// a drop-in config.
#[must_use]
pub fn generate_tailwind_config(
    styles: &[StyleDefinition],
    config: &Config,
    ctx: &ExportContext,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "// typescale design tokens - {}", ctx.timestamp());
    output.push_str("module.exports = {\n");
    output.push_str("  theme: {\n");

    output.push_str("    fontFamily: {\n");
    for category in Category::ALL {
        let cat = config.categories.get(category);
        if !cat.enabled {
            continue;
        }
        let _ = writeln!(
            output,
            "      {}: ['{}'],",
            category.as_str(),
            cat.font_family
        );
    }
    output.push_str("    },\n");

    output.push_str("    fontSize: {\n");
    for style in styles {
        let _ = writeln!(
            output,
            "      '{}': ['{}', {{ lineHeight: '{}', letterSpacing: '{}em', fontWeight: '{}' }}],",
            font_size_key(style),
            format_px(style.font_size),
            format_px(style.line_height),
            style.letter_spacing / 100.0,
            style.font_style
        );
    }
    output.push_str("    },\n");

    output.push_str("  },\n");
    output.push_str("};\n");
    output
}

/// `{category}-{size}[-{breakpoint}][-{weight}]`, all lowercase.
fn font_size_key(style: &StyleDefinition) -> String {
    let mut key = format!(
        "{}-{}",
        style.category.as_str(),
        style.size_name.to_lowercase()
    );
    if let Some(prefix) = style.breakpoint.prefix() {
        let _ = write!(key, "-{}", prefix.to_lowercase());
    }
    if has_weight_segment(style) {
        let _ = write!(key, "-{}", style.font_style.to_lowercase());
    }
    key
}

/// Whether the style's canonical name carries a weight segment (i.e.
/// the category has more than one enabled weight).
fn has_weight_segment(style: &StyleDefinition) -> bool {
    let without_weight = match style.breakpoint {
        Breakpoint::None => 2,
        Breakpoint::Desktop | Breakpoint::Mobile => 3,
    };
    style.name.split('/').count() > without_weight
}
