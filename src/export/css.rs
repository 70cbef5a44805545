//! CSS export: custom properties plus one utility class per style.

use crate::config::Config;
use crate::export::{format_px, ExportContext};
use crate::models::StyleDefinition;
use std::fmt::Write as _;

/// Serializes the style set as CSS.
///
/// Emits a `:root` block declaring three custom properties per style
/// (`-size`, `-line-height`, `-letter-spacing` suffixes on the style's
/// CSS variable stem), followed by one utility class per style wired to
/// those properties. Letter spacing converts from percent of font size
/// to `em`.
#[must_use]
pub fn generate_css(styles: &[StyleDefinition], _config: &Config, ctx: &ExportContext) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "/* typescale design tokens - {} */", ctx.timestamp());
    output.push('\n');

    output.push_str(":root {\n");
    for style in styles {
        let stem = &style.mappings.css_var;
        let _ = writeln!(output, "  {stem}-size: {};", format_px(style.font_size));
        let _ = writeln!(
            output,
            "  {stem}-line-height: {};",
            format_px(style.line_height)
        );
        let _ = writeln!(
            output,
            "  {stem}-letter-spacing: {};",
            letter_spacing_em(style.letter_spacing)
        );
    }
    output.push_str("}\n");

    for style in styles {
        let stem = &style.mappings.css_var;
        let class = stem.trim_start_matches("--");
        output.push('\n');
        let _ = writeln!(output, ".text-{class} {{");
        let _ = writeln!(output, "  font-family: \"{}\";", style.font_family);
        let _ = writeln!(output, "  font-size: var({stem}-size);");
        let _ = writeln!(output, "  line-height: var({stem}-line-height);");
        let _ = writeln!(output, "  letter-spacing: var({stem}-letter-spacing);");
        let _ = writeln!(output, "  font-weight: {};", css_weight(&style.font_style));
        output.push_str("}\n");
    }

    output
}

/// Percent-of-font-size tracking expressed as an em value.
fn letter_spacing_em(percent: f64) -> String {
    if percent == 0.0 {
        "0".to_string()
    } else {
        format!("{}em", percent / 100.0)
    }
}

/// Numeric CSS font-weight for a weight name, by keyword.
fn css_weight(weight: &str) -> u16 {
    let weight = weight.to_lowercase();
    if weight.contains("thin") {
        100
    } else if weight.contains("extralight") || weight.contains("extra light") {
        200
    } else if weight.contains("light") {
        300
    } else if weight.contains("medium") {
        500
    } else if weight.contains("semibold") || weight.contains("semi bold") || weight.contains("demi")
    {
        600
    } else if weight.contains("extrabold") || weight.contains("extra bold") {
        800
    } else if weight.contains("black") || weight.contains("heavy") {
        900
    } else if weight.contains("bold") {
        700
    } else {
        400
    }
}
