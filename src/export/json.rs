//! JSON token export: nested object keyed by jsPath segments.

use crate::config::Config;
use crate::export::{ExportContext, TokenTree};
use crate::models::{Category, StyleDefinition};
use serde_json::{json, Value};

/// Serializes the style set as a nested JSON token object.
///
/// Styles nest under their `jsPath` segments (`typography.body.base`
/// becomes `{"typography": {"body": {"base": {...}}}}`). A `$meta`
/// block carries the per-category scale summaries, the responsive
/// multiplier, and the injected generation timestamp.
#[must_use]
pub fn generate_json(styles: &[StyleDefinition], config: &Config, ctx: &ExportContext) -> String {
    let mut tree = TokenTree::new();
    tree.insert(&["$meta"], meta_block(config, ctx));

    for style in styles {
        let segments: Vec<&str> = style.mappings.js_path.split('.').collect();
        tree.insert(&segments, style_payload(style));
    }

    let mut output = serde_json::to_string_pretty(&tree.into_value())
        .unwrap_or_else(|_| String::from("{}"));
    output.push('\n');
    output
}

fn style_payload(style: &StyleDefinition) -> Value {
    json!({
        "fontSize": px_number(style.font_size),
        "lineHeight": px_number(style.line_height),
        "letterSpacing": px_number(style.letter_spacing),
        "fontFamily": style.font_family,
        "fontWeight": style.font_style,
        "cssVar": style.mappings.css_var,
    })
}

fn meta_block(config: &Config, ctx: &ExportContext) -> Value {
    let mut categories = serde_json::Map::new();
    for category in Category::ALL {
        let cat = config.categories.get(category);
        if !cat.enabled {
            continue;
        }
        categories.insert(
            category.as_str().to_string(),
            json!({
                "method": cat.scale.method,
                "min": px_number(cat.scale.min),
                "max": px_number(cat.scale.max),
                "rounding": px_number(cat.scale.rounding),
                "lineHeight": cat.line_height,
                "fontFamily": cat.font_family,
                "weights": cat.weights,
            }),
        );
    }

    json!({
        "generatedAt": ctx.timestamp(),
        "categories": categories,
        "responsive": {
            "enabled": config.responsive.mobile_active(),
            "scaleMultiplier": config.responsive.mobile.scale_multiplier,
        },
    })
}

/// Whole px values export as integers, fractional ones as floats.
fn px_number(value: f64) -> Value {
    if value.fract() == 0.0 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::generate_style_definitions;

    #[test]
    fn test_json_nests_by_js_path() {
        let config = Config::default();
        let styles = generate_style_definitions(&config);
        let output = generate_json(&styles, &config, &ExportContext::pinned());

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["typography"]["body"]["base"]["fontSize"], 16);
        assert_eq!(value["typography"]["body"]["base"]["lineHeight"], 24);
        assert_eq!(
            value["typography"]["body"]["base"]["cssVar"],
            "--body-base"
        );
    }

    #[test]
    fn test_json_meta_block() {
        let config = Config::default();
        let styles = generate_style_definitions(&config);
        let output = generate_json(&styles, &config, &ExportContext::pinned());

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["$meta"]["generatedAt"], "2024-01-01 00:00:00");
        assert_eq!(value["$meta"]["categories"]["body"]["min"], 12);
        assert_eq!(value["$meta"]["responsive"]["enabled"], false);
    }

    #[test]
    fn test_json_meta_skips_disabled_categories() {
        let mut config = Config::default();
        config.categories.code.enabled = false;
        let styles = generate_style_definitions(&config);
        let output = generate_json(&styles, &config, &ExportContext::pinned());

        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value["$meta"]["categories"]["code"].is_null());
        assert!(value["typography"]["code"].is_null());
    }

    #[test]
    fn test_json_is_deterministic() {
        let config = Config::default();
        let styles = generate_style_definitions(&config);
        let ctx = ExportContext::pinned();
        assert_eq!(
            generate_json(&styles, &config, &ctx),
            generate_json(&styles, &config, &ctx)
        );
    }
}
