//! Style definition assembly - the single entry point of the generator.
//!
//! Combines scale generation, size naming, typographic metrics, and
//! name mapping into the complete set of [`StyleDefinition`] records for
//! a configuration. Pure and deterministic: the same configuration
//! always yields the same sequence, byte for byte.

use crate::config::Config;
use crate::models::{
    Breakpoint, Category, CategoryScaleConfig, NamedSize, StyleDefinition,
};
use crate::naming;
use crate::scale;

/// Generates every style definition for the configuration.
///
/// Categories are processed in canonical order (display, title, body,
/// code), desktop before mobile within a category. The order is stable
/// but carries no semantic weight; consumers must key on `name`, which
/// is unique across the returned set.
///
/// The configuration is trusted as-is. Run [`Config::validate`] first;
/// a malformed configuration produces an unspecified (but still
/// deterministic) result rather than an error.
#[must_use]
pub fn generate_style_definitions(config: &Config) -> Vec<StyleDefinition> {
    let mut styles = Vec::new();

    for category in Category::ALL {
        let cat_config = config.categories.get(category);
        if !cat_config.enabled {
            continue;
        }

        let desktop_sizes = scale::generate_scale(&cat_config.scale);
        let desktop_named = scale::map_sizes_to_names(&desktop_sizes, category);

        if config.responsive.mobile_active() {
            let mobile_sizes = scale::apply_mobile_scale(
                &desktop_sizes,
                config.responsive.mobile.scale_multiplier,
                cat_config.scale.rounding,
                config.responsive.mobile_max_sizes.for_category(category),
            );
            let mobile_named = scale::map_sizes_to_names(&mobile_sizes, category);

            assemble_breakpoint(&mut styles, category, cat_config, Breakpoint::Desktop, &desktop_named);
            assemble_breakpoint(&mut styles, category, cat_config, Breakpoint::Mobile, &mobile_named);
        } else {
            assemble_breakpoint(&mut styles, category, cat_config, Breakpoint::None, &desktop_named);
        }
    }

    styles
}

/// Assembles the (named-size x weight) styles of one category breakpoint.
fn assemble_breakpoint(
    styles: &mut Vec<StyleDefinition>,
    category: Category,
    cat_config: &CategoryScaleConfig,
    breakpoint: Breakpoint,
    named_sizes: &[NamedSize],
) {
    // With a single weight the weight segment is omitted from names
    // entirely; adding a second weight later renames the whole category.
    let include_weight = cat_config.weights.len() > 1;

    for named in named_sizes {
        for weight in &cat_config.weights {
            let name = naming::build_style_name(
                breakpoint,
                category,
                &named.name,
                include_weight.then_some(weight.as_str()),
            );
            let line_height = scale::calculate_line_height(
                named.size,
                cat_config.line_height,
                cat_config.scale.rounding,
            );
            let letter_spacing = scale::calculate_letter_spacing(named.size, category);

            styles.push(StyleDefinition {
                mappings: naming::build_mappings(&name, named.size, line_height, weight),
                description: describe(&name, named.size, line_height, weight, &cat_config.font_family),
                name,
                category,
                breakpoint,
                size_name: named.name.clone(),
                font_family: cat_config.font_family.clone(),
                font_style: weight.clone(),
                font_size: named.size,
                line_height,
                letter_spacing,
            });
        }
    }
}

/// Human-readable one-line summary attached to each style.
fn describe(name: &str, size: f64, line_height: f64, weight: &str, family: &str) -> String {
    format!("{name}: {family} {weight}, {size}px / {line_height}px")
}
