//! Canonical style names and their cross-notation mappings.
//!
//! A canonical name is a slash-delimited path such as
//! `Mobile/Title/H1/Bold`. Every other notation (dot-path, CSS custom
//! property, Tailwind approximation) is a pure projection of the name
//! and the numeric typographic values.

use crate::models::{Breakpoint, Category, StyleMappings};

/// Builds the canonical slash-delimited style name.
///
/// Segments: `[Breakpoint/]Category/SizeName[/Weight]`. The breakpoint
/// segment appears only for the desktop/mobile variants of a responsive
/// pair; the weight segment only when `weight` is given, which callers
/// do exactly when the category has more than one enabled weight.
/// Enabling a second weight therefore renames every existing style in
/// the category - a deliberate, breaking rename.
#[must_use]
pub fn build_style_name(
    breakpoint: Breakpoint,
    category: Category,
    size_name: &str,
    weight: Option<&str>,
) -> String {
    let mut segments: Vec<&str> = Vec::with_capacity(4);
    if let Some(prefix) = breakpoint.prefix() {
        segments.push(prefix);
    }
    segments.push(category.display_name());
    segments.push(size_name);
    if let Some(weight) = weight {
        segments.push(weight);
    }
    segments.join("/")
}

/// Dot-path used to address the style in exported JS token objects,
/// e.g. `Body/Base` -> `typography.body.base`.
#[must_use]
pub fn to_js_path(name: &str) -> String {
    format!("typography.{}", name.replace('/', ".").to_lowercase())
}

/// CSS custom property name, e.g. `Body/Base` -> `--body-base`.
#[must_use]
pub fn to_css_var(name: &str) -> String {
    format!("--{}", name.replace('/', "-").to_lowercase())
}

/// Approximate Tailwind utility triple for a style's numeric values.
///
/// Three independent ladders: font size to `text-*`, line-height ratio
/// to `leading-*`, and a substring match on the weight name to
/// `font-*`. The thresholds are fixed; this is a lossy approximation
/// intended as a starting point, not an exact encoding.
#[must_use]
pub fn tailwind_classes(font_size: f64, line_height: f64, weight: &str) -> String {
    format!(
        "{} {} {}",
        tailwind_size_class(font_size),
        tailwind_leading_class(line_height / font_size),
        tailwind_weight_class(weight)
    )
}

fn tailwind_size_class(font_size: f64) -> &'static str {
    match font_size {
        s if s <= 12.0 => "text-xs",
        s if s <= 14.0 => "text-sm",
        s if s <= 16.0 => "text-base",
        s if s <= 18.0 => "text-lg",
        s if s <= 20.0 => "text-xl",
        s if s <= 24.0 => "text-2xl",
        s if s <= 30.0 => "text-3xl",
        s if s <= 36.0 => "text-4xl",
        s if s <= 48.0 => "text-5xl",
        s if s <= 60.0 => "text-6xl",
        s if s <= 72.0 => "text-7xl",
        s if s <= 96.0 => "text-8xl",
        _ => "text-9xl",
    }
}

fn tailwind_leading_class(ratio: f64) -> &'static str {
    match ratio {
        r if r <= 1.0 => "leading-none",
        r if r <= 1.15 => "leading-tight",
        r if r <= 1.3 => "leading-snug",
        r if r <= 1.45 => "leading-normal",
        r if r <= 1.55 => "leading-relaxed",
        _ => "leading-loose",
    }
}

fn tailwind_weight_class(weight: &str) -> &'static str {
    let weight = weight.to_lowercase();
    // Longer keywords first so "semibold" is not caught by "bold".
    if weight.contains("thin") {
        "font-thin"
    } else if weight.contains("extralight") || weight.contains("extra light") {
        "font-extralight"
    } else if weight.contains("light") {
        "font-light"
    } else if weight.contains("medium") {
        "font-medium"
    } else if weight.contains("semibold") || weight.contains("semi bold") || weight.contains("demi")
    {
        "font-semibold"
    } else if weight.contains("extrabold") || weight.contains("extra bold") {
        "font-extrabold"
    } else if weight.contains("black") || weight.contains("heavy") {
        "font-black"
    } else if weight.contains("bold") {
        "font-bold"
    } else {
        "font-normal"
    }
}

/// Builds the full mapping set for one style.
#[must_use]
pub fn build_mappings(
    name: &str,
    font_size: f64,
    line_height: f64,
    weight: &str,
) -> StyleMappings {
    StyleMappings {
        canonical: name.to_string(),
        js_path: to_js_path(name),
        css_var: to_css_var(name),
        tailwind: tailwind_classes(font_size, line_height, weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_without_breakpoint_or_weight() {
        assert_eq!(
            build_style_name(Breakpoint::None, Category::Body, "Base", None),
            "Body/Base"
        );
    }

    #[test]
    fn test_name_with_all_segments() {
        assert_eq!(
            build_style_name(Breakpoint::Mobile, Category::Title, "H1", Some("Bold")),
            "Mobile/Title/H1/Bold"
        );
    }

    #[test]
    fn test_name_desktop_prefix() {
        assert_eq!(
            build_style_name(Breakpoint::Desktop, Category::Code, "Sm", None),
            "Desktop/Code/Sm"
        );
    }

    #[test]
    fn test_js_path() {
        assert_eq!(to_js_path("Body/Base"), "typography.body.base");
        assert_eq!(
            to_js_path("Mobile/Title/H1/Bold"),
            "typography.mobile.title.h1.bold"
        );
    }

    #[test]
    fn test_css_var() {
        assert_eq!(to_css_var("Body/Base"), "--body-base");
        assert_eq!(to_css_var("Mobile/Title/H1/Bold"), "--mobile-title-h1-bold");
    }

    #[test]
    fn test_tailwind_size_ladder() {
        assert_eq!(tailwind_size_class(12.0), "text-xs");
        assert_eq!(tailwind_size_class(16.0), "text-base");
        assert_eq!(tailwind_size_class(17.0), "text-lg");
        assert_eq!(tailwind_size_class(97.0), "text-9xl");
    }

    #[test]
    fn test_tailwind_leading_ladder() {
        assert_eq!(tailwind_leading_class(1.0), "leading-none");
        assert_eq!(tailwind_leading_class(1.2), "leading-snug");
        assert_eq!(tailwind_leading_class(1.5), "leading-relaxed");
        assert_eq!(tailwind_leading_class(1.7), "leading-loose");
    }

    #[test]
    fn test_tailwind_weight_substring_match() {
        assert_eq!(tailwind_weight_class("Bold"), "font-bold");
        assert_eq!(tailwind_weight_class("SemiBold"), "font-semibold");
        assert_eq!(tailwind_weight_class("Extra Bold Italic"), "font-extrabold");
        assert_eq!(tailwind_weight_class("Regular"), "font-normal");
        assert_eq!(tailwind_weight_class("Heavy"), "font-black");
    }

    #[test]
    fn test_full_triple() {
        assert_eq!(
            tailwind_classes(16.0, 24.0, "Regular"),
            "text-base leading-relaxed font-normal"
        );
    }
}
