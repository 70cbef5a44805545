//! Style definition - the central output record of a generation run.

use crate::models::Category;
use serde::{Deserialize, Serialize};

/// Breakpoint axis of a generated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Responsive generation disabled; single unprefixed set
    #[default]
    None,
    /// Desktop variant of a responsive pair
    Desktop,
    /// Mobile variant of a responsive pair
    Mobile,
}

impl Breakpoint {
    /// Canonical-name prefix segment, or `None` for the unprefixed set.
    #[must_use]
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Breakpoint::None => None,
            Breakpoint::Desktop => Some("Desktop"),
            Breakpoint::Mobile => Some("Mobile"),
        }
    }
}

/// A size paired with the name it was assigned within its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSize {
    /// Size name from the category pool (e.g. "Base", "H1", "D2")
    pub name: String,
    /// Font size, px
    pub size: f64,
}

/// Cross-notation projections of a canonical style name.
///
/// Purely derived from the name and the numeric typographic values;
/// carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMappings {
    /// The slash-delimited canonical name itself
    pub canonical: String,
    /// Dot-path for JS token access, e.g. `typography.body.base`
    pub js_path: String,
    /// CSS custom property name, e.g. `--body-base`
    pub css_var: String,
    /// Approximate Tailwind class triple, e.g. `text-base leading-normal font-normal`
    pub tailwind: String,
}

/// One fully specified text style.
///
/// Created once per (category x breakpoint x size x weight) combination
/// and never mutated afterwards; formatters and hosts consume it
/// read-only. `name` is unique within a generated set. `line_height` is
/// not guaranteed to be >= `font_size`: tight presets on small rounded
/// sizes may invert the two, and that is preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Unique slash-delimited canonical name, e.g. `Mobile/Title/H1/Bold`
    pub name: String,
    /// Typographic role
    pub category: Category,
    /// Breakpoint axis this style belongs to
    pub breakpoint: Breakpoint,
    /// Size name within the category pool
    pub size_name: String,
    /// Font family, verbatim from configuration
    pub font_family: String,
    /// Weight/style name, verbatim from configuration
    pub font_style: String,
    /// Font size, px
    pub font_size: f64,
    /// Line height, px
    pub line_height: f64,
    /// Letter spacing, percent of font size
    pub letter_spacing: f64,
    /// Human-readable summary for host style descriptions
    pub description: String,
    /// Derived cross-notation names
    pub mappings: StyleMappings,
}
