//! Scale configuration - how a category's font sizes are generated.

use serde::{Deserialize, Serialize};

/// Algorithm used to generate a category's size sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleMethod {
    /// Geometric progression: each size is the previous times `ratio`
    #[default]
    Modular,
    /// Arithmetic progression: `steps` evenly spaced sizes across the range
    Linear,
    /// Fixed Tailwind-style buckets filtered to the configured range
    #[serde(alias = "tailwind")]
    FixedBucket,
}

/// Parameters controlling size generation for one category.
///
/// # Invariants (enforced by `Config::validate`, not here)
///
/// - `min < max`
/// - `rounding` is 1, 2, or 4
/// - `ratio > 1` when method is modular
/// - `steps >= 2` when method is linear
///
/// The generation layer itself performs no validation; passing a config
/// that violates these invariants yields an unspecified sequence rather
/// than an error. Validate before generating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Generation algorithm
    #[serde(default)]
    pub method: ScaleMethod,
    /// Smallest size in the range, px
    pub min: f64,
    /// Largest size in the range, px
    pub max: f64,
    /// Growth ratio for the modular method (ignored otherwise)
    #[serde(default = "default_ratio")]
    pub ratio: f64,
    /// Sample count for the linear method (ignored otherwise)
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Sizes are rounded to the nearest multiple of this (1, 2, or 4)
    #[serde(default = "default_rounding")]
    pub rounding: f64,
}

fn default_ratio() -> f64 {
    1.25
}

fn default_steps() -> usize {
    5
}

fn default_rounding() -> f64 {
    1.0
}

/// Line-height preset applied to every style in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineHeightPreset {
    /// 1.1x - large display text
    Tighter,
    /// 1.2x - headings
    Tight,
    /// 1.5x - body text
    #[default]
    Normal,
    /// 1.65x - long-form reading
    Relaxed,
}

impl LineHeightPreset {
    /// Line-height to font-size ratio for this preset.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            LineHeightPreset::Tighter => 1.1,
            LineHeightPreset::Tight => 1.2,
            LineHeightPreset::Normal => 1.5,
            LineHeightPreset::Relaxed => 1.65,
        }
    }
}

/// Full per-category configuration: the scale plus font properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScaleConfig {
    /// Whether styles are generated for this category at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Size generation parameters
    pub scale: ScaleConfig,
    /// Line-height preset applied to every size in the category
    #[serde(default)]
    pub line_height: LineHeightPreset,
    /// Font family name, passed through to style definitions verbatim
    pub font_family: String,
    /// Weight names (e.g. "Regular", "Bold"). Must be non-empty when
    /// enabled; with a single weight the weight segment is omitted from
    /// every canonical name in the category.
    pub weights: Vec<String>,
}

fn default_enabled() -> bool {
    true
}
