//! Line-height and letter-spacing rules.

use crate::models::{Category, LineHeightPreset};
use crate::scale::generator::round_to;

/// Line height in px: the preset ratio applied to the font size, rounded
/// to the same grid as the sizes themselves.
#[must_use]
pub fn calculate_line_height(font_size: f64, preset: LineHeightPreset, rounding: f64) -> f64 {
    round_to(font_size * preset.ratio(), rounding)
}

/// Letter spacing as a percentage of the font size.
///
/// A coarse tiered heuristic, not a continuous function: large display
/// and title sizes get progressively negative tracking, body and code
/// always get zero. The thresholds (60px display, 36px title) are part
/// of the output contract and must not drift.
#[must_use]
pub fn calculate_letter_spacing(font_size: f64, category: Category) -> f64 {
    match category {
        Category::Display => {
            if font_size > 60.0 {
                -2.0
            } else {
                -1.0
            }
        }
        Category::Title => {
            if font_size > 36.0 {
                -1.0
            } else {
                0.0
            }
        }
        Category::Body | Category::Code => 0.0,
    }
}
