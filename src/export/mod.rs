//! Export formatters for the generated style set.
//!
//! Each formatter is a total, side-effect-free function of the style
//! sequence, the configuration, and an [`ExportContext`]. The context
//! carries the generation timestamp as a single injected value so tests
//! can pin it and every export stays byte-reproducible.

pub mod css;
pub mod json;
pub mod tailwind;
pub mod tree;
pub mod yaml;

pub use css::generate_css;
pub use json::generate_json;
pub use tailwind::generate_tailwind_config;
pub use tree::TokenTree;
pub use yaml::generate_yaml;

use chrono::{DateTime, Local, TimeZone};

/// Ambient inputs shared by all formatters.
///
/// Today this is only the generation timestamp. It is injected rather
/// than read ad hoc inside the formatters, which keeps them
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct ExportContext {
    /// Moment the export was requested
    pub generated_at: DateTime<Local>,
}

impl ExportContext {
    /// Context stamped with the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            generated_at: Local::now(),
        }
    }

    /// Context pinned to a fixed instant, for reproducible output.
    #[must_use]
    pub fn pinned() -> Self {
        Self {
            generated_at: Local
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }

    /// Timestamp string embedded in export headers.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Formats a pixel value without a trailing `.0` for whole numbers.
#[must_use]
pub(crate) fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}
