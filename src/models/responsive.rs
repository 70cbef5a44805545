//! Responsive configuration - the mobile breakpoint derivation rules.

use crate::models::Category;
use serde::{Deserialize, Serialize};

/// Mobile derivation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileConfig {
    /// Whether the mobile size set is derived at all
    #[serde(default)]
    pub enabled: bool,
    /// Factor applied to every desktop size, in (0, 1]
    #[serde(default = "default_multiplier")]
    pub scale_multiplier: f64,
}

fn default_multiplier() -> f64 {
    0.875
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            scale_multiplier: default_multiplier(),
        }
    }
}

/// Per-category upper bounds for derived mobile sizes, px.
///
/// A cap of `None` leaves the multiplied size unclamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MobileMaxSizes {
    /// Cap for display styles
    pub display: Option<f64>,
    /// Cap for title styles
    pub title: Option<f64>,
    /// Cap for body styles
    pub body: Option<f64>,
    /// Cap for code styles
    pub code: Option<f64>,
}

impl MobileMaxSizes {
    /// Cap for the given category, if configured.
    #[must_use]
    pub fn for_category(&self, category: Category) -> Option<f64> {
        match category {
            Category::Display => self.display,
            Category::Title => self.title,
            Category::Body => self.body,
            Category::Code => self.code,
        }
    }
}

/// Responsive axis configuration.
///
/// When both `enabled` and `mobile.enabled` are set, every category gets
/// two independently named size sets (Desktop and Mobile); otherwise a
/// single unprefixed set is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResponsiveConfig {
    /// Master switch for the breakpoint axis
    #[serde(default)]
    pub enabled: bool,
    /// Mobile derivation parameters
    #[serde(default)]
    pub mobile: MobileConfig,
    /// Per-category mobile size caps
    #[serde(default)]
    pub mobile_max_sizes: MobileMaxSizes,
}

impl ResponsiveConfig {
    /// True when a mobile size set should be derived.
    #[must_use]
    pub fn mobile_active(&self) -> bool {
        self.enabled && self.mobile.enabled
    }
}
