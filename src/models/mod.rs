//! Data models for typographic categories, scales, and style definitions.
//!
//! This module contains all the core data structures used throughout the
//! generator. Models are value objects, independent of the CLI and the
//! export formatters, and are constructed fresh on every generation run.

pub mod category;
pub mod responsive;
pub mod scale;
pub mod style;

// Re-export all model types
pub use category::Category;
pub use responsive::{MobileConfig, MobileMaxSizes, ResponsiveConfig};
pub use scale::{CategoryScaleConfig, LineHeightPreset, ScaleConfig, ScaleMethod};
pub use style::{Breakpoint, NamedSize, StyleDefinition, StyleMappings};
