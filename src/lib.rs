//! Typography scale and design token generator.
//!
//! This library turns a declarative configuration (per-category scale
//! parameters, responsive rules) into a deterministic set of fully
//! specified text style definitions, and serializes that set as JSON
//! tokens, flat text, CSS, or a Tailwind config.
//!
//! The pipeline is pure computation: [`styles::generate_style_definitions`]
//! is the single entry point, and the `export` formatters are total
//! functions of its output.

// Module declarations
pub mod config;
pub mod export;
pub mod models;
pub mod naming;
pub mod scale;
pub mod styles;

pub use config::Config;
pub use styles::generate_style_definitions;
