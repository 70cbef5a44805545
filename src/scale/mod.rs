//! Scale generation: size sequences, size naming, and typographic metrics.
//!
//! Everything in this module is pure and deterministic. None of the
//! functions validate their inputs; `Config::validate` is the single
//! place where malformed configurations are rejected, before generation
//! runs.

pub mod generator;
pub mod metrics;
pub mod namer;

pub use generator::{generate_scale, round_to};
pub use metrics::{calculate_letter_spacing, calculate_line_height};
pub use namer::{apply_mobile_scale, map_sizes_to_names};
