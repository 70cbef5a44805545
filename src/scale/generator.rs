//! Font size sequence generation from a scale configuration.

use crate::models::{ScaleConfig, ScaleMethod};

/// The fixed-bucket size set, matching the Tailwind `text-*` ladder.
pub const FIXED_BUCKETS: [f64; 13] = [
    12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 30.0, 36.0, 48.0, 60.0, 72.0, 96.0, 128.0,
];

/// Rounds a value to the nearest multiple of `rounding`.
///
/// Halfway cases round away from zero, matching `f64::round`.
#[must_use]
pub fn round_to(value: f64, rounding: f64) -> f64 {
    (value / rounding).round() * rounding
}

/// Generates the ordered size sequence for a scale configuration.
///
/// The result is strictly ascending; consecutive duplicates produced by
/// rounding are dropped. Behaviour per method:
///
/// - **Modular**: geometric progression from `min` by `ratio`, each step
///   rounded to `rounding`. The unrounded running value advances, so
///   rounding error does not compound. The sequence always ends at the
///   rounding of `max`, appended explicitly if the progression skipped it.
/// - **Linear**: exactly `steps` samples evenly spaced across
///   `[min, max]`, rounded; fewer distinct values may survive dedup.
/// - **Fixed-bucket**: the subset of [`FIXED_BUCKETS`] inside
///   `[min, max]`; `ratio`, `steps`, and `rounding` are ignored.
///
/// No input validation happens here. Callers are responsible for
/// upholding the invariants documented on [`ScaleConfig`]; a degenerate
/// config yields an unspecified (but still deterministic) sequence.
#[must_use]
pub fn generate_scale(config: &ScaleConfig) -> Vec<f64> {
    match config.method {
        ScaleMethod::Modular => generate_modular(config),
        ScaleMethod::Linear => generate_linear(config),
        ScaleMethod::FixedBucket => FIXED_BUCKETS
            .iter()
            .copied()
            .filter(|&size| size >= config.min && size <= config.max)
            .collect(),
    }
}

fn generate_modular(config: &ScaleConfig) -> Vec<f64> {
    let mut sizes = Vec::new();
    let mut current = config.min;

    while current <= config.max {
        let rounded = round_to(current, config.rounding);
        if sizes.last() != Some(&rounded) {
            sizes.push(rounded);
        }
        current *= config.ratio;
    }

    // The progression may overshoot max without ever emitting it; the
    // sequence must still end at the rounding of max.
    let rounded_max = round_to(config.max, config.rounding);
    if sizes.last().is_none_or(|&last| rounded_max > last) {
        sizes.push(rounded_max);
    }

    sizes
}

fn generate_linear(config: &ScaleConfig) -> Vec<f64> {
    let step_count = config.steps.max(1);
    let step_size = (config.max - config.min) / (step_count.saturating_sub(1).max(1) as f64);

    let mut sizes = Vec::with_capacity(step_count);
    for i in 0..step_count {
        let rounded = round_to(config.min + i as f64 * step_size, config.rounding);
        if sizes.last() != Some(&rounded) {
            sizes.push(rounded);
        }
    }

    sizes
}
