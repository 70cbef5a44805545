//! Assignment of pool names to generated sizes, plus mobile derivation.

use crate::models::{Category, NamedSize};
use crate::scale::generator::round_to;

const BODY_POOL: [&str; 6] = ["Xs", "Sm", "Base", "Lg", "Xl", "2xl"];
const CODE_POOL: [&str; 4] = ["Xs", "Sm", "Base", "Lg"];
const TITLE_POOL: [&str; 6] = ["H6", "H5", "H4", "H3", "H2", "H1"];
const DISPLAY_POOL: [&str; 3] = ["D3", "D2", "D1"];

/// Pairs an ascending size sequence with names from the category pool.
///
/// The result always has exactly one entry per input size:
///
/// - **Body/code** use `[Xs, Sm, Base, Lg, ...]` pools. When the pool is
///   larger than the size count, a contiguous window centered on `Base`
///   is selected (clamped to the pool bounds), so a single-size scale is
///   named `Base`, not `Xs`. When more names are needed, `2xl, 3xl, ...`
///   are synthesized onto the large end, continuing from whatever `Nxl`
///   suffix the pool already ends with.
/// - **Title/display** use `[H6..H1]` / `[D3..D1]` pools ordered smallest
///   size first. The trailing `count` entries pair with the ascending
///   sizes, so the largest size always receives H1/D1. Oversized counts
///   extend the small end with H7, H8, ... / D4, D5, ...
///
/// Sizes must be strictly ascending; that is the caller's contract.
#[must_use]
pub fn map_sizes_to_names(sizes: &[f64], category: Category) -> Vec<NamedSize> {
    let names = match category {
        Category::Body => windowed_names(&BODY_POOL, sizes.len()),
        Category::Code => windowed_names(&CODE_POOL, sizes.len()),
        Category::Title => trailing_names(&TITLE_POOL, 'H', sizes.len()),
        Category::Display => trailing_names(&DISPLAY_POOL, 'D', sizes.len()),
    };

    names
        .into_iter()
        .zip(sizes.iter().copied())
        .map(|(name, size)| NamedSize { name, size })
        .collect()
}

/// Body/code naming: slice a window of `count` names centered on `Base`.
fn windowed_names(pool: &[&str], count: usize) -> Vec<String> {
    let mut pool: Vec<String> = pool.iter().map(|&s| s.to_string()).collect();

    // Synthesize 2xl, 3xl, ... continuing past any existing Nxl tail.
    let mut next_xl = pool
        .last()
        .and_then(|name| name.strip_suffix("xl"))
        .and_then(|n| n.parse::<u32>().ok())
        .map_or(2, |n| n + 1);
    while pool.len() < count {
        pool.push(format!("{next_xl}xl"));
        next_xl += 1;
    }

    let base_idx = pool
        .iter()
        .position(|name| name == "Base")
        .unwrap_or(pool.len() / 2);
    // The extension loop above guarantees pool.len() >= count.
    let start = base_idx
        .saturating_sub(count.saturating_sub(1) / 2)
        .min(pool.len() - count);

    pool[start..start + count].to_vec()
}

/// Title/display naming: trailing `count` entries of the ascending-size
/// pool, so the largest size pairs with the lowest-numbered name.
fn trailing_names(pool: &[&str], letter: char, count: usize) -> Vec<String> {
    let mut names: Vec<String> = pool.iter().map(|&s| s.to_string()).collect();

    // Extend the small end upwards: H7, H8, ... keep H1 the largest.
    let mut next = pool.len() as u32 + 1;
    while names.len() < count {
        names.insert(0, format!("{letter}{next}"));
        next += 1;
    }

    names[names.len() - count..].to_vec()
}

/// Derives the mobile size sequence from a desktop one.
///
/// Each size is multiplied by `multiplier`, rounded to `rounding`, and
/// then clamped down to `max_cap` when one is configured. Clamping
/// happens after rounding so a cap that is not a multiple of the
/// rounding step still holds exactly; for grid-aligned caps the two
/// orderings are equivalent. Consecutive duplicates created by rounding
/// or capping are dropped so the result stays strictly ascending and
/// can be re-named independently.
#[must_use]
pub fn apply_mobile_scale(
    sizes: &[f64],
    multiplier: f64,
    rounding: f64,
    max_cap: Option<f64>,
) -> Vec<f64> {
    let mut result = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let mut rounded = round_to(size * multiplier, rounding);
        if let Some(cap) = max_cap {
            rounded = rounded.min(cap);
        }
        if result.last() != Some(&rounded) {
            result.push(rounded);
        }
    }

    result
}
