//! Seeded pseudo-random values
//!
//! Every decorative value on a card is derived from the moment id, so a page
//! renders identically on every request without storing any layout.

/// Returns a reproducible value in `[0, 1)` for a seed string and draw index.
///
/// The seed's UTF-16 code units are folded into a 32-bit accumulator
/// (`acc * 31 + unit`, wrapping) that starts at `index`. Different indices
/// decorrelate successive draws from the same seed.
pub fn seeded_random(seed: &str, index: u32) -> f64 {
    let hash = seed.encode_utf16().fold(index as i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    });

    f64::from((hash % 1000).abs()) / 1000.0
}
