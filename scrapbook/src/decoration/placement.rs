//! Sticker placement
//!
//! Each sticker slot tries up to [`MAX_PLACEMENT_ATTEMPTS`] seeded candidates
//! and keeps the first one that does not overlap a sticker already placed on
//! the same card. A slot that never finds room is dropped.

use super::random::seeded_random;
use super::zones::Zone;
use crate::config::{
    DEFAULT_STICKER_COUNT, MAX_PLACEMENT_ATTEMPTS, OVERLAP_BUFFER, STICKER_MIN_ROTATION,
    STICKER_MIN_SIZE, STICKER_ROTATION_SPAN, STICKER_SIZE_SPAN, ZONE_JITTER_SPAN,
};
use serde::{Deserialize, Serialize};

// Draw index offsets, one per decorated property
const ZONE_OFFSET: u32 = 50;
const X_OFFSET: u32 = 100;
const Y_OFFSET: u32 = 200;
const SIZE_OFFSET: u32 = 300;
const ROTATION_OFFSET: u32 = 400;
const ATTEMPT_STRIDE: u32 = 10;

/// Ordered set of sticker image references to choose from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerCatalog(Vec<String>);

impl StickerCatalog {
    pub fn new(images: Vec<String>) -> Self {
        Self(images)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl Default for StickerCatalog {
    fn default() -> Self {
        Self(
            (1..=DEFAULT_STICKER_COUNT)
                .map(|n| format!("/stickers/{}.png", n))
                .collect(),
        )
    }
}

/// A decorative image placed relative to a moment card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sticker {
    pub id: String,
    pub src: String,
    /// Left offset in percent of the card width (may be outside 0..100)
    pub x: f64,
    /// Top offset in percent of the card height (may be outside 0..100)
    pub y: f64,
    /// Edge length in pixels
    pub size: f64,
    /// Degrees
    pub rotation: f64,
    pub zone: &'static str,
}

/// Whether two stickers sit too close together.
///
/// Sizes are pixels but positions are percent; the `/ 200 * 100` scale is a
/// fixed approximation that ignores the card's aspect ratio.
pub fn overlaps(a: &Sticker, b: &Sticker) -> bool {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let min_distance = ((a.size + b.size) / 200.0) * 100.0 + OVERLAP_BUFFER;

    (dx * dx + dy * dy).sqrt() < min_distance
}

/// Pick a seeded index into a table of `len` entries
fn pick(seed: &str, index: u32, len: usize) -> usize {
    // seeded_random < 1, so the floor is always < len
    (seeded_random(seed, index) * len as f64).floor() as usize
}

/// Build the candidate for one slot on one attempt
fn candidate(
    moment_id: &str,
    slot: u32,
    attempt: u32,
    catalog: &StickerCatalog,
    zones: &[Zone],
) -> Option<Sticker> {
    let base = slot + attempt * ATTEMPT_STRIDE;

    let src = catalog.get(pick(moment_id, base, catalog.len()))?;
    let zone = zones.get(pick(moment_id, base + ZONE_OFFSET, zones.len()))?;

    let x = zone.x + (seeded_random(moment_id, base + X_OFFSET) - 0.5) * ZONE_JITTER_SPAN;
    let y = zone.y + (seeded_random(moment_id, base + Y_OFFSET) - 0.5) * ZONE_JITTER_SPAN;
    let size = STICKER_MIN_SIZE + seeded_random(moment_id, base + SIZE_OFFSET) * STICKER_SIZE_SPAN;
    let rotation =
        STICKER_MIN_ROTATION + seeded_random(moment_id, base + ROTATION_OFFSET) * STICKER_ROTATION_SPAN;

    Some(Sticker {
        id: format!("{}-sticker-{}", moment_id, slot),
        src: src.to_string(),
        x,
        y,
        size,
        rotation,
        zone: zone.name,
    })
}

/// Search for a non-overlapping position for one slot
pub fn place_sticker(
    moment_id: &str,
    slot: u32,
    placed: &[Sticker],
    catalog: &StickerCatalog,
    zones: &[Zone],
) -> Option<Sticker> {
    (0..MAX_PLACEMENT_ATTEMPTS)
        .filter_map(|attempt| candidate(moment_id, slot, attempt, catalog, zones))
        .find(|sticker| placed.iter().all(|other| !overlaps(sticker, other)))
}

/// Generate up to `count` stickers for a moment.
///
/// Identical inputs always produce the identical set.
pub fn generate_stickers(
    moment_id: &str,
    count: u32,
    catalog: &StickerCatalog,
    zones: &[Zone],
) -> Vec<Sticker> {
    let mut stickers = Vec::with_capacity(count as usize);

    for slot in 0..count {
        match place_sticker(moment_id, slot, &stickers, catalog, zones) {
            Some(sticker) => stickers.push(sticker),
            None => tracing::debug!(
                "No room for sticker slot {} on moment {} after {} attempts",
                slot,
                moment_id,
                MAX_PLACEMENT_ATTEMPTS
            ),
        }
    }

    stickers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::zones::ZONES;

    fn sticker_at(x: f64, y: f64, size: f64) -> Sticker {
        Sticker {
            id: "s".to_string(),
            src: "/stickers/1.png".to_string(),
            x,
            y,
            size,
            rotation: 0.0,
            zone: "top-left",
        }
    }

    fn sample_ids() -> Vec<String> {
        let mut ids: Vec<String> = (0..200).map(|n| format!("moment-{}", n)).collect();
        ids.push("m1".to_string());
        ids.push("m2".to_string());
        ids.push("3f2b8c1e-8d4a-4c55-9a0e-6f1d2b7c9e10".to_string());
        ids.push(String::new());
        ids
    }

    #[test]
    fn test_default_catalog() {
        let catalog = StickerCatalog::default();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.get(0), Some("/stickers/1.png"));
        assert_eq!(catalog.get(12), Some("/stickers/13.png"));
        assert_eq!(catalog.get(13), None);
    }

    #[test]
    fn test_overlap_formula() {
        // 100px + 100px -> 100% apart + 20 buffer
        let a = sticker_at(0.0, 0.0, 100.0);
        assert!(overlaps(&a, &sticker_at(119.0, 0.0, 100.0)));
        assert!(!overlaps(&a, &sticker_at(120.0, 0.0, 100.0)));
        assert!(overlaps(&a, &sticker_at(60.0, 60.0, 100.0)));
        assert!(!overlaps(&a, &sticker_at(90.0, 90.0, 100.0)));
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = sticker_at(-15.0, -20.0, 150.0);
        let b = sticker_at(85.0, 30.0, 120.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = StickerCatalog::default();
        for id in sample_ids() {
            let first = generate_stickers(&id, 5, &catalog, &ZONES);
            let second = generate_stickers(&id, 5, &catalog, &ZONES);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_no_two_stickers_overlap() {
        let catalog = StickerCatalog::default();
        for id in sample_ids() {
            let stickers = generate_stickers(&id, 5, &catalog, &ZONES);
            for (i, a) in stickers.iter().enumerate() {
                for b in &stickers[i + 1..] {
                    assert!(!overlaps(a, b), "{}: {:?} overlaps {:?}", id, a, b);
                }
            }
        }
    }

    #[test]
    fn test_count_never_exceeds_target() {
        let catalog = StickerCatalog::default();
        for id in sample_ids() {
            for count in 0..=5 {
                let stickers = generate_stickers(&id, count, &catalog, &ZONES);
                assert!(stickers.len() <= count as usize);
            }
        }
    }

    #[test]
    fn test_first_slot_always_placed() {
        let catalog = StickerCatalog::default();
        for id in sample_ids() {
            let stickers = generate_stickers(&id, 3, &catalog, &ZONES);
            assert!(!stickers.is_empty());
            assert_eq!(stickers[0].id, format!("{}-sticker-0", id));
        }
    }

    #[test]
    fn test_sticker_values_in_range() {
        let catalog = StickerCatalog::default();
        for id in sample_ids() {
            for sticker in generate_stickers(&id, 5, &catalog, &ZONES) {
                assert!((100.0..180.0).contains(&sticker.size));
                assert!((-45.0..45.0).contains(&sticker.rotation));

                let zone = ZONES.iter().find(|z| z.name == sticker.zone).unwrap();
                assert!((sticker.x - zone.x).abs() <= 7.5);
                assert!((sticker.y - zone.y).abs() <= 7.5);
                assert!(sticker.src.starts_with("/stickers/"));
            }
        }
    }

    #[test]
    fn test_crowded_slots_are_dropped() {
        // With a single zone every candidate lands within ~21% of the anchor,
        // far closer than the 120% minimum, so only the first slot fits
        let catalog = StickerCatalog::default();
        let single = [ZONES[0]];

        for id in sample_ids() {
            let stickers = generate_stickers(&id, 5, &catalog, &single);
            assert_eq!(stickers.len(), 1);
        }
    }

    #[test]
    fn test_slot_dropped_after_attempt_cap() {
        // Thirteen copies of one anchor plus a far one: slot 1 of "moment-602"
        // only lands in the far zone on attempt 50, one past the cap
        let catalog = StickerCatalog::default();
        let mut zones = vec![ZONES[0]; 13];
        zones.push(Zone {
            name: "far-away",
            x: 1000.0,
            y: 0.0,
        });

        let placed = generate_stickers("moment-602", 1, &catalog, &zones);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].zone, "top-left");

        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let sticker = candidate("moment-602", 1, attempt, &catalog, &zones).unwrap();
            assert!(overlaps(&sticker, &placed[0]));
        }

        let late = candidate("moment-602", 1, MAX_PLACEMENT_ATTEMPTS, &catalog, &zones).unwrap();
        assert_eq!(late.zone, "far-away");
        assert!(!overlaps(&late, &placed[0]));

        assert_eq!(place_sticker("moment-602", 1, &placed, &catalog, &zones), None);
        assert_eq!(generate_stickers("moment-602", 2, &catalog, &zones), placed);
    }

    #[test]
    fn test_slot_ids_follow_slot_index() {
        let catalog = StickerCatalog::default();
        let stickers = generate_stickers("m1", 5, &catalog, &ZONES);
        let mut last = None;
        for sticker in &stickers {
            let slot: u32 = sticker.id.rsplit('-').next().unwrap().parse().unwrap();
            assert!(last.map_or(true, |prev| slot > prev));
            last = Some(slot);
        }
    }

    #[test]
    fn test_empty_catalog_places_nothing() {
        let catalog = StickerCatalog::new(Vec::new());
        assert!(generate_stickers("m1", 4, &catalog, &ZONES).is_empty());
    }

    #[test]
    fn test_place_sticker_respects_existing() {
        let catalog = StickerCatalog::default();
        let placed = generate_stickers("moment-7", 1, &catalog, &ZONES);

        if let Some(next) = place_sticker("moment-7", 1, &placed, &catalog, &ZONES) {
            assert!(!overlaps(&next, &placed[0]));
        }
    }
}
