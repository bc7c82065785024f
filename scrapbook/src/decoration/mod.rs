//! Decoration engine
//!
//! Pure, deterministic decoration of moment cards:
//! - `random`: seeded pseudo-random draws keyed by moment id
//! - `zones`: the fixed anchor table stickers are placed around
//! - `placement`: overlap-free sticker placement
//! - `style`: category to style profile mapping
//! - `jitter`: per-card cosmetic values
//!
//! Nothing here performs I/O or keeps state between calls, so moments can be
//! decorated in any order or in parallel.

pub mod jitter;
pub mod placement;
pub mod random;
pub mod style;
pub mod zones;

pub use jitter::CardJitter;
pub use placement::{generate_stickers, overlaps, Sticker, StickerCatalog};
pub use random::seeded_random;
pub use style::{select_style, Category, StyleProfile};
pub use zones::{Zone, ZONES};

use serde::Serialize;

/// Everything needed to draw one moment card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentDecoration {
    pub style: StyleProfile,
    pub stickers: Vec<Sticker>,
    pub jitter: CardJitter,
}

/// Decorates moment cards from a sticker catalog and zone table
#[derive(Debug, Clone)]
pub struct DecorationEngine {
    catalog: StickerCatalog,
    zones: Vec<Zone>,
}

impl DecorationEngine {
    pub fn new(catalog: StickerCatalog) -> Self {
        Self::with_zones(catalog, ZONES.to_vec())
    }

    pub fn with_zones(catalog: StickerCatalog, zones: Vec<Zone>) -> Self {
        Self { catalog, zones }
    }

    /// Up to `count` non-overlapping stickers for a moment
    pub fn stickers(&self, moment_id: &str, count: u32) -> Vec<Sticker> {
        generate_stickers(moment_id, count, &self.catalog, &self.zones)
    }

    /// Style, stickers and jitter for a moment
    pub fn decorate(&self, moment_id: &str, category: Option<&str>) -> MomentDecoration {
        let style = select_style(category, moment_id);
        let stickers = self.stickers(moment_id, style.sticker_count);

        MomentDecoration {
            style,
            stickers,
            jitter: CardJitter::for_moment(moment_id),
        }
    }
}

impl Default for DecorationEngine {
    fn default() -> Self {
        Self::new(StickerCatalog::default())
    }
}
