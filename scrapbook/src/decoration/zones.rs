//! Sticker anchor zones
//!
//! Positions are percentages of the card box. Most lie outside `[0, 100]`
//! so stickers overhang the card edge.

use serde::Serialize;

/// A named anchor position around the card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

const fn zone(name: &'static str, x: f64, y: f64) -> Zone {
    Zone { name, x, y }
}

/// The fixed zone table. Order matters: zones are picked by index.
pub const ZONES: [Zone; 14] = [
    // Top edge
    zone("top-left", -15.0, -20.0),
    zone("top-right", 85.0, -18.0),
    zone("top-center", 40.0, -15.0),
    // Bottom edge
    zone("bottom-left", -10.0, 80.0),
    zone("bottom-right", 90.0, 85.0),
    zone("bottom-center", 45.0, 90.0),
    // Side edges
    zone("left-top", -20.0, 25.0),
    zone("left-bottom", -15.0, 55.0),
    zone("right-top", 100.0, 20.0),
    zone("right-bottom", 105.0, 50.0),
    // Corners
    zone("corner-top-left", -25.0, -25.0),
    zone("corner-top-right", 105.0, -30.0),
    zone("corner-bottom-left", -30.0, 105.0),
    zone("corner-bottom-right", 110.0, 100.0),
];
