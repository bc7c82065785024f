//! Per-card cosmetic jitter

use super::random::seeded_random;
use crate::config::{
    CORNER_DOT_THRESHOLD, FLOAT_DELAY_SPAN, PHOTO_ROTATION_SPAN, TAPE_STRIP_THRESHOLD,
};
use serde::Serialize;

const PHOTO_ROTATION_INDEX: u32 = 500;
const FLOAT_DELAY_INDEX: u32 = 600;
const CORNER_DOT_INDEX: u32 = 777;
const TAPE_STRIP_INDEX: u32 = 888;

/// Small per-card variations independent of the stickers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardJitter {
    /// Degrees, `[-5, 5)`
    pub photo_rotation: f64,
    /// Seconds, `[0, 2)`
    pub float_delay: f64,
    pub corner_dot: bool,
    pub tape_strip: bool,
}

impl CardJitter {
    pub fn for_moment(moment_id: &str) -> Self {
        Self {
            photo_rotation: -(PHOTO_ROTATION_SPAN / 2.0)
                + seeded_random(moment_id, PHOTO_ROTATION_INDEX) * PHOTO_ROTATION_SPAN,
            float_delay: seeded_random(moment_id, FLOAT_DELAY_INDEX) * FLOAT_DELAY_SPAN,
            corner_dot: seeded_random(moment_id, CORNER_DOT_INDEX) > CORNER_DOT_THRESHOLD,
            tape_strip: seeded_random(moment_id, TAPE_STRIP_INDEX) > TAPE_STRIP_THRESHOLD,
        }
    }
}
