//! Application configuration constants
//!
//! Central location for the decoration engine's tuning values and the
//! server's default settings.

// ===== Sticker Placement =====

/// Placement attempts per sticker slot before the slot is dropped
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

/// Extra distance (in card percent) kept between two stickers
pub const OVERLAP_BUFFER: f64 = 20.0;

/// Full width of the random offset applied to a zone anchor (±7.5 per axis)
pub const ZONE_JITTER_SPAN: f64 = 15.0;

/// Smallest sticker edge in pixels
pub const STICKER_MIN_SIZE: f64 = 100.0;

/// Sticker sizes fall in `[STICKER_MIN_SIZE, STICKER_MIN_SIZE + STICKER_SIZE_SPAN)`
pub const STICKER_SIZE_SPAN: f64 = 80.0;

/// Most negative sticker rotation in degrees
pub const STICKER_MIN_ROTATION: f64 = -45.0;

/// Sticker rotations fall in `[-45, 45)`
pub const STICKER_ROTATION_SPAN: f64 = 90.0;

/// Number of images in the bundled sticker set (`/stickers/1.png` ..)
pub const DEFAULT_STICKER_COUNT: usize = 13;

// ===== Card Cosmetics =====

/// Card rotation falls in `[-3, 3)` degrees
pub const CARD_ROTATION_SPAN: f64 = 6.0;

/// Photo rotation falls in `[-5, 5)` degrees
pub const PHOTO_ROTATION_SPAN: f64 = 10.0;

/// Float animation delay falls in `[0, 2)` seconds
pub const FLOAT_DELAY_SPAN: f64 = 2.0;

/// The corner dot shows when its draw exceeds this value
pub const CORNER_DOT_THRESHOLD: f64 = 0.6;

/// The tape strip shows when its draw exceeds this value
pub const TAPE_STRIP_THRESHOLD: f64 = 0.5;

// ===== Server Defaults =====

pub const DEFAULT_CONFIG_PATH: &str = "scrapbook.json";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_PATH: &str = "scrapbook.db";
pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const DEFAULT_SITE_TITLE: &str = "Rosette Demo";
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "Rosette is a platform for creating and sharing your moments.";

/// File extensions rendered with a `<video>` element instead of `<img>`
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "ogg"];

// ===== Database =====

/// Connections in the page-serving pool (reads run concurrently per page)
pub const DB_POOL_SIZE: u32 = 5;

/// How long a connection waits on a locked database before failing
pub const DB_BUSY_TIMEOUT_SECS: u64 = 5;
