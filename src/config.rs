//! Fixed timings and thresholds for the landing experience.

/// Total time the loading splash stays on screen.
pub const LOAD_DURATION_MS: u32 = 4_500;

/// Buffer between revealing the main content and binding page interactions.
pub const INTERACTIONS_DELAY_MS: u32 = 300;

/// Fraction of the viewport height an element's top must cross before it
/// counts as "in view" for reveal and typewriter triggers.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

/// Scroll offset after which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 80.0;

/// One matrix column per this many pixels of viewport width.
pub const MATRIX_COLUMN_STRIDE_PX: u32 = 30;

/// One binary stream per this many pixels of viewport width.
pub const BINARY_STREAM_STRIDE_PX: u32 = 20;

/// Pause between revealed typewriter characters.
pub const TYPEWRITER_INTERVAL_MS: u32 = 80;
