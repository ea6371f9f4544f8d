//! Tuning constants for the carousel engine.
//!
//! All of them can be overridden through [`EngineConfig`](super::EngineConfig).

use std::time::Duration;

/// Minimum drag distance, in units, that advances or retreats one slide.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Gap between adjacent slides, in units.
pub const DEFAULT_SLIDE_GAP: f32 = 20.0;

/// Quiet period a burst of resize signals must end with before layout is
/// recomputed.
pub const DEFAULT_RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(250);
