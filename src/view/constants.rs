//! Layout dimension and timing constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the indicator dot row in lines.
pub const INDICATOR_ROW_HEIGHT: u16 = 1;

/// Height of the previous/next control row in lines.
pub const CONTROL_ROW_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Largest share of the viewport a single card may take.
///
/// Keeps the neighbouring cards peeking in on narrow terminals.
pub const MAX_SLIDE_VIEWPORT_FRACTION: f32 = 0.8;

/// Poll interval while a drag frame task is pending (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval when nothing is animating or pending.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Label of the "previous" control.
pub const PREVIOUS_LABEL: &str = "‹ prev";

/// Label of the "next" control.
pub const NEXT_LABEL: &str = "next ›";
