//! Snap offset calculation (pure).

use crate::model::LayoutMetrics;
use tracing::debug;

/// Offset that centers slide `index` in the viewport.
///
/// `-index * (slide_width + gap) + (viewport_width - slide_width) / 2`
///
/// Degraded geometry (zero, negative or non-finite widths) yields `0.0`
/// instead of a garbage offset. Callers must not cache the result: widths can
/// change between calls.
pub fn snapped_offset(index: usize, metrics: &LayoutMetrics) -> f32 {
    if metrics.is_degraded() {
        debug!(?metrics, index, "Degraded layout metrics, falling back to zero offset");
        return 0.0;
    }

    let centering = (metrics.viewport_width - metrics.slide_width) / 2.0;
    -(index as f32) * metrics.slide_pitch() + centering
}
