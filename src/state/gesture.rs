//! Drag gesture tracking.
//!
//! Pure functions that transform [`CarouselState`] in response to abstract
//! pointer input. Mouse and touch both arrive here as [`PointerPosition`]s;
//! nothing in this module knows which channel produced them.

use crate::model::PointerPosition;
use crate::state::CarouselState;
use tracing::debug;

/// Index change decided when a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Move to the next slide.
    Advance,
    /// Move to the previous slide.
    Retreat,
    /// Stay on the current slide and snap back.
    SnapBack,
}

impl SwipeDecision {
    /// Index after applying this decision to `current_index`.
    pub fn apply(self, current_index: usize) -> usize {
        match self {
            SwipeDecision::Advance => current_index + 1,
            SwipeDecision::Retreat => current_index.saturating_sub(1),
            SwipeDecision::SnapBack => current_index,
        }
    }
}

/// Threshold rule for a released drag.
///
/// Dragging left (negative `moved_by`) past the threshold advances; dragging
/// right past it retreats. Neither moves past the ends of the collection.
pub fn resolve_swipe(
    moved_by: f32,
    current_index: usize,
    last_index: usize,
    threshold: f32,
) -> SwipeDecision {
    if moved_by < -threshold && current_index < last_index {
        SwipeDecision::Advance
    } else if moved_by > threshold && current_index > 0 {
        SwipeDecision::Retreat
    } else {
        SwipeDecision::SnapBack
    }
}

/// Start a drag at `position`.
///
/// Returns `false` (and changes nothing) when a drag is already in progress.
pub fn begin_drag(state: &mut CarouselState, position: PointerPosition) -> bool {
    if state.is_dragging {
        return false;
    }
    state.is_dragging = true;
    state.drag_start_position = position;
    debug!(start = position.x(), index = state.current_index, "Drag started");
    true
}

/// Follow the pointer to `position`.
///
/// The live offset is not clamped, so the track may overscroll past either
/// end while the pointer is held. Returns `false` when not dragging.
pub fn track_drag(state: &mut CarouselState, position: PointerPosition) -> bool {
    if !state.is_dragging {
        return false;
    }
    let delta = position.delta_from(state.drag_start_position);
    state.live_offset = state.resting_offset + delta;
    true
}

/// End the drag and decide the new index.
///
/// Returns `None` when not dragging. Otherwise clears the drag flag, updates
/// `current_index` per [`resolve_swipe`] and returns the decision. Offsets are
/// left for the caller to re-snap.
pub fn release_drag(
    state: &mut CarouselState,
    last_index: usize,
    threshold: f32,
) -> Option<SwipeDecision> {
    if !state.is_dragging {
        return None;
    }
    state.is_dragging = false;

    let moved_by = state.live_offset - state.resting_offset;
    let decision = resolve_swipe(moved_by, state.current_index, last_index, threshold);
    state.current_index = decision.apply(state.current_index);
    debug!(moved_by, ?decision, index = state.current_index, "Drag released");
    Some(decision)
}

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod tests;
