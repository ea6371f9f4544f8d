//! The engine's single mutable state record.

use crate::model::PointerPosition;

/// Navigation and drag state of one carousel.
///
/// Owned by [`CarouselEngine`](super::CarouselEngine). Other code reads it
/// through the getters; only the gesture, navigation and resize paths inside
/// this crate write it.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub(crate) current_index: usize,
    pub(crate) is_dragging: bool,
    pub(crate) drag_start_position: PointerPosition,
    pub(crate) live_offset: f32,
    pub(crate) resting_offset: f32,
}

impl CarouselState {
    /// Fresh state at `start_index` with zero offsets.
    pub fn new(start_index: usize) -> Self {
        Self {
            current_index: start_index,
            is_dragging: false,
            drag_start_position: PointerPosition::default(),
            live_offset: 0.0,
            resting_offset: 0.0,
        }
    }

    /// Index of the slide currently in view.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// True between a drag start and its matching drag end.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Pointer position recorded at drag start.
    pub fn drag_start_position(&self) -> PointerPosition {
        self.drag_start_position
    }

    /// Offset currently painted (follows the pointer during a drag).
    pub fn live_offset(&self) -> f32 {
        self.live_offset
    }

    /// Snapped offset for the current index.
    pub fn resting_offset(&self) -> f32 {
        self.resting_offset
    }

    /// Pin both offsets to `offset`.
    pub(crate) fn settle(&mut self, offset: f32) {
        self.resting_offset = offset;
        self.live_offset = offset;
    }

    /// Move the resting offset to `offset`, carrying the current drag
    /// displacement over to the live offset.
    pub(crate) fn reanchor(&mut self, offset: f32) {
        let displacement = self.live_offset - self.resting_offset;
        self.resting_offset = offset;
        self.live_offset = offset + displacement;
    }
}
