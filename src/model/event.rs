//! Abstract input events consumed by the carousel engine.

use super::geometry::PointerPosition;

/// Platform-neutral input delivered to [`CarouselEngine::handle_event`].
///
/// Mouse and touch both arrive as `Pointer*` variants; hosts translate their
/// native events before calling the engine.
///
/// [`CarouselEngine::handle_event`]: crate::state::CarouselEngine::handle_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Pointer pressed on the track.
    PointerDown(PointerPosition),
    /// Pointer moved while over the track.
    PointerMove(PointerPosition),
    /// Pointer released.
    PointerUp,
    /// Pointer left the track region. Treated exactly like `PointerUp`.
    PointerLeaveRegion,
    /// Indicator dot at the given index was clicked.
    IndicatorClicked(usize),
    /// The "previous" control was clicked.
    PreviousControlClicked,
    /// The "next" control was clicked.
    NextControlClicked,
    /// The viewport changed size.
    ViewportResized,
    /// The platform is about to start a native drag of slide content.
    NativeDragStart,
    /// The platform is about to open a context menu (e.g. long press).
    ContextMenu,
}

/// What the host should do after the engine processed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The engine consumed the event.
    Handled,
    /// The event had no effect in the current state.
    Ignored,
    /// The host must cancel the platform's default action for this event.
    SuppressDefault,
}

impl EventResponse {
    /// True when the host must prevent the platform default.
    pub fn prevents_default(self) -> bool {
        matches!(self, EventResponse::SuppressDefault)
    }
}
