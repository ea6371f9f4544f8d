//! Carousel engine: owns the state and routes every event through it.
//!
//! The engine is the only writer of [`CarouselState`]. Drag input goes through
//! the gesture functions, clicks set the index directly, and resize signals
//! are debounced. Every path that changes the index ends in the same snap and
//! sync step.

use crate::model::{
    CarouselError, CarouselEvent, EventResponse, LayoutMetrics, PointerPosition, SlideCollection,
};
use crate::state::constants::{
    DEFAULT_RESIZE_QUIET_PERIOD, DEFAULT_SLIDE_GAP, DEFAULT_SWIPE_THRESHOLD,
};
use crate::state::debounce::ResizeDebouncer;
use crate::state::gesture;
use crate::state::layout::snapped_offset;
use crate::state::renderer::{FrameOutcome, FrameTaskId, PositionRenderer};
use crate::state::surface::CarouselSurface;
use crate::state::synced_ui::{IndicatorSet, NavigationControlState, SyncedUiState};
use crate::state::CarouselState;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Tuning for one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Drag distance needed to change slides.
    pub swipe_threshold: f32,
    /// Gap between adjacent slides.
    pub slide_gap: f32,
    /// Quiet period before a resize burst triggers a recompute.
    pub resize_quiet_period: Duration,
    /// Slide shown when the engine is created.
    pub start_index: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            slide_gap: DEFAULT_SLIDE_GAP,
            resize_quiet_period: DEFAULT_RESIZE_QUIET_PERIOD,
            start_index: 0,
        }
    }
}

impl EngineConfig {
    /// Reject negative or non-finite tuning values.
    pub fn validate(&self) -> Result<(), CarouselError> {
        for (field, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("slide_gap", self.slide_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CarouselError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

/// Gesture-driven carousel over a fixed slide collection.
///
/// Generic over the slide payload `T` and the host surface `S`.
#[derive(Debug)]
pub struct CarouselEngine<T, S>
where
    S: CarouselSurface,
{
    slides: SlideCollection<T>,
    surface: S,
    config: EngineConfig,
    state: CarouselState,
    ui: SyncedUiState,
    renderer: PositionRenderer,
    debouncer: ResizeDebouncer,
    resize_recomputes: u64,
}

impl<T, S> CarouselEngine<T, S>
where
    S: CarouselSurface,
{
    /// Build an engine and paint its initial resting position.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError`] for an invalid config or a start index
    /// outside the collection.
    pub fn new(
        slides: SlideCollection<T>,
        surface: S,
        config: EngineConfig,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        if !slides.contains_index(config.start_index) {
            return Err(CarouselError::StartIndexOutOfRange {
                index: config.start_index,
                len: slides.len(),
            });
        }

        let start = config.start_index;
        let mut engine = Self {
            ui: SyncedUiState::new(slides.len(), start),
            state: CarouselState::new(start),
            renderer: PositionRenderer::new(),
            debouncer: ResizeDebouncer::new(config.resize_quiet_period),
            slides,
            surface,
            config,
            resize_recomputes: 0,
        };
        engine.surface.set_grabbing(false);
        engine.snap_to_current();
        debug!(slides = engine.slides.len(), start, "Carousel engine created");
        Ok(engine)
    }

    /// Dispatch one input event. Events must be delivered in arrival order.
    pub fn handle_event(&mut self, event: CarouselEvent, now: Instant) -> EventResponse {
        match event {
            CarouselEvent::PointerDown(position) => self.on_drag_start(position),
            CarouselEvent::PointerMove(position) => self.on_drag_move(position),
            CarouselEvent::PointerUp | CarouselEvent::PointerLeaveRegion => self.on_drag_end(),
            CarouselEvent::IndicatorClicked(index) => self.go_to_slide(index),
            CarouselEvent::PreviousControlClicked => self.previous(),
            CarouselEvent::NextControlClicked => self.next(),
            CarouselEvent::ViewportResized => self.on_viewport_resized(now),
            CarouselEvent::NativeDragStart | CarouselEvent::ContextMenu => {
                if self.state.is_dragging {
                    EventResponse::SuppressDefault
                } else {
                    EventResponse::Ignored
                }
            }
        }
    }

    /// Begin a drag at `position` and start the frame task.
    ///
    /// Ignored while already dragging or while a frame task from an earlier
    /// drag is still pending.
    pub fn on_drag_start(&mut self, position: PointerPosition) -> EventResponse {
        if self.renderer.is_active() {
            warn!("Drag start while a frame task is pending, ignoring");
            return EventResponse::Ignored;
        }
        if !gesture::begin_drag(&mut self.state, position) {
            return EventResponse::Ignored;
        }
        self.renderer.start();
        self.surface.set_grabbing(true);
        EventResponse::Handled
    }

    /// Follow the pointer. No-op unless dragging.
    pub fn on_drag_move(&mut self, position: PointerPosition) -> EventResponse {
        if gesture::track_drag(&mut self.state, position) {
            EventResponse::Handled
        } else {
            EventResponse::Ignored
        }
    }

    /// Release the drag, apply the threshold rule and snap. No-op unless dragging.
    pub fn on_drag_end(&mut self) -> EventResponse {
        let last_index = self.slides.last_index();
        let threshold = self.config.swipe_threshold;
        if gesture::release_drag(&mut self.state, last_index, threshold).is_none() {
            return EventResponse::Ignored;
        }
        self.renderer.cancel();
        self.snap_to_current();
        self.surface.set_grabbing(false);
        EventResponse::Handled
    }

    /// Jump straight to slide `index`.
    ///
    /// Out-of-range indices are rejected and leave the state untouched. The
    /// drag flag is not affected.
    pub fn go_to_slide(&mut self, index: usize) -> EventResponse {
        if !self.slides.contains_index(index) {
            warn!(index, len = self.slides.len(), "Rejected out-of-range slide index");
            return EventResponse::Ignored;
        }
        self.state.current_index = index;
        self.snap_to_current();
        EventResponse::Handled
    }

    /// Move one slide forward; no-op on the last slide.
    pub fn next(&mut self) -> EventResponse {
        if self.state.current_index >= self.slides.last_index() {
            return EventResponse::Ignored;
        }
        self.state.current_index += 1;
        self.snap_to_current();
        EventResponse::Handled
    }

    /// Move one slide back; no-op on the first slide.
    pub fn previous(&mut self) -> EventResponse {
        if self.state.current_index == 0 {
            return EventResponse::Ignored;
        }
        self.state.current_index -= 1;
        self.snap_to_current();
        EventResponse::Handled
    }

    /// Record a viewport size change. The recompute happens in
    /// [`poll_timers`](Self::poll_timers) once the quiet period has elapsed.
    pub fn on_viewport_resized(&mut self, now: Instant) -> EventResponse {
        self.debouncer.signal(now);
        EventResponse::Handled
    }

    /// Fire the resize recompute if it is due. Returns `true` when it fired.
    ///
    /// The recompute uses whatever index is current at fire time.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        let Some(handle) = self.debouncer.poll(now) else {
            return false;
        };
        self.resize_recomputes += 1;
        debug!(
            timer = handle.id(),
            index = self.state.current_index,
            "Resize quiet period elapsed, recomputing layout"
        );
        if self.state.is_dragging {
            self.reanchor_drag();
        } else {
            self.snap_to_current();
        }
        true
    }

    /// When the pending resize recompute is due, if any.
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }

    /// Frame task waiting for the host's next rendering frame.
    pub fn pending_frame(&self) -> Option<FrameTaskId> {
        self.renderer.pending()
    }

    /// Run frame task `id`, painting the live offset while dragging.
    pub fn run_frame(&mut self, id: FrameTaskId) -> FrameOutcome {
        let outcome = self.renderer.on_frame(id, self.state.is_dragging);
        if outcome == FrameOutcome::Painted {
            trace!(offset = self.state.live_offset, "Painting drag frame");
            self.surface.apply_track_offset(self.state.live_offset);
        }
        outcome
    }

    /// Fresh layout metrics from the host's current geometry.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::from_measurement(self.surface.measure(), self.config.slide_gap)
    }

    /// Engine state, read-only.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Index of the slide in view.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Current indicator flags.
    pub fn indicators(&self) -> &IndicatorSet {
        self.ui.indicators()
    }

    /// Current previous/next enablement.
    pub fn controls(&self) -> NavigationControlState {
        self.ui.controls()
    }

    /// The slides this engine navigates.
    pub fn slides(&self) -> &SlideCollection<T> {
        &self.slides
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably (e.g. for the host to update its geometry).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of debounced resize recomputes performed so far.
    pub fn resize_recomputes(&self) -> u64 {
        self.resize_recomputes
    }

    /// Snap both offsets to the current index, paint and sync the UI.
    fn snap_to_current(&mut self) {
        let offset = snapped_offset(self.state.current_index, &self.metrics());
        self.state.settle(offset);
        self.surface.apply_track_offset(offset);
        self.ui.recompute(self.state.current_index);
        self.ui.publish(&mut self.surface);
    }

    /// Re-snap the resting offset under an active drag, keeping the pointer's
    /// displacement so the release still sees how far it moved.
    fn reanchor_drag(&mut self) {
        let offset = snapped_offset(self.state.current_index, &self.metrics());
        self.state.reanchor(offset);
        self.surface.apply_track_offset(self.state.live_offset);
        self.ui.recompute(self.state.current_index);
        self.ui.publish(&mut self.surface);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
