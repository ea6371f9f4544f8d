//! [`CarouselSurface`] backed by terminal cells.
//!
//! The engine works in abstract units; this surface converts between units and
//! columns and remembers what the engine painted so the next `draw` can render
//! it.

use crate::model::Measurement;
use crate::state::{CarouselSurface, NavigationControlState};
use crate::view::constants::MAX_SLIDE_VIEWPORT_FRACTION;

/// Host surface for the terminal carousel.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    units_per_column: f32,
    preferred_slide_width: f32,
    track_columns: u16,
    track_offset: f32,
    indicators: Vec<bool>,
    controls: NavigationControlState,
    grabbing: bool,
}

impl TerminalSurface {
    /// Surface for `slide_count` slides, not yet measured.
    pub fn new(slide_count: usize, preferred_slide_width: f32, units_per_column: f32) -> Self {
        Self {
            // Guard against zero/negative scale from config
            units_per_column: if units_per_column > 0.0 { units_per_column } else { 1.0 },
            preferred_slide_width,
            track_columns: 0,
            track_offset: 0.0,
            indicators: vec![false; slide_count],
            controls: NavigationControlState {
                previous_enabled: false,
                next_enabled: false,
            },
            grabbing: false,
        }
    }

    /// Update the measured track width after a layout pass.
    pub fn set_track_columns(&mut self, columns: u16) {
        self.track_columns = columns;
    }

    /// Measured track width in columns.
    pub fn track_columns(&self) -> u16 {
        self.track_columns
    }

    /// Engine units covered by one column.
    pub fn units_per_column(&self) -> f32 {
        self.units_per_column
    }

    /// Convert a column (relative to the track's left edge) to units.
    pub fn column_to_units(&self, column: u16) -> f32 {
        f32::from(column) * self.units_per_column
    }

    /// Convert a unit distance to whole columns, rounding to nearest.
    pub fn units_to_columns(&self, units: f32) -> i32 {
        (units / self.units_per_column).round() as i32
    }

    /// Offset most recently painted by the engine, in units.
    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    /// Indicator flags most recently pushed by the engine.
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    /// Control enablement most recently pushed by the engine.
    pub fn controls(&self) -> NavigationControlState {
        self.controls
    }

    /// Whether a drag is showing the "grabbing" affordance.
    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }
}

impl CarouselSurface for TerminalSurface {
    fn measure(&self) -> Measurement {
        let viewport_width = self.column_to_units(self.track_columns);
        let slide_width = self
            .preferred_slide_width
            .min(viewport_width * MAX_SLIDE_VIEWPORT_FRACTION);
        Measurement::new(slide_width, viewport_width)
    }

    fn apply_track_offset(&mut self, offset: f32) {
        self.track_offset = offset;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
    }

    fn set_navigation_controls(&mut self, controls: NavigationControlState) {
        self.controls = controls;
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }
}
