//! Shared helpers for integration tests.

#![allow(dead_code)] // Not every test binary uses every helper

use cardswipe::model::{Measurement, PointerPosition, SlideCollection};
use cardswipe::state::{CarouselEngine, CarouselSurface, EngineConfig, NavigationControlState};

/// Surface double that records what the engine pushes to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub measurement: Measurement,
    pub offsets: Vec<f32>,
    pub indicators: Vec<bool>,
    pub controls: Option<NavigationControlState>,
    pub grabbing: bool,
}

impl RecordingSurface {
    pub fn new(slide_width: f32, viewport_width: f32, slides: usize) -> Self {
        Self {
            measurement: Measurement::new(slide_width, viewport_width),
            indicators: vec![false; slides],
            ..Self::default()
        }
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.offsets.last().copied()
    }

    pub fn lit_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }
}

impl CarouselSurface for RecordingSurface {
    fn measure(&self) -> Measurement {
        self.measurement
    }

    fn apply_track_offset(&mut self, offset: f32) {
        self.offsets.push(offset);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
    }

    fn set_navigation_controls(&mut self, controls: NavigationControlState) {
        self.controls = Some(controls);
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }
}

pub type TestEngine = CarouselEngine<usize, RecordingSurface>;

/// Engine over `len` numbered slides, 300-unit slides in an 800-unit viewport.
///
/// Snapped offset for index `i` is `250 - 320 * i`.
pub fn engine(len: usize, start_index: usize) -> TestEngine {
    let slides = SlideCollection::new((0..len).collect()).unwrap();
    let config = EngineConfig {
        start_index,
        ..EngineConfig::default()
    };
    CarouselEngine::new(slides, RecordingSurface::new(300.0, 800.0, len), config).unwrap()
}

pub fn offset_for(index: usize) -> f32 {
    250.0 - 320.0 * index as f32
}

pub fn at(x: f32) -> PointerPosition {
    PointerPosition::new(x)
}
