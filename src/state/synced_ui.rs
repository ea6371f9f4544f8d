//! Indicator and navigation-control state derived from the current index.
//!
//! Nothing here is independent state: both structures are a pure function of
//! `(current_index, slide_count)` and are rebuilt after every index change.

use crate::state::surface::CarouselSurface;

/// One "active" flag per slide; exactly one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSet {
    active: Vec<bool>,
}

impl IndicatorSet {
    /// Indicators for `len` slides with `active_index` lit.
    ///
    /// An out-of-range `active_index` is clamped to the last slide so the
    /// exactly-one-active invariant holds for every input.
    pub fn new(len: usize, active_index: usize) -> Self {
        let len = len.max(1);
        let active_index = active_index.min(len - 1);
        Self {
            active: (0..len).map(|i| i == active_index).collect(),
        }
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Always false; an indicator set covers at least one slide.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether indicator `index` is lit.
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Index of the lit indicator.
    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|&a| a)
    }

    /// Number of lit indicators (always one).
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Iterate the flags in slide order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.active.iter().copied()
    }
}

/// Enablement of the previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControlState {
    /// False on the first slide.
    pub previous_enabled: bool,
    /// False on the last slide.
    pub next_enabled: bool,
}

impl NavigationControlState {
    /// Derive control enablement for `current_index` out of `len` slides.
    pub fn for_index(current_index: usize, len: usize) -> Self {
        Self {
            previous_enabled: current_index > 0,
            next_enabled: current_index + 1 < len,
        }
    }
}

/// Indicator and control state kept in lockstep with the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedUiState {
    indicators: IndicatorSet,
    controls: NavigationControlState,
}

impl SyncedUiState {
    /// Derived state for `len` slides at `current_index`.
    pub fn new(len: usize, current_index: usize) -> Self {
        Self {
            indicators: IndicatorSet::new(len, current_index),
            controls: NavigationControlState::for_index(current_index, len),
        }
    }

    /// Rebuild both structures for `current_index`.
    pub fn recompute(&mut self, current_index: usize) {
        let len = self.indicators.len();
        self.indicators = IndicatorSet::new(len, current_index);
        self.controls = NavigationControlState::for_index(current_index, len);
    }

    /// Push the derived state to the host.
    pub fn publish<S: CarouselSurface>(&self, surface: &mut S) {
        for (index, active) in self.indicators.iter().enumerate() {
            surface.set_indicator_active(index, active);
        }
        surface.set_navigation_controls(self.controls);
    }

    /// Current indicator flags.
    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// Current control enablement.
    pub fn controls(&self) -> NavigationControlState {
        self.controls
    }
}
