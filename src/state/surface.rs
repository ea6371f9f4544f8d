//! Host-side surfaces the engine paints to and measures from.

use crate::model::Measurement;
use crate::state::synced_ui::NavigationControlState;

/// Everything the engine needs from its host.
///
/// Handed to [`CarouselEngine::new`](super::CarouselEngine::new) once; the
/// engine never looks anything up from ambient state. One implementation
/// covers the track, the indicator container and the previous/next controls.
pub trait CarouselSurface {
    /// Current slide and viewport widths.
    fn measure(&self) -> Measurement;

    /// Apply a horizontal translation to the slide track.
    fn apply_track_offset(&mut self, offset: f32);

    /// Mark indicator `index` active or inactive.
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Enable or disable the previous/next controls.
    fn set_navigation_controls(&mut self, controls: NavigationControlState);

    /// Show the "grabbing" affordance while a drag is in progress.
    fn set_grabbing(&mut self, _grabbing: bool) {}
}
