//! Geometry primitives shared by the gesture and layout code.
//!
//! All scalars are in abstract horizontal units. The terminal host maps
//! columns to units; a browser host would use CSS pixels.

/// A single horizontal pointer coordinate.
///
/// Mouse and touch input are both reduced to this at the host boundary, so
/// the engine never needs to know which channel produced a position.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PointerPosition(f32);

impl PointerPosition {
    /// Wrap a raw horizontal coordinate.
    pub fn new(x: f32) -> Self {
        Self(x)
    }

    /// The raw horizontal coordinate.
    pub fn x(self) -> f32 {
        self.0
    }

    /// Signed distance travelled from `origin` to `self`.
    pub fn delta_from(self, origin: PointerPosition) -> f32 {
        self.0 - origin.0
    }
}

/// Geometry the host measures on demand: slide and viewport widths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    /// Rendered width of one slide.
    pub slide_width: f32,
    /// Rendered width of the carousel viewport.
    pub viewport_width: f32,
}

impl Measurement {
    /// Create a measurement from slide and viewport widths.
    pub fn new(slide_width: f32, viewport_width: f32) -> Self {
        Self {
            slide_width,
            viewport_width,
        }
    }
}

/// Inputs to the snap calculation.
///
/// Rebuilt from a fresh [`Measurement`] every time it is needed; never cached,
/// since widths change under responsive layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Width of one slide.
    pub slide_width: f32,
    /// Constant gap between adjacent slides.
    pub inter_slide_gap: f32,
    /// Width of the viewport the track is centered in.
    pub viewport_width: f32,
}

impl LayoutMetrics {
    /// Combine a host measurement with the configured gap.
    pub fn from_measurement(measurement: Measurement, inter_slide_gap: f32) -> Self {
        Self {
            slide_width: measurement.slide_width,
            inter_slide_gap,
            viewport_width: measurement.viewport_width,
        }
    }

    /// Distance from one slide's leading edge to the next.
    pub fn slide_pitch(&self) -> f32 {
        self.slide_width + self.inter_slide_gap
    }

    /// True when the geometry cannot produce a meaningful offset.
    ///
    /// Covers unmeasured (zero) widths, negative widths and non-finite values.
    pub fn is_degraded(&self) -> bool {
        let all_finite = self.slide_width.is_finite()
            && self.viewport_width.is_finite()
            && self.inter_slide_gap.is_finite();
        !all_finite || self.slide_width <= 0.0 || self.viewport_width <= 0.0
    }
}
