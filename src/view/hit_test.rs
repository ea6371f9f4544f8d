//! Mouse hit detection against the last drawn layout.

use crate::view::layout::{
    indicator_columns, next_control_area, previous_control_area, CarouselLayout,
};
use ratatui::layout::{Position, Rect};

/// What a mouse position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card track.
    Track,
    /// Indicator dot for the slide at this index.
    Indicator(usize),
    /// The "previous" control.
    PreviousControl,
    /// The "next" control.
    NextControl,
    /// Anything else.
    Nothing,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Resolve a mouse position against `layout`.
///
/// # Behavior
/// - Positions inside the track resolve to `Track`
/// - On the indicator row, only the dot columns count; gaps are `Nothing`
/// - On the control row, only the label extents count
pub fn detect_click(
    column: u16,
    row: u16,
    layout: &CarouselLayout,
    slide_count: usize,
) -> ClickTarget {
    if contains(layout.track, column, row) {
        return ClickTarget::Track;
    }

    if contains(layout.indicators, column, row) {
        return indicator_columns(layout.indicators, slide_count)
            .iter()
            .position(|&x| x == column)
            .map(ClickTarget::Indicator)
            .unwrap_or(ClickTarget::Nothing);
    }

    if contains(previous_control_area(layout.controls), column, row) {
        return ClickTarget::PreviousControl;
    }

    if contains(next_control_area(layout.controls), column, row) {
        return ClickTarget::NextControl;
    }

    ClickTarget::Nothing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::layout::calculate_layout;

    fn layout() -> CarouselLayout {
        calculate_layout(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn click_in_track_hits_track() {
        assert_eq!(detect_click(10, 5, &layout(), 8), ClickTarget::Track);
    }

    #[test]
    fn click_on_dot_hits_indicator() {
        assert_eq!(detect_click(32, 21, &layout(), 8), ClickTarget::Indicator(0));
        assert_eq!(detect_click(38, 21, &layout(), 8), ClickTarget::Indicator(3));
        assert_eq!(detect_click(46, 21, &layout(), 8), ClickTarget::Indicator(7));
    }

    #[test]
    fn click_between_dots_hits_nothing() {
        assert_eq!(detect_click(33, 21, &layout(), 8), ClickTarget::Nothing);
    }

    #[test]
    fn click_on_controls() {
        assert_eq!(detect_click(2, 22, &layout(), 8), ClickTarget::PreviousControl);
        assert_eq!(detect_click(75, 22, &layout(), 8), ClickTarget::NextControl);
        assert_eq!(detect_click(40, 22, &layout(), 8), ClickTarget::Nothing);
    }

    #[test]
    fn click_on_header_hits_nothing() {
        assert_eq!(detect_click(10, 0, &layout(), 8), ClickTarget::Nothing);
    }
}
