//! Screen layout: header, card track, indicator row, control row, status bar.
//!
//! Pure layout logic - areas are computed once per draw and reused for mouse
//! hit detection until the next draw.

use crate::view::constants::{
    CONTROL_ROW_HEIGHT, HEADER_HEIGHT, INDICATOR_ROW_HEIGHT, NEXT_LABEL, PREVIOUS_LABEL,
    STATUS_BAR_HEIGHT,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Areas of one carousel frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Title line.
    pub header: Rect,
    /// Region the cards slide through.
    pub track: Rect,
    /// Row of indicator dots.
    pub indicators: Rect,
    /// Row holding the previous/next controls.
    pub controls: Rect,
    /// Status line.
    pub status: Rect,
}

/// Split the frame into carousel areas.
pub fn calculate_layout(area: Rect) -> CarouselLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(INDICATOR_ROW_HEIGHT),
            Constraint::Length(CONTROL_ROW_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    CarouselLayout {
        header: chunks[0],
        track: chunks[1],
        indicators: chunks[2],
        controls: chunks[3],
        status: chunks[4],
    }
}

/// Column of each indicator dot within `row`.
///
/// Dots are one column wide with one column of spacing, centered in the row.
/// Dots that would fall outside the row are omitted.
pub fn indicator_columns(row: Rect, count: usize) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let total = (count * 2 - 1) as u16;
    let start = row.x + row.width.saturating_sub(total) / 2;
    (0..count)
        .map(|i| start.saturating_add((i * 2) as u16))
        .take_while(|&x| x < row.x + row.width)
        .collect()
}

/// Rect of the "previous" control within `row`.
pub fn previous_control_area(row: Rect) -> Rect {
    let width = (PREVIOUS_LABEL.width() as u16).min(row.width.saturating_sub(1));
    Rect::new(row.x.saturating_add(1), row.y, width, row.height)
}

/// Rect of the "next" control within `row`.
pub fn next_control_area(row: Rect) -> Rect {
    let width = (NEXT_LABEL.width() as u16).min(row.width.saturating_sub(1));
    let x = (row.x + row.width).saturating_sub(width + 1);
    Rect::new(x, row.y, width, row.height)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
