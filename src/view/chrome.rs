//! Header, indicator row, controls and status bar.

use crate::view::constants::{NEXT_LABEL, PREVIOUS_LABEL};
use crate::view::layout::{indicator_columns, next_control_area, previous_control_area};
use crate::view::styles::CarouselStyles;
use crate::view::terminal_surface::TerminalSurface;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Title line.
pub fn render_header(buf: &mut Buffer, area: Rect, styles: &CarouselStyles) {
    let line = Line::from(vec![
        Span::styled(" cardswipe", styles.title),
        Span::styled(" · sacred symbols", styles.chrome),
    ]);
    Paragraph::new(line).render(area, buf);
}

/// One dot per slide, lit according to the flags the engine last pushed.
pub fn render_indicators(
    buf: &mut Buffer,
    area: Rect,
    surface: &TerminalSurface,
    styles: &CarouselStyles,
) {
    if area.height == 0 {
        return;
    }
    let flags = surface.indicators();
    for (x, &active) in indicator_columns(area, flags.len()).iter().zip(flags) {
        let (dot, style) = if active {
            (ACTIVE_DOT, styles.indicator_active)
        } else {
            (INACTIVE_DOT, styles.indicator_inactive)
        };
        buf.set_string(*x, area.y, dot, style);
    }
}

/// Previous/next labels, dimmed when disabled.
pub fn render_controls(
    buf: &mut Buffer,
    area: Rect,
    surface: &TerminalSurface,
    styles: &CarouselStyles,
) {
    if area.height == 0 {
        return;
    }
    let controls = surface.controls();
    let style_for = |enabled: bool| {
        if enabled {
            styles.control_enabled
        } else {
            styles.control_disabled
        }
    };

    let previous = previous_control_area(area);
    Paragraph::new(Span::styled(PREVIOUS_LABEL, style_for(controls.previous_enabled)))
        .render(previous, buf);

    let next = next_control_area(area);
    Paragraph::new(Span::styled(NEXT_LABEL, style_for(controls.next_enabled))).render(next, buf);
}

/// Position and drag affordance.
pub fn render_status(
    buf: &mut Buffer,
    area: Rect,
    current_index: usize,
    slide_count: usize,
    surface: &TerminalSurface,
    styles: &CarouselStyles,
) {
    let cursor = if surface.is_grabbing() {
        "grabbing"
    } else {
        "drag to swipe"
    };
    let text = format!(
        " card {}/{} │ {} │ q quit",
        current_index + 1,
        slide_count,
        cursor
    );
    Paragraph::new(Span::styled(text, styles.chrome)).render(area, buf);
}
