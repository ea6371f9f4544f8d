//! Card track rendering.
//!
//! Each card is drawn into its own scratch buffer and then copied into the
//! frame with clipping, so partially visible cards keep their borders on the
//! visible side only.

use crate::model::{CardItem, LayoutMetrics, SlideCollection};
use crate::view::styles::CarouselStyles;
use crate::view::terminal_surface::TerminalSurface;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// Horizontal placement of one card, in columns relative to the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPlacement {
    /// Slide index.
    pub index: usize,
    /// Left edge relative to the track's left edge. May be negative.
    pub left: i32,
    /// Width in columns.
    pub width: u16,
}

/// Where every card sits for the current painted offset.
///
/// Cards entirely outside `[0, track_width)` are skipped.
pub fn card_placements(
    surface: &TerminalSurface,
    metrics: &LayoutMetrics,
    slide_count: usize,
) -> Vec<CardPlacement> {
    let width = surface
        .units_to_columns(metrics.slide_width)
        .clamp(0, i32::from(u16::MAX)) as u16;
    if width == 0 {
        return Vec::new();
    }
    let track_width = i32::from(surface.track_columns());

    (0..slide_count)
        .filter_map(|index| {
            let left_units = surface.track_offset() + index as f32 * metrics.slide_pitch();
            let left = surface.units_to_columns(left_units);
            let visible = left < track_width && left + i32::from(width) > 0;
            visible.then_some(CardPlacement { index, left, width })
        })
        .collect()
}

/// Draw every visible card into `buf` within `area`.
pub fn render_track(
    buf: &mut Buffer,
    area: Rect,
    slides: &SlideCollection<CardItem>,
    placements: &[CardPlacement],
    current_index: usize,
    styles: &CarouselStyles,
) {
    // One blank row above and below the cards.
    let card_height = area.height.saturating_sub(2);
    if card_height < 3 {
        return;
    }

    for placement in placements {
        let Some(card) = slides.get(placement.index) else {
            continue;
        };
        let card_buf = render_card(
            card,
            placement.index,
            slides.len(),
            placement.index == current_index,
            styles,
            placement.width,
            card_height,
        );
        blit(
            &card_buf,
            buf,
            i32::from(area.x) + placement.left,
            area.y + 1,
            area,
        );
    }
}

fn render_card(
    card: &CardItem,
    index: usize,
    count: usize,
    is_current: bool,
    styles: &CarouselStyles,
    width: u16,
    height: u16,
) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    let border_style = if is_current {
        styles.current_card
    } else {
        styles.other_card
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, &mut buf);

    let body = vec![
        Line::styled(card.glyph(), styles.glyph),
        Line::from(""),
        Line::styled(card.title(), styles.title),
        Line::from(""),
        Line::styled(format!("{} / {}", index + 1, count), styles.chrome),
    ];
    // Center the body vertically.
    let top_pad = inner.height.saturating_sub(body.len() as u16) / 2;
    let body_area = Rect {
        y: inner.y + top_pad,
        height: inner.height - top_pad,
        ..inner
    };
    Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(body_area, &mut buf);

    buf
}

/// Copy `src` into `dst` with its top-left at `(left, top)`, clipped to `clip`.
fn blit(src: &Buffer, dst: &mut Buffer, left: i32, top: u16, clip: Rect) {
    let src_area = src.area;
    for y in 0..src_area.height {
        let dy = top + y;
        if dy < clip.top() || dy >= clip.bottom() {
            continue;
        }
        for x in 0..src_area.width {
            let dx = left + i32::from(x);
            if dx < i32::from(clip.left()) || dx >= i32::from(clip.right()) {
                continue;
            }
            dst[(dx as u16, dy)] = src[(x, y)].clone();
        }
    }
}
