//! Carousel styling.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every element of the carousel screen.
#[derive(Debug, Clone, Copy)]
pub struct CarouselStyles {
    /// Border of the card in view.
    pub current_card: Style,
    /// Border of every other card.
    pub other_card: Style,
    /// Card title text.
    pub title: Style,
    /// Symbol glyph on the card face.
    pub glyph: Style,
    /// Lit indicator dot.
    pub indicator_active: Style,
    /// Unlit indicator dot.
    pub indicator_inactive: Style,
    /// Enabled control label.
    pub control_enabled: Style,
    /// Disabled control label.
    pub control_disabled: Style,
    /// Header and status bar text.
    pub chrome: Style,
}

impl Default for CarouselStyles {
    fn default() -> Self {
        Self {
            current_card: Style::default().fg(Color::Cyan),
            other_card: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            glyph: Style::default().fg(Color::Blue),
            indicator_active: Style::default().fg(Color::Cyan),
            indicator_inactive: Style::default().fg(Color::DarkGray),
            control_enabled: Style::default().fg(Color::White),
            control_disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            chrome: Style::default().fg(Color::Gray),
        }
    }
}
