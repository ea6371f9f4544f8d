//! Card data shown on each slide.

/// One card in the deck: a symbol and a short title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    symbol: String,
    title: String,
}

impl CardItem {
    /// Create a card from its symbol name and title.
    pub fn new(symbol: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            title: title.into(),
        }
    }

    /// Symbol name drawn on the card face.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Card title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Glyph used for the symbol in the terminal.
    pub fn glyph(&self) -> &'static str {
        match self.symbol.as_str() {
            "cross" => "✝",
            "bird" => "⚘",
            "heart" => "♥",
            "star" => "★",
            "book" => "§",
            "flame" => "☼",
            "rosary" => "✠",
            "cup" => "♁",
            _ => "◆",
        }
    }
}

/// The built-in deck shown by the terminal host.
pub fn sample_deck() -> Vec<CardItem> {
    vec![
        CardItem::new("cross", "Sacred Cross"),
        CardItem::new("bird", "Holy Spirit"),
        CardItem::new("heart", "Sacred Heart"),
        CardItem::new("star", "Star of Bethlehem"),
        CardItem::new("book", "Holy Scripture"),
        CardItem::new("flame", "Divine Light"),
        CardItem::new("rosary", "Holy Rosary"),
        CardItem::new("cup", "Holy Communion"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deck_has_eight_cards() {
        let deck = sample_deck();
        assert_eq!(deck.len(), 8);
        assert_eq!(deck[0].title(), "Sacred Cross");
        assert_eq!(deck[7].title(), "Holy Communion");
    }

    #[test]
    fn unknown_symbol_falls_back_to_diamond() {
        let card = CardItem::new("mystery", "Unknown");
        assert_eq!(card.glyph(), "◆");
    }
}
