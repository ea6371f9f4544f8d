//! Domain model types (pure).
//!
//! Plain data with smart constructors. Nothing here touches the terminal.

pub mod card;
pub mod error;
pub mod event;
pub mod geometry;
pub mod slides;

// Re-export for convenience
pub use card::{sample_deck, CardItem};
pub use error::{AppError, CarouselError};
pub use event::{CarouselEvent, EventResponse};
pub use geometry::{LayoutMetrics, Measurement, PointerPosition};
pub use slides::SlideCollection;
