//! Carousel navigation engine (pure core).
//!
//! State transitions are plain functions and state machines driven by
//! explicit inputs, testable without a terminal. The host reaches the outside
//! world only through [`CarouselSurface`].

pub mod carousel_state;
pub mod constants;
pub mod debounce;
pub mod engine;
pub mod gesture;
pub mod layout;
pub mod renderer;
pub mod surface;
pub mod synced_ui;

// Re-export for convenience
pub use carousel_state::CarouselState;
pub use debounce::{DebounceState, ResizeDebouncer, TimerHandle};
pub use engine::{CarouselEngine, EngineConfig};
pub use gesture::{resolve_swipe, SwipeDecision};
pub use layout::snapped_offset;
pub use renderer::{FrameOutcome, FrameTaskId, PositionRenderer};
pub use surface::CarouselSurface;
pub use synced_ui::{IndicatorSet, NavigationControlState, SyncedUiState};
