//! cardswipe
//!
//! Gesture-driven carousel navigation engine with a terminal host.
//!
//! The engine in [`state`] is a pure core: it owns the carousel state and
//! talks to the outside world only through the
//! [`CarouselSurface`](state::CarouselSurface) trait. [`view`] is the impure
//! shell that implements that surface on a ratatui terminal and feeds it
//! crossterm mouse input.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
