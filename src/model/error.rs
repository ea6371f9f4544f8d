//! Error types for cardswipe.
//!
//! Errors use `thiserror` and compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every failure the binary can hit
//!   - [`CarouselError`] - Engine construction failures (empty deck, bad config)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal failures
//!
//! # Recovery Strategy
//!
//! Once an engine exists its operations never fail. Out-of-range indices,
//! stray pointer events and degenerate geometry are absorbed locally and
//! logged. The variants here only surface during startup.

use thiserror::Error;

/// Top-level application error.
///
/// Everything fallible in the binary converts into this via `From`, so
/// `main` can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// The carousel engine could not be built.
    #[error("Carousel setup failed: {0}")]
    Carousel(#[from] CarouselError),

    /// The configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the host cannot continue.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors raised while constructing a carousel engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarouselError {
    /// A carousel needs at least one slide to have a valid current index.
    #[error("Slide collection must contain at least one slide")]
    EmptySlideCollection,

    /// A tuning value is negative, NaN or infinite.
    #[error("Invalid value for {field}: {value}")]
    InvalidConfig {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The requested starting slide does not exist.
    #[error("Start index {index} is out of range for {len} slides")]
    StartIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides in the collection.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_error_converts_to_app_error() {
        let err: AppError = CarouselError::EmptySlideCollection.into();
        assert!(matches!(err, AppError::Carousel(_)));
    }

    #[test]
    fn tui_error_converts_to_app_error() {
        let tui: crate::view::TuiError = std::io::Error::other("broken pipe").into();
        let err: AppError = tui.into();
        assert!(matches!(err, AppError::Tui(_)));
    }

    #[test]
    fn invalid_config_message_names_field() {
        let err = CarouselError::InvalidConfig {
            field: "swipe_threshold",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid value for swipe_threshold: -1");
    }

    #[test]
    fn start_index_message_includes_bounds() {
        let err = CarouselError::StartIndexOutOfRange { index: 9, len: 8 };
        assert_eq!(
            err.to_string(),
            "Start index 9 is out of range for 8 slides"
        );
    }
}
