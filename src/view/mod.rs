//! TUI rendering and terminal management (impure shell)

mod chrome;
pub mod constants;
pub mod hit_test;
pub mod layout;
mod styles;
pub mod terminal_surface;
pub mod track;

pub use hit_test::{detect_click, ClickTarget};
pub use layout::{calculate_layout, CarouselLayout};
pub use styles::CarouselStyles;
pub use terminal_surface::TerminalSurface;

use crate::config::ResolvedConfig;
use crate::model::{
    sample_deck, CardItem, CarouselError, CarouselEvent, PointerPosition, SlideCollection,
};
use crate::state::CarouselEngine;
use crate::view::constants::{FRAME_INTERVAL, IDLE_INTERVAL};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Engine specialised for the terminal deck.
pub type TerminalCarousel = CarouselEngine<CardItem, TerminalSurface>;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The carousel could not be built
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

/// Build the engine over the sample deck for a track `track_columns` wide.
///
/// The surface is measured before the engine's first snap so the initial
/// offset is already centered.
pub fn build_engine(
    config: &ResolvedConfig,
    track_columns: u16,
) -> Result<TerminalCarousel, CarouselError> {
    let slides = SlideCollection::new(sample_deck())?;
    let mut surface =
        TerminalSurface::new(slides.len(), config.slide_width, config.units_per_column);
    surface.set_track_columns(track_columns);
    CarouselEngine::new(slides, surface, config.engine_config())
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    engine: TerminalCarousel,
    styles: CarouselStyles,
    /// Last rendered layout (for mouse hit detection)
    last_layout: Option<CarouselLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let size = terminal.size()?;
        let layout = calculate_layout(Rect::new(0, 0, size.width, size.height));
        let engine = build_engine(config, layout.track.width)?;

        Ok(Self::with_engine(terminal, engine))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C). Polls at frame rate
    /// while a drag is being painted, otherwise sleeps until the next input,
    /// the resize deadline or the idle interval, whichever comes first.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            }

            self.tick(Instant::now());
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_engine(terminal: Terminal<B>, engine: TerminalCarousel) -> Self {
        Self {
            terminal,
            engine,
            styles: CarouselStyles::default(),
            last_layout: None,
        }
    }

    /// How long the event loop may block waiting for input.
    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.engine.pending_frame().is_some() {
            return FRAME_INTERVAL;
        }
        match self.engine.next_timer_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_INTERVAL),
            None => IDLE_INTERVAL,
        }
    }

    /// Fire due timers and run the pending frame task, if any.
    fn tick(&mut self, now: Instant) {
        self.engine.poll_timers(now);
        if let Some(id) = self.engine.pending_frame() {
            self.engine.run_frame(id);
        }
    }

    /// Handle keyboard input. Only the quit keys are bound.
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    /// Translate a mouse event into carousel input against the last layout.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = self.last_layout else {
            return;
        };
        let in_track = layout.track.contains(Position::new(mouse.column, mouse.row));

        let event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match detect_click(mouse.column, mouse.row, &layout, self.engine.slides().len()) {
                    ClickTarget::Track => Some(CarouselEvent::PointerDown(
                        self.track_position(&layout, mouse.column),
                    )),
                    ClickTarget::Indicator(index) => Some(CarouselEvent::IndicatorClicked(index)),
                    ClickTarget::PreviousControl => Some(CarouselEvent::PreviousControlClicked),
                    ClickTarget::NextControl => Some(CarouselEvent::NextControlClicked),
                    ClickTarget::Nothing => None,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.engine.state().is_dragging() => {
                if in_track {
                    Some(CarouselEvent::PointerMove(
                        self.track_position(&layout, mouse.column),
                    ))
                } else {
                    Some(CarouselEvent::PointerLeaveRegion)
                }
            }
            // No button held: the release happened outside the terminal.
            MouseEventKind::Moved if self.engine.state().is_dragging() => {
                Some(CarouselEvent::PointerLeaveRegion)
            }
            MouseEventKind::Up(MouseButton::Left) => Some(CarouselEvent::PointerUp),
            _ => None,
        };

        if let Some(event) = event {
            let response = self.engine.handle_event(event, Instant::now());
            debug!(?event, ?response, "Mouse input");
        }
    }

    /// Pointer position in engine units, relative to the track's left edge.
    fn track_position(&self, layout: &CarouselLayout, column: u16) -> PointerPosition {
        let relative = column.saturating_sub(layout.track.x);
        PointerPosition::new(self.engine.surface().column_to_units(relative))
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.engine
            .handle_event(CarouselEvent::ViewportResized, Instant::now());
    }

    /// Render the current frame
    ///
    /// Picks up a changed track width first. The surface reports the new
    /// geometry immediately; the engine re-snaps once the resize settles.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let layout = calculate_layout(Rect::new(0, 0, size.width, size.height));

        if self.engine.surface().track_columns() != layout.track.width {
            self.engine.surface_mut().set_track_columns(layout.track.width);
            self.engine
                .handle_event(CarouselEvent::ViewportResized, Instant::now());
        }
        self.last_layout = Some(layout);

        let engine = &self.engine;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_carousel(frame, &layout, engine, styles);
        })?;

        Ok(())
    }
}

/// Paint every area of the carousel screen.
fn render_carousel(
    frame: &mut Frame,
    layout: &CarouselLayout,
    engine: &TerminalCarousel,
    styles: &CarouselStyles,
) {
    let surface = engine.surface();
    let slides = engine.slides();
    let placements = track::card_placements(surface, &engine.metrics(), slides.len());
    let buf = frame.buffer_mut();

    chrome::render_header(buf, layout.header, styles);
    track::render_track(
        buf,
        layout.track,
        slides,
        &placements,
        engine.current_index(),
        styles,
    );
    chrome::render_indicators(buf, layout.indicators, surface, styles);
    chrome::render_controls(buf, layout.controls, surface, styles);
    chrome::render_status(
        buf,
        layout.status,
        engine.current_index(),
        slides.len(),
        surface,
        styles,
    );
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, engine: TerminalCarousel) -> Self {
        Self::with_engine(terminal, engine)
    }

    pub(crate) fn engine(&self) -> &TerminalCarousel {
        &self.engine
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(config) {
        Ok(app) => app,
        Err(err) => {
            // Leave the user's terminal usable even when setup fails halfway.
            let _ = restore_terminal();
            return Err(err);
        }
    };
    info!(
        start = app.engine.current_index(),
        slides = app.engine.slides().len(),
        "Carousel ready"
    );

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
