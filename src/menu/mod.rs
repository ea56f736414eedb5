//! # Menu Module
//!
//! The interactive single-select menu.
//!
//! ## Components
//!
//! - [`MenuState`] - options, selection and scroll window
//! - [`render`] - frame building and differential redraw
//! - [`input`] - raw key decoding
//! - [`animation`] - eased step animation between selections
//! - [`lifecycle`] - terminal setup and guaranteed cleanup
//! - [`Selector`] - the event loop tying them together
//!
//! ## Flow
//!
//! ```text
//! Session::start ─▶ draw ─▶ read_key ─┬─ move ──▶ step, draw, sleep … ─┐
//!                     ▲                ├─ Enter ─▶ Selection           │
//!                     │                └─ Ctrl+C ▶ Cancelled           │
//!                     └────────────────────────────────────────────────┘
//! ```
//!
//! The loop is single-threaded and blocks on stdin and on animation sleeps,
//! so a key pressed mid-animation is only handled once the animation ends.

pub mod animation;
pub mod input;
pub mod lifecycle;
pub mod render;
pub mod state;
pub mod theme;

pub use input::{Action, Key};
pub use lifecycle::{Session, SessionOptions};
pub use state::{Direction, MenuState};
pub use theme::MenuTheme;

use crate::config::MenuConfig;
use crate::error::{Result, SelectError};
use crate::term::{PlatformTerminal, TerminalBackend};
use crate::text::strip_ansi;
use animation::Easing;
use crossterm::{queue, style::Print, terminal::{Clear, ClearType}};
use render::FrameRenderer;
use std::io::{self, Read, Write};

/// The option the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub label: String,
}

/// A configured menu, ready to run once.
#[derive(Debug, Clone)]
pub struct Selector {
    state: MenuState,
    theme: MenuTheme,
    easing: Easing,
    confirm: bool,
}

impl Selector {
    /// Build a menu over `options`.
    ///
    /// # Errors
    ///
    /// [`SelectError::InvalidInput`] if `options` is empty or the configured
    /// `visible`/`width` is zero.
    pub fn new<I, S>(options: I, config: &MenuConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Ok(Self {
            state: MenuState::new(options, config.visible, config.width)?,
            theme: MenuTheme::from_config(config),
            easing: Easing::from_config(&config.animation),
            confirm: config.confirm,
        })
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Run on the real terminal: stdin, stdout and signal handling.
    ///
    /// # Errors
    ///
    /// See [`SelectError`]. The terminal is restored before this returns.
    pub fn run(self) -> Result<Selection> {
        // Unlocked handles: the signal watcher must be able to write the
        // show-cursor sequence while the loop is blocked.
        self.run_on(
            PlatformTerminal::default(),
            &mut io::stdin(),
            &mut io::stdout(),
            SessionOptions::default(),
        )
    }

    /// Run with an explicit backend and I/O streams.
    ///
    /// # Errors
    ///
    /// See [`SelectError`]. The terminal is restored before this returns.
    pub fn run_on<B, R, W>(
        mut self,
        backend: B,
        input: &mut R,
        output: &mut W,
        options: SessionOptions,
    ) -> Result<Selection>
    where
        B: TerminalBackend,
        R: Read,
        W: Write,
    {
        let session = Session::start(backend, input, output, self.state.max_visible(), options)?;
        let mut renderer = FrameRenderer::new(session.anchor_row());

        let result = self.event_loop(&mut renderer, input, output);
        session.finish();

        match &result {
            Ok(selection) => log::debug!("selected {}: {:?}", selection.index, selection.label),
            Err(err) => log::debug!("menu ended: {err}"),
        }
        result
    }

    fn event_loop<R: Read, W: Write>(
        &mut self,
        renderer: &mut FrameRenderer,
        input: &mut R,
        output: &mut W,
    ) -> Result<Selection> {
        self.draw(renderer, output)?;

        loop {
            let key = input::read_key(input).map_err(SelectError::InputRead)?;

            match key.action() {
                Action::MoveUp => self.animate_to(Direction::Up, renderer, output)?,
                Action::MoveDown => self.animate_to(Direction::Down, renderer, output)?,
                Action::Select => {
                    if self.confirm {
                        self.print_confirmation(renderer, output)
                            .map_err(SelectError::Output)?;
                    }
                    return Ok(Selection {
                        index: self.state.selected(),
                        label: self.state.selected_label().to_string(),
                    });
                }
                Action::Cancel => return Err(SelectError::Cancelled),
                Action::Ignore => {}
            }
        }
    }

    /// Step towards the option one move in `direction` away, drawing and
    /// pausing after every step.
    fn animate_to<W: Write>(
        &mut self,
        direction: Direction,
        renderer: &mut FrameRenderer,
        output: &mut W,
    ) -> Result<()> {
        let target = self.state.target(direction);
        for step in animation::steps(self.state.selected(), target) {
            self.state.select(step.index);
            self.draw(renderer, output)?;

            let delay = self.easing.delay(step.remaining);
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
        Ok(())
    }

    fn draw<W: Write>(&self, renderer: &mut FrameRenderer, output: &mut W) -> Result<()> {
        let frame = render::build_frame(&self.state, &self.theme);
        renderer.draw(frame, output).map_err(SelectError::Output)
    }

    fn print_confirmation<W: Write>(&self, renderer: &FrameRenderer, output: &mut W) -> io::Result<()> {
        renderer.move_to_row(output, renderer.previous().len())?;
        let line = format!("Selected: {}\r\n", strip_ansi(self.state.selected_label()));
        queue!(output, Clear(ClearType::CurrentLine), Print(line))?;
        output.flush()
    }
}

/// Show a menu over `options` and return the chosen one.
///
/// `visible` is the most options shown at once, `width` the column budget
/// per option before it wraps. Everything else uses [`MenuConfig`] defaults.
///
/// # Errors
///
/// See [`SelectError`].
pub fn select<I, S>(options: I, visible: usize, width: usize) -> Result<Selection>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    select_with(options, &MenuConfig::with_size(visible, width))
}

/// Show a menu configured by `config`.
///
/// # Errors
///
/// See [`SelectError`].
pub fn select_with<I, S>(options: I, config: &MenuConfig) -> Result<Selection>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Selector::new(options, config)?.run()
}
