//! # Lifecycle Manager
//!
//! Takes the terminal over for the duration of one menu and guarantees it is
//! handed back.
//!
//! ## Setup
//!
//! 1. Refuse to start unless stdin is a terminal (nothing is touched).
//! 2. Create the [`CleanupGuard`] and, when enabled, the signal watcher.
//! 3. Hide the cursor, enter raw mode.
//! 4. Probe the window size and the cursor row.
//! 5. Plan the anchor row, scrolling the terminal if the menu would not fit.
//!
//! ## Cleanup
//!
//! [`CleanupGuard::cleanup`] restores the saved mode and shows the cursor.
//! It runs at most once no matter how many callers race on it: the event
//! loop's return path, `Drop` during a panic, or the signal watcher thread.
//! The watcher only ever sees the guard, never render state.

use crate::error::{Result, SelectError};
use crate::term::probe;
use crate::term::TerminalBackend;
use crossterm::{cursor::MoveTo, queue};
use std::fmt;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// One-shot restoration of the terminal's mode and cursor visibility.
pub struct CleanupGuard<B: TerminalBackend> {
    backend: B,
    saved: Mutex<Option<B::SavedMode>>,
    done: AtomicBool,
}

impl<B: TerminalBackend + fmt::Debug> fmt::Debug for CleanupGuard<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanupGuard")
            .field("backend", &self.backend)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<B: TerminalBackend> CleanupGuard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            saved: Mutex::new(None),
            done: AtomicBool::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Hide the cursor. Cleanup shows it again.
    pub fn hide_cursor(&self) -> Result<()> {
        self.backend
            .set_cursor_visible(false)
            .map_err(SelectError::Output)
    }

    /// Enter raw mode and keep the previous mode for cleanup.
    ///
    /// If cleanup already ran (a signal arrived during setup), the snapshot
    /// is restored on the spot since nothing else will restore it.
    pub fn enter_raw_mode(&self) -> Result<()> {
        let saved = self.backend.enter_raw_mode().map_err(SelectError::Mode)?;
        let mut slot = self.saved.lock().unwrap_or_else(PoisonError::into_inner);
        if self.done.load(Ordering::SeqCst) {
            drop(slot);
            if let Err(err) = self.backend.restore_mode(&saved) {
                log::warn!("failed to restore terminal mode: {err}");
            }
            return Ok(());
        }
        *slot = Some(saved);
        Ok(())
    }

    /// Restore the terminal. Only the first call has any effect; errors are
    /// logged and swallowed.
    pub fn cleanup(&self) {
        if self.done.swap(true, Ordering::SeqCst) {
            return;
        }

        let saved = self
            .saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(saved) = saved {
            if let Err(err) = self.backend.restore_mode(&saved) {
                log::warn!("failed to restore terminal mode: {err}");
            }
        }

        if let Err(err) = self.backend.set_cursor_visible(true) {
            log::warn!("failed to show cursor: {err}");
        }
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

/// Type-erased cleanup, so one process-wide signal watcher can serve
/// sessions over any backend.
pub trait Restore: Send + Sync {
    fn restore(&self);
}

impl<B: TerminalBackend> Restore for CleanupGuard<B> {
    fn restore(&self) {
        self.cleanup();
    }
}

/// Where the menu starts and how far the terminal must scroll first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPlan {
    /// 1-based row of the header line.
    pub anchor_row: usize,
    /// Lines to scroll before drawing.
    pub scroll_lines: usize,
}

/// Rows reserved for a menu: the header plus up to three wrapped lines per
/// visible option.
pub fn estimated_frame_height(max_visible: usize) -> usize {
    1 + max_visible * 3
}

/// Place the menu on the row below the cursor, scrolling just enough for
/// `estimated_height` rows to fit above the bottom of a `terminal_rows`
/// tall terminal. Never scrolls the anchor above row 1.
///
/// A terminal reporting zero rows has an unknown size and is never scrolled.
pub fn plan_anchor(cursor_row: usize, estimated_height: usize, terminal_rows: usize) -> AnchorPlan {
    let proposed = cursor_row.max(1) + 1;
    if terminal_rows == 0 {
        return AnchorPlan {
            anchor_row: proposed,
            scroll_lines: 0,
        };
    }
    let overflow = (proposed + estimated_height).saturating_sub(terminal_rows);
    let scroll_lines = overflow.min(proposed - 1);

    AnchorPlan {
        anchor_row: proposed - scroll_lines,
        scroll_lines,
    }
}

/// An active menu session. Dropping it runs cleanup.
pub struct Session<B: TerminalBackend> {
    guard: Arc<CleanupGuard<B>>,
    anchor_row: usize,
    #[cfg(unix)]
    signals: Option<signals::SignalGuard>,
}

/// Knobs for [`Session::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Watch SIGINT/SIGTERM/SIGQUIT, restore the terminal and exit on receipt.
    pub handle_signals: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            handle_signals: true,
        }
    }
}

impl<B: TerminalBackend> Session<B> {
    /// Take over the terminal. On error everything already changed has been
    /// restored.
    pub fn start<R: Read, W: Write>(
        backend: B,
        input: &mut R,
        output: &mut W,
        max_visible: usize,
        options: SessionOptions,
    ) -> Result<Self> {
        if !backend.is_terminal() {
            return Err(SelectError::NotATerminal);
        }

        let guard = Arc::new(CleanupGuard::new(backend));
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut session = Self {
            guard: Arc::clone(&guard),
            anchor_row: 1,
            #[cfg(unix)]
            signals: None,
        };

        #[cfg(unix)]
        {
            if options.handle_signals {
                let watcher = signals::SignalGuard::new(Arc::clone(&guard) as Arc<dyn Restore>)
                    .map_err(SelectError::Signals)?;
                session.signals = Some(watcher);
            }
        }
        #[cfg(not(unix))]
        {
            let _ = options;
        }

        guard.hide_cursor()?;
        guard.enter_raw_mode()?;

        let size = guard
            .backend()
            .window_size()
            .map_err(|err| SelectError::Geometry(format!("window size query failed: {err}")))?;
        let (row, col) = probe::cursor_position(input, output)
            .map_err(|err| SelectError::Geometry(err.to_string()))?;

        let estimated = estimated_frame_height(max_visible);
        let plan = plan_anchor(usize::from(row), estimated, usize::from(size.rows));
        log::debug!(
            "terminal {}x{}, cursor at {row};{col}, frame ~{estimated} rows, anchor {} (scroll {})",
            size.cols,
            size.rows,
            plan.anchor_row,
            plan.scroll_lines
        );

        if plan.scroll_lines > 0 {
            scroll(output, size.rows, plan.scroll_lines).map_err(SelectError::Output)?;
        }
        session.anchor_row = plan.anchor_row;

        Ok(session)
    }

    pub fn anchor_row(&self) -> usize {
        self.anchor_row
    }

    pub fn guard(&self) -> &Arc<CleanupGuard<B>> {
        &self.guard
    }

    /// Restore the terminal now. Also happens on drop.
    pub fn finish(self) {
        drop(self);
    }
}

impl<B: TerminalBackend> Drop for Session<B> {
    fn drop(&mut self) {
        self.guard.cleanup();
        #[cfg(unix)]
        drop(self.signals.take());
    }
}

/// Push existing output up by `lines` rows: newlines on the bottom row scroll
/// the whole screen.
fn scroll<W: Write>(output: &mut W, rows: u16, lines: usize) -> std::io::Result<()> {
    queue!(output, MoveTo(0, rows.saturating_sub(1)))?;
    for _ in 0..lines {
        output.write_all(b"\n")?;
    }
    output.flush()
}

/// Process-wide SIGINT/SIGTERM/SIGQUIT handling.
///
/// The handlers and the watcher thread are installed by the first session
/// that asks for them and stay for the life of the process. A session only
/// occupies the active slot. A signal that arrives while a session is active
/// restores its terminal and exits with `128 + signal`; with no session
/// active the signal's default action is applied, so the host process stays
/// interruptible after the menu returns.
#[cfg(unix)]
mod signals {
    use super::Restore;
    use signal_hook::consts::signal::{SIGINT, SIGQUIT, SIGTERM};
    use signal_hook::iterator::Signals;
    use signal_hook::low_level::emulate_default_handler;
    use std::io;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    const HANDLED: [i32; 3] = [SIGINT, SIGTERM, SIGQUIT];

    struct Active {
        id: u64,
        restore: Arc<dyn Restore>,
    }

    static ACTIVE: Mutex<Option<Active>> = Mutex::new(None);
    static INSTALLED: Mutex<bool> = Mutex::new(false);
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);

    /// Holds the active slot for one session.
    #[derive(Debug)]
    pub(super) struct SignalGuard {
        id: u64,
    }

    impl SignalGuard {
        pub(super) fn new(restore: Arc<dyn Restore>) -> io::Result<Self> {
            install_watcher()?;

            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let previous = ACTIVE
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .replace(Active { id, restore });
            if previous.is_some() {
                log::warn!("menu session started while another one is active");
            }
            Ok(Self { id })
        }
    }

    impl Drop for SignalGuard {
        fn drop(&mut self) {
            let mut active = ACTIVE.lock().unwrap_or_else(PoisonError::into_inner);
            if active.as_ref().is_some_and(|a| a.id == self.id) {
                *active = None;
            }
        }
    }

    #[cfg(test)]
    pub(super) fn is_active() -> bool {
        ACTIVE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn install_watcher() -> io::Result<()> {
        let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
        if *installed {
            return Ok(());
        }

        let mut signals = Signals::new(HANDLED)?;
        std::thread::Builder::new()
            .name("menu-signals".to_string())
            .spawn(move || {
                for signal in signals.forever() {
                    dispatch(signal);
                }
            })?;
        *installed = true;
        log::debug!("signal watcher installed");
        Ok(())
    }

    fn dispatch(signal: i32) {
        let active = ACTIVE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|a| Arc::clone(&a.restore));

        match active {
            Some(restore) => {
                log::debug!("signal {signal} received, restoring terminal");
                restore.restore();
                std::process::exit(128 + signal);
            }
            None => {
                log::debug!("signal {signal} received with no active menu");
                if let Err(err) = emulate_default_handler(signal) {
                    log::warn!("failed to apply default action for signal {signal}: {err}");
                }
            }
        }
    }
}
