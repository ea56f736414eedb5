//! Shared fakes for driving the menu without a real terminal.

#![allow(dead_code)]

use anchor_select::term::{TerminalBackend, WindowSize};
use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

/// Records every terminal operation the menu performs.
#[derive(Debug, Clone)]
pub struct FakeTerminal {
    pub is_tty: bool,
    pub fail_enter: bool,
    pub fail_size: bool,
    pub size: WindowSize,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeTerminal {
    pub fn new(rows: u16) -> Self {
        Self {
            is_tty: true,
            fail_enter: false,
            fail_size: false,
            size: WindowSize { cols: 80, rows },
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().expect("calls lock").push(call.to_string());
    }
}

impl TerminalBackend for FakeTerminal {
    type SavedMode = &'static str;

    fn is_terminal(&self) -> bool {
        self.is_tty
    }

    fn enter_raw_mode(&self) -> io::Result<&'static str> {
        if self.fail_enter {
            return Err(io::Error::other("tcsetattr failed"));
        }
        self.record("enter");
        Ok("cooked")
    }

    fn restore_mode(&self, saved: &&'static str) -> io::Result<()> {
        self.record(&format!("restore:{saved}"));
        Ok(())
    }

    fn window_size(&self) -> io::Result<WindowSize> {
        if self.fail_size {
            return Err(io::Error::other("TIOCGWINSZ failed"));
        }
        Ok(self.size)
    }

    fn set_cursor_visible(&self, visible: bool) -> io::Result<()> {
        self.record(if visible { "show" } else { "hide" });
        Ok(())
    }
}

/// Input that hands out one chunk per `read`, like key presses arriving one
/// at a time on a terminal.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    chunks: VecDeque<Vec<u8>>,
}

impl ScriptedInput {
    /// Starts with a cursor-position reply for `row`, then the given keys.
    pub fn with_cursor_row(row: u16, keys: &[&[u8]]) -> Self {
        let mut chunks = VecDeque::new();
        chunks.push_back(format!("\x1b[{row};1R").into_bytes());
        chunks.extend(keys.iter().map(|k| k.to_vec()));
        Self { chunks }
    }

    pub fn raw(chunks: &[&[u8]]) -> Self {
        Self {
            chunks: chunks.iter().map(|k| k.to_vec()).collect(),
        }
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(front) = self.chunks.front_mut() else {
            return Ok(0);
        };
        let n = buf.len().min(front.len());
        buf[..n].copy_from_slice(&front[..n]);
        front.drain(..n);
        if front.is_empty() {
            self.chunks.pop_front();
        }
        Ok(n)
    }
}

/// Input whose every read fails.
#[derive(Debug)]
pub struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin went away"))
    }
}

pub const UP: &[u8] = b"\x1b[A";
pub const DOWN: &[u8] = b"\x1b[B";
pub const ENTER: &[u8] = b"\r";
pub const CTRL_C: &[u8] = b"\x03";
