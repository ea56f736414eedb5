//! # Input Decoder
//!
//! Turns raw stdin bytes into key presses.
//!
//! Each call performs exactly one `read` into a three-byte buffer. An arrow
//! key arrives as `ESC [ A` / `ESC [ B` in a single read; any other read
//! yields its first byte.
//!
//! ## Known limitation
//!
//! An escape sequence split across reads is not reassembled. Each fragment
//! decodes to its first byte (`ESC`, `[`, `A`, ...), none of which are bound
//! to an action, so the key press is dropped.

use std::io::{self, Read};

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    /// Any other input, reported as the first byte read.
    Byte(u8),
}

/// What the menu does in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Cancel,
    Ignore,
}

impl Key {
    /// Map a key to its menu action.
    ///
    /// | Key | Action |
    /// |-----|--------|
    /// | `↑`, `k` | [`Action::MoveUp`] |
    /// | `↓`, `j` | [`Action::MoveDown`] |
    /// | `\r`, `\n` | [`Action::Select`] |
    /// | `Ctrl+C` (byte 3) | [`Action::Cancel`] |
    pub fn action(self) -> Action {
        match self {
            Key::Up | Key::Byte(b'k') => Action::MoveUp,
            Key::Down | Key::Byte(b'j') => Action::MoveDown,
            Key::Byte(b'\r' | b'\n') => Action::Select,
            Key::Byte(CTRL_C) => Action::Cancel,
            Key::Byte(_) => Action::Ignore,
        }
    }
}

/// Decode the bytes returned by a single read.
pub fn decode(bytes: &[u8]) -> Option<Key> {
    match bytes {
        [] => None,
        [ESC, b'[', b'A'] => Some(Key::Up),
        [ESC, b'[', b'B'] => Some(Key::Down),
        [first, ..] => Some(Key::Byte(*first)),
    }
}

/// Block until a key press arrives.
///
/// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
pub fn read_key<R: Read>(input: &mut R) -> io::Result<Key> {
    let mut buf = [0u8; 3];
    let n = loop {
        match input.read(&mut buf) {
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            other => break other?,
        }
    };

    let key = decode(&buf[..n])
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))?;
    log::trace!("read {n} byte(s) as {key:?}");
    Ok(key)
}
