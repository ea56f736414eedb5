//! # Cursor Position Probe
//!
//! Asks the terminal where the cursor is with a Device Status Report
//! (`ESC [ 6 n`) and parses the `ESC [ <row> ; <col> R` reply.
//!
//! The terminal must already be in raw mode, otherwise the reply is echoed
//! and held back until the user presses Enter.

use std::io::{self, Read, Write};
use thiserror::Error;

/// The Device Status Report request for the cursor position.
pub const CURSOR_POSITION_QUERY: &[u8] = b"\x1b[6n";

/// Replies longer than this are treated as garbage.
const MAX_REPLY_LEN: usize = 32;

/// Why the cursor position could not be determined.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("cursor position query failed: {0}")]
    Io(#[source] io::Error),

    /// Input ended before the reply terminator arrived.
    #[error("input closed before cursor position reply")]
    Eof,

    /// The reply was not `ESC [ digits ; digits R`.
    #[error("malformed cursor position reply: {:?}", String::from_utf8_lossy(.0))]
    Malformed(Vec<u8>),
}

/// Query the cursor position. Returns 1-based `(row, col)`.
///
/// Reads one byte at a time until `R` so nothing typed after the reply is
/// consumed.
pub fn cursor_position<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(u16, u16), ProbeError> {
    output.write_all(CURSOR_POSITION_QUERY).map_err(ProbeError::Io)?;
    output.flush().map_err(ProbeError::Io)?;

    let mut reply = Vec::with_capacity(16);
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Err(ProbeError::Eof),
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(ProbeError::Io(err)),
        }
        reply.push(byte[0]);
        if byte[0] == b'R' {
            break;
        }
        if reply.len() >= MAX_REPLY_LEN {
            return Err(ProbeError::Malformed(reply));
        }
    }

    parse_cursor_report(&reply).ok_or(ProbeError::Malformed(reply))
}

/// Parse `ESC [ <row> ; <col> R` into `(row, col)`.
pub fn parse_cursor_report(reply: &[u8]) -> Option<(u16, u16)> {
    let body = reply.strip_prefix(b"\x1b[")?.strip_suffix(b"R")?;
    let body = std::str::from_utf8(body).ok()?;
    let (row, col) = body.split_once(';')?;

    if !is_digits(row) || !is_digits(col) {
        return None;
    }
    Some((row.parse().ok()?, col.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_report() {
        assert_eq!(parse_cursor_report(b"\x1b[12;40R"), Some((12, 40)));
        assert_eq!(parse_cursor_report(b"\x1b[1;1R"), Some((1, 1)));
    }

    #[test]
    fn test_parse_cursor_report_rejects_malformed() {
        assert_eq!(parse_cursor_report(b"12;40R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[12;40"), None);
        assert_eq!(parse_cursor_report(b"\x1b[12R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[;4R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[a;4R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[+1;4R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[99999;4R"), None);
    }

    #[test]
    fn test_cursor_position_writes_query_and_reads_reply() {
        let mut input: &[u8] = b"\x1b[7;3Rj";
        let mut output = Vec::new();

        let pos = cursor_position(&mut input, &mut output).expect("probe");

        assert_eq!(pos, (7, 3));
        assert_eq!(output, CURSOR_POSITION_QUERY);
        // The key press after the reply is left unread.
        assert_eq!(input, b"j");
    }

    #[test]
    fn test_cursor_position_eof() {
        let mut input: &[u8] = b"\x1b[7;";
        let err = cursor_position(&mut input, &mut Vec::new()).expect_err("eof");
        assert!(matches!(err, ProbeError::Eof));
    }

    #[test]
    fn test_cursor_position_malformed() {
        let mut input: &[u8] = b"\x1b[x;yR";
        let err = cursor_position(&mut input, &mut Vec::new()).expect_err("malformed");
        assert!(matches!(err, ProbeError::Malformed(_)));
        assert_eq!(err.to_string(), "malformed cursor position reply: \"\\u{1b}[x;yR\"");
    }

    #[test]
    fn test_probe_error_messages() {
        assert_eq!(ProbeError::Eof.to_string(), "input closed before cursor position reply");

        let err = ProbeError::Io(io::Error::other("tty gone"));
        assert_eq!(err.to_string(), "cursor position query failed: tty gone");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_cursor_position_gives_up_on_runaway_reply() {
        let garbage = vec![b'1'; 100];
        let mut input = garbage.as_slice();
        let err = cursor_position(&mut input, &mut Vec::new()).expect_err("too long");
        assert!(matches!(err, ProbeError::Malformed(ref r) if r.len() == MAX_REPLY_LEN));
    }
}
