//! Fixed-width hex dump rendering, and its inverse.
//!
//! The layout is sixteen bytes per line: a `0x`-prefixed offset column,
//! the bytes in lowercase hex, then the same bytes as printable ASCII
//! with `.` standing in for everything unprintable. [`parse`] reverses a
//! dump (its own or a pasted one) back into bytes, ignoring any
//! surrounding junk lines.
//!
//! This is a diagnostic surface: collapsing results are easiest to check
//! by eye when trailing blanks and inserted join spaces are visible as
//! `20` bytes rather than invisible whitespace.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::error::DumpParseError;

const BYTES_PER_LINE: usize = 16;
/// Sixteen two-digit bytes separated by single spaces.
const HEX_WIDTH: usize = BYTES_PER_LINE * 3 - 1;

/// Renders `bytes` as a hex dump into `out`.
///
/// Every line, including the last, ends with a newline; empty input
/// renders as nothing. The hex column of a final partial line is padded
/// with spaces so the ASCII column stays aligned.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_dump<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    let width = HEX_WIDTH;
    for (index, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let mut hex = String::with_capacity(HEX_WIDTH);
        let mut ascii = String::with_capacity(chunk.len());
        for (i, &byte) in chunk.iter().enumerate() {
            if i > 0 {
                hex.push(' ');
            }
            write!(hex, "{byte:02x}")?;
            ascii.push(if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            });
        }
        writeln!(out, "0x{:08x}  {hex:<width$}  {ascii}", index * BYTES_PER_LINE)?;
    }
    Ok(())
}

/// Renders `bytes` as a hex dump string.
#[must_use]
pub fn dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dump(&mut out, bytes);
    out
}

/// Reverses a hex dump into the bytes it rendered.
///
/// Lines that do not start with `0x` are skipped, so a dump can be
/// pasted together with shell prompts or log prefixes. For each dump
/// line only the fixed-width hex column is decoded; the ASCII column is
/// ignored.
///
/// # Errors
///
/// [`DumpParseError::MissingHexField`] when a `0x` line has nothing to
/// decode, [`DumpParseError::InvalidHexByte`] when a token in the hex
/// column is not a two-digit hex byte.
pub fn parse(text: &str) -> Result<Vec<u8>, DumpParseError> {
    let mut bytes = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();
        if !line.starts_with("0x") {
            continue;
        }
        let Some((_, rest)) = line.split_once("  ") else {
            return Err(DumpParseError::MissingHexField { line: number });
        };
        // Cutting at the column boundary keeps hex-looking ASCII text out
        // of the decode.
        let field = rest.get(..HEX_WIDTH).unwrap_or(rest);
        let mut seen = false;
        for token in field.split_whitespace() {
            if token.len() != 2 {
                return Err(DumpParseError::InvalidHexByte {
                    line: number,
                    token: token.into(),
                });
            }
            let value = u8::from_str_radix(token, 16).map_err(|_| {
                DumpParseError::InvalidHexByte {
                    line: number,
                    token: token.into(),
                }
            })?;
            bytes.push(value);
            seen = true;
        }
        if !seen {
            return Err(DumpParseError::MissingHexField { line: number });
        }
    }
    Ok(bytes)
}
