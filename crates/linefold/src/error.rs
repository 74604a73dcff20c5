use alloc::string::String;

use thiserror::Error;

/// Errors raised while reversing a hex dump back into bytes.
///
/// Line numbers are 1-based and count every input line, including the
/// junk lines [`crate::hexdump::parse`] skips.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DumpParseError {
    /// A dump line carried an offset column but no hex bytes after it.
    #[error("line {line}: missing hex field")]
    MissingHexField {
        /// 1-based input line number.
        line: usize,
    },
    /// A token in the hex field was not a two-digit hexadecimal byte.
    #[error("line {line}: invalid hex byte {token:?}")]
    InvalidHexByte {
        /// 1-based input line number.
        line: usize,
        /// The offending token, verbatim.
        token: String,
    },
}
