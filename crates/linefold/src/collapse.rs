//! Collapsing of backslash-newline continuations inside a byte buffer.
//!
//! The transformation is the one a makefile reader performs before
//! tokenizing: every escaped newline joins its line with the next one,
//! and each adjacent backslash pair in front of a newline becomes a
//! single literal backslash. The rewrite happens in place with a write
//! cursor trailing the read cursor, so the buffer only ever shrinks.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::options::CollapseOptions;

const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Collapses every backslash-newline join in `line`, in place, and
/// returns the new logical length.
///
/// Bytes past the returned length are left as garbage. The scan never
/// allocates; overlapping moves use [`slice::copy_within`].
///
/// For each newline, the run of `k` backslashes immediately before it
/// decides the outcome: `k / 2` backslashes survive (pairs collapse to
/// single literal backslashes), and an odd `k` marks the newline as
/// escaped. An escaped newline is replaced by exactly one space; blanks
/// at the start of the continued line are always consumed, and blanks
/// already written before the join are additionally dropped unless
/// [`CollapseOptions::posix_pedantic`] is set. An unescaped newline is
/// kept as-is.
#[must_use = "bytes past the returned length are garbage"]
pub fn collapse_slice(line: &mut [u8], options: CollapseOptions) -> usize {
    let mut out = 0;
    let mut input = 0;

    while let Some(found) = line[input..].find_byte(b'\n') {
        let newline = input + found;

        // Backslash run directly before the newline. The run can never
        // reach past `input`: the byte there is a newline or a blank.
        let mut run = 0;
        while newline - run > 0 && line[newline - run - 1] == b'\\' {
            run += 1;
        }

        // Keep half of the run; the odd one out escapes the newline and
        // is dropped together with it.
        let kept = newline - input - (run - run / 2);
        line.copy_within(input..input + kept, out);
        out += kept;
        input = newline + 1;

        if run % 2 == 1 {
            while input < line.len() && is_blank(line[input]) {
                input += 1;
            }
            if !options.posix_pedantic {
                while out > 0 && is_blank(line[out - 1]) {
                    out -= 1;
                }
            }
            line[out] = b' ';
        } else {
            line[out] = b'\n';
        }
        out += 1;
    }

    let tail = line.len() - input;
    line.copy_within(input.., out);
    out + tail
}

/// Collapses every backslash-newline join in `buf` and truncates it to
/// the collapsed length.
///
/// # Examples
///
/// ```rust
/// use linefold::{CollapseOptions, collapse_continuations};
///
/// let mut buf = b"foo=\\\n   bar\n".to_vec();
/// collapse_continuations(&mut buf, CollapseOptions::default());
/// assert_eq!(buf, b"foo= bar\n");
/// ```
pub fn collapse_continuations(buf: &mut Vec<u8>, options: CollapseOptions) {
    let len = collapse_slice(buf, options);
    buf.truncate(len);
}

/// Whether a physical line ends in an escaped newline, meaning the next
/// physical line belongs to the same logical line.
///
/// The line may or may not still carry its trailing newline. A trailing
/// run of backslashes escapes the newline only when its length is odd;
/// an even run is a sequence of literal backslash pairs.
///
/// # Examples
///
/// ```rust
/// use linefold::ends_with_continuation;
///
/// assert!(ends_with_continuation(b"foo \\\n"));
/// assert!(ends_with_continuation(b"foo \\"));
/// assert!(!ends_with_continuation(b"foo \\\\\n"));
/// assert!(!ends_with_continuation(b"foo\n"));
/// ```
#[must_use]
pub fn ends_with_continuation(line: &[u8]) -> bool {
    let body = match line.last() {
        Some(b'\n') => &line[..line.len() - 1],
        _ => line,
    };
    let run = body.iter().rev().take_while(|&&byte| byte == b'\\').count();
    run % 2 == 1
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{collapse_continuations, collapse_slice, ends_with_continuation};
    use crate::CollapseOptions;

    #[test]
    fn slice_reports_logical_length() {
        let mut line = *b"a\\\nb\n";
        let len = collapse_slice(&mut line, CollapseOptions::default());
        assert_eq!(len, 4);
        assert_eq!(&line[..len], b"a b\n");
    }

    #[test]
    fn vec_wrapper_truncates() {
        let mut buf: Vec<u8> = b"a\\\nb\n".to_vec();
        collapse_continuations(&mut buf, CollapseOptions::default());
        assert_eq!(buf, b"a b\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        let mut line: [u8; 0] = [];
        assert_eq!(collapse_slice(&mut line, CollapseOptions::default()), 0);
    }

    #[test]
    fn continuation_detection_counts_parity() {
        assert!(ends_with_continuation(b"foo\\"));
        assert!(ends_with_continuation(b"foo\\\n"));
        assert!(ends_with_continuation(b"foo\\\\\\\n"));
        assert!(!ends_with_continuation(b"foo\\\\\n"));
        assert!(!ends_with_continuation(b"foo\n"));
        assert!(!ends_with_continuation(b"foo"));
        assert!(!ends_with_continuation(b""));
        assert!(ends_with_continuation(b"\\"));
    }
}
