//! Feeds a set of makefile-flavoured sample lines through the
//! continuation collapser and hex-dumps every result, so the whitespace
//! behavior around each join can be inspected byte by byte.
//!
//! The samples cover the interesting shapes: plain rules, escaped
//! newlines followed by blanks, chains of continuations, blank
//! continuation lines, literal backslash pairs, and a comment that
//! continues onto the next line.
//!
//! Run with
//!
//! ```bash
//! cargo run -p linefold --example collapse_demo
//! ```

use linefold::{CollapseOptions, collapse_continuations, hexdump};

const SAMPLES: &[&[u8]] = &[
    b"space=\\\n\n",
    b"space=\\    \n",
    b"space=\\\nbar\n",
    // leading whitespace preserved
    b"   foo=\\\nbar\n",
    b"foo : bar ; baz\n",
    b"foo\\\nbar\\\nbaz\n",
    b"space=\\\n\\\n\\\n\n",
    b"foo\\\n:\\\nbar\\\n;\\\nbaz\n",
    b"   this  \\\n    is    \\\n   a\\\n  test   \\\n\n",
    b"   this  \\\n    is      a\\\n  test   \\\n\n",
    // from the GNU Make manual 3.1.1
    b"var:= one$\\\n   word\n",
    b"more-fun-in-assign\\\n=              \\\n   the    \\\n   leading   \\\n    and \\\n   trailing \\\n   white   \\\n     space     \\\n     should    \\\n    be    \\\n     eliminated \\\n   \\\n    \\\n   \\\n   including \\\n   \\\n    \\\n  blank  \\\n  \\\n   \\\n   lines\n",
    // literal backslash
    b"literal-backslash\\=foo\\ \n",
    // comments
    b"foo : # this comment\\\ncontinues on this line\n",
    b"foo\\\n\n",
];

fn main() {
    for &sample in SAMPLES {
        let mut buf = sample.to_vec();
        collapse_continuations(&mut buf, CollapseOptions::default());
        print!("{}", hexdump::dump(&buf));
        println!();
    }
}
