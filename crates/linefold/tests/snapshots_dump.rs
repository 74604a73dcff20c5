#![expect(missing_docs)]

use linefold::{CollapseOptions, collapse_continuations, hexdump};

fn collapse_and_dump(input: &[u8]) -> String {
    let mut buf = input.to_vec();
    collapse_continuations(&mut buf, CollapseOptions::default());
    hexdump::dump(&buf)
}

#[test]
fn snapshot_token_chain() {
    insta::assert_snapshot!(
        collapse_and_dump(b"foo\\\n:\\\nbar\\\n;\\\nbaz\n"),
        @"0x00000000  66 6f 6f 20 3a 20 62 61 72 20 3b 20 62 61 7a 0a  foo : bar ; baz."
    );
}

#[test]
fn snapshot_whitespace_heavy_chain() {
    insta::assert_snapshot!(
        collapse_and_dump(b"   this  \\\n    is    \\\n   a\\\n  test   \\\n\n"),
        @r"
0x00000000  20 20 20 74 68 69 73 20 69 73 20 61 20 74 65 73     this is a tes
0x00000010  74 20 0a                                         t .
"
    );
}

#[test]
fn dump_round_trips_through_parse() {
    let mut buf = b"more-fun-in-assign\\\n=              \\\n   the    \\\n   end\n".to_vec();
    collapse_continuations(&mut buf, CollapseOptions::default());
    let rendered = hexdump::dump(&buf);
    assert_eq!(hexdump::parse(&rendered).unwrap(), buf);
}
