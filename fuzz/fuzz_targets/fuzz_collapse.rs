#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linefold::{CollapseOptions, collapse_continuations, collapse_slice};

#[derive(Debug, Arbitrary)]
struct Input {
    posix_pedantic: bool,
    data: Vec<u8>,
}

fn has_escaped_newline(bytes: &[u8]) -> bool {
    bytes.windows(2).any(|pair| pair == b"\\\n")
}

fn collapse(input: &Input) {
    let options = CollapseOptions {
        posix_pedantic: input.posix_pedantic,
    };

    let mut buf = input.data.clone();
    collapse_continuations(&mut buf, options);
    assert!(buf.len() <= input.data.len());

    // The slice-level operation must agree with the truncating wrapper.
    let mut slice = input.data.clone();
    let len = collapse_slice(&mut slice, options);
    assert_eq!(&slice[..len], &buf[..]);

    // A pass that leaves no escaped newline behind has reached a fixed
    // point; even backslash runs legitimately keep their newline.
    if !has_escaped_newline(&buf) {
        let mut again = buf.clone();
        collapse_continuations(&mut again, options);
        assert_eq!(again, buf);
    }
}

fuzz_target!(|input: Input| collapse(&input));
