//! In-place collapsing of backslash-newline line continuations, following
//! the joining rules a makefile reader applies outside of recipe lines.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod collapse;
mod error;
mod options;

pub mod hexdump;


pub use collapse::{collapse_continuations, collapse_slice, ends_with_continuation};
pub use error::DumpParseError;
pub use options::CollapseOptions;
