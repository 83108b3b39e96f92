#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the bulikit tokenizer and parser.
//!
//! - [`Cursor`]: bidirectional cursor over a slice with a saved-position stack
//! - [`Position`] / [`Span`]: 1-based row/column locations
//! - [`ContentKey`]: content hash used to memoize work on identical text

pub mod colors;
mod cursor;
mod hash;
mod position;
pub mod utils;

pub use colors::Colors;
pub use cursor::Cursor;
pub use hash::ContentKey;
pub use position::{Position, Span};

#[cfg(test)]
mod cursor_tests;
