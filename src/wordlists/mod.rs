//! Word lists for grid search
//!
//! The default dictionary is compiled into the binary; custom lists can be
//! loaded from disk with [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
