//! Core domain types for grid word search
//!
//! This module contains the board, the dictionary trie and the records the
//! search produces. Everything here is deterministic and free of I/O.

mod dictionary;
mod found;
mod grid;

pub use dictionary::{Dictionary, NodeId, TrieNode, WordError};
pub use found::{FoundWord, SwapRecord};
pub use grid::{Cell, Grid, GridError, Multiplier, Position};
