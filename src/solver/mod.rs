//! Word search over a letter grid
//!
//! The engine walks the board depth-first against the dictionary trie,
//! optionally swapping letters for gems, and ranks what it finds.

pub mod config;
mod engine;
pub mod path;
pub mod results;
pub mod scoring;
pub mod swaps;

pub use config::{SearchConfig, Settings, SwapPolicy};
pub use engine::{BestScore, SearchFault, SearchOutcome, Solver, search, start_priority};
pub use results::Results;
