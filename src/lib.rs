//! Spellcast Solver
//!
//! Finds every dictionary word on a Spellcast letter grid, scores it with
//! letter and word multipliers, and optionally spends gems to swap letters.
//!
//! # Quick Start
//!
//! ```rust
//! use spellcast_solver::core::{Dictionary, Grid};
//! use spellcast_solver::solver::{SearchConfig, Settings, Solver};
//!
//! let dict = Dictionary::from_words(["cat", "sat", "act"]);
//! let grid = Grid::parse("CA(DW)T").unwrap();
//!
//! let solver = Solver::new(&dict, SearchConfig::unbounded());
//! let outcome = solver.search(&grid, &Settings::with_swaps(3, 1));
//!
//! let best = &outcome.words[0];
//! assert_eq!(best.word, "CAT");
//! assert_eq!(best.score, 12);
//! ```

// Core domain types
pub mod core;

// Grid search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
