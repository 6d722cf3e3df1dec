//! Command implementations

pub mod benchmark;
pub mod random;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use random::{RandomConfig, random_grid};
pub use solve::{SolveConfig, SolveResult, solve_grid, solve_parsed};
