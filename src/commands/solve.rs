//! Grid solving command
//!
//! Parses a board description, runs the search and keeps the top results.

use crate::core::{Dictionary, FoundWord, Grid, GridError};
use crate::solver::{SearchConfig, Settings, Solver};
use std::time::Duration;

/// Configuration for solving one board
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Board text, e.g. `"CAT/DOG/EEL"` or one row per line
    pub grid: String,
    pub settings: Settings,
    pub search: SearchConfig,
    /// Keep at most this many words (`None` = all)
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(grid: String) -> Self {
        Self {
            grid,
            settings: Settings::default(),
            search: SearchConfig::default(),
            limit: None,
        }
    }
}

/// Result of solving a board
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub grid: Grid,
    /// Ranked words, truncated to the configured limit
    pub words: Vec<FoundWord>,
    /// Words found before truncation
    pub total_found: usize,
    pub timed_out: bool,
    pub elapsed: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn best(&self) -> Option<&FoundWord> {
        self.words.first()
    }
}

/// Parse and solve the board described by `config`
///
/// # Errors
///
/// Returns `GridError` if the board text cannot be parsed.
pub fn solve_grid(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, GridError> {
    let grid = Grid::parse(&config.grid)?;
    Ok(solve_parsed(grid, config, dictionary))
}

/// Solve an already-built board
#[must_use]
pub fn solve_parsed(grid: Grid, config: &SolveConfig, dictionary: &Dictionary) -> SolveResult {
    let solver = Solver::new(dictionary, config.search.clone());
    let outcome = solver.search(&grid, &config.settings);

    let total_found = outcome.words.len();
    let mut words = outcome.words;
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    SolveResult {
        grid,
        words,
        total_found,
        timed_out: outcome.timed_out,
        elapsed: outcome.elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_words(["CAT", "CATS", "ACT", "SAT", "TAC", "SCAT"])
    }

    #[test]
    fn solve_grid_finds_words() {
        let mut config = SolveConfig::new("CA/TS".to_string());
        config.search = SearchConfig::unbounded();

        let result = solve_grid(&config, &dict()).unwrap();

        assert!(!result.timed_out);
        assert_eq!(result.total_found, result.words.len());
        assert!(result.words.iter().any(|w| w.word == "CATS"));
        // CATS and SCAT tie on score and length
        assert!(["CATS", "SCAT"].contains(&result.best().unwrap().word.as_str()));
    }

    #[test]
    fn solve_respects_limit() {
        let mut config = SolveConfig::new("CA/TS".to_string());
        config.search = SearchConfig::unbounded();
        config.limit = Some(2);

        let result = solve_grid(&config, &dict()).unwrap();

        assert_eq!(result.words.len(), 2);
        assert!(result.total_found > 2);
    }

    #[test]
    fn solve_invalid_grid_returns_error() {
        let config = SolveConfig::new("CAT/DO".to_string());
        assert!(matches!(
            solve_grid(&config, &dict()),
            Err(GridError::Ragged { .. })
        ));
    }

    #[test]
    fn solve_with_swaps_reports_gem_cost() {
        let mut config = SolveConfig::new("CAT".to_string());
        config.search = SearchConfig::unbounded();
        config.settings = Settings::with_swaps(3, 1);

        let result = solve_grid(&config, &dict()).unwrap();
        let sat = result.words.iter().find(|w| w.word == "SAT").unwrap();

        assert_eq!(sat.gem_cost, 3);
        assert_eq!(sat.swaps.len(), 1);
    }
}
