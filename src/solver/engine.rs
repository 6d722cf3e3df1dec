//! Grid word search
//!
//! Depth-first walk from every occupied cell, descending the dictionary trie
//! one letter per step. Each cell is tried with its own letter and with a
//! few swapped letters while the swap budget lasts. Long prefixes whose
//! optimistic score bound cannot reach a fraction of the best score seen so
//! far are abandoned. Start cells run in priority order until the deadline
//! passes; each start collects into its own `Results`, and the per-start
//! results are merged in start order.

use super::config::{SearchConfig, Settings};
use super::path::PathState;
use super::results::Results;
use super::scoring::{self, MAX_LETTER_VALUE, letter_value};
use super::swaps::swap_options;
use crate::core::{Cell, Dictionary, FoundWord, Grid, Multiplier, NodeId, Position};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

/// Inconsistency detected while searching from one start cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFault {
    CellOutOfBounds(Position),
    DanglingNode(NodeId),
}

impl fmt::Display for SearchFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds(pos) => write!(f, "Position {pos} is outside the grid"),
            Self::DanglingNode(node) => write!(f, "Trie node {node:?} does not exist"),
        }
    }
}

impl std::error::Error for SearchFault {}

/// Best score seen anywhere in one search
///
/// Shared across start cells (and threads); reads are relaxed since the
/// value only steers pruning.
#[derive(Debug, Default)]
pub struct BestScore(AtomicU32);

impl BestScore {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Raise the best score to `score` if higher
    #[inline]
    pub fn offer(&self, score: u32) {
        self.0.fetch_max(score, Ordering::Relaxed);
    }
}

/// Board-wide maxima used to bound any completion of a prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScoreBounds {
    best_cell_value: u32,
    word_factor_product: u32,
    occupied: usize,
    max_len: usize,
}

impl ScoreBounds {
    fn new(grid: &Grid, max_len: usize) -> Self {
        let occupied_cells = || {
            grid.positions()
                .filter_map(|p| grid.cell(p))
                .filter(|c| c.is_occupied())
        };

        Self {
            best_cell_value: occupied_cells()
                .map(|c| MAX_LETTER_VALUE * c.letter_factor())
                .max()
                .unwrap_or(0),
            word_factor_product: occupied_cells()
                .map(Cell::word_factor)
                .fold(1, u32::saturating_mul),
            occupied: grid.occupied_count(),
            max_len,
        }
    }

    /// Upper bound on the score of any word starting with the current prefix
    ///
    /// Every remaining letter is assumed to be a top-value letter on the
    /// best letter-multiplier cell, and every word multiplier on the board
    /// is assumed to apply on top of those already collected.
    fn upper_bound(&self, state: &PathState) -> u32 {
        let len = state.len();
        let remaining = self
            .max_len
            .saturating_sub(len)
            .min(self.occupied.saturating_sub(len));

        let letter_sum = state
            .letter_sum()
            .saturating_add((remaining as u32).saturating_mul(self.best_cell_value));
        let word_multiplier = state
            .word_multiplier()
            .saturating_mul(self.word_factor_product);

        scoring::finish(
            letter_sum,
            word_multiplier,
            len + remaining,
            state.swaps().len(),
        )
    }
}

/// Result of searching one start cell
#[derive(Debug)]
enum StartOutcome {
    Completed(Results),
    Failed(SearchFault),
    Skipped,
}

/// Everything a single search shares across start cells
struct SearchContext<'s> {
    grid: &'s Grid,
    dictionary: &'s Dictionary,
    config: &'s SearchConfig,
    min_len: usize,
    max_len: usize,
    swap_budget: u32,
    bounds: ScoreBounds,
    best: &'s BestScore,
}

impl<'s> SearchContext<'s> {
    fn new(
        grid: &'s Grid,
        dictionary: &'s Dictionary,
        config: &'s SearchConfig,
        settings: &Settings,
        best: &'s BestScore,
    ) -> Self {
        let (min_len, max_len) = config.word_lengths();
        Self {
            grid,
            dictionary,
            config,
            min_len,
            max_len,
            swap_budget: settings.effective_max_swaps(),
            bounds: ScoreBounds::new(grid, max_len),
            best,
        }
    }

    /// Search from `start` unless `elapsed` is already past the deadline
    fn launch(&self, start: Position, elapsed: &dyn Fn() -> Duration) -> StartOutcome {
        if self
            .config
            .deadline
            .is_some_and(|deadline| elapsed() >= deadline)
        {
            return StartOutcome::Skipped;
        }

        match self.run_start(start) {
            Ok(found) => {
                tracing::debug!(
                    %start,
                    words = found.len(),
                    best = self.best.get(),
                    "start cell searched"
                );
                StartOutcome::Completed(found)
            }
            Err(fault) => StartOutcome::Failed(fault),
        }
    }

    fn run_start(&self, start: Position) -> Result<Results, SearchFault> {
        let mut state = PathState::new(self.grid.rows(), self.grid.cols());
        let mut found = Results::new();
        self.visit(&mut state, &mut found, start, NodeId::ROOT)?;
        Ok(found)
    }

    fn visit(
        &self,
        state: &mut PathState,
        found: &mut Results,
        pos: Position,
        node: NodeId,
    ) -> Result<(), SearchFault> {
        let cell = self
            .grid
            .cell(pos)
            .ok_or(SearchFault::CellOutOfBounds(pos))?;
        let Some(original) = cell.letter() else {
            return Ok(());
        };
        let trie_node = self
            .dictionary
            .node(node)
            .ok_or(SearchFault::DanglingNode(node))?;

        let swaps = swap_options(
            &self.config.swaps,
            pos,
            original,
            state.swaps(),
            self.swap_budget,
        );
        let options = std::iter::once((original, None))
            .chain(swaps.into_iter().map(|swap| (swap.replacement, Some(swap))));

        for (letter, swap) in options {
            // No dictionary word continues this prefix
            let Some(child) = trie_node.child(letter) else {
                continue;
            };

            let mut step = state
                .enter(pos, cell, letter, swap)
                .ok_or(SearchFault::CellOutOfBounds(pos))?;
            let len = step.len();

            if len >= self.config.prune_min_length && self.should_prune(&step) {
                continue;
            }

            if len >= self.min_len && self.dictionary.is_word(child) {
                let candidate = step.to_found_word();
                self.best.offer(candidate.score);
                found.record(candidate);
            }

            if len < self.max_len {
                for next in self.grid.neighbors(pos) {
                    if self.grid.is_occupied(next) && !step.is_visited(next) {
                        self.visit(&mut step, found, next, child)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn should_prune(&self, state: &PathState) -> bool {
        let best = self.best.get();
        best > 0
            && f64::from(self.bounds.upper_bound(state))
                < self.config.prune_threshold * f64::from(best)
    }
}

/// Outcome of a full search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Ranked words, best first
    pub words: Vec<FoundWord>,
    /// True if some start cells were skipped because the deadline passed
    pub timed_out: bool,
    pub starts_total: usize,
    pub starts_searched: usize,
    pub starts_failed: usize,
    pub elapsed: Duration,
}

/// Grid word search over a fixed dictionary
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: SearchConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over `dictionary` with the given tuning
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SearchConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub fn with_defaults(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, SearchConfig::default())
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every dictionary word on `grid`, ranked by score
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::{Dictionary, Grid};
    /// use spellcast_solver::solver::{SearchConfig, Settings, Solver};
    ///
    /// let dict = Dictionary::from_words(["cat", "act", "tac"]);
    /// let grid = Grid::parse("CAT").unwrap();
    /// let solver = Solver::new(&dict, SearchConfig::unbounded());
    ///
    /// let outcome = solver.search(&grid, &Settings::default());
    /// let words: Vec<&str> = outcome.words.iter().map(|w| w.word.as_str()).collect();
    /// assert_eq!(words, ["CAT", "TAC"]);
    /// ```
    #[must_use]
    pub fn search(&self, grid: &Grid, settings: &Settings) -> SearchOutcome {
        let started = Instant::now();
        self.search_with_clock(grid, settings, &|| started.elapsed())
    }

    /// Search with `elapsed` reporting time since the search began
    fn search_with_clock(
        &self,
        grid: &Grid,
        settings: &Settings,
        elapsed: &(dyn Fn() -> Duration + Sync),
    ) -> SearchOutcome {
        let starts = start_order(grid);
        let best = BestScore::new();
        let ctx = SearchContext::new(grid, self.dictionary, &self.config, settings, &best);

        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            starts = starts.len(),
            swap_budget = ctx.swap_budget,
            parallel = self.config.parallel,
            "starting grid search"
        );

        // Sequential iteration is lazy, so the deadline is checked between starts
        let outcomes: Vec<StartOutcome> = if self.config.parallel {
            starts
                .par_iter()
                .map(|&start| ctx.launch(start, elapsed))
                .collect()
        } else {
            starts
                .iter()
                .map(|&start| ctx.launch(start, elapsed))
                .collect()
        };

        let mut results = Results::new();
        let mut searched = 0;
        let mut failed = 0;
        let mut skipped = 0;
        for (start, outcome) in starts.iter().zip(outcomes) {
            match outcome {
                StartOutcome::Completed(found) => {
                    searched += 1;
                    results.merge(found);
                }
                StartOutcome::Failed(fault) => {
                    failed += 1;
                    tracing::warn!(%start, %fault, "skipping start cell after internal fault");
                }
                StartOutcome::Skipped => skipped += 1,
            }
        }

        let elapsed = elapsed();
        if skipped > 0 {
            tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                searched,
                skipped,
                "search deadline reached, returning partial results"
            );
        }
        tracing::info!(
            words = results.len(),
            best = results.best_score().unwrap_or(0),
            searched,
            elapsed_ms = elapsed.as_millis() as u64,
            "grid search finished"
        );

        SearchOutcome {
            words: results.finalize(),
            timed_out: skipped > 0,
            starts_total: starts.len(),
            starts_searched: searched,
            starts_failed: failed,
            elapsed,
        }
    }

    /// Search a board given as raw rows
    ///
    /// An empty or ragged board yields no words rather than an error.
    #[must_use]
    pub fn search_rows(&self, rows: Vec<Vec<Cell>>, settings: &Settings) -> SearchOutcome {
        match Grid::new(rows) {
            Ok(grid) => self.search(&grid, settings),
            Err(err) => {
                tracing::warn!(%err, "invalid grid, nothing to search");
                SearchOutcome::default()
            }
        }
    }
}

/// Search `grid` with the embedded dictionary and default tuning
///
/// # Examples
/// ```
/// use spellcast_solver::core::Grid;
/// use spellcast_solver::solver::{Settings, search};
///
/// let grid = Grid::parse("CAT").unwrap();
/// let words = search(&grid, &Settings::default());
/// assert!(words.iter().any(|w| w.word == "CAT"));
/// ```
#[must_use]
pub fn search(grid: &Grid, settings: &Settings) -> Vec<FoundWord> {
    Solver::with_defaults(Dictionary::embedded())
        .search(grid, settings)
        .words
}

/// Starting priority of a cell: letter value plus a multiplier bonus
#[must_use]
pub fn start_priority(cell: &Cell) -> u32 {
    cell.letter().map_or(0, letter_value) + cell.multiplier().map_or(0, Multiplier::start_bonus)
}

/// Occupied positions, highest priority first (row-major among equals)
fn start_order(grid: &Grid) -> Vec<Position> {
    let mut starts: Vec<(Position, u32)> = grid
        .positions()
        .filter_map(|pos| {
            let cell = grid.cell(pos)?;
            cell.is_occupied().then(|| (pos, start_priority(cell)))
        })
        .collect();

    starts.sort_by_key(|&(_, priority)| Reverse(priority));
    starts.into_iter().map(|(pos, _)| pos).collect()
}
