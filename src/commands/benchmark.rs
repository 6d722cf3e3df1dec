//! Benchmark command
//!
//! Solves a batch of seeded random boards and aggregates the results.

use super::random::{RandomConfig, generate};
use crate::core::Dictionary;
use crate::solver::{SearchConfig, Settings, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub boards: usize,
    pub seed: u64,
    pub board: RandomConfig,
    pub settings: Settings,
    pub search: SearchConfig,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            boards: 20,
            seed: 0,
            board: RandomConfig::default(),
            settings: Settings::default(),
            search: SearchConfig::default(),
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub best_score: u32,
    pub best_word: Option<String>,
    pub average_best_score: f64,
    pub timeouts: usize,
    pub failed_starts: usize,
    pub duration: Duration,
    pub slowest_board: Duration,
    pub boards_per_second: f64,
}

/// Solve `config.boards` random boards generated from `config.seed`
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, dictionary: &Dictionary) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let solver = Solver::new(dictionary, config.search.clone());

    let pb = if config.show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut result = BenchmarkResult::default();
    let mut best_score_sum = 0u64;

    for index in 0..config.boards {
        let grid = match generate(&mut rng, &config.board) {
            Ok(grid) => grid,
            Err(err) => {
                tracing::warn!(%err, "cannot generate benchmark board");
                break;
            }
        };

        let outcome = solver.search(&grid, &config.settings);
        tracing::debug!(board = index, words = outcome.words.len(), "benchmark board solved");

        result.boards += 1;
        result.total_words += outcome.words.len();
        result.failed_starts += outcome.starts_failed;
        result.slowest_board = result.slowest_board.max(outcome.elapsed);
        if outcome.timed_out {
            result.timeouts += 1;
        }
        if let Some(best) = outcome.words.first() {
            best_score_sum += u64::from(best.score);
            if best.score > result.best_score || result.best_word.is_none() {
                result.best_score = best.score;
                result.best_word = Some(best.word.clone());
            }
        }

        pb.set_message(format!("best {}", result.best_score));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    result.duration = start.elapsed();
    if result.boards > 0 {
        result.average_words = result.total_words as f64 / result.boards as f64;
        result.average_best_score = best_score_sum as f64 / result.boards as f64;
        result.boards_per_second =
            result.boards as f64 / result.duration.as_secs_f64().max(f64::EPSILON);
    }

    tracing::info!(
        boards = result.boards,
        words = result.total_words,
        timeouts = result.timeouts,
        "benchmark finished"
    );
    result
}
