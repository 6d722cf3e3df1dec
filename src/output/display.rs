//! Display functions for command results

use super::formatters::{cell_label, path_to_string, score_bar, swaps_to_string};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{FoundWord, Grid, Position};
use colored::Colorize;

/// Print a board, highlighting the cells of `word` if given
///
/// Cells on the path show their step number; swapped cells are shown in
/// magenta with the replacement letter.
pub fn print_grid(grid: &Grid, word: Option<&FoundWord>) {
    for (row, cells) in grid.iter_rows().enumerate() {
        let mut line = String::from("   ");
        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let step = word.and_then(|w| w.path.iter().position(|&p| p == pos));

            let rendered = match (step, word) {
                (Some(index), Some(w)) => match w.swap_at(pos) {
                    Some(swap) => format!("{}{:<4}", char::from(swap.replacement), index + 1)
                        .magenta()
                        .bold()
                        .to_string(),
                    None => format!("{}{:<4}", cell.letter().map_or('·', char::from), index + 1)
                        .bright_yellow()
                        .bold()
                        .to_string(),
                },
                _ => match cell.multiplier() {
                    Some(_) => cell_label(cell).cyan().to_string(),
                    None if cell.is_occupied() => cell_label(cell),
                    None => cell_label(cell).bright_black().to_string(),
                },
            };
            line.push_str(&rendered);
        }
        println!("{line}");
    }
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board {}×{}: {} words found in {:.0}ms",
        result.grid.rows(),
        result.grid.cols(),
        result.total_found.to_string().bright_yellow().bold(),
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_grid(&result.grid, result.best());
    println!();

    let best = result.best().map_or(0, |w| w.score);
    for (rank, word) in result.words.iter().enumerate() {
        let gems = if word.uses_swaps() {
            format!(" -{} gems", word.gem_cost).magenta().to_string()
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:<12} {:>4} {}{}",
            rank + 1,
            word.word.bold(),
            word.score.to_string().bright_yellow(),
            score_bar(word.score, best, 20).green(),
            gems
        );

        if verbose {
            println!("       path:  {}", path_to_string(&word.path).bright_black());
            let bonuses = word.multipliers(&result.grid);
            if !bonuses.is_empty() {
                let tags: Vec<&str> = bonuses.iter().map(|m| m.tag()).collect();
                println!("       bonus: {}", tags.join(" ").cyan());
            }
            if word.uses_swaps() {
                println!("       swaps: {}", swaps_to_string(&word.swaps).magenta());
            }
        }
    }

    if result.words.is_empty() {
        println!("{}", "No words found".yellow());
    }
    if result.timed_out {
        println!(
            "\n{}",
            "⏱  Search hit its time limit; results are partial".yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Words per board:  {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Avg best score:   {:.1}", result.average_best_score);
    if let Some(word) = &result.best_word {
        println!(
            "   Best word:        {} ({})",
            word.green().bold(),
            result.best_score
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Slowest board:    {:.0}ms",
        result.slowest_board.as_secs_f64() * 1000.0
    );
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.timeouts > 0 {
        println!(
            "   Timeouts:         {}",
            result.timeouts.to_string().yellow()
        );
    }
    if result.failed_starts > 0 {
        println!(
            "   Failed starts:    {}",
            result.failed_starts.to_string().red()
        );
    }
}
