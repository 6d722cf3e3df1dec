//! Formatting utilities for terminal output

use crate::core::{Cell, Position, SwapRecord};

/// Width of one rendered board cell
pub const CELL_WIDTH: usize = 5;

/// Format a path as `(r,c) → (r,c) → …`
#[must_use]
pub fn path_to_string(path: &[Position]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format swaps as `C→S@(0,0), A→E@(0,1)`
#[must_use]
pub fn swaps_to_string(swaps: &[SwapRecord]) -> String {
    swaps
        .iter()
        .map(|s| {
            format!(
                "{}→{}@{}",
                char::from(s.original),
                char::from(s.replacement),
                s.position
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain label for a board cell, padded to `CELL_WIDTH`
///
/// Blank cells render as `·`, multipliers as a trailing tag: `Q TL`.
#[must_use]
pub fn cell_label(cell: &Cell) -> String {
    let letter = cell.letter().map_or('·', char::from);
    let label = match cell.multiplier() {
        Some(m) => format!("{letter} {}", m.tag()),
        None => letter.to_string(),
    };
    format!("{label:<CELL_WIDTH$}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar comparing a word's score to the best score on the board
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}
