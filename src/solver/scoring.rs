//! Word scoring
//!
//! Score = (Σ letter value × letter multiplier) × Π word multipliers
//!       + 3 × max(0, length − 4)
//!       − 3 gems per swap (floored at zero)
//!
//! Everything is integer arithmetic, so the same inputs always give the
//! same score.

use crate::core::{Grid, Position, SwapRecord};

/// Gems consumed by a single letter swap
pub const GEMS_PER_SWAP: u32 = 3;

/// Words longer than this earn a length bonus
pub const LENGTH_BONUS_THRESHOLD: usize = 4;

/// Bonus points per letter beyond the threshold
pub const LENGTH_BONUS_PER_LETTER: u32 = 3;

/// Highest value in the letter table
pub const MAX_LETTER_VALUE: u32 = 10;

/// Spellcast letter values, A..=Z
const LETTER_VALUES: [u32; 26] = [
    1,  // A
    4,  // B
    4,  // C
    2,  // D
    1,  // E
    4,  // F
    3,  // G
    3,  // H
    1,  // I
    10, // J
    5,  // K
    2,  // L
    4,  // M
    2,  // N
    1,  // O
    4,  // P
    10, // Q
    1,  // R
    1,  // S
    1,  // T
    2,  // U
    5,  // V
    4,  // W
    8,  // X
    3,  // Y
    10, // Z
];

/// Base value of a letter
///
/// Accepts either case; anything that is not a letter scores 1.
///
/// # Examples
/// ```
/// use spellcast_solver::solver::scoring::letter_value;
///
/// assert_eq!(letter_value(b'A'), 1);
/// assert_eq!(letter_value(b'z'), 10);
/// ```
#[inline]
#[must_use]
pub const fn letter_value(letter: u8) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_VALUES[(upper - b'A') as usize]
    } else {
        1
    }
}

/// Gem cost of using `swaps` swaps
#[inline]
#[must_use]
pub const fn gem_cost(swaps: usize) -> u32 {
    (swaps as u32).saturating_mul(GEMS_PER_SWAP)
}

/// Length bonus for a word of `len` letters
#[inline]
#[must_use]
pub const fn length_bonus(len: usize) -> u32 {
    (len.saturating_sub(LENGTH_BONUS_THRESHOLD) as u32).saturating_mul(LENGTH_BONUS_PER_LETTER)
}

/// Final score from the running totals the search keeps per path
///
/// `letter_sum` already includes letter multipliers; `word_multiplier` is
/// the product of the word multipliers crossed so far.
#[inline]
#[must_use]
pub const fn finish(letter_sum: u32, word_multiplier: u32, len: usize, swaps: usize) -> u32 {
    letter_sum
        .saturating_mul(word_multiplier)
        .saturating_add(length_bonus(len))
        .saturating_sub(gem_cost(swaps))
}

/// Score a word spelled along `path`
///
/// `word` holds the letters actually played, so swapped cells contribute
/// their replacement letter. Multipliers come from the grid cells on the
/// path. Positions outside the grid contribute their letter with no bonus.
///
/// # Examples
/// ```
/// use spellcast_solver::core::{Grid, Position};
/// use spellcast_solver::solver::scoring::score;
///
/// let grid = Grid::parse("CA(DW)T").unwrap();
/// let path: Vec<_> = (0..3).map(|c| Position::new(0, c)).collect();
/// // (4 + 1 + 1) × 2
/// assert_eq!(score("CAT", &path, &grid, &[]), 12);
/// ```
#[must_use]
pub fn score(word: &str, path: &[Position], grid: &Grid, swaps: &[SwapRecord]) -> u32 {
    let (letter_sum, word_multiplier) = word.bytes().zip(path).fold(
        (0u32, 1u32),
        |(sum, multiplier), (letter, &pos)| match grid.cell(pos) {
            Some(cell) => (
                sum.saturating_add(letter_value(letter) * cell.letter_factor()),
                multiplier.saturating_mul(cell.word_factor()),
            ),
            None => (sum.saturating_add(letter_value(letter)), multiplier),
        },
    );

    finish(letter_sum, word_multiplier, word.len(), swaps.len())
}
