//! Random board generation
//!
//! Letters are drawn from a frequency-weighted table so boards look like
//! real games: plenty of vowels and common consonants, rare J/Q/X/Z.

use crate::core::{Cell, Grid, GridError, Multiplier, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letter weights used for random boards
pub const LETTER_WEIGHTS: [(u8, u32); 26] = [
    (b'A', 8),
    (b'E', 7),
    (b'I', 6),
    (b'O', 5),
    (b'U', 4),
    (b'R', 4),
    (b'S', 4),
    (b'T', 4),
    (b'L', 3),
    (b'N', 3),
    (b'D', 3),
    (b'H', 3),
    (b'C', 2),
    (b'M', 2),
    (b'F', 2),
    (b'P', 2),
    (b'G', 1),
    (b'W', 1),
    (b'Y', 1),
    (b'B', 1),
    (b'K', 1),
    (b'V', 1),
    (b'J', 1),
    (b'X', 1),
    (b'Q', 1),
    (b'Z', 1),
];

/// Shape and options for a random board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomConfig {
    pub rows: usize,
    pub cols: usize,
    /// Place one letter multiplier and one double-word cell
    pub multipliers: bool,
    /// Fixed seed for reproducible boards
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            multipliers: true,
            seed: None,
        }
    }
}

/// Generate a random board
///
/// # Errors
///
/// Returns `GridError::Empty` if either dimension is zero.
///
/// # Examples
/// ```
/// use spellcast_solver::commands::random::{RandomConfig, random_grid};
///
/// let config = RandomConfig { seed: Some(7), ..RandomConfig::default() };
/// let a = random_grid(&config).unwrap();
/// let b = random_grid(&config).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 25);
/// ```
pub fn random_grid(config: &RandomConfig) -> Result<Grid, GridError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate(&mut rng, config)
}

/// Generate a random board from an existing generator
///
/// # Errors
///
/// Returns `GridError::Empty` if either dimension is zero.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &RandomConfig) -> Result<Grid, GridError> {
    if config.rows == 0 || config.cols == 0 {
        return Err(GridError::Empty);
    }

    let mut rows = Vec::with_capacity(config.rows);
    for _ in 0..config.rows {
        let row = (0..config.cols)
            .map(|_| Cell::new(char::from(random_letter(rng))))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let cells = config.rows * config.cols;
    if config.multipliers && cells >= 2 {
        let letter_slot = rng.random_range(0..cells);
        let mut word_slot = rng.random_range(0..cells - 1);
        if word_slot >= letter_slot {
            word_slot += 1;
        }

        let letter_multiplier = if rng.random_bool(1.0 / 3.0) {
            Multiplier::TripleLetter
        } else {
            Multiplier::DoubleLetter
        };
        place(&mut rows, config.cols, letter_slot, letter_multiplier);
        place(&mut rows, config.cols, word_slot, Multiplier::DoubleWord);
    }

    Grid::new(rows)
}

fn place(rows: &mut [Vec<Cell>], cols: usize, slot: usize, multiplier: Multiplier) {
    let pos = Position::new(slot / cols, slot % cols);
    if let Some(cell) = rows.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
        *cell = cell.with_multiplier(multiplier);
    }
}

/// Draw one letter according to `LETTER_WEIGHTS`
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let total: u32 = LETTER_WEIGHTS.iter().map(|&(_, w)| w).sum();
    let mut pick = rng.random_range(0..total);
    for &(letter, weight) in &LETTER_WEIGHTS {
        if pick < weight {
            return letter;
        }
        pick -= weight;
    }
    LETTER_WEIGHTS[0].0
}
