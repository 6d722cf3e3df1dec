//! Search result records

use super::grid::{Grid, Multiplier, Position};
use std::fmt;

/// A temporary letter substitution on one cell of one path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRecord {
    pub position: Position,
    pub original: u8,
    pub replacement: u8,
}

impl SwapRecord {
    #[must_use]
    pub const fn new(position: Position, original: u8, replacement: u8) -> Self {
        Self {
            position,
            original,
            replacement,
        }
    }
}

impl fmt::Display for SwapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}→{}",
            self.position,
            char::from(self.original),
            char::from(self.replacement)
        )
    }
}

/// A dictionary word spelled along a board path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
    pub score: u32,
    pub swaps: Vec<SwapRecord>,
    pub gem_cost: u32,
}

impl FoundWord {
    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// True if the word needed at least one swap
    #[inline]
    #[must_use]
    pub fn uses_swaps(&self) -> bool {
        !self.swaps.is_empty()
    }

    /// The swap applied at `pos`, if any
    #[must_use]
    pub fn swap_at(&self, pos: Position) -> Option<&SwapRecord> {
        self.swaps.iter().find(|s| s.position == pos)
    }

    /// Multipliers crossed by the path, in path order
    #[must_use]
    pub fn multipliers(&self, grid: &Grid) -> Vec<Multiplier> {
        self.path
            .iter()
            .filter_map(|&pos| grid.multiplier_at(pos))
            .collect()
    }
}

impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FoundWord {
        let p0 = Position::new(0, 0);
        let p1 = Position::new(0, 1);
        let p2 = Position::new(0, 2);
        FoundWord {
            word: "SAT".to_string(),
            path: vec![p0, p1, p2],
            score: 0,
            swaps: vec![SwapRecord::new(p0, b'C', b'S')],
            gem_cost: 3,
        }
    }

    #[test]
    fn swap_lookup() {
        let found = sample();
        assert!(found.uses_swaps());
        assert_eq!(found.swap_at(Position::new(0, 0)).unwrap().replacement, b'S');
        assert!(found.swap_at(Position::new(0, 1)).is_none());
    }

    #[test]
    fn multipliers_follow_path() {
        let grid = Grid::parse("C(DL)A(TW)T").unwrap();
        assert_eq!(
            sample().multipliers(&grid),
            vec![Multiplier::DoubleLetter, Multiplier::TripleWord]
        );
    }

    #[test]
    fn display_formats() {
        let found = sample();
        assert_eq!(found.to_string(), "SAT (0)");
        assert_eq!(found.swaps[0].to_string(), "(0,0) C→S");
        assert_eq!(found.len(), 3);
    }
}
