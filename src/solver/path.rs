//! Per-start path accumulators
//!
//! `PathState` holds everything one depth-first walk mutates: the visited
//! map, the letters and positions played so far, the swaps in use and the
//! running score totals. `PathState::enter` pushes one cell and hands back
//! a `Step` guard; dropping the guard undoes exactly that push, so every
//! exit from a search frame (pruned, failed or finished) leaves the state
//! as it found it.

use super::scoring::{self, letter_value};
use crate::core::{Cell, FoundWord, Position, SwapRecord};
use std::ops::{Deref, DerefMut};

/// Mutable state for one start cell's search tree
#[derive(Debug, Clone)]
pub struct PathState {
    cols: usize,
    visited: Vec<bool>,
    word: String,
    path: Vec<Position>,
    swaps: Vec<SwapRecord>,
    letter_sum: u32,
    word_multiplier: u32,
}

impl PathState {
    /// Fresh state for a `rows`×`cols` board
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            visited: vec![false; rows * cols],
            word: String::new(),
            path: Vec::new(),
            swaps: Vec::new(),
            letter_sum: 0,
            word_multiplier: 1,
        }
    }

    /// Play `letter` on `cell` at `pos`, optionally via `swap`
    ///
    /// Returns `None` if `pos` lies outside the board this state was built for.
    pub fn enter(
        &mut self,
        pos: Position,
        cell: &Cell,
        letter: u8,
        swap: Option<SwapRecord>,
    ) -> Option<Step<'_>> {
        let index = self.index(pos)?;
        let prev_sum = self.letter_sum;
        let prev_multiplier = self.word_multiplier;

        self.visited[index] = true;
        self.word.push(char::from(letter));
        self.path.push(pos);
        let swapped = swap.is_some();
        if let Some(swap) = swap {
            self.swaps.push(swap);
        }
        self.letter_sum = self
            .letter_sum
            .saturating_add(letter_value(letter) * cell.letter_factor());
        self.word_multiplier = self.word_multiplier.saturating_mul(cell.word_factor());

        Some(Step {
            state: self,
            index,
            prev_sum,
            prev_multiplier,
            swapped,
        })
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let index = pos.row.checked_mul(self.cols)?.checked_add(pos.col)?;
        (pos.col < self.cols && index < self.visited.len()).then_some(index)
    }

    /// True if `pos` is already on the current path
    #[inline]
    #[must_use]
    pub fn is_visited(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.visited[i])
    }

    /// Letters played so far
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn swaps(&self) -> &[SwapRecord] {
        &self.swaps
    }

    #[inline]
    #[must_use]
    pub const fn letter_sum(&self) -> u32 {
        self.letter_sum
    }

    #[inline]
    #[must_use]
    pub const fn word_multiplier(&self) -> u32 {
        self.word_multiplier
    }

    /// Score of the current prefix if it were played as a word
    #[must_use]
    pub fn score(&self) -> u32 {
        scoring::finish(
            self.letter_sum,
            self.word_multiplier,
            self.path.len(),
            self.swaps.len(),
        )
    }

    /// Snapshot the current prefix as a result record
    #[must_use]
    pub fn to_found_word(&self) -> FoundWord {
        FoundWord {
            word: self.word.clone(),
            path: self.path.clone(),
            score: self.score(),
            swaps: self.swaps.clone(),
            gem_cost: scoring::gem_cost(self.swaps.len()),
        }
    }

    /// True if nothing is on the path and no cell is marked
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.path.is_empty()
            && self.word.is_empty()
            && self.swaps.is_empty()
            && self.letter_sum == 0
            && self.word_multiplier == 1
            && !self.visited.contains(&true)
    }
}

/// Guard for one cell on the current path
///
/// Derefs to the underlying `PathState` so deeper frames can keep walking.
#[derive(Debug)]
pub struct Step<'a> {
    state: &'a mut PathState,
    index: usize,
    prev_sum: u32,
    prev_multiplier: u32,
    swapped: bool,
}

impl Deref for Step<'_> {
    type Target = PathState;

    fn deref(&self) -> &PathState {
        self.state
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut PathState {
        self.state
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        self.state.visited[self.index] = false;
        self.state.word.pop();
        self.state.path.pop();
        if self.swapped {
            self.state.swaps.pop();
        }
        self.state.letter_sum = self.prev_sum;
        self.state.word_multiplier = self.prev_multiplier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Multiplier;

    fn cell(letter: char) -> Cell {
        Cell::new(letter).unwrap()
    }

    #[test]
    fn enter_pushes_and_drop_restores() {
        let mut state = PathState::new(2, 2);
        let c = cell('C');
        {
            let step = state.enter(Position::new(0, 0), &c, b'C', None).unwrap();
            assert_eq!(step.word(), "C");
            assert_eq!(step.len(), 1);
            assert!(step.is_visited(Position::new(0, 0)));
            assert_eq!(step.letter_sum(), 4);
        }
        assert!(state.is_clear());
    }

    #[test]
    fn nested_steps_unwind_in_order() {
        let mut state = PathState::new(1, 3);
        let c = cell('C');
        let a = cell('A').with_multiplier(Multiplier::DoubleWord);
        let t = cell('T').with_multiplier(Multiplier::TripleLetter);

        let mut first = state.enter(Position::new(0, 0), &c, b'C', None).unwrap();
        {
            let mut second = first.enter(Position::new(0, 1), &a, b'A', None).unwrap();
            {
                let third = second.enter(Position::new(0, 2), &t, b'T', None).unwrap();
                assert_eq!(third.word(), "CAT");
                assert_eq!(third.letter_sum(), 4 + 1 + 3);
                assert_eq!(third.word_multiplier(), 2);
                assert_eq!(third.score(), 16);
            }
            assert_eq!(second.word(), "CA");
            assert!(!second.is_visited(Position::new(0, 2)));
            assert_eq!(second.letter_sum(), 5);
        }
        assert_eq!(first.word(), "C");
        assert_eq!(first.word_multiplier(), 1);
        drop(first);
        assert!(state.is_clear());
    }

    #[test]
    fn swaps_are_scoped_to_the_step() {
        let mut state = PathState::new(1, 2);
        let c = cell('C');
        let pos = Position::new(0, 0);
        {
            let step = state
                .enter(pos, &c, b'S', Some(SwapRecord::new(pos, b'C', b'S')))
                .unwrap();
            assert_eq!(step.word(), "S");
            assert_eq!(step.swaps().len(), 1);
            // Swapped letter is scored, not the original
            assert_eq!(step.letter_sum(), 1);
            let found = step.to_found_word();
            assert_eq!(found.gem_cost, 3);
            assert_eq!(found.score, 0);
        }
        assert!(state.is_clear());
    }

    #[test]
    fn early_exit_still_restores() {
        fn walk(state: &mut PathState, depth: usize) -> Result<(), ()> {
            let c = Cell::new('E').unwrap();
            let step = state.enter(Position::new(0, depth), &c, b'E', None);
            let Some(mut step) = step else {
                return Err(());
            };
            walk(&mut step, depth + 1)
        }

        let mut state = PathState::new(1, 4);
        // Runs off the board at depth 4 and bails out with an error
        assert!(walk(&mut state, 0).is_err());
        assert!(state.is_clear());
    }

    #[test]
    fn out_of_bounds_enter_is_refused() {
        let mut state = PathState::new(2, 2);
        let c = cell('C');
        assert!(state.enter(Position::new(0, 2), &c, b'C', None).is_none());
        assert!(state.enter(Position::new(2, 0), &c, b'C', None).is_none());
        assert!(state.is_clear());
    }
}
