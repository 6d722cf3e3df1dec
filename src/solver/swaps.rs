//! Swap candidate generation
//!
//! Only a handful of replacement letters are tried per cell: letters worth
//! at least as much as the original, plus a few very common letters that
//! open up many words. This keeps the branching factor small at the cost
//! of never considering most of the alphabet.

use super::config::SwapPolicy;
use super::scoring::letter_value;
use crate::core::{Position, SwapRecord};

/// Swap options for the cell at `position`
///
/// Returns nothing once `current` already holds `budget` swaps or already
/// swaps this position. The original letter is never offered.
///
/// # Examples
/// ```
/// use spellcast_solver::core::Position;
/// use spellcast_solver::solver::SwapPolicy;
/// use spellcast_solver::solver::swaps::swap_options;
///
/// let options = swap_options(&SwapPolicy::default(), Position::new(0, 0), b'S', &[], 1);
/// let letters: Vec<u8> = options.iter().map(|s| s.replacement).collect();
/// assert_eq!(letters, b"REAT");
/// ```
#[must_use]
pub fn swap_options(
    policy: &SwapPolicy,
    position: Position,
    original: u8,
    current: &[SwapRecord],
    budget: u32,
) -> Vec<SwapRecord> {
    if current.len() >= budget as usize || current.iter().any(|s| s.position == position) {
        return Vec::new();
    }

    let original_value = letter_value(original);
    policy
        .pool
        .iter()
        .copied()
        .filter(|&letter| letter != original)
        .filter(|&letter| {
            letter_value(letter) >= original_value || policy.always_allowed.contains(&letter)
        })
        .take(policy.max_options)
        .map(|letter| SwapRecord::new(position, original, letter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(options: &[SwapRecord]) -> String {
        options.iter().map(|s| char::from(s.replacement)).collect()
    }

    #[test]
    fn no_budget_no_options() {
        let options = swap_options(&SwapPolicy::default(), Position::new(0, 0), b'C', &[], 0);
        assert!(options.is_empty());
    }

    #[test]
    fn exhausted_budget_no_options() {
        let used = [SwapRecord::new(Position::new(1, 1), b'A', b'E')];
        let options = swap_options(&SwapPolicy::default(), Position::new(0, 0), b'C', &used, 1);
        assert!(options.is_empty());
    }

    #[test]
    fn already_swapped_position_no_options() {
        let pos = Position::new(0, 0);
        let used = [SwapRecord::new(pos, b'A', b'E')];
        let options = swap_options(&SwapPolicy::default(), pos, b'E', &used, 5);
        assert!(options.is_empty());
    }

    #[test]
    fn original_letter_excluded() {
        let options = swap_options(&SwapPolicy::default(), Position::new(0, 0), b'E', &[], 1);
        assert_eq!(letters(&options), "SRAT");
        assert!(options.iter().all(|s| s.original == b'E'));
    }

    #[test]
    fn low_value_letters_dropped_unless_always_allowed() {
        let policy = SwapPolicy {
            pool: b"SLDGZ".to_vec(),
            always_allowed: b"S".to_vec(),
            max_options: 10,
        };
        // D (2) and G (3) are worth less than C (4); L (2) too
        let options = swap_options(&policy, Position::new(0, 0), b'C', &[], 1);
        assert_eq!(letters(&options), "SZ");
    }

    #[test]
    fn options_capped_per_cell() {
        let policy = SwapPolicy {
            max_options: 2,
            ..SwapPolicy::default()
        };
        let options = swap_options(&policy, Position::new(2, 3), b'A', &[], 3);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|s| s.position == Position::new(2, 3)));
    }

    #[test]
    fn high_value_original_keeps_frequent_letters() {
        let options = swap_options(&SwapPolicy::default(), Position::new(0, 0), b'Q', &[], 1);
        assert_eq!(letters(&options), "SREA");
    }
}
