//! Search settings and tuning knobs

use super::scoring::GEMS_PER_SWAP;
use std::time::Duration;

/// Player resources for one search
///
/// The default allows no swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub available_gems: u32,
    pub max_swaps: u32,
    pub allow_swaps: bool,
}

impl Settings {
    /// Settings that allow up to `max_swaps` swaps paid from `available_gems`
    #[must_use]
    pub const fn with_swaps(available_gems: u32, max_swaps: u32) -> Self {
        Self {
            available_gems,
            max_swaps,
            allow_swaps: true,
        }
    }

    /// Number of swaps a single word may use
    ///
    /// The caller's `max_swaps` is capped by what the gem budget can pay for.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::solver::Settings;
    ///
    /// assert_eq!(Settings::with_swaps(3, 5).effective_max_swaps(), 1);
    /// assert_eq!(Settings::with_swaps(30, 2).effective_max_swaps(), 2);
    /// assert_eq!(Settings::default().effective_max_swaps(), 0);
    /// ```
    #[must_use]
    pub const fn effective_max_swaps(&self) -> u32 {
        if !self.allow_swaps {
            return 0;
        }
        let affordable = self.available_gems / GEMS_PER_SWAP;
        if self.max_swaps < affordable {
            self.max_swaps
        } else {
            affordable
        }
    }
}

/// Candidate letters considered when swapping a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPolicy {
    /// Replacement letters in preference order
    pub pool: Vec<u8>,
    /// Letters accepted even when worth less than the original
    pub always_allowed: Vec<u8>,
    /// Upper bound on swap options tried per cell
    pub max_options: usize,
}

impl Default for SwapPolicy {
    fn default() -> Self {
        Self {
            pool: b"SREATINLOUDGHYCMPBFWKV".to_vec(),
            always_allowed: b"SREAT".to_vec(),
            max_options: 4,
        }
    }
}

/// Search tuning
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Stop launching new start cells after this long (`None` = no limit)
    pub deadline: Option<Duration>,
    /// Shortest word reported
    pub min_word_length: usize,
    /// Longest prefix explored
    pub max_word_length: usize,
    /// Prefixes at least this long are checked against the pruning bound
    pub prune_min_length: usize,
    /// Branches whose upper bound falls below this fraction of the best
    /// score seen so far are abandoned
    pub prune_threshold: f64,
    /// Search start cells on the rayon pool
    pub parallel: bool,
    pub swaps: SwapPolicy,
}

impl SearchConfig {
    /// Default wall-clock budget for a whole search
    pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(3);
    /// Shortest word the game accepts
    pub const MIN_WORD_LENGTH: usize = 3;
    /// Longest word the search will ever build
    pub const MAX_WORD_LENGTH: usize = 20;

    /// Word length range actually searched
    ///
    /// The configured lengths are clamped to
    /// `MIN_WORD_LENGTH..=MAX_WORD_LENGTH`; an inverted range is empty.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::solver::SearchConfig;
    ///
    /// let config = SearchConfig { min_word_length: 1, max_word_length: 50, ..SearchConfig::default() };
    /// assert_eq!(config.word_lengths(), (3, 20));
    /// ```
    #[must_use]
    pub fn word_lengths(&self) -> (usize, usize) {
        let min = self
            .min_word_length
            .clamp(Self::MIN_WORD_LENGTH, Self::MAX_WORD_LENGTH);
        let max = self
            .max_word_length
            .clamp(Self::MIN_WORD_LENGTH, Self::MAX_WORD_LENGTH);
        (min, max)
    }

    /// Config with no deadline, for reproducible runs
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            deadline: None,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            deadline: Some(Self::DEFAULT_DEADLINE),
            min_word_length: Self::MIN_WORD_LENGTH,
            max_word_length: Self::MAX_WORD_LENGTH,
            prune_min_length: 6,
            prune_threshold: 0.7,
            parallel: false,
            swaps: SwapPolicy::default(),
        }
    }
}
