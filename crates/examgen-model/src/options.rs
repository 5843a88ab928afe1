//! Configuration options for exam shuffling.

use serde::{Deserialize, Serialize};

/// Options controlling how an exam variant is drawn from the bank.
///
/// Row (item) order is always shuffled; these options only govern the
/// per-item answer permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOptions {
    /// Shuffle answer options within each item.
    pub shuffle_answers: bool,

    /// Count of trailing options per item exempt from shuffling
    /// (e.g. for "all of the above" style answers).
    ///
    /// Must satisfy `0 <= pinned_tail <= option_count`; validated eagerly
    /// before any randomization.
    pub pinned_tail: i64,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            shuffle_answers: false,
            pinned_tail: 0,
        }
    }
}

impl ShuffleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(mut self, shuffle: bool) -> Self {
        self.shuffle_answers = shuffle;
        self
    }

    pub fn with_pinned_tail(mut self, count: i64) -> Self {
        self.pinned_tail = count;
        self
    }
}
