use serde::{Deserialize, Serialize};

/// Letter for a 0-based option position (`0 → a`, `1 → b`, ...).
///
/// Returns `None` past `z`; banks are validated against that limit on
/// construction.
pub fn position_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| (i as usize) < crate::item::MAX_OPTIONS)
        .map(|i| (b'a' + i) as char)
}

/// Ordered list of correct-answer letters, one per item.
///
/// Computed once, right after shuffling, from the pre-strip markup; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    letters: Vec<char>,
}

impl AnswerKey {
    pub fn new(letters: Vec<char>) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter for the given item index, if present.
    pub fn letter(&self, item: usize) -> Option<char> {
        self.letters.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
