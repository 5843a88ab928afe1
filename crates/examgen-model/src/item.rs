use serde::{Deserialize, Serialize};

use crate::error::{ExamError, Result};

/// Letter positions run `a`..`z`, so a bank can hold at most 26 options.
pub const MAX_OPTIONS: usize = 26;

/// One exam question plus its ordered answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub question: String,
    pub options: Vec<String>,
}

impl Item {
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            question: question.into(),
            options,
        }
    }
}

/// An ordered, rectangular collection of items.
///
/// Every item has the same option count. The bank is mutated only by the
/// shuffler, which reorders rows and options in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBank {
    items: Vec<Item>,
}

impl ItemBank {
    /// Build a bank from items, validating shape.
    ///
    /// Fails if the bank is empty, an item has no options, option counts
    /// differ between items, or an item has more options than there are
    /// letter positions.
    pub fn try_new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(ExamError::EmptyBank);
        }
        let expected = items[0].options.len();
        for (row, item) in items.iter().enumerate() {
            let actual = item.options.len();
            if actual == 0 {
                return Err(ExamError::NoOptions { row });
            }
            if actual > MAX_OPTIONS {
                return Err(ExamError::TooManyOptions { row, count: actual });
            }
            if actual != expected {
                return Err(ExamError::RaggedItem {
                    row,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of options per item (uniform across the bank).
    pub fn option_count(&self) -> usize {
        self.items.first().map_or(0, |item| item.options.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(question: &str, options: &[&str]) -> Item {
        Item::new(
            question,
            options.iter().map(|o| (*o).to_string()).collect(),
        )
    }

    #[test]
    fn try_new_accepts_rectangular_bank() {
        let bank = ItemBank::try_new(vec![
            item("q1", &["a", "b#", "c"]),
            item("q2", &["d#", "e", "f"]),
        ])
        .unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.option_count(), 3);
    }

    #[test]
    fn try_new_rejects_empty_bank() {
        assert!(matches!(
            ItemBank::try_new(vec![]),
            Err(ExamError::EmptyBank)
        ));
    }

    #[test]
    fn try_new_rejects_ragged_rows() {
        let err = ItemBank::try_new(vec![
            item("q1", &["a", "b#", "c"]),
            item("q2", &["d#", "e"]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ExamError::RaggedItem {
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn try_new_rejects_question_only_row() {
        let err = ItemBank::try_new(vec![item("q1", &[])]).unwrap_err();
        assert!(matches!(err, ExamError::NoOptions { row: 0 }));
    }

    #[test]
    fn try_new_rejects_too_many_options() {
        let options: Vec<&str> = vec!["x"; 27];
        let err = ItemBank::try_new(vec![item("q1", &options)]).unwrap_err();
        assert!(matches!(
            err,
            ExamError::TooManyOptions { row: 0, count: 27 }
        ));
    }
}
