//! Error types for exam generation.

use thiserror::Error;

/// Errors that can occur when building or shuffling an item bank.
#[derive(Debug, Error)]
pub enum ExamError {
    /// Pinned tail count below zero.
    #[error("pinned tail count must not be negative: {value}")]
    InvalidParameter { value: i64 },

    /// Pinned tail count larger than the number of options per item.
    #[error("pinned tail count {value} exceeds the {available} options per item")]
    ParameterOutOfRange { value: i64, available: usize },

    /// An item has no option marked correct.
    #[error("item {row} has no option marked correct")]
    MalformedItem { row: usize },

    /// An item's option count differs from the rest of the bank.
    #[error("item {row} has {actual} options, expected {expected}")]
    RaggedItem {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An item has no options at all.
    #[error("item {row} has no options")]
    NoOptions { row: usize },

    /// More options than letter positions.
    #[error("item {row} has {count} options, only 26 letter positions exist")]
    TooManyOptions { row: usize, count: usize },

    /// The bank contains no items.
    #[error("item bank is empty")]
    EmptyBank,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exam operations.
pub type Result<T> = std::result::Result<T, ExamError>;

impl ExamError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(value: i64) -> Self {
        Self::InvalidParameter { value }
    }

    /// Create a ParameterOutOfRange error.
    pub fn parameter_out_of_range(value: i64, available: usize) -> Self {
        Self::ParameterOutOfRange { value, available }
    }

    /// Create a MalformedItem error for the given row (0-based).
    pub fn malformed_item(row: usize) -> Self {
        Self::MalformedItem { row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExamError::invalid_parameter(-1);
        assert_eq!(
            format!("{err}"),
            "pinned tail count must not be negative: -1"
        );

        let err = ExamError::parameter_out_of_range(5, 4);
        assert_eq!(
            format!("{err}"),
            "pinned tail count 5 exceeds the 4 options per item"
        );

        let err = ExamError::malformed_item(2);
        assert_eq!(format!("{err}"), "item 2 has no option marked correct");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ExamError = io_err.into();
        assert!(matches!(err, ExamError::Io(_)));
    }
}
