//! Data model for exam-variant generation.
//!
//! An [`ItemBank`] is a rectangular table of questions and answer options.
//! Options carry inline markup (`#` correct, `%` pinned) that the shuffler
//! reads through [`classify`] and strips before rendering. The [`AnswerKey`]
//! records the post-shuffle position of each item's correct option.

pub mod error;
pub mod item;
pub mod key;
pub mod markup;
pub mod options;

pub use error::{ExamError, Result};
pub use item::{Item, ItemBank, MAX_OPTIONS};
pub use key::{AnswerKey, position_letter};
pub use markup::{MarkerScan, classify, strip_markers};
pub use options::ShuffleOptions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_options_serialize() {
        let options = ShuffleOptions::new().with_answers(true).with_pinned_tail(1);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: ShuffleOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }

    #[test]
    fn default_options_shuffle_rows_only() {
        let options = ShuffleOptions::default();
        assert!(!options.shuffle_answers);
        assert_eq!(options.pinned_tail, 0);
    }
}
