//! Shared exam layout.
//!
//! Both renderers emit the same structure, numbered items with lettered
//! options, into different serializations. The layout pass is done once
//! here and fed to the plain-text and document writers.

use examgen_model::ItemBank;

/// One option slot: position letter plus clean option text.
#[derive(Debug, Clone, Copy)]
pub struct OptionLayout<'a> {
    pub letter: char,
    pub text: &'a str,
}

impl OptionLayout<'_> {
    /// The lettered marker and option text as rendered: `a) text.`
    pub fn label(&self) -> String {
        format!("{}) {}.", self.letter, self.text)
    }
}

/// One laid-out item: 1-based number, question, lettered options.
#[derive(Debug, Clone)]
pub struct ItemLayout<'a> {
    pub number: usize,
    pub question: &'a str,
    pub options: Vec<OptionLayout<'a>>,
}

/// Lay out a shuffled, markup-stripped exam for rendering.
pub fn layout_exam(exam: &ItemBank) -> Vec<ItemLayout<'_>> {
    exam.items()
        .iter()
        .enumerate()
        .map(|(idx, item)| ItemLayout {
            number: idx + 1,
            question: &item.question,
            options: item
                .options
                .iter()
                .zip('a'..='z')
                .map(|(text, letter)| OptionLayout { letter, text })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use examgen_model::Item;

    #[test]
    fn layout_numbers_and_letters() {
        let exam = ItemBank::try_new(vec![
            Item::new("q1", vec!["a1".to_string(), "a2".to_string()]),
            Item::new("q2", vec!["b1".to_string(), "b2".to_string()]),
        ])
        .unwrap();
        let layout = layout_exam(&exam);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[0].number, 1);
        assert_eq!(layout[1].number, 2);
        assert_eq!(layout[0].options[0].letter, 'a');
        assert_eq!(layout[0].options[1].letter, 'b');
        assert_eq!(layout[1].options[0].label(), "a) b1.");
    }
}
