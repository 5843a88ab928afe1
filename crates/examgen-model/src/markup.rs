//! Marker classification for item-bank cells.
//!
//! Answer options carry their markup inline: a trailing `#` marks the correct
//! option, a trailing `%` marks an option that must keep its position when
//! answers are shuffled. Trailing periods and whitespace around the markers
//! are cosmetic. Markers are only recognized in the trailing run of marker
//! and cosmetic characters, so a `#` or `%` inside the option prose is
//! content, not markup.

/// Result of scanning one cell for markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerScan {
    /// The cell carried the correct-answer marker (`#`).
    pub is_correct: bool,
    /// The cell carried the preserve-position marker (`%`).
    pub is_pinned: bool,
    /// The cell text with the trailing marker/cosmetic run removed.
    pub clean: String,
}

fn is_marker_or_cosmetic(c: char) -> bool {
    c == '#' || c == '%' || c == '.' || c.is_whitespace()
}

/// Scan one cell for markup.
pub fn classify(cell: &str) -> MarkerScan {
    let body = cell.trim_end_matches(is_marker_or_cosmetic);
    let tail = &cell[body.len()..];
    MarkerScan {
        is_correct: tail.contains('#'),
        is_pinned: tail.contains('%'),
        clean: body.to_string(),
    }
}

/// Remove the trailing marker/cosmetic run from a cell.
///
/// Used for question text as well as options; applying it twice yields the
/// same string as applying it once.
pub fn strip_markers(cell: &str) -> String {
    classify(cell).clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_correct_marker() {
        let scan = classify("4#");
        assert!(scan.is_correct);
        assert!(!scan.is_pinned);
        assert_eq!(scan.clean, "4");
    }

    #[test]
    fn classify_pinned_marker() {
        let scan = classify("none of the above%");
        assert!(!scan.is_correct);
        assert!(scan.is_pinned);
        assert_eq!(scan.clean, "none of the above");
    }

    #[test]
    fn classify_combined_markers_and_cosmetics() {
        let scan = classify("all of the above #% .");
        assert!(scan.is_correct);
        assert!(scan.is_pinned);
        assert_eq!(scan.clean, "all of the above");
    }

    #[test]
    fn classify_plain_cell() {
        let scan = classify("a plain answer");
        assert!(!scan.is_correct);
        assert!(!scan.is_pinned);
        assert_eq!(scan.clean, "a plain answer");
    }

    #[test]
    fn marker_inside_prose_is_content() {
        let scan = classify("the C# compiler");
        assert!(!scan.is_correct);
        assert_eq!(scan.clean, "the C# compiler");
    }

    #[test]
    fn strip_is_idempotent() {
        for cell in ["4#.", "x% ", "plain", "trailing dots...", "q?  "] {
            let once = strip_markers(cell);
            assert_eq!(strip_markers(&once), once);
        }
    }

    #[test]
    fn strip_keeps_interior_punctuation() {
        assert_eq!(strip_markers("What is 2+2?"), "What is 2+2?");
        assert_eq!(strip_markers("3.5#"), "3.5");
    }
}
