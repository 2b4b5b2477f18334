//! Line and section groupings.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Word};

/// An ordered run of words sharing one baseline, left to right.
///
/// Invariant: non-empty, and never re-sorted — words arrive from the
/// extraction service in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Words on this line
    pub words: Vec<Word>,
}

impl Line {
    /// Create a line from its words.
    pub fn new(words: Vec<Word>) -> Self {
        debug_assert!(!words.is_empty(), "lines are never empty");
        Self { words }
    }

    /// Space-joined text of the line.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First word of the line.
    pub fn first(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the line.
    pub fn last(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Left indent of the line.
    pub fn indent(&self) -> i32 {
        self.first().x0
    }

    /// Top edge of the line.
    pub fn top(&self) -> i32 {
        self.first().top
    }

    /// Baseline of the line.
    pub fn bottom(&self) -> i32 {
        self.first().bottom
    }

    /// Whether every alphabetic character on the line is uppercase.
    ///
    /// Unicode-aware, so accented Latin capitals count. Lines with no
    /// alphabetic characters at all do not qualify.
    pub fn is_uppercase(&self) -> bool {
        let mut saw_letter = false;
        for word in &self.words {
            for c in word.text.chars().filter(|c| c.is_alphabetic()) {
                saw_letter = true;
                if !c.is_uppercase() {
                    return false;
                }
            }
        }
        saw_letter
    }
}

/// Consecutive lines separated by small vertical gaps.
///
/// A pre-classification grouping: consumed immediately by the classifier and
/// retained only inside table cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Lines of this section, top to bottom
    pub lines: Vec<Line>,
}

impl Section {
    /// Create a section from its lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Space-joined text of all lines.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bounding box of the section.
    pub fn bounds(&self) -> BoundingBox {
        bounds_of_lines(&self.lines)
    }
}

/// Bounding box of an ordered run of lines.
///
/// Left edge is the minimum first-word indent, right edge the maximum
/// last-word extent; vertical extent runs from the first line's top to the
/// last line's baseline.
pub fn bounds_of_lines(lines: &[Line]) -> BoundingBox {
    let x0 = lines.iter().map(|l| l.first().x0).min().unwrap_or(0);
    let x1 = lines.iter().map(|l| l.last().x1).max().unwrap_or(0);
    let top = lines.first().map(|l| l.top()).unwrap_or(0);
    let bottom = lines.last().map(|l| l.bottom()).unwrap_or(0);
    BoundingBox::new(x0, top, x1, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: i32, x1: i32, top: i32, bottom: i32) -> Word {
        Word {
            text: text.to_string(),
            font: "Karmina".to_string(),
            size: 9,
            x0,
            x1,
            top,
            bottom,
        }
    }

    #[test]
    fn test_line_text() {
        let line = Line::new(vec![word("hola", 10, 30, 0, 10), word("mundo", 32, 60, 0, 10)]);
        assert_eq!(line.text(), "hola mundo");
        assert_eq!(line.indent(), 10);
        assert_eq!(line.bottom(), 10);
    }

    #[test]
    fn test_is_uppercase_accented() {
        let upper = Line::new(vec![word("CAPÍTULO", 10, 60, 0, 10), word("DOS", 62, 80, 0, 10)]);
        assert!(upper.is_uppercase());

        let mixed = Line::new(vec![word("Capítulo", 10, 60, 0, 10)]);
        assert!(!mixed.is_uppercase());

        // Digits and punctuation alone never qualify.
        let digits = Line::new(vec![word("1999.", 10, 30, 0, 10)]);
        assert!(!digits.is_uppercase());
    }

    #[test]
    fn test_bounds_of_lines() {
        let lines = vec![
            Line::new(vec![word("a", 20, 40, 0, 10)]),
            Line::new(vec![word("b", 10, 90, 12, 22)]),
        ];
        let bounds = bounds_of_lines(&lines);
        assert_eq!(bounds, BoundingBox::new(10, 0, 90, 22));
    }
}
