//! Style runs: the text formatter.
//!
//! A run boundary occurs whenever the font name changes; the style class is
//! derived purely from the font name string, so the formatter needs no font
//! registry and is testable in isolation.

use serde::{Deserialize, Serialize};

use super::word::{is_bold_font, is_italic_font, is_medium_font};
use super::Word;

/// Style class of a run, derived from its font name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Regular text
    Normal,
    /// Bold (Black/Bold/Medium weights)
    Bold,
    /// Italic face
    Italic,
    /// Bold and italic combined
    BoldItalic,
}

impl FontStyle {
    /// Classify a font name into a style class.
    pub fn of_font(name: &str) -> Self {
        let bold = is_bold_font(name) || is_medium_font(name);
        let italic = is_italic_font(name);
        match (bold, italic) {
            (true, true) => FontStyle::BoldItalic,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (false, false) => FontStyle::Normal,
        }
    }
}

/// A contiguous run of words sharing one font name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRun {
    /// Style class of the run
    pub style: FontStyle,
    /// Space-joined text of the run's words
    pub text: String,
}

impl StyleRun {
    /// Create a run.
    pub fn new(style: FontStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Split a flat word sequence into style runs keyed by font-name equality.
pub fn format_words(words: &[Word]) -> Vec<StyleRun> {
    let mut runs: Vec<StyleRun> = Vec::new();
    let mut current_font: Option<&str> = None;

    for word in words {
        match (current_font, runs.last_mut()) {
            (Some(font), Some(run)) if font == word.font => {
                run.text.push(' ');
                run.text.push_str(&word.text);
            }
            _ => {
                runs.push(StyleRun::new(FontStyle::of_font(&word.font), word.text.clone()));
                current_font = Some(&word.font);
            }
        }
    }

    runs
}
