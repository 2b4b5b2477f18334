//! Extraction and classification options.
//!
//! Every threshold the classifier relies on is configuration rather than a
//! literal constant, so the heuristics can be retuned for documents with
//! different margins or bullet glyphs. Defaults match the book class this
//! crate was tuned against.

use crate::model::BoundingBox;

/// Default bullet glyphs recognized as unordered list markers.
pub const DEFAULT_BULLETS: [char; 6] = ['-', '\u{2013}', '\u{2022}', '\u{25CF}', '\u{25E6}', '*'];

/// Tunable thresholds for line grouping and structure classification.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Maximum baseline delta (in integer units) for two words to share a line.
    pub baseline_tolerance: i32,

    /// Maximum vertical gap between lines of one section.
    pub section_gap: i32,

    /// Minimum first-word size for the all-caps header test.
    pub header_min_size: i32,

    /// Size above which a bold header becomes a chapter title (h1).
    pub title_min_size: i32,

    /// Left indent at or beyond which a block is treated as one paragraph.
    pub wide_margin: i32,

    /// Indent increase (beyond the block minimum) that starts a new paragraph.
    pub indent_step: i32,

    /// Glyphs that open an unordered list item.
    pub bullets: Vec<char>,
}

impl ClassifyOptions {
    /// Create options with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline tolerance for line grouping.
    pub fn with_baseline_tolerance(mut self, units: i32) -> Self {
        self.baseline_tolerance = units;
        self
    }

    /// Set the section gap threshold.
    pub fn with_section_gap(mut self, units: i32) -> Self {
        self.section_gap = units;
        self
    }

    /// Set the minimum size for the all-caps header test.
    pub fn with_header_min_size(mut self, size: i32) -> Self {
        self.header_min_size = size;
        self
    }

    /// Set the size above which bold headers become h1.
    pub fn with_title_min_size(mut self, size: i32) -> Self {
        self.title_min_size = size;
        self
    }

    /// Set the wide-margin threshold for the paragraph fallback.
    pub fn with_wide_margin(mut self, units: i32) -> Self {
        self.wide_margin = units;
        self
    }

    /// Set the indent step that opens a new paragraph.
    pub fn with_indent_step(mut self, units: i32) -> Self {
        self.indent_step = units;
        self
    }

    /// Replace the unordered list marker set.
    pub fn with_bullets(mut self, bullets: impl IntoIterator<Item = char>) -> Self {
        self.bullets = bullets.into_iter().collect();
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            baseline_tolerance: 1,
            section_gap: 2,
            header_min_size: 10,
            title_min_size: 20,
            wide_margin: 120,
            indent_step: 2,
            bullets: DEFAULT_BULLETS.to_vec(),
        }
    }
}

/// Options for the full extract-to-HTML pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Classification thresholds.
    pub classify: ClassifyOptions,

    /// Content box every page is cropped to before grouping (None = whole page).
    ///
    /// Books with fixed headers or footers want this set to the body region.
    pub content_box: Option<BoundingBox>,

    /// Language attribute of the emitted HTML documents.
    pub lang: String,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classification thresholds.
    pub fn with_classify(mut self, classify: ClassifyOptions) -> Self {
        self.classify = classify;
        self
    }

    /// Crop every page to the given content box before grouping.
    pub fn with_content_box(mut self, bounds: BoundingBox) -> Self {
        self.content_box = Some(bounds);
        self
    }

    /// Set the HTML language attribute.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            classify: ClassifyOptions::default(),
            content_box: None,
            lang: "es".to_string(),
        }
    }
}
