//! Document model types for recovered page structure.
//!
//! This module defines the intermediate representation that bridges the
//! geometric classifier and the HTML renderer: positioned words at the
//! bottom, style-tagged runs in the middle, structural elements and
//! per-page documents at the top.

mod document;
mod element;
mod line;
mod style;
mod word;

pub use document::Document;
pub use element::{
    Element, Header, HeaderLevel, ListItem, ListKind, Listing, Paragraph, Table, TableCell,
    TableRow,
};
pub use line::{bounds_of_lines, Line, Section};
pub use style::{format_words, FontStyle, StyleRun};
pub use word::{is_bold_font, is_heavy_font, is_italic_font, is_medium_font, BoundingBox, Word};
