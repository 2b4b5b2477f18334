//! Rendering: element HTML and per-chapter files.

mod chapters;
mod html;

pub use chapters::{chapter_html, group_chapters, slug, write_chapters, Chapter};
