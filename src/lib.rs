//! # chapterize
//!
//! Structure recovery for layout-only PDF books.
//!
//! Given positioned word tokens with font metadata (produced by an external
//! word/table extraction service), this library infers document structure —
//! headers, paragraphs, ordered and unordered lists, tables — with no
//! semantic tags to rely on, and renders the recovered model to one HTML
//! file per chapter.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chapterize::{extract_file, Result};
//!
//! fn main() -> Result<()> {
//!     // Word dump in, chapter HTML files out
//!     let written = extract_file("book-words.json", "out/", None)?;
//!     println!("{} chapters", written.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Words are grouped into baseline-aligned lines, lines into gap-separated
//! sections, and each section is classified by a recursive-descent pass
//! (header, then ordered list, then unordered list, then paragraph
//! fallback). Table regions detected by the extraction service bypass the
//! classifier entirely and keep their nested cell text. Pages accumulate as
//! [`Document`]s; chapters split at top-level headers at export time.
//!
//! Every decision is a heuristic over coordinates, font names and casing;
//! the thresholds are configuration ([`ClassifyOptions`]), tuned for densely
//! laid-out single-column books with occasional tables.

pub mod classify;
pub mod error;
pub mod layout;
pub mod model;
pub mod options;
pub mod render;
pub mod source;
pub mod tables;

// Re-export commonly used types
pub use classify::{classify as classify_lines, classify_sections};
pub use error::{Error, Result};
pub use model::{
    BoundingBox, Document, Element, FontStyle, Header, HeaderLevel, Line, ListItem, ListKind,
    Listing, Paragraph, Section, StyleRun, Table, TableCell, TableRow, Word,
};
pub use options::{ClassifyOptions, ExtractOptions};
pub use render::{group_chapters, write_chapters, Chapter};
pub use source::{DocumentSource, JsonSource, PageView, TableRegion};

use std::path::{Path, PathBuf};

use log::info;

/// Classify one page view into a document.
///
/// Applies the configured content-box crop, fills the detected tables,
/// removes their words from the main stream, then groups and classifies the
/// remaining flow text.
pub fn parse_page(view: &PageView, options: &ExtractOptions) -> Document {
    let view = match options.content_box {
        Some(bounds) => view.crop(bounds),
        None => view.clone(),
    };
    let classify_options = &options.classify;

    let tables = tables::parse_tables(&view, classify_options);
    let words = layout::remove_table_words(view.words().to_vec(), view.tables());
    let lines = layout::group_lines(words, classify_options.baseline_tolerance);
    let sections = layout::group_sections(lines, classify_options.section_gap);
    let elements = classify::classify_sections(sections, classify_options);

    Document::new(view.number(), elements, tables)
}

/// Extract a source to per-chapter HTML files with default options.
///
/// `pages` optionally restricts processing to a subset of zero-based page
/// indices (default: all pages, in order). Returns the written file paths.
pub fn extract<S: DocumentSource>(
    source: &S,
    out_dir: impl AsRef<Path>,
    pages: Option<&[usize]>,
) -> Result<Vec<PathBuf>> {
    extract_with_options(source, out_dir, pages, &ExtractOptions::default())
}

/// Extract a source to per-chapter HTML files.
///
/// Pages are processed one at a time in index order, each fully classified
/// before the next begins; all documents are held in memory before export.
pub fn extract_with_options<S: DocumentSource>(
    source: &S,
    out_dir: impl AsRef<Path>,
    pages: Option<&[usize]>,
    options: &ExtractOptions,
) -> Result<Vec<PathBuf>> {
    let documents = parse_documents(source, pages, options)?;
    render::write_chapters(out_dir.as_ref(), &documents, &options.lang)
}

/// Classify the selected pages of a source into documents, in order.
pub fn parse_documents<S: DocumentSource>(
    source: &S,
    pages: Option<&[usize]>,
    options: &ExtractOptions,
) -> Result<Vec<Document>> {
    let indices: Vec<usize> = match pages {
        Some(selection) => selection.to_vec(),
        None => (0..source.page_count()).collect(),
    };

    let mut documents = Vec::with_capacity(indices.len());
    for index in indices {
        let view = source.page(index)?;
        info!("processing page {:03}", index);
        documents.push(parse_page(&view, options));
    }
    Ok(documents)
}

/// Extract a JSON word dump file to per-chapter HTML files.
pub fn extract_file(
    path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    pages: Option<&[usize]>,
) -> Result<Vec<PathBuf>> {
    let source = JsonSource::from_path(path)?;
    extract(&source, out_dir, pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, font: &str, size: i32, x0: i32, top: i32) -> Word {
        Word {
            text: text.to_string(),
            font: font.to_string(),
            size,
            x0,
            x1: x0 + 30,
            top,
            bottom: top + size,
        }
    }

    #[test]
    fn test_parse_page_classifies_flow_and_tables() {
        let words = vec![
            word("CAPÍTULO", "ArcherPro-Bold", 24, 85, 0),
            word("UNO", "ArcherPro-Bold", 24, 160, 0),
            word("el", "Karmina", 9, 85, 40),
            word("cuerpo", "Karmina", 9, 110, 40),
            word("celda", "Karmina", 9, 210, 310),
        ];
        let region = TableRegion {
            bounds: BoundingBox::new(200, 300, 400, 380),
            rows: vec![vec![BoundingBox::new(200, 300, 300, 340)]],
        };
        let view = PageView::new(1, words, vec![region]);

        let document = parse_page(&view, &ExtractOptions::default());

        assert_eq!(document.headers().len(), 1);
        assert_eq!(document.paragraphs().len(), 1);
        assert_eq!(document.tables().len(), 1);
        // Table words never reach the flow elements.
        assert!(!document.paragraphs()[0].text().contains("celda"));
        assert_eq!(document.tables()[0].rows[0].cells[0].text(), "celda");
    }

    #[test]
    fn test_parse_page_respects_content_box() {
        let words = vec![
            word("cabecera", "Karmina", 9, 85, 10),
            word("cuerpo", "Karmina", 9, 85, 200),
        ];
        let view = PageView::new(1, words, vec![]);
        let options =
            ExtractOptions::default().with_content_box(BoundingBox::new(0, 100, 600, 700));

        let document = parse_page(&view, &options);
        assert_eq!(document.paragraphs().len(), 1);
        assert_eq!(document.paragraphs()[0].text(), "cuerpo");
    }

    #[test]
    fn test_parse_documents_out_of_range() {
        let source = JsonSource::from_json(r#"{"pages": []}"#).unwrap();
        let result = parse_documents(&source, Some(&[3]), &ExtractOptions::default());
        assert!(matches!(result, Err(Error::PageOutOfRange(3, 0))));
    }
}
