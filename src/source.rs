//! Input boundary: page views and word-dump sources.
//!
//! The PDF byte stream itself is decoded by an external word/table
//! extraction service. This crate depends only on three capabilities per
//! page: the ordered word list, the detected table geometry, and cropping to
//! a rectangular region. [`PageView`] packages all three; [`DocumentSource`]
//! hands out views page by page.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{BoundingBox, Word};

/// Externally detected table geometry: a bounding region and rows of cell
/// rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRegion {
    /// Bounding box of the whole table
    pub bounds: BoundingBox,
    /// Rows of cell bounding boxes, top to bottom
    pub rows: Vec<Vec<BoundingBox>>,
}

/// One page of extraction output: words in reading order plus table regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    number: usize,
    words: Vec<Word>,
    tables: Vec<TableRegion>,
}

impl PageView {
    /// Create a view from extracted words and table geometry.
    pub fn new(number: usize, words: Vec<Word>, tables: Vec<TableRegion>) -> Self {
        Self {
            number,
            words,
            tables,
        }
    }

    /// Page number of this view.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Words of the page, in reading order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Externally detected table regions.
    pub fn tables(&self) -> &[TableRegion] {
        &self.tables
    }

    /// Restrict the view to a rectangular region.
    ///
    /// Keeps words and table regions that fall entirely inside `bounds`,
    /// matching the semantics of the extraction service's own crop.
    pub fn crop(&self, bounds: BoundingBox) -> PageView {
        let words = self
            .words
            .iter()
            .filter(|w| bounds.contains(&w.bounds()))
            .cloned()
            .collect();
        let tables = self
            .tables
            .iter()
            .filter(|t| bounds.contains(&t.bounds))
            .cloned()
            .collect();
        PageView::new(self.number, words, tables)
    }
}

/// A paginated source of extraction output.
pub trait DocumentSource {
    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// View of one page by zero-based index.
    fn page(&self, index: usize) -> Result<PageView>;
}

/// Word geometry as emitted by the extraction service, before rounding.
#[derive(Debug, Clone, Deserialize)]
struct RawWord {
    text: String,
    font: String,
    size: f32,
    x0: f32,
    x1: f32,
    top: f32,
    bottom: f32,
}

impl RawWord {
    /// Round geometry to integer units.
    fn normalize(self) -> Word {
        Word {
            text: self.text,
            font: self.font,
            size: self.size.round() as i32,
            x0: self.x0.round() as i32,
            x1: self.x1.round() as i32,
            top: self.top.round() as i32,
            bottom: self.bottom.round() as i32,
        }
    }
}

/// Rectangle in dump order: `[x0, top, x1, bottom]`, float units.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawRect([f32; 4]);

impl RawRect {
    fn normalize(self) -> BoundingBox {
        let [x0, top, x1, bottom] = self.0;
        BoundingBox::new(
            x0.round() as i32,
            top.round() as i32,
            x1.round() as i32,
            bottom.round() as i32,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawTable {
    bounds: RawRect,
    #[serde(default)]
    rows: Vec<Vec<RawRect>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPage {
    number: usize,
    words: Vec<RawWord>,
    #[serde(default)]
    tables: Vec<RawTable>,
}

#[derive(Debug, Clone, Deserialize)]
struct Dump {
    pages: Vec<RawPage>,
}

/// A [`DocumentSource`] backed by the extraction service's JSON word dump.
///
/// The dump holds float geometry; it is normalized to integer units on load,
/// before anything downstream sees it.
#[derive(Debug, Clone)]
pub struct JsonSource {
    pages: Vec<PageView>,
}

impl JsonSource {
    /// Load a dump from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dump from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dump: Dump = serde_json::from_reader(reader)?;
        Ok(Self::from_dump(dump))
    }

    /// Load a dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let dump: Dump = serde_json::from_str(json)?;
        Ok(Self::from_dump(dump))
    }

    fn from_dump(dump: Dump) -> Self {
        let pages = dump
            .pages
            .into_iter()
            .map(|page| {
                let words = page.words.into_iter().map(RawWord::normalize).collect();
                let tables = page
                    .tables
                    .into_iter()
                    .map(|t| TableRegion {
                        bounds: t.bounds.normalize(),
                        rows: t
                            .rows
                            .into_iter()
                            .map(|row| row.into_iter().map(RawRect::normalize).collect())
                            .collect(),
                    })
                    .collect();
                PageView::new(page.number, words, tables)
            })
            .collect();
        Self { pages }
    }
}

impl DocumentSource for JsonSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageView> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "pages": [
            {
                "number": 1,
                "words": [
                    {"text": "hola", "font": "Karmina", "size": 9.6,
                     "x0": 85.2, "x1": 110.7, "top": 140.1, "bottom": 150.4},
                    {"text": "mundo", "font": "Karmina", "size": 9.6,
                     "x0": 112.0, "x1": 140.0, "top": 140.0, "bottom": 150.0}
                ],
                "tables": [
                    {"bounds": [200.0, 300.0, 400.0, 380.0],
                     "rows": [[[200.0, 300.0, 300.0, 340.0], [300.0, 300.0, 400.0, 340.0]]]}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_json_source_normalizes_geometry() {
        let source = JsonSource::from_json(DUMP).unwrap();
        assert_eq!(source.page_count(), 1);

        let page = source.page(0).unwrap();
        assert_eq!(page.number(), 1);
        assert_eq!(page.words().len(), 2);
        assert_eq!(page.words()[0].size, 10);
        assert_eq!(page.words()[0].x0, 85);
        assert_eq!(page.words()[0].bottom, 150);
        assert_eq!(page.tables().len(), 1);
        assert_eq!(page.tables()[0].rows[0].len(), 2);
    }

    #[test]
    fn test_page_out_of_range() {
        let source = JsonSource::from_json(DUMP).unwrap();
        assert!(matches!(source.page(5), Err(Error::PageOutOfRange(5, 1))));
    }

    #[test]
    fn test_crop_keeps_fully_contained_words() {
        let source = JsonSource::from_json(DUMP).unwrap();
        let page = source.page(0).unwrap();

        let cropped = page.crop(BoundingBox::new(80, 130, 111, 160));
        assert_eq!(cropped.words().len(), 1);
        assert_eq!(cropped.words()[0].text, "hola");
        assert!(cropped.tables().is_empty());
    }
}
