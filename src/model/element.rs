//! Structural elements: the closed output vocabulary of the classifier.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Section, StyleRun};

/// A structural element recovered from page geometry.
///
/// Closed tagged union so the renderer and document accessors stay
/// exhaustive and statically checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// A heading with a level
    Header(Header),
    /// A flowing paragraph
    Paragraph(Paragraph),
    /// An ordered or unordered list
    Listing(Listing),
    /// A table of nested text blocks
    Table(Table),
}

impl Element {
    /// Bounding box of the element.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Element::Header(h) => h.bounds,
            Element::Paragraph(p) => p.bounds,
            Element::Listing(l) => l.bounds,
            Element::Table(t) => t.bounds,
        }
    }

    /// Flattened text rendering of the element.
    pub fn text(&self) -> String {
        match self {
            Element::Header(h) => h.text(),
            Element::Paragraph(p) => p.text(),
            Element::Listing(l) => l.text(),
            Element::Table(t) => t.text(),
        }
    }
}

/// Heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLevel {
    /// Chapter title
    H1,
    /// Section heading
    H2,
    /// Minor heading
    H3,
}

impl HeaderLevel {
    /// HTML tag name for this level.
    pub fn tag(&self) -> &'static str {
        match self {
            HeaderLevel::H1 => "h1",
            HeaderLevel::H2 => "h2",
            HeaderLevel::H3 => "h3",
        }
    }
}

/// A heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Heading level
    pub level: HeaderLevel,
    /// Styled text runs
    pub runs: Vec<StyleRun>,
    /// Bounding box
    pub bounds: BoundingBox,
}

impl Header {
    /// Flattened text of the heading.
    pub fn text(&self) -> String {
        join_runs(&self.runs)
    }
}

/// A flowing paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Styled text runs
    pub runs: Vec<StyleRun>,
    /// Bounding box
    pub bounds: BoundingBox,
}

impl Paragraph {
    /// Flattened text of the paragraph.
    pub fn text(&self) -> String {
        join_runs(&self.runs)
    }
}

/// Ordered or unordered list kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Numbered items ("1.", "2-", ...)
    Ordered,
    /// Bulleted items
    Unordered,
}

impl ListKind {
    /// HTML tag name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// One list item: an ordered sequence of styled runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Styled text runs
    pub runs: Vec<StyleRun>,
}

impl ListItem {
    /// Flattened text of the item.
    pub fn text(&self) -> String {
        join_runs(&self.runs)
    }
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Ordered or unordered
    pub kind: ListKind,
    /// Items in reading order
    pub items: Vec<ListItem>,
    /// Bounding box
    pub bounds: BoundingBox,
}

impl Listing {
    /// Flattened text: items joined in order.
    pub fn text(&self) -> String {
        self.items
            .iter()
            .map(|i| i.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A table cell holding nested text blocks.
///
/// Cell content never passes through the header/list/paragraph classifier;
/// it keeps its raw section structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Nested sections of the cell
    pub sections: Vec<Section>,
}

impl TableCell {
    /// Flattened text of the cell.
    pub fn text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells left to right
    pub cells: Vec<TableCell>,
}

/// A table of externally detected geometry filled with nested text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows top to bottom
    pub rows: Vec<TableRow>,
    /// Bounding box of the detected table region
    pub bounds: BoundingBox,
}

impl Table {
    /// Flattened text: rows joined by newlines, cells by tabs.
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|c| c.text())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_runs(runs: &[StyleRun]) -> String {
    runs.iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontStyle;

    #[test]
    fn test_header_text() {
        let header = Header {
            level: HeaderLevel::H1,
            runs: vec![
                StyleRun::new(FontStyle::Bold, "LOS"),
                StyleRun::new(FontStyle::Bold, "RASTREADORES"),
            ],
            bounds: BoundingBox::new(0, 0, 100, 20),
        };
        assert_eq!(header.text(), "LOS RASTREADORES");
        assert_eq!(header.level.tag(), "h1");
    }

    #[test]
    fn test_listing_text() {
        let listing = Listing {
            kind: ListKind::Ordered,
            items: vec![
                ListItem {
                    runs: vec![StyleRun::new(FontStyle::Normal, "1. uno")],
                },
                ListItem {
                    runs: vec![StyleRun::new(FontStyle::Normal, "2. dos")],
                },
            ],
            bounds: BoundingBox::new(0, 0, 10, 10),
        };
        assert_eq!(listing.text(), "1. uno 2. dos");
        assert_eq!(listing.kind.tag(), "ol");
    }

    #[test]
    fn test_element_bounds_dispatch() {
        let p = Element::Paragraph(Paragraph {
            runs: vec![StyleRun::new(FontStyle::Normal, "hola")],
            bounds: BoundingBox::new(1, 2, 3, 4),
        });
        assert_eq!(p.bounds(), BoundingBox::new(1, 2, 3, 4));
        assert_eq!(p.text(), "hola");
    }
}
