//! Per-page document model.

use serde::{Deserialize, Serialize};

use super::{Element, Header, HeaderLevel, ListKind, Listing, Paragraph, Table};

/// One page's classified elements plus its tables.
///
/// Built once per page, immutable afterwards. Documents accumulate in memory
/// across all processed pages; chapters and HTML files are derived from them
/// at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page number this document was classified from
    pub page: usize,

    /// Structural elements in classification order (tables appended last)
    pub elements: Vec<Element>,
}

impl Document {
    /// Assemble a document from one page's classified elements and tables.
    pub fn new(page: usize, elements: Vec<Element>, tables: Vec<Table>) -> Self {
        let mut elements = elements;
        elements.extend(tables.into_iter().map(Element::Table));
        Self { page, elements }
    }

    /// All elements sorted by vertical position, for rendering.
    ///
    /// Classification order interleaves flow elements and tables arbitrarily;
    /// rendering order is top-to-bottom on the page.
    pub fn all_elements(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        sorted.sort_by_key(|e| e.bounds().top);
        sorted
    }

    /// Headers on this page, in element order.
    pub fn headers(&self) -> Vec<&Header> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Header(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    /// Ordered lists on this page.
    pub fn ordered_lists(&self) -> Vec<&Listing> {
        self.listings(ListKind::Ordered)
    }

    /// Unordered lists on this page.
    pub fn lists(&self) -> Vec<&Listing> {
        self.listings(ListKind::Unordered)
    }

    /// Paragraphs on this page.
    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Tables on this page.
    pub fn tables(&self) -> Vec<&Table> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Whether the page produced no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether this page starts a chapter (carries a top-level header).
    pub fn has_title(&self) -> bool {
        self.headers().iter().any(|h| h.level == HeaderLevel::H1)
    }

    fn listings(&self, kind: ListKind) -> Vec<&Listing> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Listing(l) if l.kind == kind => Some(l),
                _ => None,
            })
            .collect()
    }
}
