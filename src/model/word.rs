//! Word-level types and font-name predicates.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in integer page units.
///
/// `top` grows downward, matching the extraction service's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub x1: i32,
    /// Bottom edge
    pub bottom: i32,
}

impl BoundingBox {
    /// Create a bounding box from its four edges.
    pub fn new(x0: i32, top: i32, x1: i32, bottom: i32) -> Self {
        Self { x0, top, x1, bottom }
    }

    /// Check whether `other` lies entirely inside this box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.top >= self.top && other.bottom <= self.bottom
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// The smallest positioned text token, with font metadata attached.
///
/// Produced by the external word source per page, geometry already rounded
/// to integer units. Never mutated afterwards except by dehyphenation
/// splicing, which merges a hyphen-broken word across a line wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Token text
    pub text: String,
    /// Font name as reported by the PDF (e.g. "Karmina-Bold")
    pub font: String,
    /// Font size in integer units
    pub size: i32,
    /// Left edge
    pub x0: i32,
    /// Right edge
    pub x1: i32,
    /// Top edge
    pub top: i32,
    /// Baseline (bottom edge)
    pub bottom: i32,
}

impl Word {
    /// Bounding box of this word.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

/// Whether a font name denotes a bold weight.
pub fn is_bold_font(name: &str) -> bool {
    name.contains("Black") || name.contains("Bold")
}

/// Whether a font name denotes a medium weight.
pub fn is_medium_font(name: &str) -> bool {
    name.contains("Medium")
}

/// Whether a font name denotes an italic face.
pub fn is_italic_font(name: &str) -> bool {
    name.contains("Italic")
}

/// Bold-or-medium: the weight class header tests accept.
pub fn is_heavy_font(name: &str) -> bool {
    is_bold_font(name) || is_medium_font(name)
}
