//! HTML rendering for structural elements.
//!
//! Deterministic per-variant tag mapping: h1/h2/h3 for headers, `p` for
//! paragraphs, `ol`/`ul` with one `li` per item for listings,
//! `strong`/`em` (nested for bold-italic) for style runs and
//! `table`/`tr`/`td` for tables.

use crate::model::{
    Document, Element, FontStyle, Header, Listing, Paragraph, StyleRun, Table, TableCell,
};

impl Element {
    /// HTML rendering of the element.
    pub fn to_html(&self) -> String {
        match self {
            Element::Header(h) => h.to_html(),
            Element::Paragraph(p) => p.to_html(),
            Element::Listing(l) => l.to_html(),
            Element::Table(t) => t.to_html(),
        }
    }
}

impl Header {
    /// `<h1>`/`<h2>`/`<h3>` rendering.
    pub fn to_html(&self) -> String {
        let tag = self.level.tag();
        format!("<{}>{}</{}>", tag, runs_html(&self.runs), tag)
    }
}

impl Paragraph {
    /// `<p>` rendering.
    pub fn to_html(&self) -> String {
        format!("<p>{}</p>", runs_html(&self.runs))
    }
}

impl Listing {
    /// `<ol>`/`<ul>` rendering with one `<li>` per item.
    pub fn to_html(&self) -> String {
        let tag = self.kind.tag();
        let mut html = format!("<{}>", tag);
        for item in &self.items {
            html.push_str("<li>");
            html.push_str(&runs_html(&item.runs));
            html.push_str("</li>");
        }
        html.push_str(&format!("</{}>", tag));
        html
    }
}

impl Table {
    /// `<table>`/`<tr>`/`<td>` rendering.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in &row.cells {
                html.push_str("<td>");
                html.push_str(&cell_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }
}

impl StyleRun {
    /// Style-tagged rendering of one run.
    pub fn to_html(&self) -> String {
        let text = escape_html(&self.text);
        match self.style {
            FontStyle::Normal => text,
            FontStyle::Bold => format!("<strong>{}</strong>", text),
            FontStyle::Italic => format!("<em>{}</em>", text),
            FontStyle::BoldItalic => format!("<strong><em>{}</em></strong>", text),
        }
    }
}

impl Document {
    /// Concatenated HTML of all elements, in vertical page order.
    pub fn to_html(&self) -> String {
        self.all_elements()
            .iter()
            .map(|e| e.to_html())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn runs_html(runs: &[StyleRun]) -> String {
    runs.iter()
        .map(|r| r.to_html())
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_html(cell: &TableCell) -> String {
    cell.sections
        .iter()
        .map(|s| escape_html(&s.text()))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Escape the characters HTML treats as markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
