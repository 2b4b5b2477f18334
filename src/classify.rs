//! The classification core: headers, lists and paragraphs from geometry.
//!
//! `classify` is a recursive-descent pass over a flat line sequence. Dispatch
//! priority is fixed: header, then ordered listing, then unordered listing,
//! then the paragraph fallback. Each matcher consumes the lines it claims and
//! recurses on the unmatched remainder; results are appended in match order,
//! which preserves top-to-bottom reading order without a secondary sort.
//!
//! Classification is total: empty input yields empty output, and every line
//! sequence classifies as something. The only failure mode is silent
//! misclassification, mitigated by the dispatch priority and the tuned
//! thresholds in [`ClassifyOptions`].

use log::debug;

use crate::layout::repair_word_breaks;
use crate::model::{
    bounds_of_lines, format_words, is_bold_font, is_heavy_font, is_medium_font, BoundingBox,
    Element, Header, HeaderLevel, Line, ListItem, ListKind, Listing, Paragraph, Section, StyleRun,
};
use crate::options::ClassifyOptions;

/// Classify one pre-grouped block of lines into structural elements.
pub fn classify(lines: Vec<Line>, options: &ClassifyOptions) -> Vec<Element> {
    if lines.is_empty() {
        return Vec::new();
    }

    if let Some(elements) = match_header(&lines, options) {
        return elements;
    }
    if let Some(elements) = match_listing(&lines, ListKind::Ordered, options) {
        return elements;
    }
    if let Some(elements) = match_listing(&lines, ListKind::Unordered, options) {
        return elements;
    }

    split_paragraphs(lines, options)
}

/// Classify every section of a page in order.
pub fn classify_sections(sections: Vec<Section>, options: &ClassifyOptions) -> Vec<Element> {
    let mut elements = Vec::new();
    for section in sections {
        elements.extend(classify(section.lines, options));
    }
    debug!("classified {} elements", elements.len());
    elements
}

/// Header test over the first line of a block.
///
/// Matches either an all-caps line in a sufficiently large heavy face, or a
/// size-10 line where every word is bold-or-medium (no case requirement).
/// The remainder of the block classifies recursively after the header.
fn match_header(lines: &[Line], options: &ClassifyOptions) -> Option<Vec<Element>> {
    let first = &lines[0];
    let lead = first.first();

    let all_caps = first.is_uppercase()
        && lead.size >= options.header_min_size
        && is_heavy_font(&lead.font);
    let heavy_line = lead.size == options.header_min_size
        && first.words.iter().all(|w| is_heavy_font(&w.font));

    if !all_caps && !heavy_line {
        return None;
    }

    let level = header_level(lead.size, &lead.font, options);
    let mut lines = lines.to_vec();
    let rest = lines.split_off(1);
    let (runs, bounds) = format_block(&mut lines);

    let mut elements = vec![Element::Header(Header { level, runs, bounds })];
    elements.extend(classify(rest, options));
    Some(elements)
}

fn header_level(size: i32, font: &str, options: &ClassifyOptions) -> HeaderLevel {
    if is_bold_font(font) && size > options.title_min_size {
        HeaderLevel::H1
    } else if is_medium_font(font) && size >= options.header_min_size {
        HeaderLevel::H2
    } else {
        HeaderLevel::H3
    }
}

/// Whether a line opens an ordered list item.
///
/// First character of the first token numeric, second character (if any)
/// non-alphabetic: covers "1.", "1-", "3", but not "1st".
fn starts_ordered_item(line: &Line) -> bool {
    let mut chars = line.first().text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => chars.next().map_or(true, |c| !c.is_alphabetic()),
        _ => false,
    }
}

/// Whether a line opens an unordered list item.
fn starts_unordered_item(line: &Line, bullets: &[char]) -> bool {
    line.first()
        .text
        .chars()
        .next()
        .is_some_and(|c| bullets.contains(&c))
}

/// Listing test: group marker-started runs of lines into items.
///
/// Lines before the first marker are never captured by an item; they
/// classify recursively first and the listing is appended after them. Every
/// marker line opens an item, every later non-marker line joins the open
/// item. A block with zero markers yields no listing.
fn match_listing(
    lines: &[Line],
    kind: ListKind,
    options: &ClassifyOptions,
) -> Option<Vec<Element>> {
    let is_marker = |line: &Line| match kind {
        ListKind::Ordered => starts_ordered_item(line),
        ListKind::Unordered => starts_unordered_item(line, &options.bullets),
    };

    let first_marker = lines.iter().position(is_marker)?;

    let mut item_blocks: Vec<Vec<Line>> = Vec::new();
    for line in &lines[first_marker..] {
        if is_marker(line) {
            item_blocks.push(vec![line.clone()]);
        } else if let Some(open) = item_blocks.last_mut() {
            open.push(line.clone());
        }
    }

    let mut bounds: Option<BoundingBox> = None;
    let mut items = Vec::with_capacity(item_blocks.len());
    for mut block in item_blocks {
        let (runs, block_bounds) = format_block(&mut block);
        bounds = Some(match bounds {
            Some(b) => b.union(&block_bounds),
            None => block_bounds,
        });
        items.push(ListItem { runs });
    }

    let mut elements = classify(lines[..first_marker].to_vec(), options);
    elements.push(Element::Listing(Listing {
        kind,
        items,
        bounds: bounds.unwrap_or(BoundingBox::new(0, 0, 0, 0)),
    }));
    Some(elements)
}

/// Paragraph fallback: split on first-line-indent signals.
///
/// A block sitting at or beyond the wide margin (a far-right or centered
/// column) stays one paragraph. Otherwise a line indented more than
/// `indent_step` past the block minimum starts a new paragraph, and flat
/// lines accumulate into the current one.
fn split_paragraphs(lines: Vec<Line>, options: &ClassifyOptions) -> Vec<Element> {
    let min_indent = lines.iter().map(|l| l.indent()).min().unwrap_or(0);

    let mut groups: Vec<Vec<Line>> = Vec::new();
    if min_indent >= options.wide_margin {
        groups.push(lines);
    } else {
        for line in lines {
            let opens = line.indent() > min_indent + options.indent_step;
            match groups.last_mut() {
                Some(group) if !opens => group.push(line),
                _ => groups.push(vec![line]),
            }
        }
    }

    groups
        .into_iter()
        .map(|mut group| {
            let (runs, bounds) = format_block(&mut group);
            Element::Paragraph(Paragraph { runs, bounds })
        })
        .collect()
}

/// Turn a matched block's lines into style runs and a bounding box.
///
/// Word-break repair happens here, once per block, before formatting.
fn format_block(lines: &mut Vec<Line>) -> (Vec<StyleRun>, BoundingBox) {
    repair_word_breaks(lines);
    let bounds = bounds_of_lines(lines);
    let words: Vec<_> = lines.iter().flat_map(|l| l.words.iter().cloned()).collect();
    (format_words(&words), bounds)
}
