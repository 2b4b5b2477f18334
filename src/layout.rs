//! Geometric grouping: words into lines, lines into sections.
//!
//! Both groupers are strictly local left-to-right folds with no lookahead,
//! and neither reorders its input — tokens arrive from the extraction
//! service in reading order and stay that way.

use crate::model::{Line, Section, Word};
use crate::source::TableRegion;

/// Group words into baseline-aligned lines.
///
/// A word joins the current line when its baseline matches the line's last
/// word within `tolerance` units. Produces no empty lines.
pub fn group_lines(words: Vec<Word>, tolerance: i32) -> Vec<Line> {
    let mut lines: Vec<Vec<Word>> = Vec::new();

    for word in words {
        match lines.last_mut() {
            Some(line) => {
                let baseline = line[line.len() - 1].bottom;
                if (baseline - word.bottom).abs() <= tolerance {
                    line.push(word);
                } else {
                    lines.push(vec![word]);
                }
            }
            None => lines.push(vec![word]),
        }
    }

    lines.into_iter().map(Line::new).collect()
}

/// Vertical gap between two stacked lines.
pub fn line_separation(above: &Line, below: &Line) -> i32 {
    below.top() - above.bottom()
}

/// Group lines into sections separated by more than `gap` vertical units.
pub fn group_sections(lines: Vec<Line>, gap: i32) -> Vec<Section> {
    let mut sections: Vec<Vec<Line>> = Vec::new();

    for line in lines {
        match sections.last_mut() {
            Some(section) => {
                let last = &section[section.len() - 1];
                if line_separation(last, &line) <= gap {
                    section.push(line);
                } else {
                    sections.push(vec![line]);
                }
            }
            None => sections.push(vec![line]),
        }
    }

    sections.into_iter().map(Section::new).collect()
}

/// Drop every word that falls inside any detected table region.
///
/// Table content is classified separately through the table adapter; leaving
/// its words in the main stream would classify it twice.
pub fn remove_table_words(words: Vec<Word>, tables: &[TableRegion]) -> Vec<Word> {
    if tables.is_empty() {
        return words;
    }
    words
        .into_iter()
        .filter(|word| !tables.iter().any(|t| t.bounds.contains(&word.bounds())))
        .collect()
}

/// Repair hyphen-broken words across line wraps, in place.
///
/// For each consecutive line pair: when the upper line ends with a hyphen,
/// the hyphen is stripped, the lower line's first word is spliced onto it and
/// removed from the lower line. A lower line left empty disappears. Run once
/// per block, before style-run formatting.
pub fn repair_word_breaks(lines: &mut Vec<Line>) {
    let mut i = 0;
    while i + 1 < lines.len() {
        if lines[i].last().text.ends_with('-') {
            let continuation = lines[i + 1].words.remove(0);
            let broken = lines[i]
                .words
                .last_mut()
                .expect("lines are never empty");
            broken.text.pop();
            broken.text.push_str(&continuation.text);

            if lines[i + 1].words.is_empty() {
                lines.remove(i + 1);
                continue;
            }
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundingBox;

    fn word_at(text: &str, x0: i32, top: i32, bottom: i32) -> Word {
        Word {
            text: text.to_string(),
            font: "Karmina".to_string(),
            size: 9,
            x0,
            x1: x0 + 20,
            top,
            bottom,
        }
    }

    #[test]
    fn test_group_lines_tolerates_one_unit_jitter() {
        let words = vec![
            word_at("una", 10, 0, 10),
            word_at("sola", 40, 0, 11),
            word_at("línea", 70, 1, 10),
            word_at("otra", 10, 20, 30),
        ];
        let lines = group_lines(words, 1);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "una sola línea");
        assert_eq!(lines[1].text(), "otra");
    }

    #[test]
    fn test_group_lines_empty_input() {
        assert!(group_lines(Vec::new(), 1).is_empty());
    }

    #[test]
    fn test_group_sections_splits_on_gap() {
        let lines = vec![
            Line::new(vec![word_at("uno", 10, 0, 10)]),
            Line::new(vec![word_at("dos", 10, 12, 22)]),
            Line::new(vec![word_at("tres", 10, 40, 50)]),
        ];
        let sections = group_sections(lines, 2);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].lines.len(), 2);
        assert_eq!(sections[1].lines.len(), 1);
    }

    #[test]
    fn test_remove_table_words() {
        let words = vec![word_at("fuera", 10, 0, 10), word_at("dentro", 210, 310, 320)];
        let tables = vec![TableRegion {
            bounds: BoundingBox::new(200, 300, 400, 380),
            rows: vec![],
        }];

        let kept = remove_table_words(words, &tables);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "fuera");
    }

    #[test]
    fn test_repair_word_breaks_merges_across_wrap() {
        let mut lines = vec![
            Line::new(vec![word_at("las", 10, 0, 10), word_at("cons-", 40, 0, 10)]),
            Line::new(vec![word_at("trucciones", 10, 12, 22), word_at("claras", 60, 12, 22)]),
        ];
        repair_word_breaks(&mut lines);

        assert_eq!(lines[0].text(), "las construcciones");
        assert_eq!(lines[1].text(), "claras");
    }

    #[test]
    fn test_repair_word_breaks_drops_emptied_line() {
        let mut lines = vec![
            Line::new(vec![word_at("inter-", 10, 0, 10)]),
            Line::new(vec![word_at("venir", 10, 12, 22)]),
        ];
        repair_word_breaks(&mut lines);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "intervenir");
    }
}
