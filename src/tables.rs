//! Table adapter: externally detected geometry to nested text blocks.
//!
//! The extraction service finds table regions and cell rectangles; this
//! adapter re-runs word extraction scoped to each cell and groups the result
//! into lines and sections. Table content never reaches the main classifier.

use crate::layout::{group_lines, group_sections};
use crate::model::{Table, TableCell, TableRow};
use crate::options::ClassifyOptions;
use crate::source::{PageView, TableRegion};

/// Build tables for every detected region on a page view.
pub fn parse_tables(view: &PageView, options: &ClassifyOptions) -> Vec<Table> {
    view.tables()
        .iter()
        .map(|region| parse_table(view, region, options))
        .collect()
}

/// Fill one detected table region with cell text.
pub fn parse_table(view: &PageView, region: &TableRegion, options: &ClassifyOptions) -> Table {
    let rows = region
        .rows
        .iter()
        .map(|cells| TableRow {
            cells: cells
                .iter()
                .map(|bounds| {
                    let scoped = view.crop(*bounds);
                    let lines =
                        group_lines(scoped.words().to_vec(), options.baseline_tolerance);
                    let sections = group_sections(lines, options.section_gap);
                    TableCell { sections }
                })
                .collect(),
        })
        .collect();

    Table {
        rows,
        bounds: region.bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Word};

    fn word(text: &str, x0: i32, x1: i32, top: i32, bottom: i32) -> Word {
        Word {
            text: text.to_string(),
            font: "Karmina".to_string(),
            size: 9,
            x0,
            x1,
            top,
            bottom,
        }
    }

    #[test]
    fn test_parse_table_scopes_words_to_cells() {
        let words = vec![
            word("edad", 210, 240, 310, 320),
            word("puntos", 310, 350, 310, 320),
            word("fuera", 10, 40, 310, 320),
        ];
        let region = TableRegion {
            bounds: BoundingBox::new(200, 300, 400, 380),
            rows: vec![vec![
                BoundingBox::new(200, 300, 300, 340),
                BoundingBox::new(300, 300, 400, 340),
            ]],
        };
        let view = PageView::new(1, words, vec![region]);

        let tables = parse_tables(&view, &ClassifyOptions::default());
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells.len(), 2);
        assert_eq!(table.rows[0].cells[0].text(), "edad");
        assert_eq!(table.rows[0].cells[1].text(), "puntos");
        assert_eq!(table.bounds, BoundingBox::new(200, 300, 400, 380));
    }

    #[test]
    fn test_cell_sections_split_on_vertical_gap() {
        let words = vec![
            word("arriba", 210, 240, 300, 310),
            word("abajo", 210, 240, 330, 340),
        ];
        let region = TableRegion {
            bounds: BoundingBox::new(200, 290, 400, 380),
            rows: vec![vec![BoundingBox::new(200, 290, 300, 380)]],
        };
        let view = PageView::new(1, words, vec![region]);

        let region = view.tables()[0].clone();
        let table = parse_table(&view, &region, &ClassifyOptions::default());
        assert_eq!(table.rows[0].cells[0].sections.len(), 2);
    }
}
