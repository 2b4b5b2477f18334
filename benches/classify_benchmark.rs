//! Benchmark for the classification core.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chapterize::{classify_lines, ClassifyOptions, Line, Word};

fn word(text: &str, font: &str, size: i32, x0: i32, top: i32) -> Word {
    Word {
        text: text.to_string(),
        font: font.to_string(),
        size,
        x0,
        x1: x0 + text.len() as i32 * 5,
        top,
        bottom: top + size,
    }
}

fn line(text: &str, font: &str, size: i32, x0: i32, top: i32) -> Line {
    Line::new(
        text.split_whitespace()
            .enumerate()
            .map(|(i, t)| word(t, font, size, x0 + i as i32 * 45, top))
            .collect(),
    )
}

/// A dense page-sized block: heading, body text, a numbered list and a
/// bulleted list, repeated.
fn page_lines() -> Vec<Line> {
    let mut lines = Vec::new();
    let mut top = 0;
    for block in 0..8 {
        lines.push(line("SECCIÓN DE PRUEBA", "Karmina-Bold", 12, 85, top));
        top += 16;
        for _ in 0..4 {
            lines.push(line(
                "el cuerpo del texto sigue la línea base con palabras repetidas",
                "Karmina",
                9,
                85,
                top,
            ));
            top += 12;
        }
        for i in 1..=4 {
            lines.push(line(
                &format!("{i}. elemento numerado de la lista con su texto"),
                "Karmina",
                9,
                85,
                top,
            ));
            top += 12;
        }
        if block % 2 == 0 {
            lines.push(line("- punto suelto de cierre", "Karmina", 9, 85, top));
            top += 12;
        }
    }
    lines
}

fn classify_benchmark(c: &mut Criterion) {
    let lines = page_lines();
    let options = ClassifyOptions::default();

    c.bench_function("classify_dense_page", |b| {
        b.iter(|| classify_lines(black_box(lines.clone()), &options))
    });
}

criterion_group!(benches, classify_benchmark);
criterion_main!(benches);
