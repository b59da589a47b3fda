//! Benchmarks for the slider pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slider::{parse_deck, render_deck, PageConfig, PdfRenderer};

/// A deck mixing every format flag, escapes, comments and an overlong line.
fn sample_deck(slides: usize) -> String {
    let mut source = String::from("# generated deck\n");
    for i in 0..slides {
        match i % 5 {
            0 => source.push_str(&format!("Slide {}\n", i)),
            1 => source.push_str(&format!("!< fn slide_{}() {{\\n\\treturn;\\n}}\n", i)),
            2 => source.push_str(&format!("- a smaller slide with a longer sentence, number {}\n", i)),
            3 => source.push_str("# a comment between slides\n"),
            _ => {
                source.push_str(&"word ".repeat(60));
                source.push('\n');
            }
        }
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = sample_deck(10);
    let large = sample_deck(1000);

    group.bench_function("parse_small", |b| b.iter(|| parse_deck(black_box(&small))));
    group.bench_function("parse_large", |b| b.iter(|| parse_deck(black_box(&large))));

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let deck = parse_deck(&sample_deck(200));
    let page = PageConfig::default();

    group.bench_function("layout_200", |b| {
        b.iter(|| {
            let mut pdf = PdfRenderer::default();
            render_deck(&mut pdf, black_box(&deck), &page).unwrap();
            pdf
        })
    });

    group.bench_function("layout_and_serialize_200", |b| {
        b.iter(|| {
            let mut pdf = PdfRenderer::default();
            render_deck(&mut pdf, black_box(&deck), &page).unwrap();
            pdf.to_bytes()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_rendering);
criterion_main!(benches);
