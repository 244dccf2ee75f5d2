//! Benchmarks for uncv parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the pipeline over synthetic resume data.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use uncv::{MemorySource, ParseOptions, SourceItem};

/// Build a synthetic one-column resume as source items, `entries` jobs
/// deep.
fn create_test_source(entries: usize) -> MemorySource {
    let mut items = vec![
        SourceItem::new("Jane Doe", 72.0, 760.0, "Times-Bold"),
        SourceItem::new("jane@example.com | (555) 123-4567", 72.0, 746.0, "Times"),
        SourceItem::new("Cambridge, MA", 72.0, 732.0, "Times"),
        SourceItem::new("SKILLS", 72.0, 704.0, "Times-Bold"),
        SourceItem::new("Technical: Rust, Go, Python, SQL", 72.0, 690.0, "Times"),
        SourceItem::new("EXPERIENCE", 72.0, 662.0, "Times-Bold"),
    ];

    let mut y = 648.0;
    for i in 0..entries {
        items.push(SourceItem::new(
            format!("Company {} Jan 2018 - Dec 2020", i),
            72.0,
            y,
            "Times-Bold",
        ));
        items.push(SourceItem::new("Software Engineer", 72.0, y - 14.0, "Times"));
        items.push(SourceItem::new(
            "\u{2022} Built and shipped internal tooling",
            80.0,
            y - 28.0,
            "Times",
        ));
        items.push(SourceItem::new(
            "\u{2022} Reduced infrastructure cost by measurable amounts",
            80.0,
            y - 42.0,
            "Times",
        ));
        y -= 76.0;
    }

    MemorySource::single_page(items)
}

/// Build the equivalent resume as plain extracted text.
fn create_test_text(entries: usize) -> String {
    let mut text = String::from(
        "Jane Doe\njane@example.com | (555) 123-4567\nCambridge, MA\n\nSKILLS\nTechnical: Rust, Go, Python, SQL\n\nEXPERIENCE\n",
    );
    for i in 0..entries {
        text.push_str(&format!(
            "Company {} Jan 2018 - Dec 2020\nSoftware Engineer\n\u{2022} Built and shipped internal tooling\n\u{2022} Reduced infrastructure cost by measurable amounts\n\n",
            i
        ));
    }
    text
}

/// Benchmark the full fragment pipeline at various resume sizes.
fn bench_source_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_parsing");

    for entries in [2, 8, 32].iter() {
        let source = create_test_source(*entries);

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| uncv::parse_source(black_box(&source)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the lenient text-entry path.
fn bench_text_parsing(c: &mut Criterion) {
    let text = create_test_text(8);

    c.bench_function("text_parsing", |b| {
        b.iter(|| uncv::parse_text(black_box(&text)).unwrap());
    });
}

/// Benchmark the layout stages without field extraction.
fn bench_segmentation(c: &mut Criterion) {
    let source = create_test_source(8);
    let options = ParseOptions::default();

    c.bench_function("segmentation", |b| {
        b.iter(|| uncv::segment_source(black_box(&source), &options).unwrap());
    });
}

/// Benchmark formatting of a parsed document.
fn bench_formatting(c: &mut Criterion) {
    let doc = uncv::parse_source(&create_test_source(8)).unwrap();

    c.bench_function("formatting", |b| {
        b.iter(|| uncv::format_resume(black_box(&doc)));
    });
}

criterion_group!(
    benches,
    bench_source_parsing,
    bench_text_parsing,
    bench_segmentation,
    bench_formatting,
);
criterion_main!(benches);
