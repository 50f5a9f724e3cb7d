//! Benchmarks for glyph lookup and name search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hebrew_glyphs::glyph;

fn bench_lookup_by_char(c: &mut Criterion) {
    glyph::registry();

    c.bench_function("lookup_by_char", |bench| {
        bench.iter(|| black_box(glyph::lookup_by_char(black_box("ץ"))))
    });
}

fn bench_lookup_normalized(c: &mut Criterion) {
    glyph::registry();

    c.bench_function("lookup_normalized_presentation_form", |bench| {
        bench.iter(|| black_box(glyph::lookup_normalized(black_box("\u{FB2A}"))))
    });
}

fn bench_search_by_name(c: &mut Criterion) {
    glyph::registry();

    // The last record in the table: the worst case for the linear scan.
    c.bench_function("search_by_name_last", |bench| {
        bench.iter(|| black_box(glyph::search_by_name(black_box("vav yod"))))
    });
    c.bench_function("search_by_name_miss", |bench| {
        bench.iter(|| black_box(glyph::search_by_name(black_box("xyz123"))))
    });
}

criterion_group!(
    benches,
    bench_lookup_by_char,
    bench_lookup_normalized,
    bench_search_by_name
);
criterion_main!(benches);
