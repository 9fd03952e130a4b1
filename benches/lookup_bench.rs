// Benchmarks for header normalization and lookup

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mimedesc::{extract_mime_type, Dataset, MimeDescriptions};

const HEADERS: &[&str] = &[
    "application/pdf",
    "  TEXT/PLAIN ; charset=utf-8 ",
    "multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxkTrZu0gW",
    "application/x-custom; param=value",
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_mime_type");

    for header in HEADERS {
        group.bench_with_input(BenchmarkId::from_parameter(header), header, |b, header| {
            b.iter(|| extract_mime_type(black_box(header)));
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    // Materialise the table outside the measured loop
    let engine = MimeDescriptions::new(Dataset::builtin());

    c.bench_function("lookup_hit", |b| {
        b.iter(|| engine.lookup(black_box("application/pdf")));
    });

    c.bench_function("lookup_miss", |b| {
        b.iter(|| engine.lookup(black_box("unknown/unknown")));
    });

    let mut group = c.benchmark_group("get_from_header_with_fallback");

    for header in HEADERS {
        group.bench_with_input(BenchmarkId::from_parameter(header), header, |b, header| {
            b.iter(|| engine.get_from_header_with_fallback(black_box(header), None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_lookup);
criterion_main!(benches);
