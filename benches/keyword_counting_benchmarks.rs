//! Benchmarks for keyword counting over report-sized text.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_keyword_audit::counter::count_keywords;
use pdf_keyword_audit::KeywordSet;

const SAMPLE: &str = "Drilled ahead to 3,120 m. Observed flowing on connection, shut in, \
    recorded ISIP. Performed DFIT; fit equivalent 1.62 SG. Lost returns while tripping, \
    losing 4 m3/h. Pumped LCM pill and regained returns. No kick, no leak at BOP. ";

fn bench_count_keywords(c: &mut Criterion) {
    let keywords = KeywordSet::default();
    let mut group = c.benchmark_group("count_keywords");

    for repeats in [1usize, 100, 10_000] {
        let text = SAMPLE.repeat(repeats);
        group.bench_with_input(BenchmarkId::from_parameter(text.len()), &text, |b, text| {
            b.iter(|| count_keywords(black_box(text), black_box(&keywords)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count_keywords);
criterion_main!(benches);
