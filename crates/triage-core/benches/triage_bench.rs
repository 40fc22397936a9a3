//! # Triage Benchmarks
//!
//! Performance benchmarks for the triage engine.
//!
//! Run with: `cargo bench -p triage-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use triage_core::{analyze_issue, classify_urgency, detect_categories, normalize};

const SAMPLE: &str = "There is a gas leak near the school, smoke everywhere, emergency! \
                      The broken manhole next to the bus stop has been open since last week.";

/// Repeat the sample description until it reaches roughly `size` bytes.
fn long_description(size: usize) -> String {
    let mut text = String::with_capacity(size + SAMPLE.len());
    while text.len() < size {
        text.push_str(SAMPLE);
        text.push(' ');
    }
    text
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_analyze_issue(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_issue");

    for size in [128usize, 1024, 16 * 1024].iter() {
        let description = long_description(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &description, |b, d| {
            b.iter(|| black_box(analyze_issue(black_box(d), &["fire", "smoke"])));
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let text = normalize(SAMPLE, &["fire"]);

    c.bench_function("classify_urgency", |b| {
        b.iter(|| black_box(classify_urgency(black_box(&text), 90)));
    });

    c.bench_function("detect_categories", |b| {
        b.iter(|| black_box(detect_categories(black_box(&text))));
    });
}

criterion_group!(benches, bench_analyze_issue, bench_stages);
criterion_main!(benches);
