//! Envelope parsing benchmarks.
//!
//! Measures decoding of alignment channel pushes:
//! - Progress envelopes
//! - Result envelopes with increasing item counts
//!
//! Run with: cargo bench --bench envelope
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use catsnap_client::{AlignmentResult, ChannelEnvelope, ResultsItem};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const ITEM_COUNTS: &[usize] = &[1, 16, 256];
const SEQUENCE_LEN: usize = 1_000;

// ============================================================================
// Fixtures
// ============================================================================

fn result_envelope(items: usize) -> String {
    let sequence: String = "ACGT-".chars().cycle().take(SEQUENCE_LEN).collect();
    let result = AlignmentResult::new("bench").with_items(
        (0..items).map(|i| ResultsItem::new(format!("seq{i}"), sequence.clone())),
    );
    serde_json::json!({ "result": result }).to_string()
}

// ============================================================================
// Benchmark: Progress
// ============================================================================

fn bench_progress(c: &mut Criterion) {
    let text = r#"{"progress":"Aligning 42/128"}"#;
    c.bench_function("envelope_progress", |b| {
        b.iter(|| ChannelEnvelope::parse(black_box(text)))
    });
}

// ============================================================================
// Benchmark: Result
// ============================================================================

fn bench_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_result");

    for &count in ITEM_COUNTS {
        let text = result_envelope(count);
        group.bench_with_input(BenchmarkId::new("items", count), &text, |b, text| {
            b.iter(|| ChannelEnvelope::parse(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_progress, bench_result);
criterion_main!(benches);
