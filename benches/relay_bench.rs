//! Benchmarks for the relay hot path.
//!
//! Run with: cargo bench --bench relay_bench
//!
//! These benchmarks measure request resolution, envelope serialization and
//! generated text extraction, which together make up the relay's own work
//! around the upstream call.

use antigravity_relay::{
    api::GenerationRequest,
    services::{envelope::extract_generated_text, ResolvedRequest},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

fn sample_request(prompt: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: Some(prompt.to_string()),
        project_id: Some("bench-project".to_string()),
        access_token: Some("ya29.bench-token".to_string()),
        ..Default::default()
    }
}

fn bench_resolve_and_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_serialize");

    for size in [16usize, 1_024, 16_384] {
        let prompt = "x".repeat(size);
        let request = sample_request(&prompt);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, request| {
            b.iter(|| {
                let resolved = ResolvedRequest::resolve(black_box(request.clone())).unwrap();
                let envelope = resolved.to_envelope("req-0-000000000");
                serde_json::to_vec(&envelope).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_extract_text(c: &mut Criterion) {
    let hit = json!({
        "response": {
            "candidates": [{"content": {"parts": [{"text": "generated text"}]}}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 3}
        }
    });
    let miss = json!({"response": {"candidates": []}});

    c.bench_function("extract_text_hit", |b| {
        b.iter(|| extract_generated_text(black_box(&hit)))
    });
    c.bench_function("extract_text_fallback", |b| {
        b.iter(|| extract_generated_text(black_box(&miss)))
    });
}

criterion_group!(benches, bench_resolve_and_serialize, bench_extract_text);
criterion_main!(benches);
