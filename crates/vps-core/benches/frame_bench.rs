//! Criterion benchmarks for the request frame encoder and reply decoder.
//!
//! Run with:
//! ```bash
//! cargo bench --package vps-core --bench frame_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vps_core::{
    decode_reply, encode_request, ExternalParameters, InternalParameters, Quaternion,
    RequestParameters,
};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn make_parameters() -> RequestParameters {
    RequestParameters::new(
        InternalParameters::new(1280.0, 720.0, 40.0, false),
        ExternalParameters::new(
            37.35791604,
            -121.93528937,
            -11.0,
            Quaternion::new(0.1133, 0.1423, 0.7066, 0.6838),
        ),
    )
}

const SUCCESS_REPLY: &str = r#"{"status":"success","data":{"latitude":37.358,"longitude":-121.935,"x":0.5,"y":1.5,"z":-0.25,"height":-11.0,"yx":0.01,"xx":0.99}}"#;
const FAILURE_REPLY: &str = r#"{"msg":"no match for query image","status":"failure"}"#;

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_encode_request(c: &mut Criterion) {
    let params = make_parameters();
    let mut group = c.benchmark_group("encode_request");

    // Typical compressed camera frame sizes from 64 KiB to 1 MiB.
    for size_kib in [64usize, 256, 1024] {
        let image = vec![0xABu8; size_kib * 1024];
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kib}KiB")),
            &image,
            |b, image| b.iter(|| encode_request(black_box(image), black_box(&params)).unwrap()),
        );
    }
    group.finish();
}

fn bench_decode_reply(c: &mut Criterion) {
    c.bench_function("decode_reply/success", |b| {
        b.iter(|| decode_reply(black_box(SUCCESS_REPLY)).unwrap())
    });
    c.bench_function("decode_reply/failure", |b| {
        b.iter(|| decode_reply(black_box(FAILURE_REPLY)).unwrap())
    });
}

criterion_group!(benches, bench_encode_request, bench_decode_reply);
criterion_main!(benches);
