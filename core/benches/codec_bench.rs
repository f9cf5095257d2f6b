//! Codec throughput benchmarks.
//!
//! Run: cargo bench -p compresso-core
//!
//! - buffered compression per codec
//! - streaming compression per codec
//! - full container roundtrip through the pipeline

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use compresso_core::compression::registry;
use compresso_core::config::{CompressOptions, DecompressOptions};
use compresso_core::pipeline::Pipeline;

/// Repetitive text, compresses well.
fn compressible(size: usize) -> Vec<u8> {
    let pattern = b"2026-10-16T12:00:00Z level=info msg=\"request served\" status=200 bytes=5120\n";
    pattern.iter().cycle().take(size).copied().collect()
}

const SIZES: [usize; 3] = [4 * 1024, 64 * 1024, 1024 * 1024];

fn bench_buffered(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_buffered");

    for size in SIZES {
        let data = compressible(size);
        group.throughput(Throughput::Bytes(size as u64));

        for codec in registry().iter() {
            group.bench_with_input(BenchmarkId::new(codec.name(), size), &data, |b, data| {
                b.iter(|| black_box(codec.compress_buffer(data, None).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_streaming");

    for size in SIZES {
        let data = compressible(size);
        group.throughput(Throughput::Bytes(size as u64));

        for codec in registry().iter() {
            let Some(streaming) = codec.streaming() else { continue };
            group.bench_with_input(BenchmarkId::new(codec.name(), size), &data, |b, data| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(data.len());
                    streaming.compress_stream(&mut Cursor::new(data), &mut out, None).unwrap();
                    black_box(out)
                });
            });
        }
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_roundtrip");
    let pipeline = Pipeline::default();
    let data = compressible(256 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for codec in registry().iter() {
        let opts = CompressOptions::new().algorithm(codec.name());
        group.bench_function(codec.name(), |b| {
            b.iter(|| {
                let packed = pipeline.compress_bytes(&data, &opts).unwrap();
                black_box(pipeline.decompress_bytes(&packed, &DecompressOptions::new()).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_buffered, bench_streaming, bench_roundtrip);
criterion_main!(benches);
