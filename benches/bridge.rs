//! Criterion benchmarks for the buffer bridge.
//!
//! Run with:
//!   cargo bench --bench bridge
//!
//! Measures the three operations over synthetic chunks at two sizes, plus
//! the validation overhead the bridge adds on top of the raw primitives.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lz4_bridge::{compress, compute_bound, decompress, Region, RegionMut};

/// Moderately compressible synthetic chunk: repeated sentence fragments
/// with a position-dependent byte mixed in so runs are bounded.
fn synthetic_chunk(size: usize) -> Vec<u8> {
    let phrase = b"lorem ipsum dolor sit amet, consectetur adipiscing elit ";
    (0..size)
        .map(|i| phrase[i % phrase.len()] ^ ((i / 1024) as u8 & 0x0F))
        .collect()
}

fn bench_bridge_compress_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge_compress_decompress");

    for &chunk_size in &[65_536usize, 262_144] {
        let chunk = synthetic_chunk(chunk_size);
        let len = chunk_size as i32;
        let bound = compute_bound(len).unwrap();

        // ── compress ────────────────────────────────────────────────────────
        {
            let mut dst = vec![0u8; bound as usize];
            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(
                BenchmarkId::new("compress", chunk_size),
                &chunk,
                |b, chunk| {
                    b.iter(|| {
                        compress(
                            Region::new(chunk, 0, len).unwrap(),
                            RegionMut::new(&mut dst, 0, bound).unwrap(),
                        )
                        .unwrap()
                    })
                },
            );
        }

        // ── decompress — pre-compress the chunk once, then benchmark ────────
        {
            let mut compressed = vec![0u8; bound as usize];
            let written = compress(
                Region::new(&chunk, 0, len).unwrap(),
                RegionMut::new(&mut compressed, 0, bound).unwrap(),
            )
            .unwrap();
            let mut dst = vec![0u8; chunk_size];
            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(
                BenchmarkId::new("decompress", chunk_size),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        decompress(
                            Region::new(compressed, 0, written).unwrap(),
                            RegionMut::new(&mut dst, 0, len).unwrap(),
                        )
                        .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_bound(c: &mut Criterion) {
    c.bench_function("compute_bound", |b| {
        b.iter(|| compute_bound(std::hint::black_box(262_144)).unwrap())
    });
}

criterion_group!(benches, bench_bridge_compress_decompress, bench_bound);
criterion_main!(benches);
