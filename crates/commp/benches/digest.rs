//! Accumulator throughput benchmarks.
//!
//! Run with: cargo bench -p commp

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use commp::{expand_quad, Calc};

/// Generate random data
fn random_data(size: usize) -> Vec<u8> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Benchmark the full write+digest cycle, reusing one accumulator the way a
/// long-lived service would.
fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    let sizes = [(1, "1MB"), (8, "8MB"), (31, "31MB")];

    for (size_mb, size_name) in sizes {
        let size = size_mb * 1024 * 1024;
        let zeros = vec![0u8; size];
        let random = random_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        let calc = Calc::default();
        group.bench_with_input(BenchmarkId::new("zero", size_name), &zeros, |b, data| {
            b.iter(|| {
                calc.write(black_box(data)).unwrap();
                calc.digest().unwrap()
            })
        });

        let calc = Calc::default();
        group.bench_with_input(BenchmarkId::new("random", size_name), &random, |b, data| {
            b.iter(|| {
                calc.write(black_box(data)).unwrap();
                calc.digest().unwrap()
            })
        });
    }

    group.finish();
}

/// Benchmark the pure bit-expansion step on its own.
fn bench_expand_quad(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_quad");
    group.throughput(Throughput::Bytes(127));

    let quad: [u8; 127] = random_data(127).try_into().unwrap();
    group.bench_function("127B", |b| b.iter(|| expand_quad(black_box(&quad))));

    group.finish();
}

criterion_group!(benches, bench_digest, bench_expand_quad);
criterion_main!(benches);
