use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gf2x_engine::{EngineConfig, Poly, Radix};
use std::hint::black_box;

fn random_digits(n: usize, seed: u32) -> Vec<u32> {
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state & 0x3fff_ffff
        })
        .collect()
}

fn bench_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("square");
    let cfg = EngineConfig { radix: Radix::Bits30, ..Default::default() };

    for &ndigs in &[8usize, 64, 512, 4096] {
        let a = Poly::from_digits(cfg.radix, random_digits(ndigs, 1));
        group.throughput(Throughput::Elements(ndigs as u64));
        group.bench_with_input(BenchmarkId::new("square_n", ndigs), &ndigs, |bencher, _| {
            bencher.iter(|| black_box(gf2x_engine::sqr(black_box(&a), &cfg).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square);
criterion_main!(benches);
