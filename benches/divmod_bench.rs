use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gf2x_engine::{EngineConfig, Poly, Radix};
use std::hint::black_box;

fn random_digits(n: usize, seed: u32) -> Vec<u32> {
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    let mut digits: Vec<u32> = (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state & 0x3fff_ffff
        })
        .collect();
    if let Some(last) = digits.last_mut() {
        *last |= 1 << 20;
    }
    digits
}

fn bench_divmod(c: &mut Criterion) {
    let mut group = c.benchmark_group("divmod");
    let cfg = EngineConfig { radix: Radix::Bits30, ..Default::default() };

    for &ndigs_d in &[4usize, 32, 256] {
        let d = Poly::from_digits(cfg.radix, random_digits(ndigs_d, 11));
        let u = Poly::from_digits(cfg.radix, random_digits(ndigs_d * 8, 13));
        group.throughput(Throughput::Elements(ndigs_d as u64));
        group.bench_with_input(BenchmarkId::new("newton_block_divmod", ndigs_d), &ndigs_d, |bencher, _| {
            bencher.iter(|| black_box(gf2x_engine::divmod(black_box(&u), black_box(&d), &cfg).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_divmod);
criterion_main!(benches);
