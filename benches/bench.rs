use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use norepeat::UniqueSampler;

fn bench_pick(c: &mut Criterion) {
    c.bench_function("pick_rack", |b| {
        let mut sampler =
            UniqueSampler::new((1u8..=15).collect(), SmallRng::seed_from_u64(0)).unwrap();
        b.iter(|| sampler.pick());
    });

    c.bench_function("pick_large_pool", |b| {
        let mut sampler =
            UniqueSampler::new((0u32..100_000).collect(), SmallRng::seed_from_u64(0)).unwrap();
        b.iter(|| sampler.pick());
    });

    c.bench_function("pick_with_threshold", |b| {
        let mut sampler = UniqueSampler::new((0u32..1_000).collect(), SmallRng::seed_from_u64(0))
            .unwrap()
            .reset_after(64);
        b.iter(|| sampler.pick());
    });
}

criterion_group!(benches, bench_pick);
criterion_main!(benches);
