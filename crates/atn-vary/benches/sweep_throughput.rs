use atn_core::rng::RngHandle;
use atn_nodecfg::{decode, encode};
use atn_vary::{bounded_random, pair_sweep, triple_sweep, PercentRange, CONVERGENCE_TEMPLATES};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_sweeps(c: &mut Criterion) {
    let template = decode(CONVERGENCE_TEMPLATES[2]).expect("template");
    let range = PercentRange::new(50, 150, 10).expect("range");

    c.bench_function("pair_sweep_eco3", |b| {
        b.iter(|| pair_sweep(&template, "X", &range, 0).len());
    });
    c.bench_function("triple_sweep_eco3", |b| {
        b.iter(|| triple_sweep(&template, "X", &range).len());
    });
    c.bench_function("bounded_random_encode", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(1234);
            bounded_random(&template, &["initialBiomass", "K", "R", "X"], 50.0, 150.0, 1000, &mut rng)
                .iter()
                .map(|config| encode(config).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_sweeps);
criterion_main!(benches);
