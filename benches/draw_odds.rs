use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mtg_odds::odds::{choose, prob_all_at_least, sweep, Group};

fn benchmark_choose(c: &mut Criterion) {
    c.bench_function("choose_250_125", |b| {
        b.iter(|| choose(black_box(250), black_box(125)))
    });
}

fn benchmark_multi_group(c: &mut Criterion) {
    let groups = [
        Group::new(1, 4),
        Group::new(1, 4),
        Group::new(2, 8),
        Group::new(1, 24),
    ];
    c.bench_function("prob_all_at_least_four_groups", |b| {
        b.iter(|| prob_all_at_least(black_box(&groups), black_box(10), black_box(99)))
    });
}

fn benchmark_sweep(c: &mut Criterion) {
    let groups = [Group::new(2, 24), Group::new(1, 4)];
    c.bench_function("sweep_fifteen_turns", |b| {
        b.iter(|| sweep(black_box(60), black_box(&groups), black_box(15)))
    });
}

criterion_group!(
    benches,
    benchmark_choose,
    benchmark_multi_group,
    benchmark_sweep
);
criterion_main!(benches);
