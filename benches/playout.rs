//! Benchmarks for move application and random playouts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use uttt_engine::core::GameRng;
use uttt_engine::games::uttt::UtttState;
use uttt_engine::playout::{random_playout, run_playouts};
use uttt_engine::rules::{ExactFiveRule, SearchState};

fn bench_take_action(c: &mut Criterion) {
    let state = UtttState::new().take_action(40).unwrap();

    c.bench_function("take_action", |b| {
        b.iter(|| black_box(&state).take_action(black_box(30)))
    });

    c.bench_function("legal_actions_free_choice", |b| {
        let root = UtttState::new();
        b.iter(|| black_box(&root).legal_actions())
    });
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");

    group.bench_function("meta_board", |b| {
        let root = UtttState::new();
        let mut rng = GameRng::new(42);
        b.iter(|| random_playout(black_box(&root), &mut rng))
    });

    group.bench_function("exact_five", |b| {
        let root = UtttState::with_rule(ExactFiveRule);
        let mut rng = GameRng::new(42);
        b.iter(|| random_playout(black_box(&root), &mut rng))
    });

    group.finish();
}

fn bench_run_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_playouts");

    for count in [10u32, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let root = UtttState::new();
            let mut rng = GameRng::new(7);
            b.iter(|| run_playouts(black_box(&root), count, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_take_action, bench_playout, bench_run_playouts);
criterion_main!(benches);
