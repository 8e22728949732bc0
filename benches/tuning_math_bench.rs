use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use skytune::api::{TimeQuery, TuningEngine};
use skytune::core::{
    Checkpoint, WeatherCondition, base_params_at, diff_params, locate, merge_params,
};

fn bench_locate_sweep(c: &mut Criterion) {
    c.bench_function("locate_sweep_1k", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                let time = f64::from(step) / 1_000.0;
                let _ = locate(black_box(time));
            }
        })
    });
}

fn bench_diff_merge_round_trip(c: &mut Criterion) {
    let base = base_params_at(WeatherCondition::Rain, 0.25);
    let mut edited = base;
    edited.cloud.coverage = 0.95;
    edited.rain.intensity = 0.4;
    edited.layers.snow = true;

    c.bench_function("diff_merge_round_trip", |b| {
        b.iter(|| {
            let patch = diff_params(black_box(edited), black_box(base), &[]);
            let _ = merge_params(black_box(base), Some(&patch));
        })
    });
}

fn bench_full_params_continuous(c: &mut Criterion) {
    let mut engine = TuningEngine::new();
    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Dawn);
    let mut edited = engine.full_params(WeatherCondition::Rain, TimeQuery::At(Checkpoint::Dawn));
    edited.cloud.coverage = 0.2;
    engine.update_params(WeatherCondition::Rain, &edited);

    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Noon);
    let mut edited = engine.full_params(WeatherCondition::Rain, TimeQuery::At(Checkpoint::Noon));
    edited.cloud.coverage = 0.8;
    engine.update_params(WeatherCondition::Rain, &edited);

    c.bench_function("full_params_continuous", |b| {
        b.iter(|| {
            let _ = engine.full_params(
                black_box(WeatherCondition::Rain),
                black_box(TimeQuery::Continuous(0.3125)),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_locate_sweep,
    bench_diff_merge_round_trip,
    bench_full_params_continuous
);
criterion_main!(benches);
