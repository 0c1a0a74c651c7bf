use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_chrono::ChronoAdapter;
use saju_pillars::{ChartOptions, day_pillar_from_date, four_pillars};
use saju_time::ZoneOffset;

fn day_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("day");
    group.bench_function("day_pillar_from_date", |b| {
        b.iter(|| day_pillar_from_date(black_box(1985), black_box(5), black_box(15)))
    });
    group.finish();
}

fn compose_bench(c: &mut Criterion) {
    let adapter = ChronoAdapter::new();
    let seoul = ZoneOffset::from_hours(9.0).unwrap();
    let t = adapter.local(1985, 5, 15, 8, 30, 0, seoul);

    let mut group = c.benchmark_group("compose");
    group.bench_function("four_pillars_standard", |b| {
        b.iter(|| four_pillars(&adapter, black_box(&t), &ChartOptions::standard(126.9), None))
    });
    group.bench_function("four_pillars_traditional", |b| {
        b.iter(|| four_pillars(&adapter, black_box(&t), &ChartOptions::traditional(126.9), None))
    });
    group.finish();
}

criterion_group!(benches, day_bench, compose_bench);
criterion_main!(benches);
