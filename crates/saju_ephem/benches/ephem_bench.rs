use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_ephem::{apparent_sun_longitude, locate_crossing};
use saju_time::{calendar_to_jd, jd_to_millis};

fn solar_bench(c: &mut Criterion) {
    let jd = calendar_to_jd(1985, 5, 15.0);

    let mut group = c.benchmark_group("solar");
    group.bench_function("apparent_sun_longitude", |b| {
        b.iter(|| apparent_sun_longitude(black_box(jd)))
    });
    group.finish();
}

fn locate_bench(c: &mut Criterion) {
    let start = jd_to_millis(calendar_to_jd(1984, 2, 1.0));
    let end = jd_to_millis(calendar_to_jd(1984, 2, 7.0));

    let mut group = c.benchmark_group("locate");
    group.bench_function("lichun_crossing", |b| {
        b.iter(|| locate_crossing(315.0, black_box(start), black_box(end)))
    });
    group.finish();
}

criterion_group!(benches, solar_bench, locate_bench);
criterion_main!(benches);
