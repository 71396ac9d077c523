use bazi_base::{
    BirthMoment, calculate, chart_details, day_pillar, ganzhi_info, verify_day_ganzhi,
};
use bazi_time::CivilDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn pillars_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");
    group.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(1984), black_box(2), black_box(2), black_box(0)))
    });
    group.bench_function("calculate_late_zi", |b| {
        b.iter(|| calculate(black_box(2000), black_box(12), black_box(31), black_box(23)))
    });
    let date = CivilDate::new(2000, 2, 29).unwrap_or_else(|e| panic!("{e}"));
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(date))));
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.bench_function("ganzhi_info", |b| b.iter(|| ganzhi_info(black_box("丙寅"))));
    group.bench_function("verify_day_ganzhi", |b| {
        b.iter(|| {
            verify_day_ganzhi(
                black_box(2001),
                black_box(1),
                black_box(1),
                black_box("甲子"),
            )
        })
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let moment = BirthMoment::new(1984, 2, 2, 0).unwrap_or_else(|e| panic!("{e}"));
    let mut group = c.benchmark_group("chart");
    group.bench_function("chart_details", |b| {
        b.iter(|| chart_details(black_box(moment)))
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, lookup_bench, chart_bench);
criterion_main!(benches);
