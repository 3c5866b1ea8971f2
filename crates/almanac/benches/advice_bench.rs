use almanac::chart::Almanac;
use almanac::{compose_advisory, lunar_phase, zodiac_reading};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_compose_advisory(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let phase = lunar_phase(&dt);
    let zodiac = zodiac_reading(&dt);

    c.bench_function("compose_advisory", |b| {
        b.iter(|| compose_advisory(black_box(&phase), black_box(Some(&zodiac))))
    });
}

fn bench_full_report(c: &mut Criterion) {
    let almanac = Almanac::default();
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    c.bench_function("almanac_report", |b| {
        b.iter(|| almanac.report(black_box(dt), black_box(None)))
    });
}

criterion_group!(benches, bench_compose_advisory, bench_full_report);
criterion_main!(benches);
