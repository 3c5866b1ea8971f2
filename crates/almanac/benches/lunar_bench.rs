use almanac::lunar::lunar_phase;
use almanac::western::zodiac_reading;
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_lunar_phase(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    c.bench_function("lunar_phase", |b| b.iter(|| lunar_phase(black_box(&dt))));
}

fn bench_zodiac_reading(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    c.bench_function("zodiac_reading", |b| b.iter(|| zodiac_reading(black_box(&dt))));
}

criterion_group!(benches, bench_lunar_phase, bench_zodiac_reading);
criterion_main!(benches);
