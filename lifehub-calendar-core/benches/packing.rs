use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lifehub_calendar_core::{EventSpan, pack_day, pack_range};

fn dense_day(events: i64) -> Vec<EventSpan> {
    // Staggered 90-minute events across the working day; heavy overlap.
    (0..events)
        .map(|i| {
            let offset = (i * 7) % 600;
            EventSpan {
                id: i,
                start: Utc
                    .with_ymd_and_hms(2026, 6, 15, 8, 0, 0)
                    .unwrap()
                    + chrono::Duration::minutes(offset),
                end: Utc
                    .with_ymd_and_hms(2026, 6, 15, 9, 30, 0)
                    .unwrap()
                    + chrono::Duration::minutes(offset),
                all_day: i % 17 == 0,
            }
        })
        .collect()
}

fn bench_pack_day(c: &mut Criterion) {
    let spans = dense_day(200);
    let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    c.bench_function("pack_day_dense_200", |b| {
        b.iter(|| pack_day(black_box(&spans), black_box(date), chrono_tz::UTC));
    });
}

fn bench_pack_month(c: &mut Criterion) {
    let spans = dense_day(200);
    let start = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
    c.bench_function("pack_range_month_grid", |b| {
        b.iter(|| pack_range(black_box(&spans), black_box(start), 35, chrono_tz::UTC));
    });
}

criterion_group!(benches, bench_pack_day, bench_pack_month);
criterion_main!(benches);
