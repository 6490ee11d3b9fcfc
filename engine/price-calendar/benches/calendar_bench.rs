use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use price_calendar::{CalendarMonth, FlightDayPolicy, PriceCalendarResolver, PriceTier};
use rust_decimal::Decimal;

fn bench_resolve_two_months(c: &mut Criterion) {
    let resolver = PriceCalendarResolver::default();
    let lists = create_catalog_lists(4, 365);
    let first = CalendarMonth::new(2026, 3).unwrap();

    c.bench_function("resolve_two_months", |b| {
        b.iter(|| {
            let views = resolver.resolve_months(black_box(&lists), black_box(first), 2);
            black_box(views)
        })
    });
}

fn bench_resolve_cell_by_cell(c: &mut Criterion) {
    let resolver = PriceCalendarResolver::default();
    let lists = create_catalog_lists(4, 365);
    let first = CalendarMonth::new(2026, 3).unwrap();

    c.bench_function("resolve_cell_by_cell", |b| {
        b.iter(|| {
            for date in first.span(2).iter().flat_map(CalendarMonth::days) {
                black_box(resolver.resolve_day(black_box(&lists), date));
            }
        })
    });
}

fn create_catalog_lists(destinations: usize, days: u64) -> Vec<Vec<PriceTier>> {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let policy = FlightDayPolicy::new("BOG", vec![chrono::Weekday::Mon, chrono::Weekday::Tue]);

    (0..destinations)
        .map(|d| {
            let mut tiers: Vec<PriceTier> = start
                .iter_days()
                .take(days as usize)
                .map(|day| {
                    PriceTier::priced(
                        day.format("%Y-%m-%d").to_string(),
                        Decimal::new(50_000 + (d as i64) * 7_500, 2),
                    )
                    .with_destination(format!("Destination {d}"))
                })
                .collect();
            if d == 0 {
                let end = start + chrono::Days::new(days);
                tiers.extend(policy.generate_tiers(start, end, Decimal::ZERO));
            }
            tiers
        })
        .collect()
}

criterion_group!(benches, bench_resolve_two_months, bench_resolve_cell_by_cell);
criterion_main!(benches);
