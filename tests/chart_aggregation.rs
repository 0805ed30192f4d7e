//! End-to-end chart aggregation: backend JSON in, bucketed series out.

use chrono::NaiveDate;
use dexinfo_sdk::prelude::*;

fn ts(year: i32, month: u32, day: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

fn day(year: i32, month: u32, d: u32, volume: f64, fees: f64) -> ChartDayData {
    ChartDayData {
        date: ts(year, month, d),
        volume_usd: volume,
        tvl_usd: 1_000.0,
        fees_usd: fees,
    }
}

#[test]
fn envelope_payload_aggregates_monthly() {
    let body = r#"{
        "statusCode": 200,
        "success": true,
        "data": [
            {"date": 1704067200, "volumeUSD": 100.0, "tvlUSD": 900.0, "feesUSD": 0.3},
            {"date": 1704153600, "volumeUSD": 50.0,  "tvlUSD": 910.0, "feesUSD": 0.15},
            {"date": 1706745600, "volumeUSD": 30.0,  "tvlUSD": 920.0, "feesUSD": 0.09}
        ],
        "message": "ok"
    }"#;

    let env: Envelope<Vec<ChartDayData>> = serde_json::from_str(body).unwrap();
    let days = env.into_data().unwrap();
    let monthly = volume_series(&days, Granularity::Month);

    // 1704067200 = 2024-01-01, 1704153600 = 2024-01-02, 1706745600 = 2024-02-01
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].time, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(monthly[0].value, 150.0);
    assert_eq!(monthly[1].time, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(monthly[1].value, 30.0);
}

#[test]
fn weekly_buckets_do_not_merge_across_year_boundary() {
    // ISO week 52 of 2023 and ISO week 1 of 2024
    let days = [day(2023, 12, 28, 10.0, 0.0), day(2024, 1, 2, 20.0, 0.0)];
    let weekly = volume_series(&days, Granularity::Week);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].time, NaiveDate::from_ymd_opt(2023, 12, 28).unwrap());
    assert_eq!(weekly[1].time, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
}

#[test]
fn late_december_iso_week_one_files_under_next_year() {
    // 2019-12-30 and 2020-01-03 share ISO week 1 of 2020: one bucket.
    let days = [day(2019, 12, 30, 5.0, 0.0), day(2020, 1, 3, 7.0, 0.0)];
    let weekly = volume_series(&days, Granularity::Week);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].value, 12.0);
    // displayed date is the first contributing record's own calendar date
    assert_eq!(weekly[0].time, NaiveDate::from_ymd_opt(2019, 12, 30).unwrap());
}

#[test]
fn sum_is_conserved_over_a_year_of_data() {
    let days: Vec<ChartDayData> = (0..400)
        .map(|i| ChartDayData {
            date: ts(2023, 6, 1) + i * 86_400,
            volume_usd: (i % 23) as f64 * 1.5 + 0.125,
            tvl_usd: 500.0,
            fees_usd: (i % 7) as f64 * 0.01,
        })
        .collect();

    let volume_total: f64 = days.iter().map(|d| d.volume_usd).sum();
    let fees_total: f64 = days.iter().map(|d| d.fees_usd).sum();

    for granularity in [Granularity::Week, Granularity::Month] {
        let volume: f64 = volume_series(&days, granularity).iter().map(|e| e.value).sum();
        let fees: f64 = fees_series(&days, granularity).iter().map(|e| e.value).sum();
        assert!((volume - volume_total).abs() < 1e-9);
        assert!((fees - fees_total).abs() < 1e-9);
    }
}

#[test]
fn aggregation_is_idempotent_and_input_preserving() {
    let days = vec![
        day(2024, 3, 1, 1.0, 0.1),
        day(2024, 3, 8, 2.0, 0.2),
        day(2024, 4, 1, 3.0, 0.3),
    ];
    let snapshot = days.clone();

    let a = volume_series(&days, Granularity::Week);
    let b = volume_series(&days, Granularity::Week);
    assert_eq!(a, b);
    assert_eq!(days, snapshot);
}

#[test]
fn generic_selector_covers_every_metric() {
    let days = [day(2024, 1, 1, 100.0, 0.5), day(2024, 1, 2, 60.0, 0.25)];

    let volume = aggregate(&days, Granularity::Month, |d| d.volume_usd);
    let tvl = aggregate(&days, Granularity::Month, |d| d.tvl_usd);
    let fees = aggregate(&days, Granularity::Month, |d| d.fees_usd);

    assert_eq!(volume[0].value, 160.0);
    assert_eq!(tvl[0].value, 2_000.0);
    assert_eq!(fees[0].value, 0.75);
}

#[test]
fn chart_store_serves_transformed_views() {
    let mut store = ChartStore::new();
    store.replace(
        Network::Arbitrum,
        SeriesScope::Protocol,
        vec![
            day(2024, 1, 1, 100.0, 1.0),
            day(2024, 1, 2, 50.0, 0.5),
            day(2024, 2, 1, 30.0, 0.3),
        ],
    );

    let monthly = store.transformed(
        Network::Arbitrum,
        &SeriesScope::Protocol,
        Granularity::Month,
        |d| d.volume_usd,
    );
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].value, 150.0);

    // other networks stay independent
    let empty = store.transformed(
        Network::Ethereum,
        &SeriesScope::Protocol,
        Granularity::Month,
        |d| d.volume_usd,
    );
    assert!(empty.is_empty());
}

#[test]
fn token_price_series_from_wire_json() {
    let body = r#"[
        {"date": 1704067200, "volumeUSD": 10.0, "totalValueLockedUSD": 100.0, "priceUSD": 1.0},
        {"date": 1704153600, "volumeUSD": 20.0, "totalValueLockedUSD": 110.0, "priceUSD": 1.5}
    ]"#;
    let days: Vec<TokenChartEntry> = serde_json::from_str(body).unwrap();
    let monthly = price_series(&days, Granularity::Month);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].value, 2.5);
}
