//! Aggregation accumulator: folds a day-ordered series into coarser buckets.

use super::bucket::{bucket_key, utc_day, BucketKey};
use super::Granularity;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single point on a chart after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// UTC calendar date of the bucket's first contributing record.
    pub time: NaiveDate,
    pub value: f64,
}

/// Record types carrying a Unix-seconds day timestamp.
pub trait DatedRecord {
    fn date(&self) -> i64;
}

struct Bucket {
    first_seen: i64,
    sum: f64,
}

/// Re-bucket a day-ordered series into week or month buckets.
///
/// Scans once, front to back. The first record to hit a bucket fixes that
/// bucket's displayed date (the record's own calendar date, not a normalized
/// period boundary) and its position in the output; every further record in
/// the same bucket only adds to the sum. Plain f64 addition, no rounding.
///
/// Output order is first-seen bucket order, which equals chronological order
/// when the input is sorted by date (the backend contract). The input is
/// never mutated; an empty input yields an empty output.
pub fn aggregate<R, F>(records: &[R], granularity: Granularity, metric: F) -> Vec<ChartEntry>
where
    R: DatedRecord,
    F: Fn(&R) -> f64,
{
    let mut buckets: IndexMap<BucketKey, Bucket> = IndexMap::new();

    for record in records {
        let key = bucket_key(record.date(), granularity);
        match buckets.get_mut(&key) {
            Some(bucket) => bucket.sum += metric(record),
            None => {
                buckets.insert(
                    key,
                    Bucket {
                        first_seen: record.date(),
                        sum: metric(record),
                    },
                );
            }
        }
    }

    buckets
        .into_values()
        .map(|bucket| ChartEntry {
            time: utc_day(bucket.first_seen),
            value: bucket.sum,
        })
        .collect()
}
