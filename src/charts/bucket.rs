//! Bucket key derivation: Unix timestamps to calendar-period keys.

use super::Granularity;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Year-qualified calendar period key.
///
/// `"2024-03"` for a month, `"2024-09"` for an ISO week. Keys always carry
/// the year so that the same week/month number in different years never
/// collapses into one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey(String);

impl BucketKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert Unix seconds to the UTC calendar date.
///
/// Total over all of `i64`: timestamps outside chrono's representable range
/// clamp to the nearest representable date instead of failing. Bucketing is
/// always done in UTC so every viewer sees the same buckets regardless of
/// local timezone.
pub fn utc_day(timestamp_secs: i64) -> NaiveDate {
    match DateTime::<Utc>::from_timestamp(timestamp_secs, 0) {
        Some(dt) => dt.date_naive(),
        None if timestamp_secs < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// Derive the bucket key for a timestamp at the given granularity.
///
/// Week keys use the ISO week-year, not the calendar year: the last days of
/// December can belong to ISO week 1 of the following year, and keying them
/// by calendar year would file them under a week bucket of the wrong year.
pub fn bucket_key(timestamp_secs: i64, granularity: Granularity) -> BucketKey {
    let date = utc_day(timestamp_secs);
    let key = match granularity {
        Granularity::Month => format!("{}-{:02}", date.year(), date.month()),
        Granularity::Week => {
            let week = date.iso_week();
            format!("{}-{:02}", week.year(), week.week())
        }
    };
    BucketKey(key)
}
