use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// A timestamp as handed to a constructor, before the timezone check.
///
/// Aware inputs are normalised to UTC; the instant is preserved, so two inputs
/// at the same instant in different zones compare equal once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampInput {
    Aware(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimestampInput {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Aware(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

/// POSIX seconds with microsecond precision.
pub(crate) fn epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_micros()) / 1_000_000.0
}
