//! Calendar-date handling
//!
//! The portal only deals in calendar dates (policy periods, claim submission
//! and update dates, timeline event dates). This module provides a validated
//! inclusive date range and the serde helpers the upstream wire format needs.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Dates out of order: {later} precedes {earlier}")]
    OutOfOrder { earlier: NaiveDate, later: NaiveDate },
}

/// An inclusive range of calendar dates
///
/// A policy that starts and ends on the same day is valid, so unlike a
/// half-open period the end may equal the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, failing if `end` precedes `start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks whether a date falls within the range (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Checks that `later` does not precede `earlier`
pub fn ensure_not_before(earlier: NaiveDate, later: NaiveDate) -> Result<(), TemporalError> {
    if later < earlier {
        return Err(TemporalError::OutOfOrder { earlier, later });
    }
    Ok(())
}

/// Serde adapter for optional dates where upstream sends `""` for "not yet"
///
/// Use with `#[serde(default, with = "core_kernel::temporal::optional_date")]`.
pub mod optional_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => date.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("Invalid date '{}': {}", text, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::new(date(2024, 1, 15), date(2024, 1, 15)).unwrap();
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = DateRange::new(date(2025, 1, 14), date(2024, 1, 15));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 15), date(2025, 1, 14)).unwrap();
        assert!(range.contains(date(2024, 1, 15)));
        assert!(range.contains(date(2025, 1, 14)));
        assert!(!range.contains(date(2025, 1, 15)));
    }
}
