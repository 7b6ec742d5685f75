//! Calendar-month period arithmetic.
//!
//! All monthly aggregation uses an inclusive-start/exclusive-end interval
//! `[start-of-month, start-of-next-month)`. A timestamp at the last
//! millisecond of a month resolves to that month, and nothing is ever
//! double-counted across a boundary.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub month: u32,
    pub year: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Period {
    /// Build a period for the given calendar month. Rejects months outside
    /// 1-12 and years chrono cannot represent.
    pub fn new(month: u32, year: i32) -> DomainResult<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DomainError::validation(format!("Invalid month: {}/{}", month, year)))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end_date = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
            DomainError::validation(format!("Invalid month: {}/{}", month, year))
        })?;

        Ok(Period {
            month,
            year,
            start: Utc.from_utc_datetime(&start_date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                DomainError::validation(format!("Invalid month: {}/{}", month, year))
            })?),
            end: Utc.from_utc_datetime(&end_date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                DomainError::validation(format!("Invalid month: {}/{}", month, year))
            })?),
        })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound (start of the next month).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether a timestamp falls inside this month.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// Whether a calendar date falls inside this month.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start.date_naive() <= date && date < self.end.date_naive()
    }

    /// First day of the month.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// First day of the next month (exclusive upper bound for dates).
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_millisecond_belongs_to_its_own_month() {
        let january = Period::new(1, 2025).unwrap();
        let february = Period::new(2, 2025).unwrap();

        let boundary = Utc
            .with_ymd_and_hms(2025, 1, 31, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();

        assert!(january.contains(boundary));
        assert!(!february.contains(boundary));
    }

    #[test]
    fn start_of_month_is_inclusive_and_end_exclusive() {
        let january = Period::new(1, 2025).unwrap();
        let first_instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let next_month = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

        assert!(january.contains(first_instant));
        assert!(!january.contains(next_month));
    }

    #[test]
    fn december_rolls_over_into_next_year() {
        let december = Period::new(12, 2024).unwrap();
        assert_eq!(december.end_date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn leap_year_february_includes_the_29th() {
        let february = Period::new(2, 2024).unwrap();
        assert!(february.contains_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!february.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(Period::new(0, 2025).is_err());
        assert!(Period::new(13, 2025).is_err());
    }
}
