//! Date range for filtering events.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{EventcalError, EventcalResult};
use crate::recurrence::last_day_of_month;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// The Sunday-to-Saturday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_sunday());
        let from = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
        let to = from.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
        DateRange { from, to }
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        DateRange {
            from: date.with_day(1).unwrap_or(date),
            to: date.with_day(last_day_of_month(date)).unwrap_or(date),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> EventcalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| EventcalError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_of_starts_on_sunday() {
        // 2024-10-16 is a Wednesday
        let week = DateRange::week_of(date(2024, 10, 16));
        assert_eq!(week.from, date(2024, 10, 13));
        assert_eq!(week.to, date(2024, 10, 19));

        let sunday = DateRange::week_of(date(2024, 10, 13));
        assert_eq!(sunday, week);
    }

    #[test]
    fn test_week_of_crosses_year() {
        let week = DateRange::week_of(date(2025, 1, 1));
        assert_eq!(week.from, date(2024, 12, 29));
        assert_eq!(week.to, date(2025, 1, 4));
        assert_eq!((week.to - week.from).num_days(), 6);
    }

    #[test]
    fn test_month_of() {
        let feb = DateRange::month_of(date(2024, 2, 10));
        assert_eq!(feb.from, date(2024, 2, 1));
        assert_eq!(feb.to, date(2024, 2, 29));
        assert!(feb.contains(date(2024, 2, 29)));
        assert!(!feb.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-10-15").unwrap(), date(2024, 10, 15));
        assert!(matches!(
            parse_date("15/10/2024"),
            Err(EventcalError::InvalidDate(_))
        ));
    }
}
