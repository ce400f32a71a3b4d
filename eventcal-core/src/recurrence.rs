//! Recurring date generation.
//!
//! Expands a start date and a [`RecurrenceRule`] into the ascending list of
//! occurrence dates up to a caller-supplied horizon.
//!
//! Month and year steps keep "last day of the month" semantics: if the date
//! being advanced is the last day of its month, the next occurrence is the last
//! day of the target month. The flag is re-evaluated from the current date at
//! every step, so Jan 31 -> Feb 29 -> Mar 31 (Feb 29 is itself a last day).

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::event::{RecurrenceRule, RepeatType};

pub use crate::error::RecurrenceError;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of the last day in `date`'s month (28-31).
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    days_in_month(date.year(), date.month())
}

pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == last_day_of_month(date)
}

/// Day 0 of the following month, i.e. the day before its 1st.
fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_start = if month == 12 {
        year
            .checked_add(1)
            .and_then(|next_year| NaiveDate::from_ymd_opt(next_year, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_start
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        // only a December at the edge of chrono's range lacks a successor; December has 31 days
        .unwrap_or(31)
}

/// Place `current`'s day number into `year`/`month`, clamping to the target
/// month's last day when `current` was a last day or the day does not exist there.
fn land_in_month(current: NaiveDate, year: i32, month: u32) -> Option<NaiveDate> {
    let target_last = days_in_month(year, month);
    let day = if is_last_day_of_month(current) || current.day() > target_last {
        target_last
    } else {
        current.day()
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn add_months(current: NaiveDate, months: u32) -> Option<NaiveDate> {
    let total = i64::from(current.month0()) + i64::from(months);
    let year = i32::try_from(i64::from(current.year()) + total / 12).ok()?;
    let month = u32::try_from(total % 12).ok()? + 1;

    land_in_month(current, year, month)
}

fn add_years(current: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = current.year().checked_add(i32::try_from(years).ok()?)?;

    land_in_month(current, year, current.month())
}

/// Compute the occurrence following `current`.
///
/// Fails with [`RecurrenceError::InvalidRule`] for [`RepeatType::None`] or a
/// zero interval.
pub fn next_occurrence(
    current: NaiveDate,
    repeat_type: RepeatType,
    interval: u32,
) -> Result<NaiveDate, RecurrenceError> {
    if interval == 0 {
        return Err(RecurrenceError::InvalidRule(
            "interval must be at least 1".to_string(),
        ));
    }

    let next = match repeat_type {
        RepeatType::None => {
            return Err(RecurrenceError::InvalidRule(
                "a non-recurring event has no next occurrence".to_string(),
            ));
        }
        RepeatType::Daily => current.checked_add_days(Days::new(interval.into())),
        RepeatType::Weekly => current.checked_add_days(Days::new(7 * u64::from(interval))),
        RepeatType::Monthly => add_months(current, interval),
        RepeatType::Yearly => add_years(current, interval),
    };

    next.ok_or(RecurrenceError::OutOfRange(current))
}

/// Expand `rule` from `start` into every occurrence up to the effective bound.
///
/// The bound is the earlier of `horizon` and `rule.end_date`. The result always
/// starts with `start` itself and is strictly ascending. Calling this twice with
/// the same arguments yields the same list.
pub fn expand(
    start: NaiveDate,
    rule: &RecurrenceRule,
    horizon: NaiveDate,
) -> Result<Vec<NaiveDate>, RecurrenceError> {
    if !rule.is_recurring() {
        return Err(RecurrenceError::InvalidRule(
            "cannot expand a non-recurring event".to_string(),
        ));
    }
    rule.validate()?;

    let bound = match rule.end_date {
        Some(end) => end.min(horizon),
        None => horizon,
    };

    let mut dates = vec![start];
    let mut current = start;

    while current < bound {
        let next = next_occurrence(current, rule.repeat_type, rule.interval)?;
        if next <= current {
            return Err(RecurrenceError::Stalled(current));
        }
        if next > bound {
            break;
        }
        dates.push(next);
        current = next;
    }

    debug!(
        start = %start,
        bound = %bound,
        repeat = %rule.repeat_type,
        interval = rule.interval,
        count = dates.len(),
        "Expanded recurrence"
    );

    Ok(dates)
}
