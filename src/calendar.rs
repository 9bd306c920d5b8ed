//! Month calendar generation: enumerates every day of a month and
//! partitions it into working days and rest days.
//!
//! The weekly off day is fixed as Sunday. Holidays are NOT considered here;
//! holiday classification is layered on top by [`crate::classify`].

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Error, Result};

/// The weekly off day.
pub const WEEKLY_OFF: Weekday = Weekday::Sun;

pub fn is_rest_day(date: NaiveDate) -> bool {
    date.weekday() == WEEKLY_OFF
}

/// The day partition of one month. Both sequences are date-ordered and
/// disjoint; together they cover every day of the month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCalendar {
    pub working_days: Vec<NaiveDate>,
    pub rest_days: Vec<NaiveDate>,
}

impl MonthCalendar {
    pub fn total_days(&self) -> usize {
        self.working_days.len() + self.rest_days.len()
    }
}

/// Builds the day partition for (`year`, `month0`).
///
/// `month0` is 0-based (0 = January, 11 = December) — external callers
/// speak 1-based months and the service layer converts before reaching this
/// point. Any four-digit year is accepted, including future years. The
/// month length follows the proleptic Gregorian calendar.
pub fn month_calendar(year: i32, month0: u32) -> Result<MonthCalendar> {
    if month0 > 11 {
        return Err(Error::InvalidArgument(format!(
            "month index must be within 0..=11, got {month0}"
        )));
    }

    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| Error::InvalidArgument(format!("invalid year {year}")))?;

    let mut working_days = Vec::new();
    let mut rest_days = Vec::new();

    let mut day = first;
    while day.year() == year && day.month0() == month0 {
        if is_rest_day(day) {
            rest_days.push(day);
        } else {
            working_days.push(day);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(MonthCalendar { working_days, rest_days })
}
