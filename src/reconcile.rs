//! Monthly reconciliation engine: merges the calendar partition, declared
//! holidays, approved leaves and attendance punches into one authoritative
//! per-day status sequence plus aggregate totals.
//!
//! Everything in this module is a pure, synchronous function of
//! already-fetched data — I/O happens in [`crate::service`]. The only time
//! dependency, the future-month check, is parameterized by an explicit
//! `today`, so identical inputs always yield identical reports.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::month_calendar;
use crate::classify::classify_day;
use crate::error::Result;
use crate::model::attendance::AttendancePunch;
use crate::model::holiday::Holiday;
use crate::model::leave_request::LeaveRequest;
use crate::model::report::{DayRecord, DayStatus, MonthSummary, MonthlyReport};
use crate::model::user::User;
use crate::summary::summarize_leaves;

/// Reconciles one user's month.
///
/// `month0` is the 0-based month index; the service layer converts from the
/// 1-based months external callers speak. A month strictly after `today`'s
/// (year, month) yields [`MonthlyReport::NotYetAvailable`] — no punches can
/// exist yet, and that outcome is a valid result, not an error.
///
/// Aggregation follows one canonical formula, applied uniformly:
///
/// * `total_holidays` = days classified Holiday
/// * `total_present`  = days classified Present, Holiday or RestDay, plus
///   the count of approved leave requests dated within the month (leave
///   days keep their leave code in the day sequence but credit presence)
/// * `total_absent`   = days in month - total_present - total_holidays
pub fn reconcile_month(
    user_id: u64,
    year: i32,
    month0: u32,
    today: NaiveDate,
    holidays: &[Holiday],
    leaves: &[LeaveRequest],
    punches: &[AttendancePunch],
) -> Result<MonthlyReport> {
    let calendar = month_calendar(year, month0)?;

    if (year, month0) > (today.year(), today.month0()) {
        debug!(user_id, year, month = month0 + 1, "month not yet available");
        return Ok(MonthlyReport::NotYetAvailable { user_id, year, month: month0 + 1 });
    }

    let holiday_by_date: HashMap<NaiveDate, &Holiday> =
        holidays.iter().map(|h| (h.date, h)).collect();
    let leave_by_date: HashMap<NaiveDate, &LeaveRequest> = leaves
        .iter()
        .filter(|l| l.is_approved())
        .map(|l| (l.date, l))
        .collect();
    let punch_by_date: HashMap<NaiveDate, &AttendancePunch> =
        punches.iter().map(|p| (p.date, p)).collect();

    let mut days: Vec<_> = calendar
        .working_days
        .iter()
        .chain(calendar.rest_days.iter())
        .map(|&day| classify_day(day, &holiday_by_date, &leave_by_date, &punch_by_date))
        .collect();
    days.sort_by_key(|record| record.date);

    let total_days = calendar.total_days() as i64;
    let total_holidays = count(&days, DayStatus::Holiday);
    let approved_in_month = leave_by_date
        .keys()
        .filter(|date| date.year() == year && date.month0() == month0)
        .count() as i64;
    let total_present = count(&days, DayStatus::Present)
        + count(&days, DayStatus::Holiday)
        + count(&days, DayStatus::RestDay)
        + approved_in_month;
    let total_absent = total_days - total_present - total_holidays;

    let leave_summary = summarize_leaves(leaves, year, month0);

    debug!(
        user_id,
        year,
        month = month0 + 1,
        total_present,
        total_absent,
        total_holidays,
        "month reconciled"
    );

    Ok(MonthlyReport::Ready(MonthSummary {
        user_id,
        year,
        month: month0 + 1,
        days,
        total_present,
        total_absent,
        total_holidays,
        leave_summary,
    }))
}

/// Batch reconciliation over prefetched per-user data. Reports come back in
/// the order of `users`; a user with no matching records still receives a
/// full report (all working days Absent except holidays and rest days).
pub fn reconcile_month_all(
    year: i32,
    month0: u32,
    today: NaiveDate,
    holidays: &[Holiday],
    users: &[User],
    leaves_by_user: &HashMap<u64, Vec<LeaveRequest>>,
    punches_by_user: &HashMap<u64, Vec<AttendancePunch>>,
) -> Result<Vec<MonthlyReport>> {
    users
        .iter()
        .map(|user| {
            let leaves = leaves_by_user.get(&user.id).map(Vec::as_slice).unwrap_or(&[]);
            let punches = punches_by_user.get(&user.id).map(Vec::as_slice).unwrap_or(&[]);
            reconcile_month(user.id, year, month0, today, holidays, leaves, punches)
        })
        .collect()
}

fn count(days: &[DayRecord], status: DayStatus) -> i64 {
    days.iter().filter(|record| record.status == status).count() as i64
}
