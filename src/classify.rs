//! Day classification: resolves one calendar day to exactly one
//! [`DayStatus`] from prefetched lookup data.
//!
//! The precedence order is load-bearing and must not be reordered:
//!
//! 1. declared holiday            -> `Holiday`
//! 2. rest day (Sunday)           -> `RestDay`
//! 3. approved leave on the day   -> `LeaveFull` / `LeaveHalf`
//! 4. present punch on the day    -> `Present` (carries the timestamp)
//! 5. otherwise                   -> `Absent`
//!
//! All lookups key on the local calendar date (`NaiveDate`). Stored
//! timestamps are normalized to local dates at the boundary before they
//! reach this module, so a punch recorded late at night can never shift
//! into a neighboring day.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::calendar::is_rest_day;
use crate::model::attendance::{AttendancePunch, PunchStatus};
use crate::model::holiday::Holiday;
use crate::model::leave_request::{LeaveKind, LeaveRequest};
use crate::model::report::{DayRecord, DayStatus};

/// Pure function of the day and the prefetched lookups; no failure modes.
///
/// `approved_leaves` must contain only requests in status Approved — the
/// reconciliation engine filters before building the map, so pending or
/// rejected requests can never influence a day.
pub fn classify_day(
    date: NaiveDate,
    holidays: &HashMap<NaiveDate, &Holiday>,
    approved_leaves: &HashMap<NaiveDate, &LeaveRequest>,
    punches: &HashMap<NaiveDate, &AttendancePunch>,
) -> DayRecord {
    if holidays.contains_key(&date) {
        return DayRecord { date, status: DayStatus::Holiday, present_at: None };
    }

    if is_rest_day(date) {
        return DayRecord { date, status: DayStatus::RestDay, present_at: None };
    }

    if let Some(leave) = approved_leaves.get(&date) {
        let status = match leave.kind {
            LeaveKind::FullDay => DayStatus::LeaveFull,
            LeaveKind::HalfDay => DayStatus::LeaveHalf,
        };
        return DayRecord { date, status, present_at: None };
    }

    if let Some(punch) = punches.get(&date) {
        if punch.status == PunchStatus::Present {
            return DayRecord { date, status: DayStatus::Present, present_at: Some(punch.recorded_at) };
        }
    }

    DayRecord { date, status: DayStatus::Absent, present_at: None }
}
