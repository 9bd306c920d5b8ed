use chrono::{DateTime, Local, NaiveDate};
use serde::{Serialize, Serializer};
use strum_macros::Display;

/// Resolved status of one calendar day for one user. Exactly one status is
/// assigned per day; the statuses of a reconciled month partition its days
/// with no gaps and no duplicates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DayStatus {
    Holiday,
    RestDay,
    LeaveFull,
    LeaveHalf,
    Present,
    Absent,
}

/// One entry in the per-day sequence of a monthly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub status: DayStatus,
    /// Punch timestamp, carried only when `status` is `Present`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at: Option<DateTime<Local>>,
}

/// Sentinel string reported in place of a zero month-scoped leave count.
pub const NO_LEAVE_THIS_MONTH: &str = "no leave applied this month";

/// Month-scoped approved-leave count. Zero is never reported as the integer
/// 0: callers receive a descriptive marker instead, so the field is a
/// tagged union of {count, "none" marker} on the wire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MonthlyLeaveCount {
    Taken(u32),
    NoneTaken,
}

impl MonthlyLeaveCount {
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            MonthlyLeaveCount::NoneTaken
        } else {
            MonthlyLeaveCount::Taken(count)
        }
    }
}

impl Serialize for MonthlyLeaveCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MonthlyLeaveCount::Taken(count) => serializer.serialize_u32(*count),
            MonthlyLeaveCount::NoneTaken => serializer.serialize_str(NO_LEAVE_THIS_MONTH),
        }
    }
}

/// Derived counts over a user's full leave history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveSummary {
    pub approved: u32,
    pub rejected: u32,
    pub approved_full_day: u32,
    pub approved_half_day: u32,
    /// Approved leaves dated within the reported month.
    pub approved_in_month: MonthlyLeaveCount,
}

/// The computed body of an available monthly report. `month` is 1-based
/// (January = 1), matching what external callers speak.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub user_id: u64,
    pub year: i32,
    pub month: u32,
    /// Date-sorted, one record per calendar day of the month. Rest days
    /// appear explicitly, not merely implied.
    pub days: Vec<DayRecord>,
    pub total_present: i64,
    pub total_absent: i64,
    pub total_holidays: i64,
    pub leave_summary: LeaveSummary,
}

/// Outcome of a monthly reconciliation. Built fresh on every request and
/// never persisted — a computed view over holidays, leaves and punches.
///
/// A month strictly in the future is a first-class `NotYetAvailable`
/// outcome with no day sequence and no totals; it must not be conflated
/// with an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "availability", rename_all = "snake_case")]
pub enum MonthlyReport {
    Ready(MonthSummary),
    NotYetAvailable { user_id: u64, year: i32, month: u32 },
}

impl MonthlyReport {
    pub fn is_ready(&self) -> bool {
        matches!(self, MonthlyReport::Ready(_))
    }

    pub fn summary(&self) -> Option<&MonthSummary> {
        match self {
            MonthlyReport::Ready(summary) => Some(summary),
            MonthlyReport::NotYetAvailable { .. } => None,
        }
    }
}
