//! Leave summary aggregation: derived counts over a user's entire leave
//! history, independent of day classification.

use chrono::Datelike;

use crate::model::leave_request::{LeaveKind, LeaveRequest, LeaveStatus};
use crate::model::report::{LeaveSummary, MonthlyLeaveCount};

/// Aggregates `leaves` (the user's full history, any status) and scopes the
/// `approved_in_month` count to (`year`, `month0`). Pure; an out-of-range
/// month simply matches no leaves.
pub fn summarize_leaves(leaves: &[LeaveRequest], year: i32, month0: u32) -> LeaveSummary {
    let mut approved = 0u32;
    let mut rejected = 0u32;
    let mut approved_full_day = 0u32;
    let mut approved_half_day = 0u32;
    let mut in_month = 0u32;

    for leave in leaves {
        match leave.status {
            LeaveStatus::Approved => {
                approved += 1;
                match leave.kind {
                    LeaveKind::FullDay => approved_full_day += 1,
                    LeaveKind::HalfDay => approved_half_day += 1,
                }
                if leave.date.year() == year && leave.date.month0() == month0 {
                    in_month += 1;
                }
            }
            LeaveStatus::Rejected => rejected += 1,
            LeaveStatus::Pending | LeaveStatus::Canceled => {}
        }
    }

    LeaveSummary {
        approved,
        rejected,
        approved_full_day,
        approved_half_day,
        approved_in_month: MonthlyLeaveCount::from_count(in_month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn leave(id: u64, date: &str, kind: LeaveKind, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: 1,
            date: date.parse::<NaiveDate>().unwrap(),
            kind,
            status,
            reason: None,
        }
    }

    #[test]
    fn counts_split_by_status_and_kind() {
        let leaves = vec![
            leave(1, "2024-02-10", LeaveKind::FullDay, LeaveStatus::Approved),
            leave(2, "2024-02-14", LeaveKind::HalfDay, LeaveStatus::Approved),
            leave(3, "2024-01-05", LeaveKind::FullDay, LeaveStatus::Approved),
            leave(4, "2024-02-20", LeaveKind::FullDay, LeaveStatus::Rejected),
            leave(5, "2024-02-21", LeaveKind::FullDay, LeaveStatus::Pending),
            leave(6, "2024-02-22", LeaveKind::HalfDay, LeaveStatus::Canceled),
        ];

        let summary = summarize_leaves(&leaves, 2024, 1);
        assert_eq!(summary.approved, 3);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.approved_full_day, 2);
        assert_eq!(summary.approved_half_day, 1);
        // only the two February leaves are month-scoped
        assert_eq!(summary.approved_in_month, MonthlyLeaveCount::Taken(2));
    }

    #[test]
    fn month_with_no_approved_leave_reports_marker() {
        let leaves = vec![
            leave(1, "2024-01-05", LeaveKind::FullDay, LeaveStatus::Approved),
            leave(2, "2024-02-20", LeaveKind::FullDay, LeaveStatus::Pending),
        ];
        let summary = summarize_leaves(&leaves, 2024, 1);
        assert_eq!(summary.approved_in_month, MonthlyLeaveCount::NoneTaken);
    }

    #[test]
    fn empty_history_is_all_zero() {
        let summary = summarize_leaves(&[], 2024, 1);
        assert_eq!(summary.approved, 0);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.approved_in_month, MonthlyLeaveCount::NoneTaken);
    }
}
