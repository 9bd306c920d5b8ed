use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LeaveKind {
    FullDay,
    HalfDay,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Canceled,
}

impl LeaveStatus {
    /// Approved, Rejected and Canceled are terminal; only Pending requests
    /// may still transition.
    pub fn is_terminal(self) -> bool {
        self != LeaveStatus::Pending
    }
}

/// A single-day leave request.
///
/// Lifecycle: created Pending by a user for a strictly future date;
/// Approved/Rejected by an administrator, or Canceled by the owning user
/// while still Pending. Only `Approved` requests participate in day
/// classification or presence counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: u64,
    pub user_id: u64,
    pub date: NaiveDate,
    pub kind: LeaveKind,
    pub status: LeaveStatus,
    pub reason: Option<String>,
}

impl LeaveRequest {
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_their_wire_names() {
        assert_eq!("full-day".parse::<LeaveKind>().unwrap(), LeaveKind::FullDay);
        assert_eq!("half-day".parse::<LeaveKind>().unwrap(), LeaveKind::HalfDay);
        assert!("full".parse::<LeaveKind>().is_err());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
        assert!(LeaveStatus::Canceled.is_terminal());
    }
}
