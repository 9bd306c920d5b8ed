use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PunchStatus {
    Present,
    Absent,
}

/// One user's presence record for one date. At most one punch exists per
/// (user, date) pair; the store enforces that and the core consumes punches
/// as given, never mutating or deleting them.
///
/// `date` is the local calendar date the punch belongs to; `recorded_at` is
/// the instant the user submitted the verification code. Classification
/// only ever compares `date` — the timestamp is carried into reports for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendancePunch {
    pub id: u64,
    pub user_id: u64,
    pub date: NaiveDate,
    pub status: PunchStatus,
    pub recorded_at: DateTime<Local>,
}
