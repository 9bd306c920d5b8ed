use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Roles recognized by the service. Reconciliation reports are defined for
/// `User` accounts only; `Admin` accounts manage holidays and leave
/// decisions and never appear in attendance summaries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}
