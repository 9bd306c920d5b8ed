use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HolidayCategory {
    /// Declared by an administrator of this installation.
    Admin,
    /// Published government holiday.
    Government,
}

/// A declared non-working day. Unique per date; uniqueness is enforced by
/// the store and by [`crate::service::holiday::HolidayService::add`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub description: String,
    pub category: HolidayCategory,
}
