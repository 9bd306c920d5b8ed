use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::model::attendance::AttendancePunch;
use crate::store::{AttendanceStore, VerificationCodeStore};
use crate::utils::date::parse_date;

/// Attendance marking: the boundary flow that turns a submitted
/// verification code into an [`AttendancePunch`].
///
/// The code itself comes from the external rotation service behind
/// [`VerificationCodeStore`]; this service only checks that the submitted
/// value matches the expected one for the date.
pub struct AttendanceService<A, V, C> {
    attendance: A,
    codes: V,
    clock: C,
}

impl<A, V, C> AttendanceService<A, V, C>
where
    A: AttendanceStore,
    V: VerificationCodeStore,
    C: Clock,
{
    pub fn new(attendance: A, codes: V, clock: C) -> Self {
        Self { attendance, codes, clock }
    }

    /// Marks `user_id` present on `date` (a `YYYY-MM-DD` string).
    ///
    /// `InvalidArgument` when the date is malformed or the code does not
    /// match the expected value for that date; `Conflict` when attendance
    /// for the date is already marked.
    pub async fn mark(&self, user_id: u64, date: &str, code: &str) -> Result<AttendancePunch> {
        if code.trim().is_empty() {
            return Err(Error::InvalidArgument("verification code is required".into()));
        }
        let date = parse_date(date)?;

        let expected = self.codes.current_code(date).await?;
        if expected.as_deref() != Some(code) {
            warn!(user_id, %date, "verification code mismatch");
            return Err(Error::InvalidArgument("invalid verification code or date".into()));
        }

        if self.attendance.find(user_id, date).await?.is_some() {
            return Err(Error::Conflict(format!("attendance for {date} is already marked")));
        }

        let punch = self.attendance.record(user_id, date, self.clock.now()).await?;
        info!(user_id, %date, "attendance marked");
        Ok(punch)
    }
}
