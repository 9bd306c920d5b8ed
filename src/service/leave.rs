use tracing::info;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::model::leave_request::{LeaveKind, LeaveRequest, LeaveStatus};
use crate::store::LeaveStore;
use crate::utils::date::parse_date;

/// Leave request lifecycle.
///
/// Requests are created Pending for a strictly future date, then either
/// decided (approved/rejected) by an administrator or canceled by their
/// owner while still Pending. Approved, Rejected and Canceled are terminal.
pub struct LeaveService<L, C> {
    leaves: L,
    clock: C,
}

impl<L, C> LeaveService<L, C>
where
    L: LeaveStore,
    C: Clock,
{
    pub fn new(leaves: L, clock: C) -> Self {
        Self { leaves, clock }
    }

    /// Files a new Pending request for `date` (a `YYYY-MM-DD` string).
    /// Leave can only be applied for future dates — today is already
    /// markable attendance, so it is rejected too.
    pub async fn apply(
        &self,
        user_id: u64,
        date: &str,
        kind: LeaveKind,
        reason: Option<String>,
    ) -> Result<LeaveRequest> {
        let date = parse_date(date)?;
        if date <= self.clock.today() {
            return Err(Error::InvalidArgument(
                "leave can only be applied for future dates".into(),
            ));
        }

        let leave = self.leaves.create(user_id, date, kind, reason).await?;
        info!(user_id, leave_id = leave.id, %date, kind = %kind, "leave applied");
        Ok(leave)
    }

    /// Administrator decision on a pending request. Only `Approved` and
    /// `Rejected` are valid decisions here.
    pub async fn decide(&self, leave_id: u64, decision: LeaveStatus) -> Result<LeaveRequest> {
        if !matches!(decision, LeaveStatus::Approved | LeaveStatus::Rejected) {
            return Err(Error::InvalidArgument(format!(
                "invalid decision '{decision}', only 'approved' or 'rejected' allowed"
            )));
        }

        let leave = self
            .leaves
            .transition(leave_id, None, decision)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("leave request {leave_id} not found or already processed"))
            })?;
        info!(leave_id, status = %leave.status, "leave decided");
        Ok(leave)
    }

    /// Owner cancels their own still-pending request.
    pub async fn cancel(&self, user_id: u64, leave_id: u64) -> Result<LeaveRequest> {
        let leave = self
            .leaves
            .transition(leave_id, Some(user_id), LeaveStatus::Canceled)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("leave request {leave_id} not found or already processed"))
            })?;
        info!(user_id, leave_id, "leave canceled");
        Ok(leave)
    }

    /// The user's full leave history, date-ordered.
    pub async fn list_for_user(&self, user_id: u64) -> Result<Vec<LeaveRequest>> {
        Ok(self.leaves.list_by_user(user_id).await?)
    }

    /// All requests awaiting a decision.
    pub async fn list_pending(&self) -> Result<Vec<LeaveRequest>> {
        Ok(self.leaves.list_pending().await?)
    }
}
