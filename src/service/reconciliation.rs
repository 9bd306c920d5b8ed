use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::model::report::MonthlyReport;
use crate::model::role::Role;
use crate::reconcile::reconcile_month;
use crate::store::{AttendanceStore, HolidayStore, LeaveStore, UserDirectory};

/// Batch fan-out width when none is configured.
pub const DEFAULT_BATCH_LIMIT: usize = 8;

/// Fetches holidays, leaves and punches from the stores and hands them to
/// the pure engine in [`crate::reconcile`].
///
/// Months at this boundary are **1-based** (January = 1), as external
/// callers speak them; the conversion to the engine's 0-based index happens
/// here and nowhere else.
pub struct ReconciliationService<H, L, A, U, C> {
    holidays: H,
    leaves: L,
    attendance: A,
    users: U,
    clock: C,
    batch_limit: usize,
}

impl<H, L, A, U, C> ReconciliationService<H, L, A, U, C>
where
    H: HolidayStore,
    L: LeaveStore,
    A: AttendanceStore,
    U: UserDirectory,
    C: Clock,
{
    pub fn new(holidays: H, leaves: L, attendance: A, users: U, clock: C) -> Self {
        Self {
            holidays,
            leaves,
            attendance,
            users,
            clock,
            batch_limit: DEFAULT_BATCH_LIMIT,
        }
    }

    /// Caps how many users have their data in flight at once during
    /// [`Self::reconcile_all`].
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.batch_limit = limit.max(1);
        self
    }

    /// Monthly report for one user. `NotFound` when the user does not exist
    /// or does not hold role `User`.
    pub async fn reconcile(&self, user_id: u64, year: i32, month: u32) -> Result<MonthlyReport> {
        let month0 = month_index(month)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.role == Role::User)
            .ok_or_else(|| Error::NotFound(format!("user {user_id} with role user")))?;

        let holidays = self.holidays.list_all().await?;
        let leaves = self.leaves.list_by_user(user.id).await?;
        let punches = self.attendance.list_by_user(user.id).await?;

        reconcile_month(user.id, year, month0, self.clock.today(), &holidays, &leaves, &punches)
    }

    /// Monthly reports for every `Role::User` account, in directory order.
    ///
    /// Per-user fetches fan out concurrently but bounded by the batch
    /// limit, so a large directory cannot exhaust store connections.
    pub async fn reconcile_all(&self, year: i32, month: u32) -> Result<Vec<MonthlyReport>> {
        let month0 = month_index(month)?;

        let users = self.users.list_by_role(Role::User).await?;
        let holidays = self.holidays.list_all().await?;
        let today = self.clock.today();

        debug!(year, month, users = users.len(), "batch reconciliation");

        let holidays = &holidays;
        stream::iter(users)
            .map(|user| async move {
                let leaves = self.leaves.list_by_user(user.id).await?;
                let punches = self.attendance.list_by_user(user.id).await?;
                reconcile_month(user.id, year, month0, today, holidays, &leaves, &punches)
            })
            .buffered(self.batch_limit)
            .try_collect()
            .await
    }
}

/// 1-based external month -> 0-based engine index.
fn month_index(month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month - 1)
    } else {
        Err(Error::InvalidArgument(format!("month must be within 1..=12, got {month}")))
    }
}
