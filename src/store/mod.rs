//! Storage boundary: the traits the embedding application implements.
//!
//! The core never owns persistence — it borrows read access to holidays,
//! leaves and punches for the duration of one computation, and the
//! lifecycle services push their few writes through the same traits. All
//! methods are async so implementations can sit on a database pool; errors
//! come back as `anyhow::Error` and are wrapped into
//! [`crate::error::Error::Store`] at the service layer.

#![allow(async_fn_in_trait)]

pub mod memory;

use chrono::{DateTime, Local, NaiveDate};

use crate::model::attendance::AttendancePunch;
use crate::model::holiday::{Holiday, HolidayCategory};
use crate::model::leave_request::{LeaveKind, LeaveRequest, LeaveStatus};
use crate::model::role::Role;
use crate::model::user::User;

pub trait HolidayStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Holiday>>;
    async fn find_by_date(&self, date: NaiveDate) -> anyhow::Result<Option<Holiday>>;
    async fn insert(&self, holiday: Holiday) -> anyhow::Result<()>;
    /// Updates the holiday on `date`; `None` when no holiday exists there.
    async fn update(
        &self,
        date: NaiveDate,
        description: Option<String>,
        category: Option<HolidayCategory>,
    ) -> anyhow::Result<Option<Holiday>>;
    /// Returns whether a holiday was removed.
    async fn delete(&self, date: NaiveDate) -> anyhow::Result<bool>;
}

pub trait LeaveStore {
    async fn list_by_user(&self, user_id: u64) -> anyhow::Result<Vec<LeaveRequest>>;
    async fn list_pending(&self) -> anyhow::Result<Vec<LeaveRequest>>;
    /// Persists a new Pending request and returns it with its assigned id.
    async fn create(
        &self,
        user_id: u64,
        date: NaiveDate,
        kind: LeaveKind,
        reason: Option<String>,
    ) -> anyhow::Result<LeaveRequest>;
    /// Moves a request out of Pending. `owner` additionally constrains the
    /// requesting user (cancel path). `None` when the request is missing,
    /// owned by someone else, or already terminal.
    async fn transition(
        &self,
        leave_id: u64,
        owner: Option<u64>,
        to: LeaveStatus,
    ) -> anyhow::Result<Option<LeaveRequest>>;
}

pub trait AttendanceStore {
    async fn list_by_user(&self, user_id: u64) -> anyhow::Result<Vec<AttendancePunch>>;
    async fn find(&self, user_id: u64, date: NaiveDate) -> anyhow::Result<Option<AttendancePunch>>;
    /// Persists a Present punch and returns it with its assigned id.
    async fn record(
        &self,
        user_id: u64,
        date: NaiveDate,
        recorded_at: DateTime<Local>,
    ) -> anyhow::Result<AttendancePunch>;
}

pub trait UserDirectory {
    async fn find_by_id(&self, user_id: u64) -> anyhow::Result<Option<User>>;
    async fn list_by_role(&self, role: Role) -> anyhow::Result<Vec<User>>;
}

/// External daily verification code lookup. Rotation and TTL policy belong
/// to the collaborator behind this trait, not to this crate.
pub trait VerificationCodeStore {
    async fn current_code(&self, date: NaiveDate) -> anyhow::Result<Option<String>>;
}
