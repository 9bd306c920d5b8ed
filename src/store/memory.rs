//! In-memory store backing the test suite, usable as a reference adapter.
//!
//! Cloning is cheap and clones share state, so one store can sit behind
//! several services at once (the same way a database pool is cloned into
//! each handler).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use chrono::{DateTime, Local, NaiveDate};

use crate::model::attendance::{AttendancePunch, PunchStatus};
use crate::model::holiday::{Holiday, HolidayCategory};
use crate::model::leave_request::{LeaveKind, LeaveRequest, LeaveStatus};
use crate::model::role::Role;
use crate::model::user::User;
use crate::store::{
    AttendanceStore, HolidayStore, LeaveStore, UserDirectory, VerificationCodeStore,
};

#[derive(Debug, Default)]
struct State {
    holidays: Vec<Holiday>,
    leaves: Vec<LeaveRequest>,
    punches: Vec<AttendancePunch>,
    users: Vec<User>,
    codes: HashMap<NaiveDate, String>,
    next_leave_id: u64,
    next_punch_id: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, State>> {
        self.inner.lock().map_err(|_| anyhow!("memory store poisoned"))
    }

    pub fn add_user(&self, user: User) -> anyhow::Result<()> {
        self.lock()?.users.push(user);
        Ok(())
    }

    /// Sets the expected verification code for a date.
    pub fn set_code(&self, date: NaiveDate, code: impl Into<String>) -> anyhow::Result<()> {
        self.lock()?.codes.insert(date, code.into());
        Ok(())
    }
}

impl HolidayStore for MemoryStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Holiday>> {
        Ok(self.lock()?.holidays.clone())
    }

    async fn find_by_date(&self, date: NaiveDate) -> anyhow::Result<Option<Holiday>> {
        Ok(self.lock()?.holidays.iter().find(|h| h.date == date).cloned())
    }

    async fn insert(&self, holiday: Holiday) -> anyhow::Result<()> {
        self.lock()?.holidays.push(holiday);
        Ok(())
    }

    async fn update(
        &self,
        date: NaiveDate,
        description: Option<String>,
        category: Option<HolidayCategory>,
    ) -> anyhow::Result<Option<Holiday>> {
        let mut state = self.lock()?;
        let Some(holiday) = state.holidays.iter_mut().find(|h| h.date == date) else {
            return Ok(None);
        };
        if let Some(description) = description {
            holiday.description = description;
        }
        if let Some(category) = category {
            holiday.category = category;
        }
        Ok(Some(holiday.clone()))
    }

    async fn delete(&self, date: NaiveDate) -> anyhow::Result<bool> {
        let mut state = self.lock()?;
        let before = state.holidays.len();
        state.holidays.retain(|h| h.date != date);
        Ok(state.holidays.len() < before)
    }
}

impl LeaveStore for MemoryStore {
    async fn list_by_user(&self, user_id: u64) -> anyhow::Result<Vec<LeaveRequest>> {
        let mut leaves: Vec<LeaveRequest> = self
            .lock()?
            .leaves
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        leaves.sort_by_key(|l| l.date);
        Ok(leaves)
    }

    async fn list_pending(&self) -> anyhow::Result<Vec<LeaveRequest>> {
        Ok(self
            .lock()?
            .leaves
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        user_id: u64,
        date: NaiveDate,
        kind: LeaveKind,
        reason: Option<String>,
    ) -> anyhow::Result<LeaveRequest> {
        let mut state = self.lock()?;
        state.next_leave_id += 1;
        let leave = LeaveRequest {
            id: state.next_leave_id,
            user_id,
            date,
            kind,
            status: LeaveStatus::Pending,
            reason,
        };
        state.leaves.push(leave.clone());
        Ok(leave)
    }

    async fn transition(
        &self,
        leave_id: u64,
        owner: Option<u64>,
        to: LeaveStatus,
    ) -> anyhow::Result<Option<LeaveRequest>> {
        let mut state = self.lock()?;
        let Some(leave) = state.leaves.iter_mut().find(|l| {
            l.id == leave_id
                && !l.status.is_terminal()
                && owner.is_none_or(|user_id| l.user_id == user_id)
        }) else {
            return Ok(None);
        };
        leave.status = to;
        Ok(Some(leave.clone()))
    }
}

impl AttendanceStore for MemoryStore {
    async fn list_by_user(&self, user_id: u64) -> anyhow::Result<Vec<AttendancePunch>> {
        let mut punches: Vec<AttendancePunch> = self
            .lock()?
            .punches
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        punches.sort_by_key(|p| p.date);
        Ok(punches)
    }

    async fn find(&self, user_id: u64, date: NaiveDate) -> anyhow::Result<Option<AttendancePunch>> {
        Ok(self
            .lock()?
            .punches
            .iter()
            .find(|p| p.user_id == user_id && p.date == date)
            .cloned())
    }

    async fn record(
        &self,
        user_id: u64,
        date: NaiveDate,
        recorded_at: DateTime<Local>,
    ) -> anyhow::Result<AttendancePunch> {
        let mut state = self.lock()?;
        state.next_punch_id += 1;
        let punch = AttendancePunch {
            id: state.next_punch_id,
            user_id,
            date,
            status: PunchStatus::Present,
            recorded_at,
        };
        state.punches.push(punch.clone());
        Ok(punch)
    }
}

impl UserDirectory for MemoryStore {
    async fn find_by_id(&self, user_id: u64) -> anyhow::Result<Option<User>> {
        Ok(self.lock()?.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_by_role(&self, role: Role) -> anyhow::Result<Vec<User>> {
        Ok(self
            .lock()?
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
}

impl VerificationCodeStore for MemoryStore {
    async fn current_code(&self, date: NaiveDate) -> anyhow::Result<Option<String>> {
        Ok(self.lock()?.codes.get(&date).cloned())
    }
}
