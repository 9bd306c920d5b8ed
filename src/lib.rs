//! rollcall — attendance and leave reconciliation.
//!
//! Given a user's attendance punches, approved leaves and the holiday
//! calendar, the crate deterministically classifies every day of a target
//! month into exactly one status and aggregates presence totals. The
//! classification and aggregation core ([`calendar`], [`classify`],
//! [`reconcile`], [`summary`]) is pure and synchronous; all I/O lives
//! behind the async traits in [`store`], which the embedding application
//! implements over its own persistence. HTTP framing, authentication and
//! code rotation stay outside the crate.

pub mod calendar;
pub mod classify;
pub mod clock;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod service;
pub mod store;
pub mod summary;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use model::report::{DayRecord, DayStatus, LeaveSummary, MonthlyLeaveCount, MonthlyReport};
pub use reconcile::{reconcile_month, reconcile_month_all};
pub use service::reconciliation::ReconciliationService;
