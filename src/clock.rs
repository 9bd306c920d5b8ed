use chrono::{DateTime, Local, NaiveDate};

/// Source of "now" for every time-sensitive decision in the crate.
///
/// All date comparisons run on local calendar dates, never raw UTC
/// timestamps, so the clock speaks local time. Injecting the clock keeps
/// reconciliation a pure function of its inputs: the future-month check and
/// the future-date rule for leave applications are the only places that
/// consult it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant, for tests and replayed computations.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
