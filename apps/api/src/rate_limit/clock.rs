//! Calendar-day source for quota accounting.

use chrono::{Local, NaiveDate};

/// Supplies "today" as a calendar date. Budgets reset when it changes.
///
/// Carried in `DailyWordQuota` as `Arc<dyn Clock>`.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date: resets at local midnight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub use fixed::FixedClock;
