//! Daily word quota — per-caller calendar-day budget.
//!
//! # Locking
//! The table is a map of per-identifier slots. The map lock is held only to
//! look up or create a slot; the read-decide-write sequence runs under the
//! slot's own lock, so requests for one identifier are serialized while
//! different identifiers proceed in parallel.
//!
//! # Day rollover
//! A record from any other calendar day is replaced, not merged. The first
//! request of a day (or ever) is accepted whatever its size; only later
//! same-day requests are checked against the limit.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::JustifyError;
use crate::rate_limit::clock::Clock;

/// Words accepted for one identifier on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UsageRecord {
    day: NaiveDate,
    count: u64,
}

type Slot = Arc<Mutex<Option<UsageRecord>>>;

/// Snapshot of an identifier's budget after a decision (or on inspection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaGrant {
    pub day: NaiveDate,
    pub used: u64,
    pub limit: u64,
}

impl QuotaGrant {
    /// Words still available today. Zero once the budget is spent or overshot.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }
}

pub struct DailyWordQuota {
    limit: u64,
    clock: Arc<dyn Clock>,
    records: Mutex<HashMap<String, Slot>>,
}

impl DailyWordQuota {
    pub fn new(limit: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            clock,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Accepts or rejects `words` for `identifier` atomically.
    ///
    /// On rejection the stored count is left untouched.
    pub fn consume(&self, identifier: &str, words: u64) -> Result<QuotaGrant, JustifyError> {
        let today = self.clock.today();
        let slot = self.slot(identifier);
        let mut record = lock(&slot);

        let used = match *record {
            Some(r) if r.day == today => {
                let total = r.count.saturating_add(words);
                if total > self.limit {
                    warn!(
                        caller = fingerprint(identifier),
                        used = r.count,
                        requested = words,
                        limit = self.limit,
                        "Daily word quota exceeded"
                    );
                    return Err(JustifyError::QuotaExceeded {
                        identifier: identifier.to_string(),
                        limit: self.limit,
                    });
                }
                total
            }
            Some(r) => {
                debug!(
                    caller = fingerprint(identifier),
                    previous_day = %r.day,
                    "Word quota rolled over to a new day"
                );
                words
            }
            None => words,
        };

        *record = Some(UsageRecord {
            day: today,
            count: used,
        });
        debug!(
            caller = fingerprint(identifier),
            requested = words,
            used,
            "Word quota accepted"
        );

        Ok(QuotaGrant {
            day: today,
            used,
            limit: self.limit,
        })
    }

    /// Today's usage for `identifier`, without consuming anything.
    pub fn usage(&self, identifier: &str) -> QuotaGrant {
        let today = self.clock.today();
        let records = lock(&self.records);
        let used = records
            .get(identifier)
            .and_then(|slot| *lock(slot))
            .filter(|r| r.day == today)
            .map_or(0, |r| r.count);

        QuotaGrant {
            day: today,
            used,
            limit: self.limit,
        }
    }

    /// Drops records from previous days. Returns how many were removed.
    ///
    /// Slots currently held by an in-flight `consume` are skipped; they are
    /// picked up on a later pass.
    pub fn prune_stale(&self) -> usize {
        let today = self.clock.today();
        let mut records = lock(&self.records);
        let before = records.len();

        records.retain(|_, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            matches!(*lock(slot), Some(r) if r.day == today)
        });

        let removed = before - records.len();
        if removed > 0 {
            info!(removed, remaining = records.len(), "Pruned stale word quota records");
        }
        removed
    }

    /// Number of identifiers currently tracked.
    pub fn tracked(&self) -> usize {
        lock(&self.records).len()
    }

    fn slot(&self, identifier: &str) -> Slot {
        let mut records = lock(&self.records);
        records
            .entry(identifier.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }
}

// Guarded data is plain values, consistent after any panic between lock and
// write, so a poisoned lock is recovered.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Log-safe prefix of a caller identifier (identifiers are bearer tokens).
fn fingerprint(identifier: &str) -> &str {
    match identifier.char_indices().nth(8) {
        Some((idx, _)) => &identifier[..idx],
        None => identifier,
    }
}
