//! Per-case advisory locks.
//!
//! Lookup-then-write on a case number is a read-modify-write. Holding the
//! case's lock across both steps stops two reconciliations in this process
//! from both seeing "not found" and creating duplicates. Other processes are
//! not covered.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Guard held while a case number is being reconciled.
pub type CaseGuard = OwnedMutexGuard<()>;

/// One async mutex per case number, created on first use.
#[derive(Debug, Default)]
pub struct CaseLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl CaseLocks {
    /// No locks yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `case_number`.
    pub async fn acquire(&self, case_number: &str) -> CaseGuard {
        let lock = self.locks.entry(case_number.to_string()).or_default().clone();
        lock.lock_owned().await
    }

    /// Drop locks nobody is holding or waiting on.
    pub fn prune_idle(&self) {
        self.locks.retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    /// Case numbers currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// True when no case number is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
