//! Process-local record of emails already attempted in this session.

use dashmap::DashSet;

/// In-memory set of attempted email keys. Not persisted; a restart starts
/// from scratch.
#[derive(Debug, Default)]
pub struct SessionDedup {
    attempted: DashSet<String>,
}

impl SessionDedup {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as attempted. Returns `false` when it was already there.
    ///
    /// Empty keys are never deduplicated.
    pub fn mark_attempted(&self, key: &str) -> bool {
        if key.is_empty() {
            return true;
        }
        self.attempted.insert(key.to_string())
    }

    /// Number of keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attempted.len()
    }

    /// True when nothing has been attempted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempted.is_empty()
    }

    /// Forget every recorded key.
    pub fn clear(&self) {
        self.attempted.clear();
    }
}
