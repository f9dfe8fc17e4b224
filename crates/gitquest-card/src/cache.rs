//! Freshness cache for fetched user records.
//!
//! A thin wrapper over an in-process moka cache. The TTL is enforced by the
//! store itself (`time_to_live`), so callers never inspect timestamps: an
//! expired entry is simply absent. Entries are replaced wholesale, never
//! mutated, and concurrent same-key writes resolve last-writer-wins.

use std::time::Duration;

use moka::future::Cache;

use crate::github::UserRecord;

/// Backing store: login -> user record, expiring after the freshness TTL.
pub type UserStore = Cache<String, UserRecord>;

/// TTL-bounded store of upstream user records, keyed by login.
#[derive(Clone)]
pub struct UserCache {
    inner: UserStore,
}

impl UserCache {
    /// Create a cache holding at most `capacity` records, each fresh for `ttl`.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }

    /// Look up a record by username. Returns `None` for unknown or expired
    /// entries. GitHub logins are case-insensitive, so keys are lowercased.
    pub async fn get(&self, username: &str) -> Option<UserRecord> {
        let hit = self.inner.get(&username.to_lowercase()).await;
        if hit.is_some() {
            tracing::debug!(username = %username, "cache hit");
        } else {
            tracing::debug!(username = %username, "cache miss");
        }
        hit
    }

    /// Store a record under its canonical login. Callers run this on a
    /// detached task; nothing here may fail loudly enough to matter to a
    /// response that has already been rendered.
    pub async fn set(&self, record: UserRecord) {
        let key = record.login.to_lowercase();
        self.inner.insert(key, record).await;
    }
}
