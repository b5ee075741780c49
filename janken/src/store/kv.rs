//! Key-value backend abstraction.
//!
//! The host environment owns the real byte store; the core only needs get,
//! set-with-expiry and delete. [`MemoryKvStore`] is the in-process backend
//! used by tests and single-node deployments.

use chrono::{DateTime, TimeDelta, Utc};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use super::errors::{KvError, KvResult};

/// Trait for key-value backends holding game records
pub trait KvStore: Send + Sync {
    /// Fetch the bytes stored under `key`, or `None` if absent or expired
    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, dropping it once `ttl` has elapsed
    fn set_with_expiry(&self, key: &str, value: &[u8], ttl: Duration) -> KvResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> KvResult<()>;
}

/// Source of the current time for expiry checks
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct Entry {
    value: Vec<u8>,
    expires_at: DateTime<Utc>,
}

/// In-memory `KvStore` with per-key expiry
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Clock,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    /// Create a store that reads the time from `clock`
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn entries(&self) -> KvResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries.lock().map_err(|_| KvError::Poisoned)
    }

    /// Deadline of a live record
    pub fn expires_at(&self, key: &str) -> KvResult<Option<DateTime<Utc>>> {
        let now = (self.clock)();
        Ok(self
            .entries()?
            .get(key)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.expires_at))
    }

    /// Drop every expired record, returning how many were removed
    pub fn purge_expired(&self) -> KvResult<usize> {
        let now = (self.clock)();
        let mut entries = self.entries()?;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        Ok(before - entries.len())
    }

    /// Number of stored records, expired ones included until purged
    pub fn len(&self) -> KvResult<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> KvResult<bool> {
        Ok(self.entries()?.is_empty())
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        let now = (self.clock)();
        let mut entries = self.entries()?;
        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        Ok(None)
    }

    fn set_with_expiry(&self, key: &str, value: &[u8], ttl: Duration) -> KvResult<()> {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| (self.clock)().checked_add_signed(delta))
            .ok_or(KvError::InvalidExpiry(ttl))?;

        self.entries()?.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> KvResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
