//! Time-boxed single-slot cache for the Archidekt site-wide deck total.
//!
//! Staleness is detected lazily on read against an injectable [`Clock`]; there is
//! no background timer. A failed refresh never discards a known value.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Cache entry and state
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub value: Option<u64>,
    pub fetched_at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No value has ever been fetched successfully.
    Empty,
    Fresh,
    Stale,
}

// ---------------------------------------------------------------------------
// SiteTotalCache
// ---------------------------------------------------------------------------

/// Single cached aggregate with a fixed TTL and stale-read fallback.
///
/// Concurrent stale reads may each trigger a refresh; the last successful
/// write wins. The lock is never held while refreshing.
pub struct SiteTotalCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entry: Mutex<CacheEntry>,
}

impl SiteTotalCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entry: Mutex::new(CacheEntry::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Snapshot of the slot.
    pub fn entry(&self) -> CacheEntry {
        *self.lock()
    }

    pub fn state(&self) -> CacheState {
        self.state_at(self.entry(), self.clock.now_ms())
    }

    fn state_at(&self, entry: CacheEntry, now_ms: u64) -> CacheState {
        if entry.value.is_none() {
            return CacheState::Empty;
        }
        let age = now_ms.saturating_sub(entry.fetched_at_ms);
        if u128::from(age) < self.ttl.as_millis() {
            CacheState::Fresh
        } else {
            CacheState::Stale
        }
    }

    /// Return the cached value if fresh, otherwise run `refresh` and cache its result.
    ///
    /// `refresh` yielding an error or no value keeps the previous value (possibly
    /// `None`). Failures are logged and never surfaced.
    pub fn get_or_refresh<F>(&self, refresh: F) -> Option<u64>
    where
        F: FnOnce() -> Result<Option<u64>>,
    {
        let now = self.clock.now_ms();
        let current = self.entry();
        if self.state_at(current, now) == CacheState::Fresh {
            return current.value;
        }

        match refresh() {
            Ok(Some(value)) => {
                *self.lock() = CacheEntry {
                    value: Some(value),
                    fetched_at_ms: now,
                };
                debug!(value, "site total refreshed");
                Some(value)
            }
            Ok(None) => {
                debug!("site total refresh returned no count; keeping previous value");
                self.entry().value
            }
            Err(e) => {
                warn!(error = %e, "site total refresh failed; keeping previous value");
                self.entry().value
            }
        }
    }

    /// Drop the cached value, returning the slot to `Empty`.
    pub fn clear(&self) {
        *self.lock() = CacheEntry::default();
    }

    fn lock(&self) -> MutexGuard<'_, CacheEntry> {
        // The slot is a plain Copy value, so a poisoned guard is still consistent.
        self.entry.lock().unwrap_or_else(|p| p.into_inner())
    }
}
