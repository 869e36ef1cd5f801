//! Generation cache: string key → JSON `{ "value", "timestamp" }` records.
//!
//! The store itself is dumb key/value storage. Expiry is decided on read:
//! an entry is only a hit while `now - timestamp < CACHE_TTL_MS`. Records
//! that fail to parse count as misses.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// One hour.
pub const CACHE_TTL_MS: u64 = 60 * 60 * 1000;

const CACHE_FILE: &str = "review-cache.json";

/// Source of "now" in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Key/value string storage for cache records.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String) -> Result<()>;
}

impl<T: CacheStore + ?Sized> CacheStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Serialized cache record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: String,
    pub timestamp: u64,
}

impl CacheEntry {
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp) < CACHE_TTL_MS
    }
}

/// Return the cached text for `key` if present, parseable and fresh.
pub fn read_fresh(store: &dyn CacheStore, key: &str, now_ms: u64) -> Option<String> {
    let raw = store.get(key)?;
    let entry: CacheEntry = match serde_json::from_str(&raw) {
        Ok(entry) => entry,
        Err(e) => {
            log::warn!("[CACHE] Ignoring corrupted entry for {}: {}", key, e);
            return None;
        }
    };
    if entry.is_fresh(now_ms) {
        Some(entry.value)
    } else {
        log::debug!("[CACHE] Entry for {} expired", key);
        None
    }
}

/// Record `value` under `key` stamped with `now_ms`.
pub fn write_entry(store: &dyn CacheStore, key: &str, value: &str, now_ms: u64) -> Result<()> {
    let entry = CacheEntry {
        value: value.to_string(),
        timestamp: now_ms,
    };
    store.set(key, serde_json::to_string(&entry)?)
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON file store: one object mapping cache keys to record strings.
///
/// Each `set` rewrites the whole file and drops records that are expired or
/// unreadable, so the file only holds live entries.
#[derive(Clone)]
pub struct FileCacheStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileCacheStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_clock(dir, Arc::new(SystemClock))
    }

    pub fn with_clock(dir: &Path, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: dir.join(CACHE_FILE),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> HashMap<String, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("[CACHE] Discarding unreadable {}: {}", self.path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load_all().remove(key)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let now = self.clock.now_ms();
        let mut all = self.load_all();
        let before = all.len();
        all.retain(|_, raw| {
            serde_json::from_str::<CacheEntry>(raw)
                .map(|entry| entry.is_fresh(now))
                .unwrap_or(false)
        });
        if all.len() < before {
            log::debug!("[CACHE] Pruned {} stale entries", before - all.len());
        }
        all.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn fresh_entry_is_returned() {
        let store = MemoryCacheStore::new();
        write_entry(&store, "k", "hello", NOW).unwrap();
        assert_eq!(read_fresh(&store, "k", NOW).as_deref(), Some("hello"));
        assert_eq!(
            read_fresh(&store, "k", NOW + CACHE_TTL_MS - 1).as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn entry_expires_at_one_hour() {
        let store = MemoryCacheStore::new();
        write_entry(&store, "k", "hello", NOW).unwrap();
        assert_eq!(read_fresh(&store, "k", NOW + CACHE_TTL_MS), None);
        assert_eq!(read_fresh(&store, "k", NOW + 3_601_000), None);
    }

    #[test]
    fn corrupted_entry_is_a_miss() {
        let store = MemoryCacheStore::new();
        store.set("k", "not json".to_string()).unwrap();
        assert_eq!(read_fresh(&store, "k", NOW), None);
        store.set("k", r#"{"value":"x"}"#.to_string()).unwrap();
        assert_eq!(read_fresh(&store, "k", NOW), None);
    }

    #[test]
    fn record_format_matches_contract() {
        let store = MemoryCacheStore::new();
        write_entry(&store, "k", "v", 42).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&store.get("k").unwrap()).unwrap();
        assert_eq!(raw["value"], "v");
        assert_eq!(raw["timestamp"], 42);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::with_clock(dir.path(), Arc::new(FixedClock(NOW)));
        assert_eq!(store.get("a"), None);
        write_entry(&store, "a", "one", NOW).unwrap();
        write_entry(&store, "b", "two", NOW).unwrap();

        let reopened = FileCacheStore::with_clock(dir.path(), Arc::new(FixedClock(NOW)));
        assert_eq!(read_fresh(&reopened, "a", NOW).as_deref(), Some("one"));
        assert_eq!(read_fresh(&reopened, "b", NOW).as_deref(), Some("two"));
    }

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn file_store_drops_expired_records_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::with_clock(dir.path(), Arc::new(FixedClock(NOW)));
        write_entry(&store, "stale", "old", NOW - CACHE_TTL_MS - 1).unwrap();
        write_entry(&store, "live", "recent", NOW - 1_000).unwrap();
        store.set("junk", "not json".to_string()).unwrap();

        write_entry(&store, "fresh", "new", NOW).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let on_disk: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        let mut keys: Vec<&str> = on_disk.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["fresh", "live"]);
    }

    #[test]
    fn memory_store_survives_poisoned_lock() {
        let store = Arc::new(MemoryCacheStore::new());
        store.set("k", "before".to_string()).unwrap();

        let holder = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.entries.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(store.entries.is_poisoned());

        assert_eq!(store.get("k").as_deref(), Some("before"));
        store.set("k", "after".to_string()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("after"));
    }

    #[test]
    fn unreadable_cache_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::in_dir(dir.path());
        std::fs::write(store.path(), "[1,2").unwrap();
        assert_eq!(store.get("a"), None);
        store.set("a", "x".to_string()).unwrap();
        assert_eq!(store.get("a").as_deref(), Some("x"));
    }
}
