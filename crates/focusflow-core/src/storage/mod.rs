//! Persisted store collaborator.
//!
//! The engine persists one JSON record (settings + session log) under a
//! single key, write-through after every mutation of a persisted field.
//! The store contract is deliberately forgiving: loading an absent or
//! unparseable value yields the caller's fallback, and write failures are
//! reported to stderr and swallowed -- state stays correct in memory but
//! may not survive a restart.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::StoreError;

/// Key under which the engine persists its settings and session log.
pub const POMODORO_KEY: &str = "focusflow.pomodoro";

/// Key-value store contract.
///
/// Values are opaque strings at this level; JSON framing lives in
/// [`load_json`] / [`save_json`].
pub trait KvStore {
    fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Load and JSON-decode `key`, or return `fallback` if the key is absent,
/// unreadable, or unparseable.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str, fallback: T) -> T {
    let raw = match store.kv_get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return fallback,
        Err(e) => {
            eprintln!("warning: unable to read stored key {key}: {e}");
            return fallback;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("warning: unable to parse stored key {key}: {e}");
            fallback
        }
    }
}

/// JSON-encode `value` and store it under `key`. Failures are reported to
/// stderr and swallowed, never propagated.
pub fn save_json<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("warning: unable to serialize key {key}: {e}");
            return;
        }
    };
    if let Err(e) = store.kv_set(key, &raw) {
        eprintln!("warning: unable to save key {key}: {e}");
    }
}

/// Returns `~/.config/focusflow[-dev]/` based on FOCUSFLOW_ENV.
///
/// Set FOCUSFLOW_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSFLOW_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusflow-dev")
    } else {
        base_dir.join("focusflow")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        count: u32,
    }

    #[test]
    fn load_absent_key_returns_fallback() {
        let store = MemoryStore::new();
        let record = load_json(&store, "missing", Record { count: 7 });
        assert_eq!(record, Record { count: 7 });
    }

    #[test]
    fn load_garbage_returns_fallback() {
        let store = MemoryStore::new();
        store.kv_set("bad", "{not json").unwrap();
        let record = load_json(&store, "bad", Record { count: 3 });
        assert_eq!(record, Record { count: 3 });
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        save_json(&store, "rec", &Record { count: 42 });
        let record = load_json(&store, "rec", Record { count: 0 });
        assert_eq!(record, Record { count: 42 });
    }
}
