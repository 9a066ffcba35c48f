use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-day completed focus session counts, keyed by date key
/// (`YYYY-MM-DD`, local time).
///
/// Counts only grow: natural Focus completions are the sole writer, and no
/// decrement or removal operation exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionLog {
    entries: BTreeMap<String, u32>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed focus session on `date_key`.
    pub fn record(&mut self, date_key: &str) {
        *self.entries.entry(date_key.to_string()).or_insert(0) += 1;
    }

    /// Sessions completed on a single day.
    pub fn count_on(&self, date_key: &str) -> u32 {
        self.entries.get(date_key).copied().unwrap_or(0)
    }

    /// Sessions completed across a set of days.
    pub fn count_in<I, S>(&self, date_keys: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        date_keys
            .into_iter()
            .map(|key| self.count_on(key.as_ref()))
            .sum()
    }

    /// All-time session count.
    pub fn total(&self) -> u64 {
        self.entries.values().map(|&count| u64::from(count)).sum()
    }

    /// Days with at least one completed session, in date-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(key, &count)| (key.as_str(), count))
    }
}
