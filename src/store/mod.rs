//! Flash store collaborator interface and an in-memory implementation

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A per-request, one-shot key-value store.
///
/// A staged value is readable exactly once by the next read cycle, then
/// discarded. Dotted keys form a hierarchy: `remove("sweet_alert")` drops
/// `sweet_alert` and everything staged beneath `sweet_alert.`, matching the
/// session stores this trait adapts.
///
/// The builder takes the store as an injected collaborator so it can run
/// against any backend, including the in-memory store used in tests.
pub trait FlashStore {
    /// Delete `key` and any keys nested beneath it. Idempotent.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Stage `value` under `key` for exactly one subsequent read.
    fn flash(&mut self, key: &str, value: Value) -> Result<()>;
}

impl<S: FlashStore + ?Sized> FlashStore for &mut S {
    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn flash(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).flash(key, value)
    }
}

/// A single staged value.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashEntry {
    pub value: Value,
    /// When the value was staged
    pub staged_at: DateTime<Utc>,
}

/// In-memory [`FlashStore`] with one-shot read semantics.
///
/// Backs the demo binary and the test suite, and serves as the reference
/// implementation of the trait contract.
#[derive(Debug, Default)]
pub struct MemoryFlashStore {
    staged: BTreeMap<String, FlashEntry>,
}

impl MemoryFlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a staged value, consuming it. A second read of the same key
    /// returns `None`.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.staged.remove(key).map(|entry| entry.value)
    }

    /// All currently staged entries, keyed by their full staged key.
    pub fn entries(&self) -> &BTreeMap<String, FlashEntry> {
        &self.staged
    }

    /// Whether a value is staged under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.staged.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

impl FlashStore for MemoryFlashStore {
    fn remove(&mut self, key: &str) -> Result<()> {
        self.staged.remove(key);
        let prefix = format!("{key}.");
        self.staged.retain(|staged_key, _| !staged_key.starts_with(&prefix));
        Ok(())
    }

    fn flash(&mut self, key: &str, value: Value) -> Result<()> {
        self.staged.insert(
            key.to_string(),
            FlashEntry {
                value,
                staged_at: Utc::now(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn take_is_one_shot() {
        let mut store = MemoryFlashStore::new();
        store.flash("alert.text", json!("hello")).unwrap();

        assert_eq!(store.take("alert.text"), Some(json!("hello")));
        assert_eq!(store.take("alert.text"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn flash_overwrites_an_existing_key() {
        let mut store = MemoryFlashStore::new();
        store.flash("alert.text", json!("first")).unwrap();
        store.flash("alert.text", json!("second")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.take("alert.text"), Some(json!("second")));
    }

    #[test]
    fn remove_drops_the_key_and_its_subtree() {
        let mut store = MemoryFlashStore::new();
        store.flash("alert", json!(true)).unwrap();
        store.flash("alert.text", json!("hello")).unwrap();
        store.flash("alert.timer", json!(1800)).unwrap();
        store.flash("alerts", json!("unrelated")).unwrap();

        store.remove("alert").unwrap();

        assert!(!store.contains("alert"));
        assert!(!store.contains("alert.text"));
        assert!(!store.contains("alert.timer"));
        // A sibling key sharing the prefix string is not part of the subtree.
        assert!(store.contains("alerts"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = MemoryFlashStore::new();
        store.remove("missing").unwrap();
        store.remove("missing").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn works_through_a_mutable_borrow() {
        fn stage<S: FlashStore>(mut store: S) {
            store.flash("k", json!(1)).unwrap();
        }

        let mut store = MemoryFlashStore::new();
        stage(&mut store);
        assert_eq!(store.take("k"), Some(json!(1)));
    }
}
