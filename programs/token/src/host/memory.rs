//! In-Memory Host Store
//!
//! Committed state lives in a `BTreeMap`. The only [`StateStore`] handed to
//! operations is a [`MemoryTransaction`]: writes made during one operation
//! are buffered and only become visible when the operation returns `Ok`.
//!
//! ```ignore
//! let mut store = MemoryStore::new();
//! let identity = FixedIdentity::new("alice");
//! let config = LedgerConfig::default();
//!
//! let balance = store.execute(|tx| {
//!     let mut ctx = LedgerContext::new(tx, &identity, &config);
//!     balance::process(&mut ctx, "Bob")
//! })?;
//! ```

use super::{StateStore, StoreError};
use std::collections::{BTreeMap, BTreeSet};

/// Committed key-value state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: BTreeMap<String, Vec<u8>>,
    failing_writes: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed value at `key`.
    pub fn committed(&self, key: &str) -> Option<&[u8]> {
        self.state.get(key).map(Vec::as_slice)
    }

    /// All committed keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }

    /// Write bytes directly, bypassing transactions.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.state.insert(key.into(), value.into());
    }

    /// Make every later write to `key` fail with [`StoreError::Write`].
    pub fn fail_writes_to(&mut self, key: impl Into<String>) {
        self.failing_writes.insert(key.into());
    }

    pub fn transaction(&mut self) -> MemoryTransaction<'_> {
        MemoryTransaction {
            base: self,
            writes: BTreeMap::new(),
        }
    }

    /// Run `op` in a fresh transaction, committing only if it succeeds.
    pub fn execute<T, E, F>(&mut self, op: F) -> Result<T, E>
    where
        F: FnOnce(&mut MemoryTransaction<'_>) -> Result<T, E>,
    {
        let mut tx = self.transaction();
        let value = op(&mut tx)?;
        tx.commit();
        Ok(value)
    }

    fn check_writable(&self, key: &str) -> Result<(), StoreError> {
        if self.failing_writes.contains(key) {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "write rejected by store".to_string(),
            });
        }
        Ok(())
    }
}

/// Pending writes of one operation. Dropping without [`commit`] discards them.
///
/// [`commit`]: MemoryTransaction::commit
#[derive(Debug)]
pub struct MemoryTransaction<'a> {
    base: &'a mut MemoryStore,
    writes: BTreeMap<String, Vec<u8>>,
}

impl MemoryTransaction<'_> {
    pub fn commit(self) {
        let MemoryTransaction { base, writes } = self;
        tracing::trace!(writes = writes.len(), "commit");
        base.state.extend(writes);
    }
}

impl StateStore for MemoryTransaction<'_> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.writes.get(key) {
            return Ok(Some(value.clone()));
        }
        Ok(self.base.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.base.check_writable(key)?;
        self.writes.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_reads_own_writes() {
        let mut store = MemoryStore::new();
        let mut tx = store.transaction();
        tx.put("k", b"v".to_vec()).unwrap();
        assert_eq!(tx.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_commit_publishes_writes() {
        let mut store = MemoryStore::new();
        let mut tx = store.transaction();
        tx.put("k", b"v".to_vec()).unwrap();
        tx.commit();
        assert_eq!(store.committed("k"), Some(&b"v"[..]));
    }

    #[test]
    fn test_drop_discards_writes() {
        let mut store = MemoryStore::new();
        {
            let mut tx = store.transaction();
            tx.put("k", b"v".to_vec()).unwrap();
        }
        assert_eq!(store.committed("k"), None);
    }

    #[test]
    fn test_execute_rolls_back_on_error() {
        let mut store = MemoryStore::new();
        store.fail_writes_to("b");
        let result: Result<(), StoreError> = store.execute(|tx| {
            tx.put("a", b"1".to_vec())?;
            tx.put("b", b"2".to_vec())?;
            Ok(())
        });
        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(store.keys().count(), 0);
    }

    #[test]
    fn test_transaction_reads_committed_state() {
        let mut store = MemoryStore::new();
        store.insert_raw("k", "old");
        let mut tx = store.transaction();
        assert_eq!(tx.get("k").unwrap(), Some(b"old".to_vec()));
        tx.put("k", b"new".to_vec()).unwrap();
        assert_eq!(tx.get("k").unwrap(), Some(b"new".to_vec()));
        drop(tx);
        assert_eq!(store.committed("k"), Some(&b"old"[..]));
    }

    #[test]
    fn test_execute_commits_on_success() {
        let mut store = MemoryStore::new();
        store
            .execute(|tx| -> Result<(), StoreError> {
                tx.put("a", b"1".to_vec())?;
                tx.put("b", b"2".to_vec())
            })
            .unwrap();
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
