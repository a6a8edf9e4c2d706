//! In-memory key-value store (tests and throwaway sessions)

use super::{KvStore, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.entries.write().clear();
        Ok(())
    }
}

/// [`MemoryStore`] whose writes can be made to fail on demand
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    fail_writes: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl FailingStore {
    pub(crate) fn set_failing(&self, fail: bool) {
        self.fail_writes
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            let err = serde_json::from_str::<()>("disk full").unwrap_err();
            return Err(super::StorageError::Serialization(err));
        }
        Ok(())
    }
}

#[cfg(test)]
impl KvStore for FailingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.remove(key)
    }

    fn clear(&self) -> StorageResult<()> {
        self.check()?;
        self.inner.clear()
    }
}
