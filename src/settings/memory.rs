use super::{SettingValue, SettingsStore};
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MemoryInner {
    values: BTreeMap<String, SettingValue>,
    writes: Vec<(String, SettingValue)>,
    read_only: bool,
}

/// In-memory settings store.
///
/// Clones share the same storage, so a caller can hand one clone to the
/// panel and keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> Vec<(String, SettingValue)> {
        self.inner.borrow().writes.clone()
    }

    /// Writes recorded for `key`.
    pub fn writes_for(&self, key: &str) -> Vec<SettingValue> {
        self.inner
            .borrow()
            .writes
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Forgets the write log, keeping stored values.
    pub fn clear_writes(&self) {
        self.inner.borrow_mut().writes.clear();
    }

    /// Makes subsequent writes fail, to exercise error paths.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    fn set(&self, key: &str, value: SettingValue) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            bail!("settings store is read-only, dropping '{key}'");
        }
        inner.values.insert(key.to_string(), value.clone());
        inner.writes.push((key.to_string(), value));
        Ok(())
    }
}

impl SettingsStore for MemoryStore {
    fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.set(key, SettingValue::Int(value))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key, SettingValue::Text(value.to_string()))
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.inner.borrow().values.get(key) {
            Some(SettingValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.inner.borrow().values.get(key) {
            Some(SettingValue::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage_and_log() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.set_int("pen-size", 7).unwrap();
        handle.set_string("color", "#000000").unwrap();

        assert_eq!(store.get_int("pen-size"), Some(7));
        assert_eq!(store.get_string("color").as_deref(), Some("#000000"));
        assert_eq!(store.writes().len(), 2);
        assert_eq!(store.writes_for("pen-size"), vec![SettingValue::Int(7)]);
    }

    #[test]
    fn type_mismatch_reads_as_missing() {
        let mut store = MemoryStore::new();
        store.set_string("pen-size", "seven").unwrap();
        assert_eq!(store.get_int("pen-size"), None);
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let mut store = MemoryStore::new();
        store.set_read_only(true);
        assert!(store.set_int("pen-size", 1).is_err());
        assert!(store.writes().is_empty());
        assert_eq!(store.get_int("pen-size"), None);
    }
}
