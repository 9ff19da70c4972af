//! JSON persistence in browser local storage
//!
//! Values are stored as opaque JSON strings under a caller-chosen namespace.
//! [`KeyValueStore`] abstracts the backing store so the same logic runs
//! against `window.localStorage` or an in-memory map.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

use super::json::is_truthy;
use crate::error::{Result, UiError};

/// String key/value store with `localStorage` semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new(storage: web_sys::Storage) -> Self {
        Self { storage }
    }

    /// Local storage of the current window
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| UiError::Storage("No global window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| UiError::Storage(format!("localStorage is not accessible: {:?}", e)))?
            .ok_or_else(|| UiError::Storage("localStorage is not available".to_string()))?;
        Ok(Self::new(storage))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| UiError::Storage(format!("Failed to read '{}': {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("Failed to write '{}': {:?}", key, e)))
    }
}

/// In-memory store, for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize `data` as JSON under `namespace`
pub fn save<S: KeyValueStore + ?Sized>(store: &S, namespace: &str, data: &Value) -> Result<()> {
    let serialized = serde_json::to_string(data)?;
    store.set_item(namespace, &serialized)
}

/// Load the value stored under `namespace`
///
/// A missing or empty entry, or one holding a falsy value, loads as an empty
/// array. Stored text that is not JSON is an error.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, namespace: &str) -> Result<Value> {
    let stored = match store.get_item(namespace)? {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(Value::Array(Vec::new())),
    };
    let value: Value = serde_json::from_str(&stored)?;
    if is_truthy(&value) {
        Ok(value)
    } else {
        Ok(Value::Array(Vec::new()))
    }
}

/// Save when `data` is truthy, otherwise load
///
/// Returns `null` after a save and the loaded value otherwise.
pub fn store<S: KeyValueStore + ?Sized>(
    store: &S,
    namespace: &str,
    data: Option<&Value>,
) -> Result<Value> {
    match data {
        Some(d) if is_truthy(d) => {
            log::debug!("Saving '{}' to storage", namespace);
            save(store, namespace, d)?;
            Ok(Value::Null)
        }
        _ => load(store, namespace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_then_load() {
        let mem = MemoryStore::new();
        let todos = json!([{"id": "1", "title": "train", "completed": false}]);

        assert_eq!(store(&mem, "todos", Some(&todos)).unwrap(), Value::Null);
        assert_eq!(store(&mem, "todos", None).unwrap(), todos);
    }

    #[test]
    fn test_missing_namespace_loads_empty_array() {
        let mem = MemoryStore::new();
        assert_eq!(load(&mem, "nothing").unwrap(), json!([]));
    }

    #[test]
    fn test_falsy_data_loads_instead_of_saving() {
        let mem = MemoryStore::new();
        save(&mem, "ns", &json!({"kept": true})).unwrap();

        for falsy in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(store(&mem, "ns", Some(&falsy)).unwrap(), json!({"kept": true}));
        }
    }

    #[test]
    fn test_falsy_or_empty_stored_value_loads_empty_array() {
        let mem = MemoryStore::new();
        mem.set_item("empty", "").unwrap();
        mem.set_item("zero", "0").unwrap();
        mem.set_item("null", "null").unwrap();

        assert_eq!(load(&mem, "empty").unwrap(), json!([]));
        assert_eq!(load(&mem, "zero").unwrap(), json!([]));
        assert_eq!(load(&mem, "null").unwrap(), json!([]));
    }

    #[test]
    fn test_corrupt_entry_is_parse_error() {
        let mem = MemoryStore::new();
        mem.set_item("bad", "{oops").unwrap();
        assert!(matches!(load(&mem, "bad"), Err(UiError::Parse(_))));
    }

    #[test]
    fn test_store_through_trait_object() {
        let mem = MemoryStore::new();
        let dyn_store: &dyn KeyValueStore = &mem;
        save(dyn_store, "k", &json!([1, 2])).unwrap();
        assert_eq!(load(dyn_store, "k").unwrap(), json!([1, 2]));
    }
}
