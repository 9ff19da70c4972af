//! Utility bindings: ids, word forms, storage, object merge

use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, to_js_error};
use crate::utils::{self, LocalStorage};

/// Random version 4 UUID
#[wasm_bindgen]
pub fn uuid() -> String {
    utils::new_uuid()
}

/// `word` for a count of one, `word + "s"` otherwise
#[wasm_bindgen]
pub fn pluralize(count: u32, word: &str) -> String {
    utils::pluralize(count as usize, word)
}

/// Save `data` under `namespace` when it is truthy, otherwise load it
///
/// Loading returns `[]` when nothing is stored.
#[wasm_bindgen]
pub fn store(namespace: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let data: Option<Value> = if data.is_undefined() || data.is_null() {
        None
    } else {
        Some(deserialize(data, "store: data is not JSON-compatible")?)
    };

    let local = LocalStorage::from_window().map_err(|e| to_js_error("store", e))?;
    let result =
        utils::store(&local, namespace, data.as_ref()).map_err(|e| to_js_error("store", e))?;
    serialize(&result, "store: failed to return value")
}

/// Shallow-merge an array of objects into a new object
#[wasm_bindgen]
pub fn extend(objects: JsValue) -> Result<JsValue, JsValue> {
    let values: Vec<Value> = deserialize(objects, "extend: expected an array of objects")?;
    let merged = utils::extend(&values);
    serialize(&merged, "extend: failed to return value")
}
