//! Table component bindings

use wasm_bindgen::prelude::*;

use super::helpers::to_js_error;
use crate::components::ComponentTable;
use crate::dom::WebBackend;

/// JavaScript handle to a parsed table component
#[wasm_bindgen(js_name = ComponentTable)]
pub struct TableComponentHandle {
    inner: ComponentTable,
}

#[wasm_bindgen(js_class = ComponentTable)]
impl TableComponentHandle {
    /// Parse a table component; throws if the JSON is malformed
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<TableComponentHandle, JsValue> {
        let inner =
            ComponentTable::from_json(json).map_err(|e| to_js_error("ComponentTable", e))?;
        Ok(Self { inner })
    }

    /// Append a freshly built table to `mount`
    pub fn render(&self, mount: &web_sys::Element) -> Result<(), JsValue> {
        let mut backend = WebBackend::from_window().map_err(|e| to_js_error("render", e))?;
        let node: &web_sys::Node = mount.as_ref();
        self.inner
            .render(&mut backend, node)
            .map_err(|e| to_js_error("render", e))
    }

    /// The table as an HTML string
    #[wasm_bindgen(js_name = toHtml)]
    pub fn to_html(&self) -> Result<String, JsValue> {
        self.inner.to_html().map_err(|e| to_js_error("toHtml", e))
    }
}

/// Parse a table component and return its HTML in one call
#[wasm_bindgen(js_name = renderTableHtml)]
pub fn render_table_html(json: &str) -> Result<String, JsValue> {
    ComponentTable::from_json(json)
        .and_then(|table| table.to_html())
        .map_err(|e| to_js_error("renderTableHtml", e))
}
