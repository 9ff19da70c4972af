//! Footer component bindings

use wasm_bindgen::prelude::*;

use super::helpers::to_js_error;
use crate::components::{TodoFilter, TodoFooter};
use crate::dom::WebBackend;
use crate::wasm_warn;

/// Render the todo footer into `mount`
///
/// `now_showing` is `"all"`, `"active"` or `"completed"`; anything else falls
/// back to `"all"`.
#[wasm_bindgen(js_name = renderTodoFooter)]
pub fn render_todo_footer(
    mount: &web_sys::Element,
    count: u32,
    completed_count: u32,
    now_showing: &str,
) -> Result<(), JsValue> {
    let now_showing = now_showing.parse::<TodoFilter>().unwrap_or_else(|e| {
        wasm_warn!("renderTodoFooter: {}", e);
        TodoFilter::All
    });
    let footer = TodoFooter {
        count: count as usize,
        completed_count: completed_count as usize,
        now_showing,
    };

    let mut backend = WebBackend::from_window().map_err(|e| to_js_error("renderTodoFooter", e))?;
    let node: &web_sys::Node = mount.as_ref();
    footer
        .render(&mut backend, node)
        .map_err(|e| to_js_error("renderTodoFooter", e))
}
