//! Dashboard UI WASM API
//!
//! JavaScript-facing bindings for the components and utilities.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, error conversion, JS value (de)serialization
//! - `table`: the `ComponentTable` class and `renderTableHtml`
//! - `footer`: `renderTodoFooter`
//! - `utils`: `uuid`, `pluralize`, `store`, `extend`

pub mod footer;
pub mod helpers;
pub mod table;
pub mod utils;

pub use footer::render_todo_footer;
pub use table::{render_table_html, TableComponentHandle};
pub use utils::{extend, pluralize, store, uuid};
