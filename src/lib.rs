//! Training Dashboard UI WASM Module
//!
//! Browser-side components for the training dashboard: JSON-described tables,
//! the todo footer, and small client utilities. Components render through the
//! [`dom::RenderBackend`] trait, so the same code drives a live document or an
//! in-memory tree.

pub mod api;
pub mod components;
pub mod dom;
pub mod error;
pub mod style;
pub mod utils;

// Re-export commonly used types
pub use components::{ComponentTable, ComponentType, RenderConfig, TableDescription, TodoFilter, TodoFooter};
pub use dom::{NodeId, NodeTree, RenderBackend, WebBackend};
pub use error::UiError;
pub use style::{LengthUnit, Margin, StyleTable};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("Logger already initialized: {}", e);
        }
    }

    log::info!("Dashboard UI WASM module initialized");
}
