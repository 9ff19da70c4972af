//! Dashboard UI components
//!
//! - `table`: JSON-described tables
//! - `footer`: todo list footer
//! - `component_type`: the payload discriminator shared by all components
//! - `config`: rendering configuration

pub mod component_type;
pub mod config;
pub mod footer;
pub mod table;

pub use component_type::{ComponentType, COMPONENT_TYPE_KEY};
pub use config::RenderConfig;
pub use footer::{TodoFilter, TodoFooter};
pub use table::{ComponentTable, TableDescription};
