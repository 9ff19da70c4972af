//! Client-side utilities for the dashboard
//!
//! Small helpers shared by the components and exported to JavaScript:
//! identifiers, word forms, JSON persistence and object merging.

pub mod ids;
pub mod json;
pub mod storage;
pub mod text;

// Re-export commonly used helpers
pub use ids::*;
pub use json::*;
pub use storage::*;
pub use text::*;
