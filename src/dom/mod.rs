//! Render tree abstraction
//!
//! Components build their markup through [`RenderBackend`] instead of talking
//! to a browser document directly. This lets the same rendering code target a
//! live DOM ([`WebBackend`]) or an in-memory tree ([`NodeTree`]) that tests and
//! HTML export can inspect.

pub mod tree;
pub mod web;

pub use tree::{NodeId, NodeTree};
pub use web::WebBackend;

use crate::error::Result;

/// A target that can create and assemble markup nodes
///
/// Style property names are CSS (kebab-case) names, e.g. `background-color`.
pub trait RenderBackend {
    /// Handle to a node owned by the back end
    type Node: Clone;

    /// Create a detached element with the given tag name
    fn create_element(&mut self, tag: &str) -> Result<Self::Node>;

    /// Create a detached text node. The text is never interpreted as markup.
    fn create_text(&mut self, text: &str) -> Result<Self::Node>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Create a text node and append it to `parent`
    fn append_text(&mut self, parent: &Self::Node, text: &str) -> Result<()> {
        let node = self.create_text(text)?;
        self.append_child(parent, &node)
    }
}
