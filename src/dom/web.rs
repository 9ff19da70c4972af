//! Live browser DOM back end

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use super::RenderBackend;
use crate::error::{Result, UiError};

/// Render back end over a `web_sys::Document`
pub struct WebBackend {
    document: Document,
}

impl WebBackend {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Back end for the document of the current window
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::Dom("No global document available".to_string()))?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn dom_error(context: &str, err: JsValue) -> UiError {
    UiError::Dom(format!("{}: {:?}", context, err))
}

fn as_element<'a>(node: &'a Node, context: &str) -> Result<&'a Element> {
    node.dyn_ref::<Element>()
        .ok_or_else(|| UiError::Dom(format!("{}: node is not an element", context)))
}

impl RenderBackend for WebBackend {
    type Node = Node;

    fn create_element(&mut self, tag: &str) -> Result<Node> {
        self.document
            .create_element(tag)
            .map(Node::from)
            .map_err(|e| dom_error(&format!("Failed to create <{}>", tag), e))
    }

    fn create_text(&mut self, text: &str) -> Result<Node> {
        Ok(Node::from(self.document.create_text_node(text)))
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) -> Result<()> {
        as_element(node, "set_attribute")?
            .set_attribute(name, value)
            .map_err(|e| dom_error(&format!("Failed to set attribute '{}'", name), e))
    }

    fn set_style(&mut self, node: &Node, property: &str, value: &str) -> Result<()> {
        node.dyn_ref::<HtmlElement>()
            .ok_or_else(|| UiError::Dom("set_style: node is not an HTML element".to_string()))?
            .style()
            .set_property(property, value)
            .map_err(|e| dom_error(&format!("Failed to set style '{}'", property), e))
    }

    fn append_child(&mut self, parent: &Node, child: &Node) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| dom_error("Failed to append child", e))
    }
}
