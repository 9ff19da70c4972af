//! In-memory render tree
//!
//! An arena of element and text nodes addressed by [`NodeId`]. It implements
//! [`RenderBackend`] with DOM append semantics and can serialize any subtree
//! to HTML.

use super::RenderBackend;
use crate::error::{Result, UiError};

/// Elements that never have children or a closing tag in HTML
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Index of a node inside a [`NodeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        styles: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document tree
#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    nodes: Vec<NodeData>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created in this tree (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn get(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| UiError::Dom(format!("Unknown node {:?}", id)))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| UiError::Dom(format!("Unknown node {:?}", id)))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Tag name of an element, `None` for text nodes and unknown ids
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(id.0).map(|n| &n.kind),
            Some(NodeKind::Text(_))
        )
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element { styles, .. } => styles
                .iter()
                .find(|(k, _)| k == property)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// All children, text nodes included
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| !self.is_text(*c))
            .collect()
    }

    /// Direct element children with the given tag
    pub fn children_by_tag(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.tag(*c) == Some(tag))
            .collect()
    }

    /// Descendants of `id` with the given tag, in document order
    pub fn find_all(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_by_tag(id, tag, &mut found);
        found
    }

    fn collect_by_tag(&self, id: NodeId, tag: &str, found: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            if self.tag(child) == Some(tag) {
                found.push(child);
            }
            self.collect_by_tag(child, tag, found);
        }
    }

    /// Concatenated text of the node and all its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.nodes.get(id.0).map(|n| &n.kind) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(NodeKind::Element { .. }) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    // ------------------------------------------------------------------------
    // HTML serialization
    // ------------------------------------------------------------------------

    /// Serialize the subtree rooted at `id` (the node itself included)
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    /// Serialize only the children of `id`
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_html(child, &mut out);
        }
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Element {
                tag,
                attributes,
                styles,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
                }
                if !styles.is_empty() {
                    let css = styles
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join("; ");
                    out.push_str(&format!(" style=\"{}\"", escape_attribute(&css)));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for &child in &node.children {
                    self.write_html(child, out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.parent(node) {
                Some(p) => node = p,
                None => return false,
            }
        }
    }
}

impl RenderBackend for NodeTree {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        Ok(self.push(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            styles: Vec::new(),
        }))
    }

    fn create_text(&mut self, text: &str) -> Result<NodeId> {
        Ok(self.push(NodeKind::Text(text.to_string())))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        match &mut self.get_mut(*node)?.kind {
            NodeKind::Element { attributes, .. } => {
                upsert(attributes, name, value);
                Ok(())
            }
            NodeKind::Text(_) => Err(UiError::Dom(format!(
                "Cannot set attribute '{}' on a text node",
                name
            ))),
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<()> {
        match &mut self.get_mut(*node)?.kind {
            NodeKind::Element { styles, .. } => {
                upsert(styles, property, value);
                Ok(())
            }
            NodeKind::Text(_) => Err(UiError::Dom(format!(
                "Cannot set style '{}' on a text node",
                property
            ))),
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        if let NodeKind::Text(_) = self.get(*parent)?.kind {
            return Err(UiError::Dom("Text nodes cannot have children".to_string()));
        }
        self.get(*child)?;
        if self.is_ancestor_or_self(*child, *parent) {
            return Err(UiError::Dom(
                "Cannot append a node to itself or its descendant".to_string(),
            ));
        }

        // Re-appending moves the node, as in the DOM
        if let Some(old_parent) = self.get(*child)?.parent {
            self.get_mut(old_parent)?.children.retain(|c| c != child);
        }
        self.get_mut(*parent)?.children.push(*child);
        self.get_mut(*child)?.parent = Some(*parent);
        Ok(())
    }
}

fn upsert(entries: &mut Vec<(String, String)>, key: &str, value: &str) {
    match entries.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = value.to_string(),
        None => entries.push((key.to_string(), value.to_string())),
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
