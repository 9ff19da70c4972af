//! Table component
//!
//! Turns a JSON table description (header row, content grid, optional style)
//! into `table` markup. Rows are rendered as given: nothing checks that row
//! lengths agree with each other or with the header.

use serde::{de, Deserialize, Serialize};
use serde_json::Value;

use super::component_type::{ComponentType, COMPONENT_TYPE_KEY};
use super::config::RenderConfig;
use crate::dom::{NodeTree, RenderBackend};
use crate::error::{Result, UiError};
use crate::style::{self, normalize_length_unit, StyleTable};
use crate::utils::is_truthy;

/// Parsed table fields, after payload shape normalization
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TableDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleTable>,
}

/// A table component, immutable once constructed
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentTable {
    description: TableDescription,
}

impl ComponentTable {
    /// Parse a component from its JSON form
    ///
    /// Two shapes are accepted:
    /// - flat: `{"componentType": "ComponentTable", "header": [...], ...}`
    /// - wrapped: `{"ComponentTable": {"header": [...], ...}}`
    ///
    /// A truthy `componentType` selects the flat shape. Without one, the
    /// `ComponentTable` key is unwrapped if present; otherwise the payload is
    /// read as flat. Anything other than a JSON object, before or after
    /// unwrapping, is a parse error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let payload = normalize_payload(require_object(value)?);
        let description = serde_json::from_value(require_object(payload)?)?;
        Ok(Self::new(description))
    }

    pub fn new(description: TableDescription) -> Self {
        Self { description }
    }

    pub fn description(&self) -> &TableDescription {
        &self.description
    }

    pub fn header(&self) -> Option<&[String]> {
        self.description.header.as_deref()
    }

    pub fn content(&self) -> Option<&[Vec<String>]> {
        self.description.content.as_deref()
    }

    pub fn style(&self) -> Option<&StyleTable> {
        self.description.style.as_ref()
    }

    /// Render with the default configuration and append to `mount`
    pub fn render<B: RenderBackend>(&self, backend: &mut B, mount: &B::Node) -> Result<()> {
        self.render_with(backend, mount, &RenderConfig::default())
    }

    /// Build a fresh table and append it to `mount`
    ///
    /// Every call appends a new table; earlier output is left in place.
    pub fn render_with<B: RenderBackend>(
        &self,
        backend: &mut B,
        mount: &B::Node,
        config: &RenderConfig,
    ) -> Result<()> {
        let table = self.build(backend, config)?;
        backend.append_child(mount, &table)
    }

    /// Serialize the rendered table to an HTML string
    pub fn to_html(&self) -> Result<String> {
        let mut tree = NodeTree::new();
        let table = self.build(&mut tree, &RenderConfig::default())?;
        Ok(tree.to_html(table))
    }

    /// Build the detached table subtree
    pub fn build<B: RenderBackend>(&self, backend: &mut B, config: &RenderConfig) -> Result<B::Node> {
        let s = self.style();

        // Cell padding comes from the config, not from these margins
        let margin = style::margins(s);
        log::debug!(
            "Rendering table: header={:?} rows={} margin={:?}",
            self.header().map(|h| h.len()),
            self.content().map_or(0, |c| c.len()),
            margin
        );

        let table = backend.create_element("table")?;
        backend.set_style(&table, "width", &config.table_width)?;

        if let Some(s) = s {
            if let Some(border) = s.border_width_px {
                backend.set_attribute(&table, "border", &border.to_string())?;
            }
            if let Some(color) = s.background_color() {
                backend.set_style(&table, "background-color", color)?;
            }
            if let Some(mode) = s.whitespace_mode() {
                backend.set_style(&table, "white-space", mode)?;
            }
            if let Some(widths) = &s.column_widths {
                let unit = normalize_length_unit(s.column_width_unit.as_deref());
                for width in widths {
                    let col = backend.create_element("col")?;
                    backend.set_attribute(&col, "width", &format!("{}{}", width, unit))?;
                    backend.append_child(&table, &col)?;
                }
            }
        }

        let padding = config.cell_padding.css_padding();

        if let Some(header) = self.header() {
            let thead = backend.create_element("thead")?;
            let row = backend.create_element("tr")?;
            if let Some(color) = s.and_then(StyleTable::header_color) {
                backend.set_style(&row, "background-color", color)?;
            }
            for text in header {
                let th = backend.create_element("th")?;
                backend.set_style(&th, "padding", &padding)?;
                backend.append_text(&th, text)?;
                backend.append_child(&row, &th)?;
            }
            backend.append_child(&thead, &row)?;
            backend.append_child(&table, &thead)?;
        }

        if let Some(content) = self.content() {
            let tbody = backend.create_element("tbody")?;
            for cells in content {
                let row = backend.create_element("tr")?;
                for text in cells {
                    let td = backend.create_element("td")?;
                    backend.set_style(&td, "padding", &padding)?;
                    backend.append_text(&td, text)?;
                    backend.append_child(&row, &td)?;
                }
                backend.append_child(&tbody, &row)?;
            }
            backend.append_child(&table, &tbody)?;
        }

        Ok(table)
    }
}

fn require_object(value: Value) -> Result<Value> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(UiError::Parse(de::Error::custom(format!(
            "expected a JSON object for {}, found {}",
            ComponentType::ComponentTable.as_str(),
            json_kind(&value)
        ))))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reduce both accepted payload shapes to the flat one
fn normalize_payload(mut value: Value) -> Value {
    let table_key = ComponentType::ComponentTable.as_str();

    if let Some(tag) = value.get(COMPONENT_TYPE_KEY).filter(|t| is_truthy(t)) {
        let tagged_as = tag.as_str().and_then(|t| t.parse::<ComponentType>().ok());
        if tagged_as != Some(ComponentType::ComponentTable) {
            log::warn!("Parsing {} payload tagged as {}", table_key, tag);
        }
        return value;
    }

    match value.as_object_mut().and_then(|obj| obj.remove(table_key)) {
        Some(inner) => inner,
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_payload() {
        let table = ComponentTable::from_json(
            r#"{"componentType":"ComponentTable","header":["a","b"],"content":[["1","2"]]}"#,
        )
        .unwrap();
        assert_eq!(table.header(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(table.content().map(|c| c.len()), Some(1));
        assert!(table.style().is_none());
    }

    #[test]
    fn test_wrapped_payload_matches_flat() {
        let flat = ComponentTable::from_json(
            r#"{"componentType":"ComponentTable","header":["a"],"content":[["1"]],"style":{"borderWidthPx":2}}"#,
        )
        .unwrap();
        let wrapped = ComponentTable::from_json(
            r#"{"ComponentTable":{"header":["a"],"content":[["1"]],"style":{"borderWidthPx":2}}}"#,
        )
        .unwrap();
        assert_eq!(flat, wrapped);
    }

    #[test]
    fn test_untagged_unwrapped_payload_reads_flat() {
        let table = ComponentTable::from_json(r#"{"header":["a"],"content":[["1"]]}"#).unwrap();
        assert_eq!(table.header(), Some(&["a".to_string()][..]));
        assert_eq!(table.content(), Some(&[vec!["1".to_string()]][..]));
    }

    #[test]
    fn test_empty_component_type_unwraps() {
        let table = ComponentTable::from_json(
            r#"{"componentType":"","ComponentTable":{"header":["x"]}}"#,
        )
        .unwrap();
        assert_eq!(table.header(), Some(&["x".to_string()][..]));
    }

    #[test]
    fn test_other_component_type_still_parses() {
        let table =
            ComponentTable::from_json(r#"{"componentType":"ChartLine","header":["a"]}"#).unwrap();
        assert_eq!(table.header().map(|h| h.len()), Some(1));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            ComponentTable::from_json("{not json"),
            Err(UiError::Parse(_))
        ));
        assert!(matches!(
            ComponentTable::from_json(r#"{"header":"not a list"}"#),
            Err(UiError::Parse(_))
        ));
    }

    #[test]
    fn test_non_object_payload_is_parse_error() {
        for json in [r#"[["a"],[["1"]],null]"#, "null", "42", r#""table""#] {
            assert!(
                matches!(ComponentTable::from_json(json), Err(UiError::Parse(_))),
                "{} should be rejected",
                json
            );
        }
        assert!(matches!(
            ComponentTable::from_json(r#"{"ComponentTable":[["a"],[["1"]],null]}"#),
            Err(UiError::Parse(_))
        ));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let table =
            ComponentTable::from_json(r#"{"header":null,"content":null,"style":null}"#).unwrap();
        assert_eq!(table.description(), &TableDescription::default());
    }

    #[test]
    fn test_to_html() {
        let table = ComponentTable::from_json(
            r#"{"header":["h"],"content":[["c"]],"style":{"borderWidthPx":0,"columnWidths":[100],"columnWidthUnit":"Percent"}}"#,
        )
        .unwrap();
        let expected = concat!(
            r#"<table border="0" style="width: 100%">"#,
            r#"<col width="100%">"#,
            r#"<thead><tr><th style="padding: 1px 1px 1px 1px">h</th></tr></thead>"#,
            r#"<tbody><tr><td style="padding: 1px 1px 1px 1px">c</td></tr></tbody>"#,
            "</table>"
        );
        assert_eq!(table.to_html().unwrap(), expected);
    }
}
