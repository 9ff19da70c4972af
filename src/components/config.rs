//! Rendering configuration shared by components

use serde::{Deserialize, Serialize};

use crate::style::Margin;

/// Cell padding applied to every header and body cell, in pixels
pub const DEFAULT_CELL_PADDING_PX: f64 = 1.0;

/// CSS width of the table root
pub const DEFAULT_TABLE_WIDTH: &str = "100%";

/// Configuration for table rendering
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// CSS width of the table root
    pub table_width: String,

    /// Padding on every `th`/`td`. Independent of the margins resolved from
    /// the component style.
    pub cell_padding: Margin,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            table_width: DEFAULT_TABLE_WIDTH.to_string(),
            cell_padding: Margin::uniform(DEFAULT_CELL_PADDING_PX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.table_width, "100%");
        assert_eq!(config.cell_padding.css_padding(), "1px 1px 1px 1px");
    }

    #[test]
    fn test_partial_config_json() {
        let config: RenderConfig = serde_json::from_str(r#"{"tableWidth": "50%"}"#).unwrap();
        assert_eq!(config.table_width, "50%");
        assert_eq!(config.cell_padding, Margin::uniform(1.0));
    }

    #[test]
    fn test_partial_cell_padding_json() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"cellPadding": {"top": 2, "left": 3}}"#).unwrap();
        assert_eq!(config.table_width, "100%");
        assert_eq!(config.cell_padding.css_padding(), "2px 0px 0px 3px");
    }
}
