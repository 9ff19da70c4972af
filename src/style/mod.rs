//! Style descriptors and their resolution
//!
//! Components carry an optional style object serialized by the dashboard
//! server. This module holds the table style, margin resolution and CSS
//! length-unit normalization.

pub mod units;

pub use units::{normalize_length_unit, LengthUnit};

use serde::{Deserialize, Serialize};

/// Styling hints for a table component
///
/// Every field is optional; `None` means "use the built-in default".
/// Unknown fields in the JSON are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleTable {
    // Shared style base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    // Table specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitespace_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_width_unit: Option<String>,
}

impl StyleTable {
    /// Background color, if set to a non-empty value
    pub fn background_color(&self) -> Option<&str> {
        non_empty(&self.background_color)
    }

    /// Header row color, if set to a non-empty value
    pub fn header_color(&self) -> Option<&str> {
        non_empty(&self.header_color)
    }

    /// CSS `white-space` keyword, if set to a non-empty value
    pub fn whitespace_mode(&self) -> Option<&str> {
        non_empty(&self.whitespace_mode)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Pixel margins derived from a style
///
/// Sides missing from JSON are zero.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,

    /// Width left over once horizontal margins are removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_ex_margins: Option<f64>,

    /// Height left over once vertical margins are removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_ex_margins: Option<f64>,
}

impl Margin {
    /// Same value on all four sides
    pub fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
            width_ex_margins: None,
            height_ex_margins: None,
        }
    }

    /// CSS shorthand in top/right/bottom/left order, e.g. `1px 1px 1px 1px`
    pub fn css_padding(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Resolve margins from an optional style; absent values count as zero
pub fn margins(style: Option<&StyleTable>) -> Margin {
    let Some(s) = style else {
        return Margin::default();
    };

    let top = s.margin_top.unwrap_or(0.0);
    let right = s.margin_right.unwrap_or(0.0);
    let bottom = s.margin_bottom.unwrap_or(0.0);
    let left = s.margin_left.unwrap_or(0.0);

    Margin {
        top,
        right,
        bottom,
        left,
        width_ex_margins: s.width.map(|w| w - left - right),
        height_ex_margins: s.height.map(|h| h - top - bottom),
    }
}
