//! Component-type discriminator
//!
//! Components serialized by the dashboard server carry a `componentType`
//! field naming their shape. Older payloads omit it and instead nest the
//! fields under a key with the type name.

use std::str::FromStr;

/// JSON field holding the discriminator
pub const COMPONENT_TYPE_KEY: &str = "componentType";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    ComponentText,
    ComponentTable,
    ComponentDiv,
    ChartHistogram,
    ChartHorizontalBar,
    ChartLine,
    ChartScatter,
    ChartStackedArea,
    ChartTimeline,
    DecoratorAccordion,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::ComponentText => "ComponentText",
            ComponentType::ComponentTable => "ComponentTable",
            ComponentType::ComponentDiv => "ComponentDiv",
            ComponentType::ChartHistogram => "ChartHistogram",
            ComponentType::ChartHorizontalBar => "ChartHorizontalBar",
            ComponentType::ChartLine => "ChartLine",
            ComponentType::ChartScatter => "ChartScatter",
            ComponentType::ChartStackedArea => "ChartStackedArea",
            ComponentType::ChartTimeline => "ChartTimeline",
            ComponentType::DecoratorAccordion => "DecoratorAccordion",
        }
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ComponentText" => Ok(ComponentType::ComponentText),
            "ComponentTable" => Ok(ComponentType::ComponentTable),
            "ComponentDiv" => Ok(ComponentType::ComponentDiv),
            "ChartHistogram" => Ok(ComponentType::ChartHistogram),
            "ChartHorizontalBar" => Ok(ComponentType::ChartHorizontalBar),
            "ChartLine" => Ok(ComponentType::ChartLine),
            "ChartScatter" => Ok(ComponentType::ChartScatter),
            "ChartStackedArea" => Ok(ComponentType::ChartStackedArea),
            "ChartTimeline" => Ok(ComponentType::ChartTimeline),
            "DecoratorAccordion" => Ok(ComponentType::DecoratorAccordion),
            _ => Err(format!("Unknown component type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for ty in [
            ComponentType::ComponentTable,
            ComponentType::ChartLine,
            ComponentType::DecoratorAccordion,
        ] {
            assert_eq!(ty.as_str().parse::<ComponentType>().unwrap(), ty);
        }
        assert!("Table".parse::<ComponentType>().is_err());
    }
}
