//! Typed configuration option records.
//!
//! One flat value type per category. Records are built fresh from a query
//! row on every call and are owned by the caller.

use std::fmt;

use serde::Serialize;

use super::template::{CategoryTemplate, OptionFields};

/// A record type produced by a category query.
pub trait OptionRecord: Sized {
    /// The category's query shape.
    const TEMPLATE: CategoryTemplate;

    /// Build a record from one row.
    ///
    /// Returns `None` if a mandatory value is missing.
    fn from_fields(fields: &OptionFields<'_>) -> Option<Self>;
}

fn write_optional(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(value) => write!(f, ", {label} {value}"),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engine {
    /// The engine model, or the instance name if none is declared.
    pub model: String,
    pub power: Option<String>,
    pub fuel_consumption: Option<String>,
}

impl OptionRecord for Engine {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Engine",
        mandatory: &[],
        optional: &["engineHasModel", "hasEnginePower", "hasFuelConsumption"],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields
                .value("engineHasModel")
                .unwrap_or_else(|| fields.local_name()),
            power: fields.value("hasEnginePower"),
            fuel_consumption: fields.value("hasFuelConsumption"),
        })
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)?;
        write_optional(f, "power", self.power.as_deref())?;
        write_optional(f, "fuel consumption", self.fuel_consumption.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paint {
    pub color: String,
    pub paint_type: String,
}

impl OptionRecord for Paint {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Paint",
        mandatory: &["hasPaintColor", "hasPaintType"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            color: fields.value("hasPaintColor")?,
            paint_type: fields.value("hasPaintType")?,
        })
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.paint_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wheels {
    pub diameter: String,
    pub model: String,
}

impl OptionRecord for Wheels {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Wheels",
        mandatory: &["hasDiameter", "hasWheelModel"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            diameter: fields.value("hasDiameter")?,
            model: fields.value("hasWheelModel")?,
        })
    }
}

impl fmt::Display for Wheels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.model, self.diameter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headlights {
    pub model: String,
    pub descr: String,
}

impl OptionRecord for Headlights {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Headlights",
        mandatory: &["hasHeadlightModel"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            descr: fields.value("hasHeadlightModel")?,
        })
    }
}

impl fmt::Display for Headlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model, self.descr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transmission {
    pub model: String,
    pub transmission_type: String,
}

impl OptionRecord for Transmission {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Transmission",
        mandatory: &["hasTransmissionType"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            transmission_type: fields.value("hasTransmissionType")?,
        })
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model, self.transmission_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upholstery {
    pub model: String,
    pub color: String,
    pub material: String,
}

impl OptionRecord for Upholstery {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Upholstery",
        mandatory: &["hasUpholsteryColor", "hasUpholsteryMaterial"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            color: fields.value("hasUpholsteryColor")?,
            material: fields.value("hasUpholsteryMaterial")?,
        })
    }
}

impl fmt::Display for Upholstery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.model, self.color, self.material)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambient {
    pub lighting_type: String,
    pub descr: String,
}

impl OptionRecord for Ambient {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Ambient",
        mandatory: &["hasAmbientLighting"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            lighting_type: fields.local_name(),
            descr: fields.value("hasAmbientLighting")?,
        })
    }
}

impl fmt::Display for Ambient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.lighting_type, self.descr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Safety {
    pub model: String,
    pub safety_package: String,
}

impl OptionRecord for Safety {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Safety",
        mandatory: &["hasSafetyPackage"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            safety_package: fields.value("hasSafetyPackage")?,
        })
    }
}

impl fmt::Display for Safety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model, self.safety_package)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SteeringWheel {
    pub model: String,
    pub descr: String,
}

impl OptionRecord for SteeringWheel {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "SteeringWheel",
        mandatory: &["hasSteeringWheelOptional"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            descr: fields.value("hasSteeringWheelOptional")?,
        })
    }
}

impl fmt::Display for SteeringWheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model, self.descr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seats {
    pub model: String,
    pub optional: String,
}

impl OptionRecord for Seats {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "Seats",
        mandatory: &["hasSeatOptional"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            optional: fields.value("hasSeatOptional")?,
        })
    }
}

impl fmt::Display for Seats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model, self.optional)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrivingAssistant {
    pub model: String,
    pub assistant_type: String,
}

impl OptionRecord for DrivingAssistant {
    const TEMPLATE: CategoryTemplate = CategoryTemplate {
        class: "DrivingAssistant",
        mandatory: &["hasDrivingAssistantType"],
        optional: &[],
    };

    fn from_fields(fields: &OptionFields<'_>) -> Option<Self> {
        Some(Self {
            model: fields.local_name(),
            assistant_type: fields.value("hasDrivingAssistantType")?,
        })
    }
}

impl fmt::Display for DrivingAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model, self.assistant_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_display_skips_missing_fields() {
        let engine = Engine {
            model: "C220d".to_owned(),
            power: Some("500HP".to_owned()),
            fuel_consumption: None,
        };
        assert_eq!(engine.to_string(), "C220d, power 500HP");
    }

    #[test]
    fn test_engine_serializes_missing_fields_as_null() {
        let engine = Engine {
            model: "C300e".to_owned(),
            power: None,
            fuel_consumption: None,
        };
        let json = serde_json::to_value(&engine).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"model": "C300e", "power": null, "fuel_consumption": null})
        );
    }

    #[test]
    fn test_templates_name_distinct_classes() {
        let classes = [
            Engine::TEMPLATE.class,
            Paint::TEMPLATE.class,
            Wheels::TEMPLATE.class,
            Headlights::TEMPLATE.class,
            Transmission::TEMPLATE.class,
            Upholstery::TEMPLATE.class,
            Ambient::TEMPLATE.class,
            Safety::TEMPLATE.class,
            SteeringWheel::TEMPLATE.class,
            Seats::TEMPLATE.class,
            DrivingAssistant::TEMPLATE.class,
        ];
        let unique: std::collections::HashSet<_> = classes.iter().collect();
        assert_eq!(unique.len(), classes.len());
    }
}
