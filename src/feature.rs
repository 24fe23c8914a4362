//! Minimal feature model consumed by the feature-element write hook.
//!
//! Feature reading and the rest of feature/property handling belong to
//! collaborators; this crate only needs enough structure to recognize which
//! property is the geometry and to keep property order stable.

use indexmap::IndexMap;

use crate::geometry::Geometry;

/// One feature property value. `Null` properties are skipped on write.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    String(String),
    Number(f64),
    Boolean(bool),
    Geometry(Geometry),
}

impl PropertyValue {
    /// Text rendering used for non-geometry property elements.
    pub(crate) fn to_text(&self) -> String {
        match self {
            PropertyValue::Null => String::new(),
            PropertyValue::String(value) => value.clone(),
            PropertyValue::Number(value) => value.to_string(),
            PropertyValue::Boolean(value) => value.to_string(),
            PropertyValue::Geometry(_) => String::new(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<Geometry> for PropertyValue {
    fn from(value: Geometry) -> Self {
        PropertyValue::Geometry(value)
    }
}

/// A feature: optional identifier, a designated geometry property name, and
/// properties in insertion order.
#[derive(Debug, Clone)]
pub struct Feature {
    id: Option<String>,
    geometry_name: String,
    properties: IndexMap<String, PropertyValue>,
}

impl Feature {
    pub fn new() -> Self {
        Self {
            id: None,
            geometry_name: "geometry".to_string(),
            properties: IndexMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_geometry_name(&mut self, name: impl Into<String>) {
        self.geometry_name = name.into();
    }

    pub fn geometry_name(&self) -> &str {
        &self.geometry_name
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Properties in their natural (insertion) order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::new()
    }
}
