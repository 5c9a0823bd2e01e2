use crate::{Error, PropertyType, PropertyValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type-erased descriptor of one declared property.
///
/// This is the comparable snapshot of a property declaration: two
/// descriptors are equal when name, type, default value and read-only flag
/// are equal. The default value, when present, always matches the declared
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyData", rename_all = "camelCase")]
pub struct PropertyData {
    name: String,
    #[serde(rename = "type")]
    property_type: PropertyType,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    default_value: Option<PropertyValue>,
    read_only: bool,
}

impl PropertyData {
    /// Creates a descriptor, checking that the default matches `property_type`.
    /// A JSON `null` default is stored as no default.
    pub fn new(
        name: impl Into<String>,
        property_type: PropertyType,
        default_value: Option<PropertyValue>,
    ) -> Result<Self> {
        let default_value = PropertyValue::present(default_value);
        if let Some(value) = &default_value
            && value.property_type() != property_type
        {
            return Err(Error::TypeMismatch {
                expected: property_type,
                found: value.property_type().to_string(),
            });
        }
        Ok(Self {
            name: name.into(),
            property_type,
            default_value,
            read_only: false,
        })
    }

    fn typed(name: &str, default_value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            property_type: default_value.property_type(),
            default_value: Some(default_value),
            read_only: false,
        }
    }

    /// Shorthand for a boolean property.
    pub fn boolean(name: &str, default_value: bool) -> Self {
        Self::typed(name, PropertyValue::Boolean(default_value))
    }

    /// Shorthand for a string property; `None` declares no default.
    pub fn string(name: &str, default_value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            property_type: PropertyType::String,
            default_value: default_value.map(PropertyValue::from),
            read_only: false,
        }
    }

    /// Shorthand for an integer property.
    pub fn integer(name: &str, default_value: i32) -> Self {
        Self::typed(name, PropertyValue::Integer(default_value))
    }

    /// Shorthand for a double property.
    pub fn double(name: &str, default_value: f64) -> Self {
        Self::typed(name, PropertyValue::Double(default_value))
    }

    /// Shorthand for a JSON property; `None` declares no default.
    pub fn json(name: &str, default_value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            property_type: PropertyType::Json,
            default_value: PropertyValue::present(default_value.map(PropertyValue::Json)),
            read_only: false,
        }
    }

    /// Returns a copy with the read-only flag set as given.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Declared name, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn default_value(&self) -> Option<&PropertyValue> {
        self.default_value.as_ref()
    }

    /// Read-only properties ignore updates coming from the host element.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPropertyData {
    name: String,
    #[serde(rename = "type")]
    property_type: PropertyType,
    #[serde(rename = "default", default)]
    default_value: Value,
    #[serde(default)]
    read_only: bool,
}

impl TryFrom<RawPropertyData> for PropertyData {
    type Error = Error;

    fn try_from(raw: RawPropertyData) -> Result<Self> {
        let default_value = PropertyValue::from_json(raw.property_type, &raw.default_value)?;
        Ok(Self {
            name: raw.name,
            property_type: raw.property_type,
            default_value,
            read_only: raw.read_only,
        })
    }
}
