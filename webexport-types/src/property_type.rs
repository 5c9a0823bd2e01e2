use crate::Error;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;

/// The data type of an exported property.
///
/// The set is closed: an exported element can only carry values that the
/// client side knows how to represent as element properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Boolean,
    String,
    Integer,
    Double,
    Json,
}

impl PropertyType {
    /// Every supported type, in declaration order.
    pub const SUPPORTED: [PropertyType; 5] = [
        Self::Boolean,
        Self::String,
        Self::Integer,
        Self::Double,
        Self::Json,
    ];

    /// Resolves the property type carried by the Rust type `P`, if any.
    ///
    /// Only `bool`, `String`, `i32`, `f64` and `serde_json::Value` map to a
    /// property type.
    pub fn of<P: Any>() -> Option<Self> {
        let id = TypeId::of::<P>();
        if id == TypeId::of::<bool>() {
            Some(Self::Boolean)
        } else if id == TypeId::of::<String>() {
            Some(Self::String)
        } else if id == TypeId::of::<i32>() {
            Some(Self::Integer)
        } else if id == TypeId::of::<f64>() {
            Some(Self::Double)
        } else if id == TypeId::of::<serde_json::Value>() {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// Wire name used in schemas and config files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Json => "json",
        }
    }

    /// The Rust type that carries values of this property type.
    pub fn rust_type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::String => "String",
            Self::Integer => "i32",
            Self::Double => "f64",
            Self::Json => "serde_json::Value",
        }
    }

    /// Whether a property of this type may exist without a value.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::String | Self::Json)
    }

    /// Comma-separated list of the supported Rust types, for diagnostics.
    pub fn supported_type_names() -> String {
        Self::SUPPORTED
            .iter()
            .map(|t| t.rust_type_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::UnknownTypeName(s.to_string()))
    }
}
