use crate::{Error, PropertyType, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::any::Any;
use std::hash::{Hash, Hasher};

/// A value of one of the supported property types.
///
/// Doubles compare and hash by bit pattern so that `Eq` and `Hash` agree;
/// JSON values hash by their serialized text.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Boolean(bool),
    String(String),
    Integer(i32),
    Double(f64),
    Json(Value),
}

impl PropertyValue {
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Boolean(_) => PropertyType::Boolean,
            Self::String(_) => PropertyType::String,
            Self::Integer(_) => PropertyType::Integer,
            Self::Double(_) => PropertyType::Double,
            Self::Json(_) => PropertyType::Json,
        }
    }

    /// Converts a value of an arbitrary Rust type into a property value.
    ///
    /// Fails with [`Error::UnsupportedType`] unless `P` is one of the types
    /// listed by [`PropertyType::supported_type_names`].
    pub fn from_typed<P: Any>(value: P) -> Result<Self> {
        let boxed: Box<dyn Any> = Box::new(value);
        let boxed = match boxed.downcast::<bool>() {
            Ok(v) => return Ok(Self::Boolean(*v)),
            Err(b) => b,
        };
        let boxed = match boxed.downcast::<String>() {
            Ok(v) => return Ok(Self::String(*v)),
            Err(b) => b,
        };
        let boxed = match boxed.downcast::<i32>() {
            Ok(v) => return Ok(Self::Integer(*v)),
            Err(b) => b,
        };
        let boxed = match boxed.downcast::<f64>() {
            Ok(v) => return Ok(Self::Double(*v)),
            Err(b) => b,
        };
        match boxed.downcast::<Value>() {
            Ok(v) => Ok(Self::Json(*v)),
            Err(_) => Err(Error::UnsupportedType {
                type_name: std::any::type_name::<P>().to_string(),
                supported: PropertyType::supported_type_names(),
            }),
        }
    }

    /// A JSON `null`, which stands for an absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// Drops a JSON `null` so absence has a single representation.
    pub fn present(value: Option<Self>) -> Option<Self> {
        value.filter(|v| !v.is_null())
    }

    /// Borrows the payload as `P`, or `None` if `P` is not the payload type.
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        let payload: &dyn Any = match self {
            Self::Boolean(v) => v,
            Self::String(v) => v,
            Self::Integer(v) => v,
            Self::Double(v) => v,
            Self::Json(v) => v,
        };
        payload.downcast_ref::<P>()
    }

    /// Coerces a JSON value into the given property type.
    ///
    /// `null` yields `Ok(None)` for every type; whether an absent value is
    /// acceptable is up to the caller.
    pub fn from_json(expected: PropertyType, json: &Value) -> Result<Option<Self>> {
        if json.is_null() {
            return Ok(None);
        }
        let mismatch = || Error::TypeMismatch {
            expected,
            found: json_kind(json).to_string(),
        };
        let value = match expected {
            PropertyType::Boolean => Self::Boolean(json.as_bool().ok_or_else(mismatch)?),
            PropertyType::String => Self::String(json.as_str().ok_or_else(mismatch)?.to_string()),
            PropertyType::Integer => Self::Integer(json_to_i32(json).ok_or_else(mismatch)?),
            PropertyType::Double => Self::Double(json.as_f64().ok_or_else(mismatch)?),
            PropertyType::Json => Self::Json(json.clone()),
        };
        Ok(Some(value))
    }

    /// Picks the narrowest property type that can hold the JSON value.
    pub fn infer(json: Value) -> Self {
        match json {
            Value::Bool(b) => Self::Boolean(b),
            Value::String(s) => Self::String(s),
            Value::Number(ref n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                Some(i) => Self::Integer(i),
                None => match n.as_f64() {
                    Some(f) => Self::Double(f),
                    None => Self::Json(json),
                },
            },
            other => Self::Json(other),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Boolean(b) => Value::Bool(*b),
            Self::String(s) => Value::String(s.clone()),
            Self::Integer(i) => Value::from(*i),
            Self::Double(d) => Value::from(*d),
            Self::Json(v) => v.clone(),
        }
    }
}

fn json_to_i32(json: &Value) -> Option<i32> {
    if let Some(i) = json.as_i64() {
        return i32::try_from(i).ok();
    }
    // Clients may send integral numbers as 5.0
    let f = json.as_f64()?;
    if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Json(a), Self::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PropertyValue {}

impl Hash for PropertyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property_type().hash(state);
        match self {
            Self::Boolean(b) => b.hash(state),
            Self::String(s) => s.hash(state),
            Self::Integer(i) => i.hash(state),
            Self::Double(d) => d.to_bits().hash(state),
            Self::Json(v) => v.to_string().hash(state),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::infer)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}
