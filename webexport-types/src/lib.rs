//! Core type definitions for exported web components.
//!
//! This crate defines the vocabulary shared by the exporter
//! SDK and the host runtime:
//! - [`PropertyType`]: the closed set of property types an exported element may declare
//! - [`PropertyValue`]: a value of one of those types, comparable and hashable
//! - [`PropertyData`]: the type-erased descriptor of one declared property
//! - [`ElementSchema`]: the property contract of one exported element, as handed
//!   to whatever generates the client-side custom element
//!
//! Nothing here knows about components or bindings; those live in
//! `webexport-sdk` and `webexport-host`.

mod data;
mod naming;
mod property_type;
mod schema;
mod value;

pub use data::PropertyData;
pub use naming::{changed_event_name, is_valid_custom_element_name};
pub use property_type::PropertyType;
pub use schema::{ElementSchema, PropertySchema};
pub use value::PropertyValue;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A Rust type outside the supported property type set was used.
    #[error("unsupported property type '{type_name}', supported types are: {supported}")]
    UnsupportedType { type_name: String, supported: String },

    /// A textual type name did not match any supported property type.
    #[error("unknown property type name: {0}")]
    UnknownTypeName(String),

    /// A value did not match the declared property type.
    #[error("expected a {expected} value but found {found}")]
    TypeMismatch {
        expected: PropertyType,
        found: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
