//! Error types for exporting and embedding web components.

use thiserror::Error;
use webexport_types::PropertyType;

/// Result type alias using [`ExportError`].
pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    /// `Exporter::new` was called without a tag.
    #[error("parameter 'tag' must not be missing")]
    MissingTag,

    /// An exporter type failed to build because it supplied no tag.
    #[error(
        "unable to construct a web component configuration: did '{exporter}' pass a tag to Exporter::new?"
    )]
    ExporterMissingTag { exporter: &'static str },

    #[error("property '{name}' has unsupported type '{type_name}', supported types are: {supported}")]
    UnsupportedPropertyType {
        name: String,
        type_name: String,
        supported: String,
    },

    /// A required argument was absent.
    #[error("parameter '{0}' must not be missing")]
    NullArgument(&'static str),

    #[error(
        "exporter '{exporter}' cannot share a tag with the {component} instance being exported, change the tag from '{tag}' to something else"
    )]
    TagCollision {
        exporter: &'static str,
        component: &'static str,
        tag: String,
    },

    /// The instantiator reported success but produced no component.
    #[error("failed to instantiate a new {component}")]
    NullComponent { component: &'static str },

    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    #[error("no property '{name}' declared for '{tag}'")]
    UnknownProperty { tag: String, name: String },

    #[error("property '{name}' of type {expected} cannot be assigned a {found} value")]
    PropertyTypeMismatch {
        name: String,
        expected: PropertyType,
        found: String,
    },

    #[error("tag '{tag}' is declared by both '{first}' and '{second}'")]
    DuplicateTag {
        tag: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("'{tag}' declared by '{exporter}' is not a valid custom element name")]
    InvalidTag { tag: String, exporter: &'static str },

    #[error("no web component registered for tag '{0}'")]
    UnknownTag(String),

    #[error(transparent)]
    Types(#[from] webexport_types::Error),
}

/// Failures reported by an instantiation capability.
#[derive(Debug, Error)]
pub enum InstantiationError {
    #[error("no constructor registered for {component}")]
    NotRegistered { component: &'static str },

    /// The capability returned an instance of some other type.
    #[error("instantiator returned a value that is not a {expected}")]
    WrongType { expected: &'static str },

    #[error("failed to construct {component}: {source}")]
    Failed {
        component: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
