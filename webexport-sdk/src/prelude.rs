//! Convenience re-exports for exporter authors.

pub use crate::{
    Component, EventOptions, ExportError, ExportResult, Exporter, HostElement, PropertyValue,
    WebComponent, WebComponentExporter,
};
