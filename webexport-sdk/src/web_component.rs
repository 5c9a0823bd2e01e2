//! The client-side half of an embedded component.

use crate::error::{ExportError, ExportResult};
use crate::property::{PropertyConfiguration, PropertyMap};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use webexport_types::PropertyValue;

/// Options of an event fired on the host element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOptions {
    pub bubbles: bool,
    pub cancelable: bool,
    pub composed: bool,
}

/// The external custom element hosting an embedded component.
///
/// Implemented by the transport layer. Calls are fire-and-forget; the
/// implementation queues them for the client.
pub trait HostElement: Send + Sync {
    /// Sets a property on the client-side element.
    fn update_property(&self, name: &str, value: &Value);

    /// Dispatches a custom event from the client-side element.
    fn fire_event(&self, name: &str, data: &Value, options: EventOptions);
}

/// Handle to the client-side web component matching one component instance.
///
/// Cheap to clone; exporters may keep a copy inside component listeners.
pub struct WebComponent<C> {
    tag: Arc<str>,
    properties: Arc<PropertyMap<C>>,
    host: Arc<dyn HostElement>,
}

impl<C> WebComponent<C> {
    pub fn new(tag: Arc<str>, properties: Arc<PropertyMap<C>>, host: Arc<dyn HostElement>) -> Self {
        Self {
            tag,
            properties,
            host,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyConfiguration<C>> {
        self.properties.get(name)
    }

    /// Sets the value of a declared property on the client-side element.
    pub fn set_property(&self, name: &str, value: impl Into<PropertyValue>) -> ExportResult<()> {
        let value = value.into();
        let configuration = self
            .properties
            .get(name)
            .ok_or_else(|| ExportError::UnknownProperty {
                tag: self.tag.to_string(),
                name: name.to_string(),
            })?;
        if configuration.property_type() != value.property_type() {
            return Err(ExportError::PropertyTypeMismatch {
                name: name.to_string(),
                expected: configuration.property_type(),
                found: value.property_type().to_string(),
            });
        }
        self.host.update_property(name, &value.to_json());
        Ok(())
    }

    /// Fires a non-bubbling, non-cancelable, non-composed event.
    pub fn fire_event(&self, name: &str, data: Value) {
        self.fire_event_with(name, data, EventOptions::default());
    }

    pub fn fire_event_with(&self, name: &str, data: Value, options: EventOptions) {
        self.host.fire_event(name, &data, options);
    }
}

impl<C> Clone for WebComponent<C> {
    fn clone(&self) -> Self {
        Self {
            tag: Arc::clone(&self.tag),
            properties: Arc::clone(&self.properties),
            host: Arc::clone(&self.host),
        }
    }
}

impl<C> fmt::Debug for WebComponent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebComponent")
            .field("tag", &self.tag)
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .finish()
    }
}
