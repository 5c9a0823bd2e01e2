//! Live association between one component instance and its host element.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};
use webexport_sdk::{
    ChangeHandler, Component, ExportError, ExportResult, PropertyConfiguration, PropertyData,
    PropertyType, PropertyValue,
};

/// Current value of one bound property plus its declaration.
pub struct PropertyBinding<C> {
    data: PropertyData,
    value: Option<PropertyValue>,
    handler: Option<ChangeHandler<C>>,
}

impl<C> PropertyBinding<C> {
    fn new(configuration: &PropertyConfiguration<C>) -> Self {
        Self {
            data: configuration.data().clone(),
            value: configuration.default_value().cloned(),
            handler: configuration.handler().cloned(),
        }
    }

    pub fn data(&self) -> &PropertyData {
        &self.data
    }

    pub fn value(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }

    fn notify(&self, component: &mut C) {
        if let Some(handler) = &self.handler {
            handler.call(component, self.value.as_ref());
        }
    }
}

/// Owns one exported component instance and its property values.
pub struct WebComponentBinding<C> {
    tag: String,
    component: C,
    properties: BTreeMap<String, PropertyBinding<C>>,
}

impl<C: Component> WebComponentBinding<C> {
    pub fn new(tag: impl Into<String>, component: C) -> Self {
        Self {
            tag: tag.into(),
            component,
            properties: BTreeMap::new(),
        }
    }

    /// Registers a property; its current value starts as the declared default.
    pub fn bind_property(&mut self, configuration: &PropertyConfiguration<C>) {
        self.properties.insert(
            configuration.name().to_string(),
            PropertyBinding::new(configuration),
        );
    }

    /// Pushes every current value to the component through the change
    /// handlers.
    pub fn update_properties_to_component(&mut self) {
        for binding in self.properties.values() {
            binding.notify(&mut self.component);
        }
    }

    /// Applies a property update coming from the host element.
    ///
    /// The value is coerced to the declared type. Writes to read-only
    /// properties are ignored with a warning. `null` resets properties that
    /// cannot be absent to their default. The change handler runs only when
    /// the value actually changes.
    pub fn update_property(&mut self, name: &str, value: &Value) -> ExportResult<()> {
        let property_type = self.require(name)?.data.property_type();
        let value = PropertyValue::from_json(property_type, value).map_err(|e| match e {
            webexport_types::Error::TypeMismatch { expected, found } => {
                ExportError::PropertyTypeMismatch {
                    name: name.to_string(),
                    expected,
                    found,
                }
            }
            other => other.into(),
        })?;
        self.set_value(name, value)
    }

    /// Typed variant of [`update_property`](Self::update_property).
    pub fn update_property_value(
        &mut self,
        name: &str,
        value: Option<PropertyValue>,
    ) -> ExportResult<()> {
        let expected = self.require(name)?.data.property_type();
        let value = PropertyValue::present(value);
        if let Some(v) = &value
            && v.property_type() != expected
        {
            return Err(ExportError::PropertyTypeMismatch {
                name: name.to_string(),
                expected,
                found: v.property_type().to_string(),
            });
        }
        self.set_value(name, value)
    }

    fn set_value(&mut self, name: &str, value: Option<PropertyValue>) -> ExportResult<()> {
        let tag = &self.tag;
        let binding = self
            .properties
            .get_mut(name)
            .ok_or_else(|| ExportError::UnknownProperty {
                tag: tag.clone(),
                name: name.to_string(),
            })?;

        if binding.data.is_read_only() {
            warn!(
                tag = %tag,
                property = name,
                "Attempt to write read-only property of exported component ignored"
            );
            return Ok(());
        }

        let value = match value {
            None if !binding.data.property_type().is_nullable() => {
                binding.data.default_value().cloned()
            }
            other => other,
        };
        if binding.value == value {
            return Ok(());
        }

        debug!(tag = %tag, property = name, "Property updated from host");
        binding.value = value;
        binding.notify(&mut self.component);
        Ok(())
    }

    fn require(&self, name: &str) -> ExportResult<&PropertyBinding<C>> {
        self.properties
            .get(name)
            .ok_or_else(|| ExportError::UnknownProperty {
                tag: self.tag.clone(),
                name: name.to_string(),
            })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_type(&self, name: &str) -> Option<PropertyType> {
        self.properties.get(name).map(|b| b.data.property_type())
    }

    pub fn property_value(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name).and_then(PropertyBinding::value)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyBinding<C>> {
        self.properties.get(name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn into_component(self) -> C {
        self.component
    }
}

impl<C> fmt::Debug for WebComponentBinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: BTreeMap<&str, Option<&PropertyValue>> = self
            .properties
            .iter()
            .map(|(name, b)| (name.as_str(), b.value.as_ref()))
            .collect();
        f.debug_struct("WebComponentBinding")
            .field("tag", &self.tag)
            .field("component", &std::any::type_name::<C>())
            .field("properties", &values)
            .finish()
    }
}
