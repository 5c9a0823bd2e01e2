//! Resolved, immutable contract of one exported web component.

use crate::binding::WebComponentBinding;
use crate::instantiator::{Instantiator, create_component};
use serde_json::Value;
use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, info};
use webexport_sdk::{
    Component, ComponentType, ExportError, ExportResult, Exporter, HostElement,
    PropertyConfiguration, PropertyData, PropertyMap, PropertyType, PropertyValue, WebComponent,
    WebComponentExporter,
};
use webexport_types::ElementSchema;

/// Queryable configuration derived from one [`Exporter`].
///
/// The property declarations are frozen when the configuration is created.
/// Clones share the same frozen state; a configuration is safe to use from
/// many threads creating bindings concurrently.
///
/// Two configurations are equal when their tags and property declarations
/// are equal, regardless of exporter or component type.
pub struct WebComponentConfiguration<E: WebComponentExporter> {
    tag: Arc<str>,
    properties: Arc<PropertyMap<E::Component>>,
    exporter: Arc<E>,
}

impl<E: WebComponentExporter> WebComponentConfiguration<E> {
    pub(crate) fn new(exporter: Exporter<E>) -> Self {
        let (tag, properties, exporter) = exporter.into_parts();
        let properties: PropertyMap<E::Component> = properties.into_iter().collect();
        debug!(
            tag = %tag,
            exporter = std::any::type_name::<E>(),
            properties = properties.len(),
            "Web component configuration created"
        );
        Self {
            tag: Arc::from(tag),
            properties: Arc::new(properties),
            exporter: Arc::new(exporter),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_type(&self, name: &str) -> Option<PropertyType> {
        self.properties.get(name).map(PropertyConfiguration::property_type)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyConfiguration<E::Component>> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyConfiguration<E::Component>> {
        self.properties.values()
    }

    /// Type-erased snapshot of every declared property.
    pub fn property_data_set(&self) -> HashSet<PropertyData> {
        self.properties.values().map(|p| p.data().clone()).collect()
    }

    pub fn component_type(&self) -> ComponentType {
        ComponentType::of::<E::Component>()
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    pub fn exporter_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    pub fn exporter_type_id(&self) -> TypeId {
        TypeId::of::<E>()
    }

    pub fn element_schema(&self) -> ElementSchema {
        ElementSchema::new(
            self.tag.to_string(),
            self.properties.values().map(|p| p.data().clone()),
        )
    }

    /// Creates a new component instance and binds it to `host`.
    ///
    /// The exporter's `configure_instance` runs once, after every property
    /// is bound and before the property values are pushed to the component.
    /// On failure nothing is retained.
    pub fn create_web_component_binding(
        &self,
        instantiator: &dyn Instantiator,
        host: Arc<dyn HostElement>,
    ) -> ExportResult<WebComponentBinding<E::Component>> {
        let component: E::Component = create_component(instantiator)?;

        // Checked here because the component's own tag is only known once it exists.
        if component.tag() == self.tag() {
            return Err(ExportError::TagCollision {
                exporter: self.exporter_type_name(),
                component: std::any::type_name::<E::Component>(),
                tag: self.tag.to_string(),
            });
        }

        let mut binding = WebComponentBinding::new(self.tag.to_string(), component);
        for property in self.properties.values() {
            binding.bind_property(property);
        }

        let web_component =
            WebComponent::new(Arc::clone(&self.tag), Arc::clone(&self.properties), host);
        self.exporter
            .configure_instance(&web_component, binding.component_mut());
        binding.update_properties_to_component();

        info!(tag = %self.tag, "Web component binding created");
        Ok(binding)
    }
}

impl<E: WebComponentExporter> Clone for WebComponentConfiguration<E> {
    fn clone(&self) -> Self {
        Self {
            tag: Arc::clone(&self.tag),
            properties: Arc::clone(&self.properties),
            exporter: Arc::clone(&self.exporter),
        }
    }
}

impl<E, F> PartialEq<WebComponentConfiguration<F>> for WebComponentConfiguration<E>
where
    E: WebComponentExporter,
    F: WebComponentExporter,
{
    fn eq(&self, other: &WebComponentConfiguration<F>) -> bool {
        self.tag == other.tag
            && self.properties.len() == other.properties.len()
            && self
                .properties
                .iter()
                .zip(other.properties.iter())
                .all(|((ka, a), (kb, b))| ka == kb && a.same_as(b))
    }
}

impl<E: WebComponentExporter> Eq for WebComponentConfiguration<E> {}

impl<E: WebComponentExporter> Hash for WebComponentConfiguration<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        // Name-ordered map, so equal configurations hash identically.
        for property in self.properties.values() {
            property.hash(state);
        }
    }
}

impl<E: WebComponentExporter> fmt::Debug for WebComponentConfiguration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebComponentConfiguration")
            .field("tag", &self.tag)
            .field("exporter", &self.exporter_type_name())
            .field("component", &self.component_type())
            .field("properties", &self.properties)
            .finish()
    }
}

/// Object-safe view of a [`WebComponentConfiguration`] of any exporter type.
pub trait AnyWebComponentConfiguration: Send + Sync {
    fn tag(&self) -> &str;
    fn has_property(&self, name: &str) -> bool;
    fn property_type(&self, name: &str) -> Option<PropertyType>;
    fn property_data_set(&self) -> HashSet<PropertyData>;
    fn component_type(&self) -> ComponentType;
    fn exporter_type_name(&self) -> &'static str;
    fn element_schema(&self) -> ElementSchema;
    fn create_binding(
        &self,
        instantiator: &dyn Instantiator,
        host: Arc<dyn HostElement>,
    ) -> ExportResult<Box<dyn AnyWebComponentBinding>>;
}

impl<E: WebComponentExporter> AnyWebComponentConfiguration for WebComponentConfiguration<E> {
    fn tag(&self) -> &str {
        WebComponentConfiguration::tag(self)
    }

    fn has_property(&self, name: &str) -> bool {
        WebComponentConfiguration::has_property(self, name)
    }

    fn property_type(&self, name: &str) -> Option<PropertyType> {
        WebComponentConfiguration::property_type(self, name)
    }

    fn property_data_set(&self) -> HashSet<PropertyData> {
        WebComponentConfiguration::property_data_set(self)
    }

    fn component_type(&self) -> ComponentType {
        WebComponentConfiguration::component_type(self)
    }

    fn exporter_type_name(&self) -> &'static str {
        WebComponentConfiguration::exporter_type_name(self)
    }

    fn element_schema(&self) -> ElementSchema {
        WebComponentConfiguration::element_schema(self)
    }

    fn create_binding(
        &self,
        instantiator: &dyn Instantiator,
        host: Arc<dyn HostElement>,
    ) -> ExportResult<Box<dyn AnyWebComponentBinding>> {
        let binding = self.create_web_component_binding(instantiator, host)?;
        Ok(Box::new(binding))
    }
}

/// Object-safe view of a [`WebComponentBinding`] of any component type, as
/// used by the transport layer.
pub trait AnyWebComponentBinding: Send {
    fn tag(&self) -> &str;
    fn has_property(&self, name: &str) -> bool;
    fn property_value(&self, name: &str) -> Option<&PropertyValue>;
    fn update_property(&mut self, name: &str, value: &Value) -> ExportResult<()>;
    fn component_type(&self) -> ComponentType;
    fn component_any(&self) -> &dyn Any;
    fn component_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Component> AnyWebComponentBinding for WebComponentBinding<C> {
    fn tag(&self) -> &str {
        WebComponentBinding::tag(self)
    }

    fn has_property(&self, name: &str) -> bool {
        WebComponentBinding::has_property(self, name)
    }

    fn property_value(&self, name: &str) -> Option<&PropertyValue> {
        WebComponentBinding::property_value(self, name)
    }

    fn update_property(&mut self, name: &str, value: &Value) -> ExportResult<()> {
        WebComponentBinding::update_property(self, name, value)
    }

    fn component_type(&self) -> ComponentType {
        ComponentType::of::<C>()
    }

    fn component_any(&self) -> &dyn Any {
        self.component()
    }

    fn component_any_mut(&mut self) -> &mut dyn Any {
        self.component_mut()
    }
}
