use crate::component::{Component, ComponentType};
use crate::error::{ExportError, ExportResult};
use crate::property::{PropertyConfiguration, PropertyDeclaration};
use crate::web_component::WebComponent;
use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use tracing::{debug, warn};
use webexport_types::{PropertyData, PropertyType, PropertyValue};

/// Describes how one component type is packaged as an embeddable web
/// component.
///
/// `create` is the exporter's construction step: it supplies the tag and
/// declares the properties. The framework calls it once at startup.
///
/// Most exporters do NOT need `configure_instance`: declared properties are
/// bound and pushed to the component automatically. Override it to add
/// listeners or wire custom client communication through the
/// [`WebComponent`] handle.
pub trait WebComponentExporter: Send + Sync + Sized + 'static {
    /// The component type this exporter packages.
    type Component: Component;

    fn create() -> ExportResult<Exporter<Self>>;

    /// Called once per embedded instance, after properties are bound and
    /// before their values are pushed to `component`.
    fn configure_instance(
        &self,
        web_component: &WebComponent<Self::Component>,
        component: &mut Self::Component,
    ) {
        let _ = (web_component, component);
    }
}

/// A configured exporter: tag, declared properties and the user exporter.
pub struct Exporter<E: WebComponentExporter> {
    tag: String,
    properties: HashMap<String, PropertyConfiguration<E::Component>>,
    exporter: E,
}

impl<E: WebComponentExporter> Exporter<E> {
    /// Configures the tag of the web component created from this exporter.
    ///
    /// Fails with [`ExportError::MissingTag`] when `tag` is `None`.
    pub fn new(tag: Option<&str>, exporter: E) -> ExportResult<Self> {
        let tag = tag.ok_or(ExportError::MissingTag)?;
        Ok(Self {
            tag: tag.to_string(),
            properties: HashMap::new(),
            exporter,
        })
    }

    /// Declares a property with a default value.
    ///
    /// `P` must be one of `bool`, `String`, `i32`, `f64` or
    /// `serde_json::Value`. A later declaration with the same name replaces
    /// this one.
    pub fn add_property<P: Any + Send + Sync>(
        &mut self,
        name: &str,
        default_value: P,
    ) -> ExportResult<PropertyDeclaration<'_, E::Component, P>> {
        self.declare(name, Some(default_value))
    }

    /// Declares a property that starts without a value. Only `String` and
    /// `serde_json::Value` properties may lack a default.
    pub fn add_property_without_default<P: Any + Send + Sync>(
        &mut self,
        name: &str,
    ) -> ExportResult<PropertyDeclaration<'_, E::Component, P>> {
        self.declare(name, None::<P>)
    }

    fn declare<P: Any + Send + Sync>(
        &mut self,
        name: &str,
        default_value: Option<P>,
    ) -> ExportResult<PropertyDeclaration<'_, E::Component, P>> {
        if name.is_empty() {
            return Err(ExportError::NullArgument("name"));
        }
        let property_type = PropertyType::of::<P>().ok_or_else(|| {
            ExportError::UnsupportedPropertyType {
                name: name.to_string(),
                type_name: std::any::type_name::<P>().to_string(),
                supported: PropertyType::supported_type_names(),
            }
        })?;
        let default_value = match default_value {
            Some(value) => Some(PropertyValue::from_typed(value)?),
            None if property_type.is_nullable() => None,
            None => return Err(ExportError::NullArgument("default_value")),
        };

        let data = PropertyData::new(name, property_type, default_value)?;
        debug!(tag = %self.tag, property = name, property_type = %property_type, "Property declared");

        let configuration = PropertyConfiguration::new(data);
        let configuration = match self.properties.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                warn!(
                    tag = %self.tag,
                    property = name,
                    "Property declared twice, the later declaration replaces the earlier one"
                );
                entry.insert(configuration);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(configuration),
        };
        Ok(PropertyDeclaration::new(configuration))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn properties(&self) -> &HashMap<String, PropertyConfiguration<E::Component>> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyConfiguration<E::Component>> {
        self.properties.get(name)
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    pub fn component_type(&self) -> ComponentType {
        ComponentType::of::<E::Component>()
    }

    pub fn exporter_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    /// Splits the exporter into tag, declarations and user exporter.
    pub fn into_parts(self) -> (String, HashMap<String, PropertyConfiguration<E::Component>>, E) {
        (self.tag, self.properties, self.exporter)
    }
}

impl<E: WebComponentExporter> fmt::Debug for Exporter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exporter")
            .field("exporter", &self.exporter_type_name())
            .field("tag", &self.tag)
            .field("properties", &self.properties)
            .finish()
    }
}
