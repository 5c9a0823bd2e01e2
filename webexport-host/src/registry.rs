//! Registry of every web component exported by the application.
//!
//! Filled once at startup from the discovered exporters; afterwards it only
//! serves lookups and binding creation for embedding requests.

use crate::config::ExportConfig;
use crate::configuration::{AnyWebComponentBinding, AnyWebComponentConfiguration};
use crate::factory::{ConfigurationFactory, ExporterClass};
use crate::instantiator::Instantiator;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};
use webexport_sdk::{Component, ComponentType, ExportError, ExportResult, HostElement};
use webexport_types::{ElementSchema, is_valid_custom_element_name};

type ConfigurationMap = HashMap<String, Arc<dyn AnyWebComponentConfiguration>>;

pub struct WebComponentRegistry {
    config: ExportConfig,
    configurations: OnceLock<ConfigurationMap>,
}

impl Default for WebComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WebComponentRegistry {
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self {
            config,
            configurations: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Builds a configuration for every discovered exporter type and
    /// registers them.
    ///
    /// Any exporter that fails to build aborts discovery; nothing is
    /// registered in that case.
    pub fn discover(
        &self,
        factory: &ConfigurationFactory,
        classes: impl IntoIterator<Item = ExporterClass>,
    ) -> ExportResult<bool> {
        let configurations = classes
            .into_iter()
            .map(|class| {
                debug!(exporter = class.name(), "Building exported web component");
                factory.create_from_class(&class)
            })
            .collect::<ExportResult<Vec<_>>>()?;
        self.set_configurations(configurations)
    }

    /// Registers the configurations. Only the first successful call has an
    /// effect; later calls return `Ok(false)`.
    ///
    /// Fails on duplicate tags, and on malformed tags when
    /// `enforce_tag_format` is set. A failed call registers nothing.
    pub fn set_configurations(
        &self,
        configurations: impl IntoIterator<Item = Arc<dyn AnyWebComponentConfiguration>>,
    ) -> ExportResult<bool> {
        if self.configurations.get().is_some() {
            debug!("Web component configurations already set, ignoring");
            return Ok(false);
        }

        let mut map = ConfigurationMap::new();
        for configuration in configurations {
            let tag = configuration.tag().to_string();
            if self.config.is_tag_disabled(&tag) {
                info!(tag = %tag, exporter = configuration.exporter_type_name(), "Exported web component disabled by config");
                continue;
            }
            if self.config.enforce_tag_format && !is_valid_custom_element_name(&tag) {
                return Err(ExportError::InvalidTag {
                    tag,
                    exporter: configuration.exporter_type_name(),
                });
            }
            match map.entry(tag) {
                Entry::Occupied(existing) => {
                    return Err(ExportError::DuplicateTag {
                        tag: existing.key().clone(),
                        first: existing.get().exporter_type_name(),
                        second: configuration.exporter_type_name(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(configuration);
                }
            }
        }

        let count = map.len();
        if self.configurations.set(map).is_err() {
            return Ok(false);
        }
        info!(count, "Web component configurations registered");
        Ok(true)
    }

    /// Whether configurations have been registered.
    pub fn has_configurations(&self) -> bool {
        self.configurations.get().is_some()
    }

    pub fn has_configuration(&self, tag: &str) -> bool {
        self.map().is_some_and(|m| m.contains_key(tag))
    }

    pub fn configuration(&self, tag: &str) -> Option<Arc<dyn AnyWebComponentConfiguration>> {
        self.map().and_then(|m| m.get(tag)).cloned()
    }

    /// All registered configurations, sorted by tag.
    pub fn configurations(&self) -> Vec<Arc<dyn AnyWebComponentConfiguration>> {
        let mut all: Vec<_> = self
            .map()
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default();
        all.sort_by(|a, b| a.tag().cmp(b.tag()));
        all
    }

    /// Configurations exporting the component type `C`, sorted by tag.
    pub fn configurations_for_component<C: Component>(
        &self,
    ) -> Vec<Arc<dyn AnyWebComponentConfiguration>> {
        let component = ComponentType::of::<C>();
        self.configurations()
            .into_iter()
            .filter(|c| c.component_type() == component)
            .collect()
    }

    /// Creates a binding for the element registered under `tag`.
    pub fn create_binding(
        &self,
        tag: &str,
        instantiator: &dyn Instantiator,
        host: Arc<dyn HostElement>,
    ) -> ExportResult<Box<dyn AnyWebComponentBinding>> {
        let configuration = self
            .configuration(tag)
            .ok_or_else(|| ExportError::UnknownTag(tag.to_string()))?;
        configuration
            .create_binding(instantiator, host)
            .inspect_err(|e| warn!(tag, error = %e, "Failed to create web component binding"))
    }

    /// Property contracts of every registered element, sorted by tag.
    pub fn element_schemas(&self) -> Vec<ElementSchema> {
        self.configurations()
            .iter()
            .map(|c| c.element_schema())
            .collect()
    }

    fn map(&self) -> Option<&ConfigurationMap> {
        self.configurations.get()
    }
}

impl fmt::Debug for WebComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self
            .map()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        tags.sort_unstable();
        f.debug_struct("WebComponentRegistry")
            .field("config", &self.config)
            .field("tags", &tags)
            .finish()
    }
}
