//! Host runtime for exported web components.
//!
//! Turns exporters into immutable configurations, registers them at startup,
//! and creates one binding per embedded element: a fresh component instance
//! whose declared properties are kept in sync with the host element.
//!
//! Configurations and the registry are read-only once built and may be
//! shared across request threads.

mod binding;
mod config;
mod configuration;
mod factory;
mod instantiator;
mod registry;

pub use binding::{PropertyBinding, WebComponentBinding};
pub use config::{ConfigError, ExportConfig};
pub use configuration::{
    AnyWebComponentBinding, AnyWebComponentConfiguration, WebComponentConfiguration,
};
pub use factory::{ConfigurationFactory, ExporterClass};
pub use instantiator::{ComponentInstantiator, Instantiator, create_component};
pub use registry::WebComponentRegistry;
