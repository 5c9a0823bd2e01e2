//! Produces [`WebComponentConfiguration`]s from exporter types or instances.

use crate::configuration::{AnyWebComponentConfiguration, WebComponentConfiguration};
use std::fmt;
use std::sync::Arc;
use tracing::warn;
use webexport_sdk::{ExportError, ExportResult, Exporter, WebComponentExporter};

/// Builds configurations from exporters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigurationFactory;

impl ConfigurationFactory {
    pub fn new() -> Self {
        Self
    }

    /// Builds the exporter type `E` and wraps it.
    ///
    /// An exporter that supplied no tag is reported as
    /// [`ExportError::ExporterMissingTag`] naming `E`; every other build
    /// failure is returned unchanged.
    pub fn create<E: WebComponentExporter>(&self) -> ExportResult<WebComponentConfiguration<E>> {
        let exporter = E::create().map_err(|e| match e {
            ExportError::MissingTag => {
                let exporter = std::any::type_name::<E>();
                warn!(exporter, "Exporter was built without a tag");
                ExportError::ExporterMissingTag { exporter }
            }
            other => other,
        })?;
        Ok(self.create_from(exporter))
    }

    /// Wraps an already built exporter, freezing its property declarations.
    pub fn create_from<E: WebComponentExporter>(
        &self,
        exporter: Exporter<E>,
    ) -> WebComponentConfiguration<E> {
        WebComponentConfiguration::new(exporter)
    }

    /// Builds the exporter type described by `class`.
    pub fn create_from_class(
        &self,
        class: &ExporterClass,
    ) -> ExportResult<Arc<dyn AnyWebComponentConfiguration>> {
        (class.build)(self)
    }
}

type BuildFn = fn(&ConfigurationFactory) -> ExportResult<Arc<dyn AnyWebComponentConfiguration>>;

/// Type-erased handle to an exporter type, as collected by startup discovery.
#[derive(Clone, Copy)]
pub struct ExporterClass {
    name: &'static str,
    build: BuildFn,
}

impl ExporterClass {
    pub fn of<E: WebComponentExporter>() -> Self {
        Self {
            name: std::any::type_name::<E>(),
            build: build_erased::<E>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ExporterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExporterClass").field(&self.name).finish()
    }
}

fn build_erased<E: WebComponentExporter>(
    factory: &ConfigurationFactory,
) -> ExportResult<Arc<dyn AnyWebComponentConfiguration>> {
    let configuration = factory.create::<E>()?;
    Ok(Arc::new(configuration))
}
