//! SDK for exporting server-side components as embeddable web components.
//!
//! Exporter authors implement [`WebComponentExporter`] for a small marker
//! type. The exporter supplies the tag of the custom element and declares the
//! typed properties the element exposes; the host runtime
//! (`webexport-host`) turns it into a configuration and creates one binding
//! per embedded instance.
//!
//! # Example
//!
//! ```
//! use webexport_sdk::prelude::*;
//!
//! struct Greeting {
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Component for Greeting {
//!     fn tag(&self) -> &str {
//!         "greeting-card"
//!     }
//! }
//!
//! struct GreetingExporter;
//!
//! impl WebComponentExporter for GreetingExporter {
//!     type Component = Greeting;
//!
//!     fn create() -> ExportResult<Exporter<Self>> {
//!         let mut exporter = Exporter::new(Some("my-greeting"), GreetingExporter)?;
//!         exporter
//!             .add_property("name", String::from("John Doe"))?
//!             .on_change(|c: &mut Greeting, v: Option<&String>| {
//!                 c.name = v.cloned().unwrap_or_default();
//!             });
//!         exporter
//!             .add_property("active", true)?
//!             .on_change(|c: &mut Greeting, v: Option<&bool>| c.active = v.copied().unwrap_or(false));
//!         Ok(exporter)
//!     }
//! }
//!
//! let exporter = GreetingExporter::create().unwrap();
//! assert_eq!(exporter.tag(), "my-greeting");
//! assert_eq!(exporter.properties().len(), 2);
//! ```

mod component;
mod error;
mod exporter;
pub mod prelude;
mod property;
mod web_component;

pub use component::{Component, ComponentType};
pub use error::{ExportError, ExportResult, InstantiationError};
pub use exporter::{Exporter, WebComponentExporter};
pub use property::{
    ChangeHandler, HandlerIdentity, PropertyConfiguration, PropertyDeclaration, PropertyMap,
};
pub use web_component::{EventOptions, HostElement, WebComponent};

pub use webexport_types::{PropertyData, PropertyType, PropertyValue};
