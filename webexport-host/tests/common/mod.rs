//! Shared fixtures for the host integration tests.
#![allow(dead_code)]

use serde_json::Value;
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};
use webexport_host::{ComponentInstantiator, Instantiator};
use webexport_sdk::prelude::*;
use webexport_sdk::{ComponentType, InstantiationError};

// ── Components ───────────────────────────────────────────────────

#[derive(Default)]
pub struct TargetComponent {
    pub name: String,
    pub active: bool,
    pub count: i32,
    pub count_changes: usize,
    /// `count` as seen by `configure_instance`.
    pub count_at_configure: Option<i32>,
    pub web_component: Option<WebComponent<TargetComponent>>,
}

impl Component for TargetComponent {
    fn tag(&self) -> &str {
        "target-component"
    }
}

pub fn set_name(c: &mut TargetComponent, v: Option<&String>) {
    c.name = v.cloned().unwrap_or_default();
}

pub fn set_active(c: &mut TargetComponent, v: Option<&bool>) {
    c.active = v.copied().unwrap_or(false);
}

pub fn set_count(c: &mut TargetComponent, v: Option<&i32>) {
    c.count = v.copied().unwrap_or_default();
    c.count_changes += 1;
}

// ── Exporters ────────────────────────────────────────────────────

pub struct WidgetExporter;

impl WebComponentExporter for WidgetExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        let mut exporter = Exporter::new(Some("my-widget"), WidgetExporter)?;
        exporter
            .add_property("name", String::from("John Doe"))?
            .on_change(set_name);
        exporter.add_property("active", true)?.on_change(set_active);
        exporter.add_property("count", 5)?.on_change(set_count);
        Ok(exporter)
    }

    fn configure_instance(
        &self,
        web_component: &WebComponent<TargetComponent>,
        component: &mut TargetComponent,
    ) {
        component.count_at_configure = Some(component.count);
        component.web_component = Some(web_component.clone());
    }
}

/// Same tag and properties as [`WidgetExporter`], declared in another order.
pub struct ReorderedWidgetExporter;

impl WebComponentExporter for ReorderedWidgetExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        let mut exporter = Exporter::new(Some("my-widget"), ReorderedWidgetExporter)?;
        exporter.add_property("count", 5)?.on_change(set_count);
        exporter.add_property("active", true)?.on_change(set_active);
        exporter
            .add_property("name", String::from("John Doe"))?
            .on_change(set_name);
        Ok(exporter)
    }
}

pub struct CounterExporter;

impl WebComponentExporter for CounterExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        let mut exporter = Exporter::new(Some("my-counter"), CounterExporter)?;
        exporter.add_property("count", 5)?.on_change(set_count);
        exporter.add_property("userName", String::new())?.on_change(set_name);
        Ok(exporter)
    }
}

/// Declares a read-only property and one without a default.
pub struct LockedExporter;

impl WebComponentExporter for LockedExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        let mut exporter = Exporter::new(Some("locked-widget"), LockedExporter)?;
        exporter
            .add_property("count", 5)?
            .on_change(set_count)
            .read_only();
        exporter
            .add_property_without_default::<String>("name")?
            .on_change(set_name);
        Ok(exporter)
    }
}

pub struct CollidingExporter;

impl WebComponentExporter for CollidingExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        Exporter::new(Some("target-component"), CollidingExporter)
    }
}

pub struct UntaggedExporter;

impl WebComponentExporter for UntaggedExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        Exporter::new(None, UntaggedExporter)
    }
}

pub struct UnsupportedTypeExporter;

impl WebComponentExporter for UnsupportedTypeExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        let mut exporter = Exporter::new(Some("bad-widget"), UnsupportedTypeExporter)?;
        exporter.add_property("size", 5u64)?;
        Ok(exporter)
    }
}

pub struct BareTagExporter;

impl WebComponentExporter for BareTagExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        Exporter::new(Some("widget"), BareTagExporter)
    }
}

/// Exporter whose tag and properties are supplied at runtime through
/// [`Exporter::new`] and `ConfigurationFactory::create_from`.
pub struct RuntimeExporter;

impl WebComponentExporter for RuntimeExporter {
    type Component = TargetComponent;

    fn create() -> ExportResult<Exporter<Self>> {
        Exporter::new(Some("runtime-widget"), RuntimeExporter)
    }
}

// ── Host element ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Property(String, Value),
    Event(String, Value, EventOptions),
}

#[derive(Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl HostElement for RecordingHost {
    fn update_property(&self, name: &str, value: &Value) {
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::Property(name.to_string(), value.clone()));
    }

    fn fire_event(&self, name: &str, data: &Value, options: EventOptions) {
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::Event(name.to_string(), data.clone(), options));
    }
}

// ── Instantiators ────────────────────────────────────────────────

pub fn instantiator() -> ComponentInstantiator {
    let mut instantiator = ComponentInstantiator::new();
    instantiator.register_default::<TargetComponent>();
    instantiator
}

/// Claims success without producing an instance.
pub struct EmptyInstantiator;

impl Instantiator for EmptyInstantiator {
    fn instantiate(
        &self,
        _component: ComponentType,
    ) -> Result<Option<Box<dyn Any + Send>>, InstantiationError> {
        Ok(None)
    }
}

/// Produces an instance of an unrelated type.
pub struct WrongTypeInstantiator;

impl Instantiator for WrongTypeInstantiator {
    fn instantiate(
        &self,
        _component: ComponentType,
    ) -> Result<Option<Box<dyn Any + Send>>, InstantiationError> {
        Ok(Some(Box::new(String::from("not a component"))))
    }
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
