//! Instantiation capability used to create exported component instances.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use webexport_sdk::{Component, ComponentType, ExportError, ExportResult, InstantiationError};

/// Creates component instances on behalf of the export layer.
///
/// Implementations may wrap a dependency-injection container. A call may
/// block; no timeout is applied by callers.
pub trait Instantiator: Send + Sync {
    /// Creates a new instance of `component`.
    ///
    /// `Ok(None)` is a contract violation and is reported by callers as
    /// [`ExportError::NullComponent`]. The returned value must be of the
    /// requested type.
    fn instantiate(
        &self,
        component: ComponentType,
    ) -> Result<Option<Box<dyn Any + Send>>, InstantiationError>;
}

/// Creates a `C` through `instantiator`, checking the runtime type.
pub fn create_component<C: Component>(instantiator: &dyn Instantiator) -> ExportResult<C> {
    let component = ComponentType::of::<C>();
    let instance = instantiator
        .instantiate(component)?
        .ok_or(ExportError::NullComponent {
            component: component.name(),
        })?;
    match instance.downcast::<C>() {
        Ok(instance) => Ok(*instance),
        Err(_) => Err(InstantiationError::WrongType {
            expected: component.name(),
        }
        .into()),
    }
}

type Constructor = Box<dyn Fn() -> anyhow::Result<Box<dyn Any + Send>> + Send + Sync>;

/// [`Instantiator`] backed by explicitly registered constructors.
#[derive(Default)]
pub struct ComponentInstantiator {
    constructors: HashMap<TypeId, Constructor>,
}

impl ComponentInstantiator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fallible constructor for `C`, replacing any earlier one.
    pub fn register<C, F>(&mut self, constructor: F) -> &mut Self
    where
        C: Component,
        F: Fn() -> anyhow::Result<C> + Send + Sync + 'static,
    {
        self.constructors.insert(
            TypeId::of::<C>(),
            Box::new(move || constructor().map(|c| Box::new(c) as Box<dyn Any + Send>)),
        );
        self
    }

    /// Registers `C::default` as the constructor for `C`.
    pub fn register_default<C: Component + Default>(&mut self) -> &mut Self {
        self.register(|| Ok(C::default()))
    }

    pub fn contains<C: Component>(&self) -> bool {
        self.constructors.contains_key(&TypeId::of::<C>())
    }
}

impl Instantiator for ComponentInstantiator {
    fn instantiate(
        &self,
        component: ComponentType,
    ) -> Result<Option<Box<dyn Any + Send>>, InstantiationError> {
        let constructor =
            self.constructors
                .get(&component.id())
                .ok_or(InstantiationError::NotRegistered {
                    component: component.name(),
                })?;
        debug!(component = %component, "Instantiating component");
        constructor()
            .map(Some)
            .map_err(|source| InstantiationError::Failed {
                component: component.name(),
                source,
            })
    }
}

impl fmt::Debug for ComponentInstantiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstantiator")
            .field("constructors", &self.constructors.len())
            .finish()
    }
}
