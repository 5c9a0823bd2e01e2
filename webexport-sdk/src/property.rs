use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;
use webexport_types::{PropertyData, PropertyType, PropertyValue};

/// Frozen, name-ordered property declarations of one exported element.
pub type PropertyMap<C> = BTreeMap<String, PropertyConfiguration<C>>;

type ChangeCallback<C> = dyn Fn(&mut C, Option<&PropertyValue>) + Send + Sync;

/// Callback run against the component when a property value changes.
///
/// A callback that captures nothing is identified by its type alone, so
/// exporters built by the same code compare equal. A capturing callback is
/// only the same handler as its own clones.
pub struct ChangeHandler<C> {
    callback: Arc<ChangeCallback<C>>,
    identity: HandlerIdentity,
}

/// Equality key of a [`ChangeHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerIdentity {
    callback_type: TypeId,
    /// Address of the shared callback; `None` for stateless callbacks.
    instance: Option<usize>,
}

impl<C: 'static> ChangeHandler<C> {
    fn typed<P, F>(f: F) -> Self
    where
        P: Any,
        F: Fn(&mut C, Option<&P>) + Send + Sync + 'static,
    {
        let stateless = std::mem::size_of::<F>() == 0;
        let callback: Arc<ChangeCallback<C>> =
            Arc::new(move |component: &mut C, value: Option<&PropertyValue>| {
                f(component, value.and_then(PropertyValue::downcast_ref::<P>))
            });
        let instance = (!stateless).then(|| Arc::as_ptr(&callback) as *const () as usize);
        Self {
            callback,
            identity: HandlerIdentity {
                callback_type: TypeId::of::<F>(),
                instance,
            },
        }
    }
}

impl<C> ChangeHandler<C> {
    pub fn call(&self, component: &mut C, value: Option<&PropertyValue>) {
        (self.callback)(component, value)
    }

    pub fn identity(&self) -> HandlerIdentity {
        self.identity
    }
}

impl<C> Clone for ChangeHandler<C> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            identity: self.identity,
        }
    }
}

/// Immutable descriptor of one exposed property of an exported component.
pub struct PropertyConfiguration<C> {
    data: PropertyData,
    handler: Option<ChangeHandler<C>>,
}

impl<C> PropertyConfiguration<C> {
    pub(crate) fn new(data: PropertyData) -> Self {
        Self { data, handler: None }
    }

    pub fn data(&self) -> &PropertyData {
        &self.data
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn property_type(&self) -> PropertyType {
        self.data.property_type()
    }

    pub fn default_value(&self) -> Option<&PropertyValue> {
        self.data.default_value()
    }

    pub fn is_read_only(&self) -> bool {
        self.data.is_read_only()
    }

    pub fn handler(&self) -> Option<&ChangeHandler<C>> {
        self.handler.as_ref()
    }

    /// Value equality with a configuration for any component type.
    pub fn same_as<D>(&self, other: &PropertyConfiguration<D>) -> bool {
        self.data == other.data
            && self.handler.as_ref().map(ChangeHandler::identity)
                == other.handler.as_ref().map(ChangeHandler::identity)
    }
}

impl<C> Clone for PropertyConfiguration<C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<C> PartialEq for PropertyConfiguration<C> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<C> Eq for PropertyConfiguration<C> {}

impl<C> Hash for PropertyConfiguration<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
        self.handler.as_ref().map(ChangeHandler::identity).hash(state);
    }
}

impl<C> fmt::Debug for PropertyConfiguration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyConfiguration")
            .field("data", &self.data)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Fluent handle returned while declaring a property on an exporter.
pub struct PropertyDeclaration<'a, C, P> {
    configuration: &'a mut PropertyConfiguration<C>,
    _value: PhantomData<fn() -> P>,
}

impl<'a, C: 'static, P: Any> PropertyDeclaration<'a, C, P> {
    pub(crate) fn new(configuration: &'a mut PropertyConfiguration<C>) -> Self {
        Self {
            configuration,
            _value: PhantomData,
        }
    }

    /// Sets the callback run against the component whenever the property
    /// value is pushed to it. Replaces any earlier callback.
    pub fn on_change<F>(self, f: F) -> Self
    where
        F: Fn(&mut C, Option<&P>) + Send + Sync + 'static,
    {
        self.configuration.handler = Some(ChangeHandler::typed::<P, F>(f));
        self
    }

    /// Marks the property read-only: the host element may not write it.
    pub fn read_only(self) -> Self {
        let data = self.configuration.data.clone().with_read_only(true);
        self.configuration.data = data;
        self
    }

    pub fn configuration(&self) -> &PropertyConfiguration<C> {
        self.configuration
    }
}
