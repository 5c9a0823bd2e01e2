use std::any::{Any, TypeId};
use std::fmt;

/// A server-side component that can be packaged as a web component.
///
/// Only the piece of the component contract the export layer needs is
/// modelled here: the tag the component renders as on its own.
pub trait Component: Send + 'static {
    /// The component's intrinsic tag, independent of any exporter.
    fn tag(&self) -> &str;
}

/// Runtime descriptor of a component type, handed to instantiators.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType {
    id: TypeId,
    name: &'static str,
}

impl ComponentType {
    pub fn of<C: Any>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<C: Any>(&self) -> bool {
        self.id == TypeId::of::<C>()
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentType").field(&self.name).finish()
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
