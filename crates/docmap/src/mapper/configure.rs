use super::Scopes;
use crate::hydrator::Hydrator;
use crate::id::{AccessId, FieldAccessor, MethodsAccessor};
use crate::selector::{Select, Single};
use docmap_core::mapping::{FieldsMappingBuilder, TypeMap};
use docmap_core::schema::Class;
use docmap_core::Result;
use std::fmt;
use std::sync::Arc;

/// Hooks deciding how a [`Mapper`] builds its collaborators.
///
/// Every hook has a default; override only what a class family needs. Each
/// hook runs at most once per mapper.
///
/// [`Mapper`]: super::Mapper
pub trait Configure: Send + Sync + fmt::Debug {
    /// Defaults to a selector always instantiating `class`.
    fn selector(&self, class: &'static Class) -> Result<Arc<dyn Select>> {
        Ok(Arc::new(Single::new(class)))
    }

    /// Defaults to [`Hydrator::Dynamic`] for dynamic classes and
    /// [`Hydrator::Typed`] otherwise.
    fn hydrator(&self, class: &'static Class) -> Hydrator {
        if class.dynamic {
            Hydrator::Dynamic
        } else {
            Hydrator::Typed
        }
    }

    /// Defaults to the accessor provided by the hydrator, then to the
    /// identifier methods when the class exposes them, then to the `_id`
    /// field.
    fn id_accessor(&self, class: &'static Class, hydrator: &Hydrator) -> Arc<dyn AccessId> {
        if let Some(accessor) = hydrator.id_accessor() {
            accessor
        } else if class.identifiable {
            Arc::new(MethodsAccessor)
        } else {
            Arc::new(FieldAccessor::new(class))
        }
    }

    /// The table resolving declared types during auto configuration.
    fn type_map(&self) -> TypeMap {
        TypeMap::default()
    }

    /// Declares the fields mapping. Defaults to deriving it from the class.
    fn fields(&self, class: &'static Class, builder: &mut FieldsMappingBuilder) {
        builder.auto_configure(class);
    }

    fn scopes(&self, _class: &'static Class) -> Scopes {
        Scopes::default()
    }
}

/// The default configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct Defaults;

impl Configure for Defaults {}
