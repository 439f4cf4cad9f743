//! Bulk transfer of an instance's fields to and from a document.

use crate::id::AccessId;
use crate::DynamicDocument;
use docmap_core::schema::{self, Entity};
use docmap_core::{Error, Map, Result, Value};
use std::fmt;
use std::sync::Arc;

/// Moves every declared field of an instance to or from a map, without any
/// per-field type mapping.
///
/// The variant is chosen once per class by the mapper configuration.
#[derive(Debug, Clone)]
pub enum Hydrator {
    /// Matches the fields a class declares by name, using the class
    /// descriptor. In-memory datetimes are extracted in their wire-native
    /// form.
    Typed,

    /// Copies every key onto a [`DynamicDocument`] and back. Also provides
    /// identifier access through the `_id` key.
    Dynamic,

    /// An application-provided strategy.
    Custom(Arc<dyn Hydrate>),
}

/// A custom hydration strategy.
pub trait Hydrate: Send + Sync + fmt::Debug {
    /// Fills `entity` from `data` and returns it.
    fn from_database(&self, entity: Box<dyn Entity>, data: Map) -> Result<Box<dyn Entity>>;

    fn to_database(&self, entity: &dyn Entity) -> Result<Map>;

    /// Identifier access provided by this hydrator, preferred over the
    /// class-based accessors.
    fn id_accessor(&self) -> Option<Arc<dyn AccessId>> {
        None
    }
}

impl Hydrator {
    pub fn custom(hydrate: impl Hydrate + 'static) -> Hydrator {
        Hydrator::Custom(Arc::new(hydrate))
    }

    pub fn from_database(&self, mut entity: Box<dyn Entity>, data: Map) -> Result<Box<dyn Entity>> {
        match self {
            Hydrator::Typed => {
                schema::fill(entity.as_mut(), data)?;
                Ok(entity)
            }
            Hydrator::Dynamic => {
                let document = dynamic_mut(entity.as_mut())?;

                for (name, value) in data {
                    document.insert(name, value);
                }

                Ok(entity)
            }
            Hydrator::Custom(hydrate) => hydrate.from_database(entity, data),
        }
    }

    pub fn to_database(&self, entity: &dyn Entity) -> Result<Map> {
        match self {
            Hydrator::Typed => Ok(schema::extract(entity)
                .into_iter()
                .map(|(name, value)| (name, value.into_native()))
                .collect()),
            Hydrator::Dynamic => Ok(dynamic_ref(entity)?.properties().clone()),
            Hydrator::Custom(hydrate) => hydrate.to_database(entity),
        }
    }

    /// Identifier access provided by the hydrator itself, if any.
    pub fn id_accessor(&self) -> Option<Arc<dyn AccessId>> {
        match self {
            Hydrator::Typed => None,
            Hydrator::Dynamic => Some(Arc::new(DynamicId)),
            Hydrator::Custom(hydrate) => hydrate.id_accessor(),
        }
    }
}

/// Identifier access on dynamic documents, through the `_id` key.
#[derive(Debug)]
struct DynamicId;

impl AccessId for DynamicId {
    fn read_id(&self, entity: &dyn Entity) -> Result<Option<Value>> {
        Ok(dynamic_ref(entity)?
            .get("_id")
            .filter(|id| !id.is_null())
            .cloned())
    }

    fn write_id(&self, entity: &mut dyn Entity, id: Option<Value>) -> Result<()> {
        let document = dynamic_mut(entity)?;

        match id {
            Some(id) => document.insert("_id", id),
            None => document.remove("_id"),
        };

        Ok(())
    }
}

fn dynamic_ref(entity: &dyn Entity) -> Result<&DynamicDocument> {
    let class = entity.class();
    entity
        .downcast_ref()
        .ok_or_else(|| not_dynamic(class.name))
}

fn dynamic_mut(entity: &mut dyn Entity) -> Result<&mut DynamicDocument> {
    let class = entity.class();
    entity
        .downcast_mut()
        .ok_or_else(|| not_dynamic(class.name))
}

fn not_dynamic(class: &str) -> Error {
    Error::configuration(format!(
        "the dynamic hydrator requires a `DynamicDocument`, found `{class}`"
    ))
}
