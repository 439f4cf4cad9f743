use super::Class;
use crate::{Error, Map, Result, Value};
use std::any::Any;
use std::fmt;

/// An instance of a document class, addressed field by field.
///
/// This is the object-safe surface hydrators and identifier accessors work
/// against. It is usually implemented by `#[derive(Document)]`.
pub trait Entity: Any + fmt::Debug {
    /// The class this instance belongs to.
    fn class(&self) -> &'static Class;

    /// Reads a declared field. Returns `None` if the class does not declare
    /// `field`.
    fn read(&self, field: &str) -> Option<Value>;

    /// Writes a declared field, converting `value` to the field's type.
    fn write(&mut self, field: &str, value: Value) -> Result<()>;

    /// Identifier accessor methods, when the class provides them.
    fn as_identifiable(&self) -> Option<&dyn Identifiable> {
        None
    }

    fn as_identifiable_mut(&mut self) -> Option<&mut dyn Identifiable> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A statically known document class.
pub trait Document: Entity + Default {
    /// The class descriptor. Always returns the same instance.
    fn describe() -> &'static Class;
}

/// Identifier getter and setter exposed by a document type.
pub trait Identifiable {
    fn id(&self) -> Option<Value>;

    fn set_id(&mut self, id: Option<Value>);
}

impl dyn Entity {
    pub fn is<T: Entity>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Entity>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Entity>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    pub fn downcast<T: Entity>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast().ok()
    }

    /// Returns `true` if the instance's class is `class` or extends it.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class().is_subclass_of(class)
    }
}

/// Extracts every field declared by the entity's class, own and inherited,
/// into a map.
pub fn extract(entity: &dyn Entity) -> Map {
    let mut map = Map::new();

    for field in entity.class().declared_fields() {
        if let Some(value) = entity.read(field.name) {
            map.insert(field.name.to_string(), value);
        }
    }

    map
}

/// Writes every entry of `data` whose key is a field declared by the entity's
/// class. Other entries are ignored.
pub fn fill(entity: &mut dyn Entity, data: Map) -> Result<()> {
    let class = entity.class();

    for (key, value) in data {
        if !class.declares(&key) {
            continue;
        }

        entity.write(&key, value).map_err(|err: Error| {
            err.context(crate::err!("writing field `{}::{}`", class.name, key))
        })?;
    }

    Ok(())
}
