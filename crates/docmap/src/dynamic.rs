use docmap_core::schema::{Class, Document, Entity};
use docmap_core::{Map, Result, Value};
use std::any::Any;

/// A schemaless document: an ordered bag of properties.
///
/// Any property can be read or written. The class descriptor declares no
/// field and is flagged dynamic, which selects the dynamic hydrator.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicDocument {
    class: &'static Class,
    properties: Map,
}

static CLASS: Class = Class {
    name: "DynamicDocument",
    parent: None,
    fields: &[],
    new: DynamicDocument::boxed,
    collection: "documents",
    connection: "default",
    dynamic: true,
    identifiable: false,
};

impl DynamicDocument {
    pub fn new() -> DynamicDocument {
        DynamicDocument::with_class(&CLASS)
    }

    /// A document reporting `class` as its class, for application-defined
    /// dynamic classes.
    pub fn with_class(class: &'static Class) -> DynamicDocument {
        DynamicDocument {
            class,
            properties: Map::new(),
        }
    }

    fn boxed() -> Box<dyn Entity> {
        Box::new(DynamicDocument::new())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn properties(&self) -> &Map {
        &self.properties
    }

    pub fn into_properties(self) -> Map {
        self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for DynamicDocument {
    fn default() -> DynamicDocument {
        DynamicDocument::new()
    }
}

impl From<Map> for DynamicDocument {
    fn from(properties: Map) -> DynamicDocument {
        DynamicDocument {
            class: &CLASS,
            properties,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DynamicDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> DynamicDocument {
        iter.into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect::<Map>()
            .into()
    }
}

impl Entity for DynamicDocument {
    fn class(&self) -> &'static Class {
        self.class
    }

    fn read(&self, field: &str) -> Option<Value> {
        self.properties.get(field).cloned()
    }

    fn write(&mut self, field: &str, value: Value) -> Result<()> {
        self.properties.insert(field.to_string(), value);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Document for DynamicDocument {
    fn describe() -> &'static Class {
        &CLASS
    }
}
