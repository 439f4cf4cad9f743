use super::{
    BinaryType, BooleanType, Converter, DateTimeType, DoubleType, IntegerType, JsonType,
    ObjectIdType, StringType, TypeRegistry,
};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// A [`TypeRegistry`] backed by a name to converter table.
///
/// `Registry::default()` contains the built-in logical types: `string`,
/// `integer`, `double`, `boolean`, `datetime`, `binary`, `object_id` and
/// `json`.
#[derive(Debug, Clone)]
pub struct Registry {
    converters: IndexMap<String, Arc<dyn Converter>>,
}

/// Builds a [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    converters: IndexMap<String, Arc<dyn Converter>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            converters: builtin(),
        }
    }

    /// A registry without any logical type.
    pub fn empty() -> Registry {
        Registry {
            converters: IndexMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.converters.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::builder().build()
    }
}

impl TypeRegistry for Registry {
    fn get(&self, name: &str) -> Result<&dyn Converter> {
        self.converters
            .get(name)
            .map(|converter| &**converter)
            .ok_or_else(|| Error::unknown_type(name))
    }
}

impl RegistryBuilder {
    /// Registers `converter` under `name`, replacing any existing entry.
    pub fn register(mut self, name: impl Into<String>, converter: impl Converter + 'static) -> Self {
        self.converters.insert(name.into(), Arc::new(converter));
        self
    }

    /// Removes every registered type, including the built-in ones.
    pub fn clear(mut self) -> Self {
        self.converters.clear();
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            converters: self.converters,
        }
    }
}

fn builtin() -> IndexMap<String, Arc<dyn Converter>> {
    let converters: [(&str, Arc<dyn Converter>); 8] = [
        ("string", Arc::new(StringType)),
        ("integer", Arc::new(IntegerType)),
        ("double", Arc::new(DoubleType)),
        ("boolean", Arc::new(BooleanType)),
        ("datetime", Arc::new(DateTimeType)),
        ("binary", Arc::new(BinaryType)),
        ("object_id", Arc::new(ObjectIdType)),
        ("json", Arc::new(JsonType)),
    ];

    converters
        .into_iter()
        .map(|(name, converter)| (name.to_string(), converter))
        .collect()
}
