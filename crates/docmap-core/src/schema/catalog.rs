use super::{Class, Document};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Resolves class names to class descriptors.
///
/// Used when a selector is configured with class names rather than
/// descriptors, for example from stored configuration.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    classes: IndexMap<&'static str, &'static Class>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Registers a class under its name. A later registration under the same
    /// name replaces the earlier one.
    pub fn register(&mut self, class: &'static Class) -> &mut Self {
        self.classes.insert(class.name, class);
        self
    }

    /// Registers the class of document type `T`.
    pub fn register_document<T: Document>(&mut self) -> &mut Self {
        self.register(T::describe())
    }

    pub fn get(&self, name: &str) -> Option<&'static Class> {
        self.classes.get(name).copied()
    }

    /// Resolves `name`, failing with a configuration error when no class is
    /// registered under it.
    pub fn resolve(&self, name: &str) -> Result<&'static Class> {
        self.get(name)
            .ok_or_else(|| Error::configuration(format!("class `{name}` cannot be resolved")))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
