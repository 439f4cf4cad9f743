use super::{Configure, Defaults, Mapper};
use docmap_core::schema::{Class, Document};
use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shares one [`Mapper`] per class.
///
/// Classes without a registered mapper get one built from the registry's
/// configuration on first request. Concurrent first requests for a class
/// observe the same mapper.
#[derive(Debug)]
pub struct Mappers {
    config: Arc<dyn Configure>,
    mappers: RwLock<IndexMap<&'static Class, Arc<Mapper>>>,
}

impl Mappers {
    pub fn new() -> Mappers {
        Mappers::with_config(Defaults)
    }

    /// A registry building missing mappers with `config`.
    pub fn with_config(config: impl Configure + 'static) -> Mappers {
        Mappers {
            config: Arc::new(config),
            mappers: RwLock::new(IndexMap::new()),
        }
    }

    /// Registers `mapper`, replacing any mapper registered for its class.
    pub fn register(&self, mapper: Mapper) -> Arc<Mapper> {
        let mapper = Arc::new(mapper);

        self.mappers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(mapper.class(), mapper.clone());

        mapper
    }

    /// The mapper of `class`, built on first request.
    pub fn get(&self, class: &'static Class) -> Arc<Mapper> {
        if let Some(mapper) = self
            .mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(class)
        {
            return mapper.clone();
        }

        self.mappers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(class)
            .or_insert_with(|| {
                tracing::debug!(class = class.name, "registering mapper");
                Arc::new(Mapper::with_shared_config(class, self.config.clone()))
            })
            .clone()
    }

    /// The mapper of the document type `T`.
    pub fn of<T: Document>(&self) -> Arc<Mapper> {
        self.get(T::describe())
    }

    pub fn len(&self) -> usize {
        self.mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Mappers {
    fn default() -> Mappers {
        Mappers::new()
    }
}
