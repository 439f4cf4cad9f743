mod configure;
pub use configure::{Configure, Defaults};

mod registry;
pub use registry::Mappers;

mod scopes;
pub use scopes::Scopes;

use crate::hydrator::Hydrator;
use crate::id::AccessId;
use crate::selector::Select;
use docmap_core::mapping::{FieldsMapping, FieldsMappingBuilder};
use docmap_core::schema::{Class, Document, Entity};
use docmap_core::{Error, Filter, Map, Result, TypeRegistry, Value};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Maps the documents of one class to and from their stored form.
///
/// A mapper owns one hydrator, one identifier accessor, one selector and one
/// fields mapping. Each is built from the [`Configure`] hooks on first use and
/// reused afterwards; concurrent first uses build it once.
pub struct Mapper {
    class: &'static Class,
    config: Arc<dyn Configure>,
    hydrator: OnceLock<Hydrator>,
    id_accessor: OnceLock<Arc<dyn AccessId>>,
    selector: OnceLock<Result<Arc<dyn Select>>>,
    fields: OnceLock<FieldsMapping>,
    scopes: OnceLock<Scopes>,
}

impl Mapper {
    /// A mapper for `class` using the default configuration.
    pub fn new(class: &'static Class) -> Mapper {
        Mapper::with_config(class, Defaults)
    }

    pub fn with_config(class: &'static Class, config: impl Configure + 'static) -> Mapper {
        Mapper::with_shared_config(class, Arc::new(config))
    }

    pub fn with_shared_config(class: &'static Class, config: Arc<dyn Configure>) -> Mapper {
        Mapper {
            class,
            config,
            hydrator: OnceLock::new(),
            id_accessor: OnceLock::new(),
            selector: OnceLock::new(),
            fields: OnceLock::new(),
            scopes: OnceLock::new(),
        }
    }

    /// A mapper for the document type `T`.
    pub fn of<T: Document>() -> Mapper {
        Mapper::new(T::describe())
    }

    pub fn class(&self) -> &'static Class {
        self.class
    }

    pub fn connection(&self) -> &'static str {
        self.class.connection
    }

    pub fn collection(&self) -> &'static str {
        self.class.collection
    }

    pub fn hydrator(&self) -> &Hydrator {
        self.hydrator.get_or_init(|| {
            let hydrator = self.config.hydrator(self.class);
            tracing::debug!(class = self.class.name, ?hydrator, "built hydrator");
            hydrator
        })
    }

    pub fn id_accessor(&self) -> &dyn AccessId {
        self.id_accessor
            .get_or_init(|| {
                let accessor = self.config.id_accessor(self.class, self.hydrator());
                tracing::debug!(class = self.class.name, ?accessor, "built identifier accessor");
                accessor
            })
            .as_ref()
    }

    pub fn selector(&self) -> Result<&dyn Select> {
        let selector = self.selector.get_or_init(|| {
            let selector = self.config.selector(self.class);
            tracing::debug!(
                class = self.class.name,
                ok = selector.is_ok(),
                "built selector"
            );
            selector
        });

        match selector {
            Ok(selector) => Ok(selector.as_ref()),
            Err(err) => Err(err.clone()),
        }
    }

    /// The fields mapping of the class.
    pub fn fields(&self) -> &FieldsMapping {
        self.fields.get_or_init(|| {
            let mut builder = FieldsMappingBuilder::with_types(self.config.type_map());
            self.config.fields(self.class, &mut builder);
            let fields = builder.build();
            tracing::debug!(class = self.class.name, fields = fields.len(), "built fields mapping");
            fields
        })
    }

    pub fn scopes(&self) -> &Scopes {
        self.scopes.get_or_init(|| self.config.scopes(self.class))
    }

    /// The filter registered under `name`, if any.
    pub fn scope(&self, name: &str) -> Option<&Filter> {
        self.scopes().get(name)
    }

    /// Loads a raw stored document: the selector picks the class, the fields
    /// mapping converts the values and the hydrator fills the instance.
    pub fn from_database(&self, raw: Map, registry: &dyn TypeRegistry) -> Result<Box<dyn Entity>> {
        let entity = self.selector()?.instantiate(&raw);

        tracing::trace!(
            class = self.class.name,
            selected = entity.class().name,
            "loading document"
        );

        let converted = self.fields().from_database(raw, registry)?;
        self.hydrator().from_database(entity, converted)
    }

    /// Loads a raw stored document as a `T`. Fails when the selector picks a
    /// class that is not `T`.
    pub fn load<T: Document>(&self, raw: Map, registry: &dyn TypeRegistry) -> Result<T> {
        let entity = self.from_database(raw, registry)?;
        let class = entity.class();

        match entity.downcast::<T>() {
            Some(document) => Ok(*document),
            None => Err(Error::type_conversion(
                Value::from(class.name),
                T::describe().name,
            )),
        }
    }

    /// Produces the stored form of `entity`.
    pub fn to_database(&self, entity: &dyn Entity, registry: &dyn TypeRegistry) -> Result<Map> {
        tracing::trace!(class = entity.class().name, "storing document");

        let extracted = self.hydrator().to_database(entity)?;
        self.fields().to_database(extracted, registry)
    }

    pub fn get_id(&self, entity: &dyn Entity) -> Result<Option<Value>> {
        self.id_accessor().read_id(entity)
    }

    pub fn set_id(&self, entity: &mut dyn Entity, id: Option<Value>) -> Result<()> {
        self.id_accessor().write_id(entity, id)
    }

    /// The filter scoping the collection to documents of this mapper's class.
    pub fn constraints(&self) -> Result<Filter> {
        Ok(self.selector()?.filters(self.class))
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("class", &self.class.name)
            .field("config", &self.config)
            .finish()
    }
}
