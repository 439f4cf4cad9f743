mod dynamic;
pub use dynamic::DynamicDocument;

pub mod hydrator;
pub use hydrator::{Hydrate, Hydrator};

pub mod id;
pub use id::AccessId;

mod mapper;
pub use mapper::{Configure, Defaults, Mapper, Mappers, Scopes};

pub mod selector;
pub use selector::Select;

pub use docmap_core::{
    bail, err,
    mapping::{Field, FieldsMapping, FieldsMappingBuilder, Node, TypeMap},
    schema::{self, Bytes, Catalog, Class, Document, Entity, Identifiable, Property},
    types::{self, Converter, Registry, TypeRegistry},
    Error, Filter, Map, Predicate, Result, Value,
};

pub use docmap_macros::Document;

#[doc(hidden)]
pub mod codegen_support {
    pub use docmap_core::schema::{
        extract, load_embedded, Class, DeclaredField, DeclaredType, Document, Entity,
        Identifiable, Property,
    };
    pub use docmap_core::{Error, Result, Value};
    pub use std::{any::Any, boxed::Box, default::Default, option::Option};
}
