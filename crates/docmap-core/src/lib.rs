mod error;
pub use error::{Error, IntoError};

mod filter;
pub use filter::{Clause, Filter, Predicate};

pub mod mapping;
pub use mapping::{FieldsMapping, FieldsMappingBuilder};

pub mod schema;

pub mod types;
pub use types::{Converter, Registry, TypeRegistry};

mod value;
pub use value::{Map, Value};

mod value_bson;
pub use value_bson::{map_from_bson, map_to_bson};

mod value_from;

mod value_json;

/// A Result type alias that uses docmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
