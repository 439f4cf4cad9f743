//! Logical types and the registry resolving them to converters.
//!
//! A logical type is a store-agnostic name such as `"datetime"` or
//! `"integer"`. Field mappings refer to logical types by name and look the
//! converter up at conversion time.

mod binary;
pub use binary::BinaryType;

mod boolean;
pub use boolean::BooleanType;

mod datetime;
pub use datetime::DateTimeType;

mod double;
pub use double::DoubleType;

mod integer;
pub use integer::IntegerType;

mod json;
pub use json::JsonType;

mod object_id;
pub use object_id::ObjectIdType;

mod registry;
pub use registry::{Registry, RegistryBuilder};

mod string;
pub use string::StringType;

use crate::{Result, Value};
use std::fmt;

/// Converts a single value between its in-memory and wire forms.
pub trait Converter: Send + Sync + fmt::Debug {
    /// Converts a wire value to its in-memory form. `hint` names the declared
    /// in-memory type when it is known, and may select which in-memory form
    /// is produced.
    fn from_database(&self, value: Value, hint: Option<&str>) -> Result<Value>;

    /// Converts an in-memory value to its wire form.
    fn to_database(&self, value: Value) -> Result<Value>;
}

/// Resolves logical type names to converters.
pub trait TypeRegistry {
    /// Returns the converter registered for `name`, or an unknown type error.
    fn get(&self, name: &str) -> Result<&dyn Converter>;
}
