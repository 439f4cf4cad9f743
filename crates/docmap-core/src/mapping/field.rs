use crate::types::TypeRegistry;
use crate::{Error, Result, Value};

/// A mapped leaf field: a name, the logical type converting its value, and
/// optionally the declared in-memory type, passed to the converter as a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: String,
    value_type: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
            value_type: None,
        }
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Field {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logical type name.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The declared in-memory type, if known.
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn from_database(&self, value: Value, registry: &dyn TypeRegistry) -> Result<Value> {
        registry
            .get(&self.ty)
            .and_then(|converter| converter.from_database(value, self.value_type()))
            .map_err(|err| self.context(err))
    }

    pub fn to_database(&self, value: Value, registry: &dyn TypeRegistry) -> Result<Value> {
        registry
            .get(&self.ty)
            .and_then(|converter| converter.to_database(value))
            .map_err(|err| self.context(err))
    }

    fn context(&self, err: Error) -> Error {
        err.context(crate::err!("field `{}`", self.name))
    }
}
