use super::Converter;
use crate::{Error, Result, Value};

/// The `binary` logical type. Strings are stored as their UTF-8 bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryType;

impl Converter for BinaryType {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> Result<Value> {
        match value {
            Value::Null | Value::Binary(_) => Ok(value),
            value => Err(Error::type_conversion(value, "binary")),
        }
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null | Value::Binary(_) => Ok(value),
            Value::String(v) => Ok(Value::Binary(v.into_bytes())),
            value => Err(Error::type_conversion(value, "binary")),
        }
    }
}
