use super::Converter;
use crate::{Error, Result, Value};

/// The `string` logical type. Scalars are coerced to their textual form.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringType;

impl StringType {
    fn coerce(value: Value) -> Result<Value> {
        Ok(match value {
            Value::Null | Value::String(_) => value,
            Value::Bool(v) => Value::String(v.to_string()),
            Value::I32(v) => Value::String(v.to_string()),
            Value::I64(v) => Value::String(v.to_string()),
            Value::F64(v) => Value::String(v.to_string()),
            Value::ObjectId(v) => Value::String(v.to_hex()),
            value => return Err(Error::type_conversion(value, "string")),
        })
    }
}

impl Converter for StringType {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> Result<Value> {
        StringType::coerce(value)
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        StringType::coerce(value)
    }
}
