use super::Converter;
use crate::{Error, Result, Value};

/// The `double` logical type.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleType;

impl DoubleType {
    fn coerce(value: Value) -> Result<Value> {
        Ok(match value {
            Value::Null | Value::F64(_) => value,
            Value::I32(v) => Value::F64(v as f64),
            Value::I64(v) => Value::F64(v as f64),
            Value::String(v) => match v.trim().parse() {
                Ok(parsed) => Value::F64(parsed),
                Err(_) => return Err(Error::type_conversion(Value::String(v), "double")),
            },
            value => return Err(Error::type_conversion(value, "double")),
        })
    }
}

impl Converter for DoubleType {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> Result<Value> {
        DoubleType::coerce(value)
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        DoubleType::coerce(value)
    }
}
