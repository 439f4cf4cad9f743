use super::Converter;
use crate::{Error, Result, Value};

/// The `boolean` logical type. Integers are true when non-zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanType;

impl BooleanType {
    fn coerce(value: Value) -> Result<Value> {
        Ok(match value {
            Value::Null | Value::Bool(_) => value,
            Value::I32(v) => Value::Bool(v != 0),
            Value::I64(v) => Value::Bool(v != 0),
            Value::String(v) => {
                let parsed = match v.as_str() {
                    "true" | "1" => Some(true),
                    "false" | "0" | "" => Some(false),
                    _ => None,
                };

                match parsed {
                    Some(parsed) => Value::Bool(parsed),
                    None => return Err(Error::type_conversion(Value::String(v), "boolean")),
                }
            }
            value => return Err(Error::type_conversion(value, "boolean")),
        })
    }
}

impl Converter for BooleanType {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> Result<Value> {
        BooleanType::coerce(value)
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        BooleanType::coerce(value)
    }
}
