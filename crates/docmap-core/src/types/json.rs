use super::Converter;
use crate::{Result, Value};

/// The `json` logical type: any value, stored as a JSON string.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonType;

impl Converter for JsonType {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> Result<Value> {
        match value {
            Value::String(v) => Ok(Value::from_json(serde_json::from_str(&v)?)),
            value => Ok(value),
        }
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            value => Ok(Value::String(serde_json::to_string(&value.to_json()?)?)),
        }
    }
}
