use super::Converter;
use crate::{Error, Result, Value};
use bson::oid::ObjectId;

/// The `object_id` logical type. Hex strings are parsed into object
/// identifiers in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectIdType;

impl ObjectIdType {
    fn coerce(value: Value) -> Result<Value> {
        match value {
            Value::Null | Value::ObjectId(_) => Ok(value),
            Value::String(v) => Ok(Value::ObjectId(ObjectId::parse_str(v)?)),
            value => Err(Error::type_conversion(value, "object_id")),
        }
    }
}

impl Converter for ObjectIdType {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> Result<Value> {
        ObjectIdType::coerce(value)
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        ObjectIdType::coerce(value)
    }
}
