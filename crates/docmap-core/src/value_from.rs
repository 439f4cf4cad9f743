use crate::{Map, Value};
use chrono::{DateTime, Utc};

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<bson::oid::ObjectId> for Value {
    fn from(src: bson::oid::ObjectId) -> Self {
        Self::ObjectId(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::DateTime(src)
    }
}

impl From<Map> for Value {
    fn from(src: Map) -> Self {
        Self::Document(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
