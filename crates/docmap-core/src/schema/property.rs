use super::{fill, DeclaredType, Document};
use crate::{Error, Map, Result, Value};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// A type that can be stored in a document field.
///
/// `TYPE` is the declared type recorded in the class descriptor; it drives
/// automatic field mapping.
pub trait Property: Sized {
    const TYPE: DeclaredType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

/// Raw bytes stored as a binary value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

/// Loads an embedded document from a document value.
pub fn load_embedded<T: Document>(value: Value) -> Result<T> {
    match value {
        Value::Document(map) => {
            let mut document = T::default();
            fill(&mut document, map)?;
            Ok(document)
        }
        value => Err(Error::type_conversion(value, T::describe().name)),
    }
}

impl Property for bool {
    const TYPE: DeclaredType = DeclaredType::Scalar("bool");

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Property for i32 {
    const TYPE: DeclaredType = DeclaredType::Scalar("i32");

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => {
                i32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "i32"))
            }
            value => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl Property for i64 {
    const TYPE: DeclaredType = DeclaredType::Scalar("i64");

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| Error::type_conversion(value, "i64"))
    }
}

impl Property for f64 {
    const TYPE: DeclaredType = DeclaredType::Scalar("f64");

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v as f64),
            Value::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Property for String {
    const TYPE: DeclaredType = DeclaredType::Scalar("String");

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Property for DateTime<Utc> {
    const TYPE: DeclaredType = DeclaredType::Scalar("DateTime");

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    /// Accepts the wire-native timestamp as well, so a datetime field still
    /// loads when no converter is mapped for it.
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::Timestamp(millis) => Value::timestamp_to_datetime(millis),
            value => Err(Error::type_conversion(value, "DateTime")),
        }
    }
}

impl Property for ObjectId {
    const TYPE: DeclaredType = DeclaredType::Scalar("ObjectId");

    fn to_value(&self) -> Value {
        Value::ObjectId(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::ObjectId(v) => Ok(v),
            value => Err(Error::type_conversion(value, "ObjectId")),
        }
    }
}

impl Property for Bytes {
    const TYPE: DeclaredType = DeclaredType::Scalar("Bytes");

    fn to_value(&self) -> Value {
        Value::Binary(self.0.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Binary(v) => Ok(Bytes(v)),
            value => Err(Error::type_conversion(value, "Bytes")),
        }
    }
}

impl Property for Value {
    const TYPE: DeclaredType = DeclaredType::Any;

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl Property for Map {
    const TYPE: DeclaredType = DeclaredType::Any;

    fn to_value(&self) -> Value {
        Value::Document(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_document()
    }
}

impl<T: Property> Property for Option<T> {
    const TYPE: DeclaredType = T::TYPE;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<T: Property> Property for Vec<T> {
    const TYPE: DeclaredType = DeclaredType::Collection;

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Property::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            value => Err(Error::type_conversion(value, "Vec")),
        }
    }
}

impl<T: Property> Property for Box<T> {
    const TYPE: DeclaredType = T::TYPE;

    fn to_value(&self) -> Value {
        T::to_value(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        T::from_value(value).map(Box::new)
    }
}
