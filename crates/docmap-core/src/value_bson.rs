use crate::{Error, Map, Result, Value};
use bson::{spec::BinarySubtype, Bson};

impl Value {
    /// Converts the value into its BSON representation. In-memory datetimes
    /// are written as BSON UTC datetimes.
    pub fn to_bson(&self) -> Bson {
        match self {
            Value::Null => Bson::Null,
            Value::Bool(v) => Bson::Boolean(*v),
            Value::I32(v) => Bson::Int32(*v),
            Value::I64(v) => Bson::Int64(*v),
            Value::F64(v) => Bson::Double(*v),
            Value::String(v) => Bson::String(v.clone()),
            Value::Binary(v) => Bson::Binary(bson::Binary {
                subtype: BinarySubtype::Generic,
                bytes: v.clone(),
            }),
            Value::ObjectId(v) => Bson::ObjectId(*v),
            Value::DateTime(v) => Bson::DateTime(bson::DateTime::from_millis(v.timestamp_millis())),
            Value::Timestamp(v) => Bson::DateTime(bson::DateTime::from_millis(*v)),
            Value::List(items) => Bson::Array(items.iter().map(Value::to_bson).collect()),
            Value::Document(map) => Bson::Document(map_to_bson(map)),
        }
    }

    /// Reads a BSON value. Temporal values are read in their wire-native
    /// form.
    pub fn from_bson(bson: Bson) -> Result<Value> {
        Ok(match bson {
            Bson::Null | Bson::Undefined => Value::Null,
            Bson::Boolean(v) => Value::Bool(v),
            Bson::Int32(v) => Value::I32(v),
            Bson::Int64(v) => Value::I64(v),
            Bson::Double(v) => Value::F64(v),
            Bson::String(v) | Bson::Symbol(v) => Value::String(v),
            Bson::Binary(v) => Value::Binary(v.bytes),
            Bson::ObjectId(v) => Value::ObjectId(v),
            Bson::DateTime(v) => Value::Timestamp(v.timestamp_millis()),
            Bson::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::from_bson)
                    .collect::<Result<_>>()?,
            ),
            Bson::Document(doc) => Value::Document(map_from_bson(doc)?),
            other => {
                return Err(crate::err!(
                    "unsupported BSON element type {:?}",
                    other.element_type()
                ))
            }
        })
    }
}

/// Converts a document into a BSON document, preserving key order.
pub fn map_to_bson(map: &Map) -> bson::Document {
    map.iter()
        .map(|(key, value)| (key.clone(), value.to_bson()))
        .collect()
}

/// Reads a BSON document, preserving key order.
pub fn map_from_bson(doc: bson::Document) -> Result<Map> {
    doc.into_iter()
        .map(|(key, value)| {
            Value::from_bson(value)
                .map(|value| (key.clone(), value))
                .map_err(|err: Error| err.context(crate::err!("reading BSON field `{key}`")))
        })
        .collect()
}
