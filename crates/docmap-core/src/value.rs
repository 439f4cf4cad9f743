use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;

/// An ordered, string-keyed document: the shape of a stored record and of
/// every embedded object inside it.
pub type Map = IndexMap<String, Value>;

/// A value held by a document, either in its in-memory form or in its
/// wire-native form.
///
/// Both forms share one type so that unmapped fields can pass through a
/// conversion untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double precision float
    F64(f64),

    /// String value
    String(String),

    /// Raw bytes
    Binary(Vec<u8>),

    /// A store-generated object identifier
    ObjectId(bson::oid::ObjectId),

    /// In-memory date and time
    DateTime(DateTime<Utc>),

    /// Wire-native UTC timestamp, in milliseconds since the Unix epoch
    Timestamp(i64),

    /// A list of values
    List(Vec<Value>),

    /// An embedded document
    Document(Map),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` for values that are neither a list nor a document.
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Document(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I32(v) => Some(v as i64),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Map> {
        match self {
            Self::Document(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_document(self) -> Result<Map> {
        match self {
            Self::Document(map) => Ok(map),
            _ => Err(Error::type_conversion(self, "Document")),
        }
    }

    /// Builds a document value from `(key, value)` pairs.
    pub fn document<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Document(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a list value.
    pub fn list<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// The variant name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Binary(_) => "Binary",
            Self::ObjectId(_) => "ObjectId",
            Self::DateTime(_) => "DateTime",
            Self::Timestamp(_) => "Timestamp",
            Self::List(_) => "List",
            Self::Document(_) => "Document",
        }
    }

    /// Converts in-memory values into their wire-native form, recursing into
    /// lists and documents. Only temporal values differ between the two
    /// forms.
    pub fn into_native(self) -> Self {
        match self {
            Self::DateTime(v) => Self::Timestamp(v.timestamp_millis()),
            Self::List(items) => Self::List(items.into_iter().map(Value::into_native).collect()),
            Self::Document(map) => Self::Document(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_native()))
                    .collect(),
            ),
            value => value,
        }
    }

    /// Reads a wire-native timestamp back as an in-memory datetime.
    pub fn timestamp_to_datetime(millis: i64) -> Result<DateTime<Utc>> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| Error::type_conversion(Value::Timestamp(millis), "DateTime"))
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
