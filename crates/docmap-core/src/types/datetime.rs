use super::Converter;
use crate::{Error, Result, Value};
use chrono::{DateTime, Utc};

/// The `datetime` logical type.
///
/// Always written as the wire-native timestamp. Read back as an in-memory
/// datetime, or as epoch milliseconds when the declared type is `i64`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeType;

impl DateTimeType {
    fn to_millis(value: Value) -> Result<Option<i64>> {
        Ok(Some(match value {
            Value::Null => return Ok(None),
            Value::Timestamp(millis) | Value::I64(millis) => millis,
            Value::DateTime(v) => v.timestamp_millis(),
            Value::String(v) => match DateTime::parse_from_rfc3339(&v) {
                Ok(parsed) => parsed.with_timezone(&Utc).timestamp_millis(),
                Err(err) => {
                    return Err(Error::from(err)
                        .context(Error::type_conversion(Value::String(v), "datetime")))
                }
            },
            value => return Err(Error::type_conversion(value, "datetime")),
        }))
    }
}

impl Converter for DateTimeType {
    fn from_database(&self, value: Value, hint: Option<&str>) -> Result<Value> {
        let Some(millis) = DateTimeType::to_millis(value)? else {
            return Ok(Value::Null);
        };

        match hint {
            Some("i64") => Ok(Value::I64(millis)),
            _ => Value::timestamp_to_datetime(millis).map(Value::DateTime),
        }
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        Ok(DateTimeType::to_millis(value)?.map_or(Value::Null, Value::Timestamp))
    }
}
