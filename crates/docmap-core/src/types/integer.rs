use super::Converter;
use crate::{Error, Result, Value};

/// The `integer` logical type.
///
/// Reads produce `I64`, or `I32` when the declared type is `i32`. Numeric
/// strings are parsed. Floats are truncated; non-finite floats and floats
/// outside the `i64` range are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerType;

impl IntegerType {
    fn coerce(value: Value) -> Result<Option<i64>> {
        Ok(Some(match value {
            Value::Null => return Ok(None),
            Value::I32(v) => v as i64,
            Value::I64(v) => v,
            Value::F64(v) => match IntegerType::truncate(v) {
                Some(v) => v,
                None => return Err(Error::type_conversion(Value::F64(v), "integer")),
            },
            Value::Bool(v) => v as i64,
            Value::String(v) => match v.trim().parse() {
                Ok(parsed) => parsed,
                Err(_) => return Err(Error::type_conversion(Value::String(v), "integer")),
            },
            value => return Err(Error::type_conversion(value, "integer")),
        }))
    }

    fn truncate(v: f64) -> Option<i64> {
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
        let v = v.trunc();
        (v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64).then_some(v as i64)
    }
}

impl Converter for IntegerType {
    fn from_database(&self, value: Value, hint: Option<&str>) -> Result<Value> {
        let Some(v) = IntegerType::coerce(value)? else {
            return Ok(Value::Null);
        };

        match hint {
            Some("i32") => i32::try_from(v)
                .map(Value::I32)
                .map_err(|_| Error::type_conversion(Value::I64(v), "i32")),
            _ => Ok(Value::I64(v)),
        }
    }

    fn to_database(&self, value: Value) -> Result<Value> {
        Ok(IntegerType::coerce(value)?.map_or(Value::Null, Value::I64))
    }
}
