use crate::{Error, Map, Result, Value};
use serde_json::Number;

impl Value {
    /// Converts the value into JSON, using extended JSON markers for values
    /// JSON cannot express natively: `{"$oid": hex}` for object identifiers
    /// and `{"$date": millis}` for datetimes and timestamps.
    ///
    /// Binary values are written as arrays of bytes and read back as lists of
    /// integers. Non-finite floats have no JSON form and fail to convert.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        use serde_json::Value as Json;

        Ok(match self {
            Value::Null => Json::Null,
            Value::Bool(v) => Json::Bool(*v),
            Value::I32(v) => Json::from(*v),
            Value::I64(v) => Json::from(*v),
            Value::F64(v) => match Number::from_f64(*v) {
                Some(number) => Json::Number(number),
                None => return Err(Error::type_conversion(self.clone(), "JSON number")),
            },
            Value::String(v) => Json::String(v.clone()),
            Value::Binary(v) => Json::Array(v.iter().map(|byte| Json::from(*byte)).collect()),
            Value::ObjectId(v) => serde_json::json!({ "$oid": v.to_hex() }),
            Value::DateTime(v) => serde_json::json!({ "$date": v.timestamp_millis() }),
            Value::Timestamp(v) => serde_json::json!({ "$date": *v }),
            Value::List(items) => Json::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<Result<_>>()?,
            ),
            Value::Document(map) => Json::Object(
                map.iter()
                    .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
                    .collect::<Result<_>>()?,
            ),
        })
    }

    /// Reads a JSON value. Objects become documents, numbers become `I64`
    /// when they fit and `F64` otherwise. The `$oid` and `$date` markers
    /// written by [`Value::to_json`] are read back as an object identifier
    /// and an in-memory datetime.
    pub fn from_json(json: serde_json::Value) -> Value {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(v),
            Json::Number(v) => match v.as_i64() {
                Some(v) => Value::I64(v),
                None => Value::F64(v.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(v) => Value::String(v),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from_json).collect()),
            Json::Object(object) => {
                let document = object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from_json(value)))
                    .collect::<Map>();

                Value::from_marker(&document).unwrap_or(Value::Document(document))
            }
        }
    }

    fn from_marker(document: &Map) -> Option<Value> {
        if document.len() != 1 {
            return None;
        }

        match document.first()? {
            (key, Value::String(hex)) if key == "$oid" => {
                bson::oid::ObjectId::parse_str(hex).ok().map(Value::ObjectId)
            }
            (key, Value::I64(millis)) if key == "$date" => {
                Value::timestamp_to_datetime(*millis).ok().map(Value::DateTime)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn markers_read_back() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
        let oid = bson::oid::ObjectId::new();
        let value = Value::document([
            ("at", Value::DateTime(at)),
            ("owner", Value::ObjectId(oid)),
            ("ratio", Value::F64(0.5)),
        ]);

        let json = value.to_json().unwrap();
        assert_eq!(Value::from_json(json), value);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Value::list([Value::F64(v)]).to_json().unwrap_err();
            assert!(err.is_type_conversion());
        }
    }

    #[test]
    fn objects_that_only_resemble_markers_stay_documents() {
        let json = serde_json::json!({ "$date": "yesterday" });
        assert_eq!(
            Value::from_json(json),
            Value::document([("$date", "yesterday")])
        );
    }
}
