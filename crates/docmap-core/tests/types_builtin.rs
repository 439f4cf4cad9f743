use chrono::{TimeZone, Utc};
use docmap_core::mapping::Field;
use docmap_core::types::Converter;
use docmap_core::{Registry, TypeRegistry, Value};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Upper;

impl Converter for Upper {
    fn from_database(&self, value: Value, _hint: Option<&str>) -> docmap_core::Result<Value> {
        Ok(value)
    }

    fn to_database(&self, value: Value) -> docmap_core::Result<Value> {
        match value {
            Value::String(v) => Ok(Value::String(v.to_uppercase())),
            value => Ok(value),
        }
    }
}

#[test]
fn field_delegates_to_registry() {
    let registry = Registry::default();
    let age = Field::new("age", "integer").with_value_type("int");

    assert_eq!(
        age.from_database(Value::from("42"), &registry).unwrap(),
        Value::I64(42)
    );
    assert_eq!(
        age.to_database(Value::I32(7), &registry).unwrap(),
        Value::I64(7)
    );
}

#[test]
fn integer_hint_selects_width() {
    let registry = Registry::default();
    let count = Field::new("count", "integer").with_value_type("i32");

    assert_eq!(
        count.from_database(Value::I64(12), &registry).unwrap(),
        Value::I32(12)
    );

    let err = count
        .from_database(Value::I64(i64::MAX), &registry)
        .unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn integer_rejects_garbage() {
    let registry = Registry::default();
    let err = registry
        .get("integer")
        .unwrap()
        .from_database(Value::from("forty-two"), None)
        .unwrap_err();

    assert!(err.is_type_conversion());
}

#[test]
fn integer_truncates_floats_in_range() {
    let registry = Registry::default();
    let integer = registry.get("integer").unwrap();

    assert_eq!(integer.from_database(Value::F64(41.9), None).unwrap(), Value::I64(41));
    assert_eq!(integer.from_database(Value::F64(-2.5), None).unwrap(), Value::I64(-2));
    assert_eq!(integer.to_database(Value::F64(7.0)).unwrap(), Value::I64(7));
}

#[test]
fn integer_rejects_unrepresentable_floats() {
    let registry = Registry::default();
    let integer = registry.get("integer").unwrap();

    for value in [1e30, -1e30, 9_223_372_036_854_775_808.0, f64::NAN, f64::INFINITY] {
        let err = integer.from_database(Value::F64(value), None).unwrap_err();
        assert!(err.is_type_conversion(), "{value}");
        assert!(integer.to_database(Value::F64(value)).unwrap_err().is_type_conversion());
    }
}

#[test]
fn null_passes_through_every_builtin() {
    let registry = Registry::default();

    for name in registry.names() {
        let converter = registry.get(name).unwrap();
        assert_eq!(converter.from_database(Value::Null, None).unwrap(), Value::Null, "{name}");
        assert_eq!(converter.to_database(Value::Null).unwrap(), Value::Null, "{name}");
    }
}

#[test]
fn datetime_is_written_as_native_timestamp() {
    let registry = Registry::default();
    let at = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    let datetime = registry.get("datetime").unwrap();

    let stored = datetime.to_database(Value::DateTime(at)).unwrap();
    assert_eq!(stored, Value::Timestamp(at.timestamp_millis()));

    assert_eq!(
        datetime.from_database(stored.clone(), None).unwrap(),
        Value::DateTime(at)
    );
    assert_eq!(
        datetime.from_database(stored, Some("i64")).unwrap(),
        Value::I64(at.timestamp_millis())
    );
}

#[test]
fn datetime_parses_rfc3339_strings() {
    let registry = Registry::default();
    let at = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();

    assert_eq!(
        registry
            .get("datetime")
            .unwrap()
            .to_database(Value::from("2023-01-02T03:04:05Z"))
            .unwrap(),
        Value::Timestamp(at.timestamp_millis())
    );
}

#[test]
fn boolean_coercions() {
    let registry = Registry::default();
    let boolean = registry.get("boolean").unwrap();

    assert_eq!(boolean.from_database(Value::I64(0), None).unwrap(), Value::Bool(false));
    assert_eq!(boolean.from_database(Value::from("1"), None).unwrap(), Value::Bool(true));
    assert!(boolean.from_database(Value::from("maybe"), None).is_err());
}

#[test]
fn object_id_parses_hex() {
    let registry = Registry::default();
    let oid = bson::oid::ObjectId::new();

    assert_eq!(
        registry
            .get("object_id")
            .unwrap()
            .to_database(Value::String(oid.to_hex()))
            .unwrap(),
        Value::ObjectId(oid)
    );
}

#[test]
fn json_round_trips_documents() {
    let registry = Registry::default();
    let json = registry.get("json").unwrap();
    let value = Value::document([("a", Value::I64(1)), ("b", Value::list(["x", "y"]))]);

    let stored = json.to_database(value.clone()).unwrap();
    assert_eq!(stored, Value::from(r#"{"a":1,"b":["x","y"]}"#));
    assert_eq!(json.from_database(stored, None).unwrap(), value);
}

#[test]
fn custom_converters_can_be_registered() {
    let registry = Registry::builder().register("upper", Upper).build();
    let code = Field::new("code", "upper");

    assert!(registry.contains("string"));
    assert_eq!(
        code.to_database(Value::from("abc"), &registry).unwrap(),
        Value::from("ABC")
    );
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = Registry::empty();
    let err = registry.get("string").unwrap_err();
    assert!(err.is_unknown_type());
}
