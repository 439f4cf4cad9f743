use bson::oid::ObjectId;
use chrono::{DateTime, TimeZone, Utc};
use docmap::{Bytes, Document, Mapper, Map, Registry, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq, Document)]
#[document(collection = "people")]
struct Person {
    #[document(rename = "_id")]
    id: Option<ObjectId>,
    name: String,
    age: i32,
    score: f64,
    active: bool,
    born: Option<DateTime<Utc>>,
    avatar: Bytes,
    address: Address,
    tags: Vec<String>,
    #[document(skip)]
    cached: u32,
}

#[derive(Debug, Default, PartialEq, Document)]
struct Address {
    city: String,
    zip: i64,
}

fn person() -> Person {
    Person {
        id: Some(ObjectId::new()),
        name: "Ada".to_string(),
        age: 36,
        score: 9.5,
        active: true,
        born: Some(Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap()),
        avatar: Bytes(vec![1, 2, 3]),
        address: Address {
            city: "London".to_string(),
            zip: 1000,
        },
        tags: vec!["math".to_string()],
        cached: 0,
    }
}

#[test]
fn documents_round_trip() {
    let registry = Registry::default();
    let mapper = Mapper::of::<Person>();
    let person = person();

    let stored = mapper.to_database(&person, &registry).unwrap();
    let loaded: Person = mapper.load(stored, &registry).unwrap();

    assert_eq!(loaded, person);
}

#[test]
fn stored_form_uses_wire_native_values() {
    let registry = Registry::default();
    let person = person();
    let born = person.born.unwrap().timestamp_millis();

    let stored = Mapper::of::<Person>()
        .to_database(&person, &registry)
        .unwrap();

    assert_eq!(
        stored.keys().collect::<Vec<_>>(),
        ["_id", "name", "age", "score", "active", "born", "avatar", "address", "tags"]
    );
    assert_eq!(stored["age"], Value::I64(36));
    assert_eq!(stored["born"], Value::Timestamp(born));
    assert_eq!(stored["avatar"], Value::Binary(vec![1, 2, 3]));
    assert_eq!(
        stored["address"],
        Value::document([("city", Value::from("London")), ("zip", Value::I64(1000))])
    );
    assert_eq!(stored["tags"], Value::list(["math"]));
}

#[test]
fn values_are_coerced_on_read() {
    let registry = Registry::default();
    let raw: Map = [
        ("name".to_string(), Value::from("Grace")),
        ("age".to_string(), Value::from("42")),
        ("active".to_string(), Value::from("1")),
        ("born".to_string(), Value::from("1906-12-09T00:00:00Z")),
        ("address".to_string(), Value::from("not a document")),
        ("unmapped".to_string(), Value::I64(42)),
    ]
    .into_iter()
    .collect();

    let loaded: Person = Mapper::of::<Person>().load(raw, &registry).unwrap();

    assert_eq!(loaded.name, "Grace");
    assert_eq!(loaded.age, 42);
    assert!(loaded.active);
    assert_eq!(
        loaded.born,
        Some(Utc.with_ymd_and_hms(1906, 12, 9, 0, 0, 0).unwrap())
    );
    assert_eq!(loaded.address, Address::default());
}

#[test]
fn null_optional_fields_load_as_none() {
    let registry = Registry::default();
    let raw: Map = [
        ("_id".to_string(), Value::Null),
        ("born".to_string(), Value::Null),
    ]
    .into_iter()
    .collect();

    let loaded: Person = Mapper::of::<Person>().load(raw, &registry).unwrap();

    assert_eq!(loaded.id, None);
    assert_eq!(loaded.born, None);
}

#[test]
fn conversion_failures_name_the_field() {
    let registry = Registry::default();
    let raw: Map = [("age".to_string(), Value::from("forty"))].into_iter().collect();

    let err = Mapper::of::<Person>()
        .from_database(raw, &registry)
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert!(err.to_string().starts_with("field `age`"));
}

#[test]
fn unregistered_logical_type_fails() {
    let registry = Registry::empty();

    let err = Mapper::of::<Address>()
        .to_database(&Address::default(), &registry)
        .unwrap_err();

    assert!(err.is_unknown_type());
}
