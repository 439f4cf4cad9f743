use docmap_core::mapping::{Field, FieldsMapping, Node};
use docmap_core::{Map, Registry, Value};
use pretty_assertions::assert_eq;

fn map<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn address_mapping() -> FieldsMapping {
    let mut builder = FieldsMapping::builder();
    builder.add("city", "string").add("zip", "integer");

    let mut root = FieldsMapping::builder();
    root.add_with_hint("age", "integer", "int")
        .embedded("addr", builder.build());
    root.build()
}

#[test]
fn unmapped_keys_pass_through() {
    let registry = Registry::default();
    let mapping = FieldsMapping::default();

    let converted = mapping
        .from_database(map([("unmapped_key", Value::I64(42))]), &registry)
        .unwrap();

    assert_eq!(converted, map([("unmapped_key", Value::I64(42))]));
}

#[test]
fn integer_string_is_coerced_on_read() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .from_database(map([("age", Value::from("42"))]), &registry)
        .unwrap();

    assert_eq!(converted, map([("age", Value::I64(42))]));
}

#[test]
fn input_key_order_is_preserved() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .to_database(
            map([
                ("zzz", Value::Bool(true)),
                ("age", Value::I32(3)),
                ("aaa", Value::Null),
            ]),
            &registry,
        )
        .unwrap();

    assert_eq!(converted.keys().collect::<Vec<_>>(), ["zzz", "age", "aaa"]);
    assert_eq!(converted["age"], Value::I64(3));
}

#[test]
fn embedded_extra_keys_are_preserved() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .to_database(
            map([(
                "addr",
                Value::document([("city", Value::from("Paris")), ("extra", Value::I64(1))]),
            )]),
            &registry,
        )
        .unwrap();

    assert_eq!(
        converted,
        map([(
            "addr",
            Value::document([("city", Value::from("Paris")), ("extra", Value::I64(1))]),
        )])
    );
}

#[test]
fn embedded_values_are_converted() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .from_database(
            map([("addr", Value::document([("zip", Value::from("75001"))]))]),
            &registry,
        )
        .unwrap();

    assert_eq!(
        converted,
        map([("addr", Value::document([("zip", Value::I64(75001))]))])
    );
}

#[test]
fn list_of_embedded_documents_shares_the_node() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .from_database(
            map([(
                "addr",
                Value::list([
                    Value::document([("zip", Value::from("1"))]),
                    Value::document([("zip", Value::from("2")), ("note", Value::from("x"))]),
                ]),
            )]),
            &registry,
        )
        .unwrap();

    assert_eq!(
        converted,
        map([(
            "addr",
            Value::list([
                Value::document([("zip", Value::I64(1))]),
                Value::document([("zip", Value::I64(2)), ("note", Value::from("x"))]),
            ]),
        )])
    );
}

#[test]
fn scalar_under_embedded_node_reads_as_empty_document() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .from_database(map([("addr", Value::from("oops"))]), &registry)
        .unwrap();

    assert_eq!(converted, map([("addr", Value::Document(Map::new()))]));
}

#[test]
fn null_under_embedded_node_stays_null() {
    let registry = Registry::default();
    let mapping = address_mapping();

    let converted = mapping
        .to_database(map([("addr", Value::Null)]), &registry)
        .unwrap();

    assert_eq!(converted, map([("addr", Value::Null)]));
}

#[test]
fn unknown_logical_type_fails() {
    let registry = Registry::default();
    let mapping: FieldsMapping = [(
        "price".to_string(),
        Node::Field(Field::new("price", "money")),
    )]
    .into_iter()
    .collect();

    let err = mapping
        .from_database(map([("price", Value::I64(10))]), &registry)
        .unwrap_err();

    assert!(err.is_unknown_type());
    assert_eq!(err.to_string(), "field `price`: unknown type `money`");
}

#[test]
fn unknown_type_is_not_reached_when_key_is_absent() {
    let registry = Registry::default();
    let mapping: FieldsMapping = [(
        "price".to_string(),
        Node::Field(Field::new("price", "money")),
    )]
    .into_iter()
    .collect();

    let converted = mapping
        .from_database(map([("name", Value::from("x"))]), &registry)
        .unwrap();

    assert_eq!(converted, map([("name", Value::from("x"))]));
}

#[test]
fn type_of_resolves_dotted_paths() {
    let registry = Registry::default();
    let mapping = address_mapping();

    assert!(mapping.type_of("age", &registry).unwrap().is_some());
    assert!(mapping.type_of("addr.city", &registry).unwrap().is_some());
    assert!(mapping.type_of("addr", &registry).unwrap().is_none());
    assert!(mapping.type_of("addr.country", &registry).unwrap().is_none());
    assert!(mapping.type_of("age.value", &registry).unwrap().is_none());
    assert!(mapping.type_of("missing", &registry).unwrap().is_none());

    let zip = mapping.field("addr.zip").unwrap();
    assert_eq!(zip.ty(), "integer");
}

#[test]
fn type_of_unregistered_leaf_fails() {
    let mut builder = FieldsMapping::builder();
    builder.add("price", "money");
    let mapping = builder.build();

    let err = mapping
        .type_of("price", &Registry::default())
        .err()
        .unwrap();
    assert!(err.is_unknown_type());
}
