use docmap_core::mapping::{Field, FieldsMapping, Node, TypeMap};
use docmap_core::schema::{Class, DeclaredField, DeclaredType, Entity};
use docmap_core::{FieldsMappingBuilder, Registry, Value};
use pretty_assertions::assert_eq;
use std::any::Any;

#[derive(Debug, Default)]
struct Blank;

impl Entity for Blank {
    fn class(&self) -> &'static Class {
        base()
    }

    fn read(&self, _field: &str) -> Option<Value> {
        None
    }

    fn write(&mut self, field: &str, _value: Value) -> docmap_core::Result<()> {
        Err(docmap_core::Error::undeclared_field("Blank", field))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

fn blank() -> Box<dyn Entity> {
    Box::new(Blank)
}

macro_rules! class {
    ($name:literal, $parent:expr, [$($field:literal: $ty:expr),* $(,)?]) => {
        Class {
            name: $name,
            parent: $parent,
            fields: &[$(DeclaredField { name: $field, ty: $ty }),*],
            new: blank,
            collection: "things",
            connection: "default",
            dynamic: false,
            identifiable: false,
        }
    };
}

static BASE: Class = class!("Base", None, [
    "value": DeclaredType::Scalar("i64"),
    "created": DeclaredType::Scalar("DateTime"),
    "tags": DeclaredType::Collection,
    "extra": DeclaredType::Any,
    "ratio": DeclaredType::Scalar("f32"),
]);

static DERIVED: Class = class!("Derived", Some(base), [
    "value": DeclaredType::Scalar("String"),
    "address": DeclaredType::Class(address),
    "price": DeclaredType::Class(euro),
]);

static ADDRESS: Class = class!("Address", None, [
    "city": DeclaredType::Scalar("String"),
    "zip": DeclaredType::Scalar("i32"),
]);

static MONEY: Class = class!("Money", None, ["amount": DeclaredType::Scalar("f64")]);

static EURO: Class = class!("Euro", Some(money), []);

static TREE: Class = class!("Tree", None, [
    "label": DeclaredType::Scalar("String"),
    "child": DeclaredType::Class(tree),
]);

fn base() -> &'static Class {
    &BASE
}

fn address() -> &'static Class {
    &ADDRESS
}

fn money() -> &'static Class {
    &MONEY
}

fn euro() -> &'static Class {
    &EURO
}

fn tree() -> &'static Class {
    &TREE
}

fn leaf(name: &str, ty: &str, value_type: &str) -> Node {
    Node::Field(Field::new(name, ty).with_value_type(value_type))
}

#[test]
fn derived_declaration_shadows_ancestor() {
    let mapping = FieldsMapping::builder().auto_configure(&DERIVED).build();

    assert_eq!(mapping.get("value"), Some(&leaf("value", "string", "String")));

    let base_only = FieldsMapping::builder().auto_configure(&BASE).build();
    assert_eq!(base_only.get("value"), Some(&leaf("value", "integer", "i64")));
}

#[test]
fn inherited_fields_are_mapped() {
    let mapping = FieldsMapping::builder().auto_configure(&DERIVED).build();
    assert_eq!(
        mapping.get("created"),
        Some(&leaf("created", "datetime", "DateTime"))
    );
}

#[test]
fn unresolvable_fields_are_omitted() {
    let mapping = FieldsMapping::builder().auto_configure(&BASE).build();

    assert!(mapping.get("tags").is_none());
    assert!(mapping.get("extra").is_none());
    assert!(mapping.get("ratio").is_none());
    assert_eq!(mapping.len(), 2);
}

#[test]
fn class_typed_fields_are_embedded() {
    let mapping = FieldsMapping::builder().auto_configure(&DERIVED).build();

    let address = mapping.get("address").and_then(Node::as_embedded).unwrap();
    assert_eq!(address.get("city"), Some(&leaf("city", "string", "String")));
    assert_eq!(address.get("zip"), Some(&leaf("zip", "integer", "i32")));

    let price = mapping.get("price").and_then(Node::as_embedded).unwrap();
    assert_eq!(price.get("amount"), Some(&leaf("amount", "double", "f64")));
}

#[test]
fn type_map_entry_for_ancestor_covers_subclass() {
    let types = TypeMap::default().with("Money", "json");
    let mapping = FieldsMappingBuilder::with_types(types)
        .auto_configure(&DERIVED)
        .build();

    assert_eq!(mapping.get("price"), Some(&leaf("price", "json", "Euro")));
}

#[test]
fn exact_class_entry_is_found() {
    let types = TypeMap::default().with("Address", "json");
    let mapping = FieldsMappingBuilder::with_types(types)
        .auto_configure(&DERIVED)
        .build();

    assert_eq!(mapping.get("address"), Some(&leaf("address", "json", "Address")));
}

#[test]
fn explicit_declaration_before_auto_configure_wins() {
    let mapping = FieldsMapping::builder()
        .add("value", "json")
        .auto_configure(&DERIVED)
        .build();

    assert_eq!(mapping.get("value"), Some(&Node::Field(Field::new("value", "json"))));
    assert!(mapping.get("created").is_some());
}

#[test]
fn explicit_declaration_after_auto_configure_replaces() {
    let mapping = FieldsMapping::builder()
        .auto_configure(&DERIVED)
        .add("created", "string")
        .build();

    assert_eq!(
        mapping.get("created"),
        Some(&Node::Field(Field::new("created", "string")))
    );
}

#[test]
fn explicit_embedded_mapping_merges_with_derived() {
    let mut address = FieldsMapping::builder();
    address.add("city", "json");

    let mapping = FieldsMapping::builder()
        .embedded("address", address.build())
        .auto_configure(&DERIVED)
        .build();

    let address = mapping.get("address").and_then(Node::as_embedded).unwrap();
    assert_eq!(address.get("city"), Some(&Node::Field(Field::new("city", "json"))));
    assert_eq!(address.get("zip"), Some(&leaf("zip", "integer", "i32")));
}

#[test]
fn self_referencing_class_terminates() {
    let mapping = FieldsMapping::builder().auto_configure(&TREE).build();

    assert_eq!(mapping.get("label"), Some(&leaf("label", "string", "String")));
    assert!(mapping.get("child").is_none());
}

#[test]
fn derived_mapping_converts_documents() {
    let registry = Registry::default();
    let mapping = FieldsMapping::builder().auto_configure(&DERIVED).build();

    let stored = mapping
        .to_database(
            [
                ("value".to_string(), Value::I64(5)),
                (
                    "address".to_string(),
                    Value::document([("zip", Value::from("1000"))]),
                ),
            ]
            .into_iter()
            .collect(),
            &registry,
        )
        .unwrap();

    assert_eq!(stored["value"], Value::from("5"));
    assert_eq!(stored["address"], Value::document([("zip", Value::I64(1000))]));
}

