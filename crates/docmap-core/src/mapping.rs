mod builder;
pub use builder::FieldsMappingBuilder;

mod field;
pub use field::Field;

mod merge;
pub use merge::merge;

mod type_map;
pub use type_map::TypeMap;

use crate::types::{Converter, TypeRegistry};
use crate::{Map, Result, Value};
use indexmap::IndexMap;

/// Maps the fields of a document class to logical types.
///
/// The mapping is a tree: a name maps either to a [`Field`] leaf or to the
/// mapping of an embedded document. It is built once per document class and
/// is read-only afterwards.
///
/// Conversions walk the *input* document, not the tree. Keys without a node
/// pass through unchanged, so the output always has the input's keys in the
/// input's order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldsMapping {
    nodes: IndexMap<String, Node>,
}

/// A node of a [`FieldsMapping`] tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single value converted by a logical type
    Field(Field),

    /// An embedded document, or a list of embedded documents
    Embedded(FieldsMapping),
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    FromDatabase,
    ToDatabase,
}

impl FieldsMapping {
    pub fn new(nodes: IndexMap<String, Node>) -> FieldsMapping {
        FieldsMapping { nodes }
    }

    pub fn builder() -> FieldsMappingBuilder {
        FieldsMappingBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn nodes(&self) -> &IndexMap<String, Node> {
        &self.nodes
    }

    pub fn into_nodes(self) -> IndexMap<String, Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Converts a raw stored document to its in-memory form.
    pub fn from_database(&self, raw: Map, registry: &dyn TypeRegistry) -> Result<Map> {
        self.convert(raw, registry, Direction::FromDatabase)
    }

    /// Converts an extracted in-memory document to its wire form.
    pub fn to_database(&self, document: Map, registry: &dyn TypeRegistry) -> Result<Map> {
        self.convert(document, registry, Direction::ToDatabase)
    }

    /// Finds the leaf at a dotted path such as `"address.city"`.
    pub fn field(&self, path: &str) -> Option<&Field> {
        let mut mapping = self;
        let mut steps = path.split('.').peekable();

        while let Some(step) = steps.next() {
            match (mapping.get(step)?, steps.peek()) {
                (Node::Field(field), None) => return Some(field),
                (Node::Embedded(embedded), Some(_)) => mapping = embedded,
                _ => return None,
            }
        }

        None
    }

    /// Resolves the converter of the leaf at a dotted path. Returns `None`
    /// for unknown paths and for paths naming an embedded document.
    pub fn type_of<'r>(
        &self,
        path: &str,
        registry: &'r dyn TypeRegistry,
    ) -> Result<Option<&'r dyn Converter>> {
        match self.field(path) {
            Some(field) => registry.get(field.ty()).map(Some),
            None => Ok(None),
        }
    }

    fn convert(&self, input: Map, registry: &dyn TypeRegistry, direction: Direction) -> Result<Map> {
        let mut output = Map::with_capacity(input.len());

        for (key, value) in input {
            let value = match self.nodes.get(&key) {
                None => value,
                Some(Node::Field(field)) => match direction {
                    Direction::FromDatabase => field.from_database(value, registry)?,
                    Direction::ToDatabase => field.to_database(value, registry)?,
                },
                Some(Node::Embedded(embedded)) => {
                    embedded.convert_embedded(value, registry, direction)?
                }
            };

            output.insert(key, value);
        }

        Ok(output)
    }

    /// An embedded node applies to whatever is stored under its name: a
    /// document is converted, a list has each item converted with the same
    /// mapping, null stays null and any other value is read as an empty
    /// document.
    fn convert_embedded(
        &self,
        value: Value,
        registry: &dyn TypeRegistry,
        direction: Direction,
    ) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Document(map) => Ok(Value::Document(self.convert(map, registry, direction)?)),
            Value::List(items) => items
                .into_iter()
                .map(|item| self.convert_embedded(item, registry, direction))
                .collect::<Result<_>>()
                .map(Value::List),
            _ => Ok(Value::Document(self.convert(Map::new(), registry, direction)?)),
        }
    }
}

impl FromIterator<(String, Node)> for FieldsMapping {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> FieldsMapping {
        FieldsMapping::new(iter.into_iter().collect())
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Node {
        Node::Field(field)
    }
}

impl From<FieldsMapping> for Node {
    fn from(mapping: FieldsMapping) -> Node {
        Node::Embedded(mapping)
    }
}

impl Node {
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Node::Field(field) => Some(field),
            Node::Embedded(_) => None,
        }
    }

    pub fn as_embedded(&self) -> Option<&FieldsMapping> {
        match self {
            Node::Embedded(mapping) => Some(mapping),
            Node::Field(_) => None,
        }
    }
}
