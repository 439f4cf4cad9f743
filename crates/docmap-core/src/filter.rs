use crate::{value_bson, Map, Value};

/// A data-only query predicate scoping a collection, expressed as a
/// conjunction of per-field predicates.
///
/// The empty filter matches every document. Filters are consumed by the query
/// layer, which embeds them into complete queries; [`Filter::to_document`]
/// renders the conventional document-store form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    clauses: Vec<Clause>,
}

/// One field constraint of a [`Filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The constrained field name.
    pub field: String,

    /// What the field must satisfy.
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The field equals the value.
    Eq(Value),

    /// The field equals one of the values.
    In(Vec<Value>),

    /// The field is present, whatever its value (including null).
    Exists,
}

impl Filter {
    /// The filter matching every document.
    pub fn all() -> Filter {
        Filter::default()
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::from_clause(field, Predicate::Eq(value.into()))
    }

    pub fn one_of(field: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Filter {
        Filter::from_clause(field, Predicate::In(values.into_iter().collect()))
    }

    pub fn exists(field: impl Into<String>) -> Filter {
        Filter::from_clause(field, Predicate::Exists)
    }

    fn from_clause(field: impl Into<String>, predicate: Predicate) -> Filter {
        Filter {
            clauses: vec![Clause {
                field: field.into(),
                predicate,
            }],
        }
    }

    /// Conjunction of `self` and `other`.
    pub fn and(mut self, other: Filter) -> Filter {
        self.clauses.extend(other.clauses);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluates the filter against a raw document.
    pub fn matches(&self, document: &Map) -> bool {
        self.clauses.iter().all(|clause| clause.matches(document))
    }

    /// Renders the filter in document-store form: `{field: value}` for
    /// equality, `{field: {"$in": [..]}}` for membership and
    /// `{field: {"$exists": true}}` for existence. When a field is constrained
    /// more than once the clauses are wrapped in `$and`.
    pub fn to_document(&self) -> Map {
        let mut document = Map::new();

        for clause in &self.clauses {
            if document.contains_key(&clause.field) {
                let clauses = self
                    .clauses
                    .iter()
                    .map(|clause| Value::Document(clause.to_document()))
                    .collect();

                return Map::from_iter([("$and".to_string(), Value::List(clauses))]);
            }

            document.extend(clause.to_document());
        }

        document
    }

    /// Renders the filter as a BSON query document.
    pub fn to_bson(&self) -> bson::Document {
        value_bson::map_to_bson(&self.to_document())
    }
}

impl Clause {
    fn matches(&self, document: &Map) -> bool {
        let value = document.get(&self.field);

        match &self.predicate {
            Predicate::Exists => value.is_some(),
            Predicate::Eq(expected) => value.is_some_and(|value| same_value(value, expected)),
            Predicate::In(expected) => {
                value.is_some_and(|value| expected.iter().any(|expected| same_value(value, expected)))
            }
        }
    }

    fn to_document(&self) -> Map {
        let rendered = match &self.predicate {
            Predicate::Eq(value) => value.clone(),
            Predicate::In(values) => Value::document([("$in", Value::List(values.clone()))]),
            Predicate::Exists => Value::document([("$exists", true)]),
        };

        Map::from_iter([(self.field.clone(), rendered)])
    }
}

/// Equality as the store applies it: integers compare by value whatever their
/// width.
fn same_value(stored: &Value, expected: &Value) -> bool {
    match (stored.as_i64(), expected.as_i64()) {
        (Some(stored), Some(expected)) => stored == expected,
        _ => stored == expected,
    }
}
