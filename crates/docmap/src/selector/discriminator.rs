use super::Select;
use docmap_core::schema::{Catalog, Class, Entity};
use docmap_core::{Filter, Map, Result, Value};
use indexmap::IndexMap;

/// Selects the class from the value of a discriminator field.
///
/// Configured with a forward map from discriminator value to class. Several
/// values may map to the same class; the inverse map used to build filters is
/// computed once, at construction.
#[derive(Debug, Clone)]
pub struct Discriminator {
    base: &'static Class,

    /// Name of the discriminator field
    field: String,

    /// Discriminator value to class
    classes: IndexMap<Tag, &'static Class>,

    /// Class to every discriminator value mapping to it, in declaration order
    tags: IndexMap<&'static Class, Vec<Tag>>,
}

/// A discriminator value. Only strings and integers discriminate; any other
/// stored value selects the base class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Int(i64),
    Str(String),
}

impl Discriminator {
    /// Field holding the discriminator unless configured otherwise.
    pub const DEFAULT_FIELD: &'static str = "_type";

    pub fn new<T: Into<Tag>>(
        base: &'static Class,
        mapping: impl IntoIterator<Item = (T, &'static Class)>,
    ) -> Discriminator {
        let classes: IndexMap<Tag, &'static Class> = mapping
            .into_iter()
            .map(|(tag, class)| (tag.into(), class))
            .collect();

        let mut tags: IndexMap<&'static Class, Vec<Tag>> = IndexMap::new();

        for (tag, class) in &classes {
            tags.entry(*class).or_default().push(tag.clone());
        }

        Discriminator {
            base,
            field: Self::DEFAULT_FIELD.to_string(),
            classes,
            tags,
        }
    }

    /// Builds a discriminator selector from class names, resolved through
    /// `catalog`.
    pub fn from_catalog<T: Into<Tag>>(
        catalog: &Catalog,
        base: &str,
        mapping: impl IntoIterator<Item = (T, &'static str)>,
    ) -> Result<Discriminator> {
        let base = catalog.resolve(base)?;
        let mapping = mapping
            .into_iter()
            .map(|(tag, name)| Ok((tag.into(), catalog.resolve(name)?)))
            .collect::<Result<Vec<(Tag, _)>>>()?;

        Ok(Discriminator::new(base, mapping))
    }

    /// Reads the discriminator from `field` instead of `_type`.
    pub fn with_field(mut self, field: impl Into<String>) -> Discriminator {
        self.field = field.into();
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn base(&self) -> &'static Class {
        self.base
    }

    /// The discriminator values selecting `class`.
    pub fn tags(&self, class: &Class) -> &[Tag] {
        self.tags.get(class).map(Vec::as_slice).unwrap_or_default()
    }

    fn resolve(&self, raw: &Map) -> Option<&'static Class> {
        let tag = Tag::from_value(raw.get(&self.field)?)?;
        self.classes.get(&tag).copied()
    }
}

impl Select for Discriminator {
    fn instantiate(&self, raw: &Map) -> Box<dyn Entity> {
        match self.resolve(raw) {
            Some(class) => class.instantiate(),
            None => {
                tracing::debug!(
                    base = self.base.name,
                    field = %self.field,
                    "no class for discriminator; using base class"
                );
                self.base.instantiate()
            }
        }
    }

    fn filters(&self, class: &Class) -> Filter {
        match self.tags(class) {
            [] => Filter::all(),
            [tag] => Filter::eq(&self.field, tag.to_value()),
            tags => Filter::one_of(&self.field, tags.iter().map(Tag::to_value)),
        }
    }
}

impl Tag {
    /// Reads a stored value as a discriminator. Returns `None` for values
    /// that cannot discriminate.
    pub fn from_value(value: &Value) -> Option<Tag> {
        match value {
            Value::String(v) => Some(Tag::Str(v.clone())),
            Value::I32(v) => Some(Tag::Int(*v as i64)),
            Value::I64(v) => Some(Tag::Int(*v)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Tag::Int(v) => Value::I64(*v),
            Tag::Str(v) => Value::String(v.clone()),
        }
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Tag {
        Tag::Str(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Tag {
        Tag::Str(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Tag {
        Tag::Int(value as i64)
    }
}

impl From<i64> for Tag {
    fn from(value: i64) -> Tag {
        Tag::Int(value)
    }
}
