use crate::schema::DeclaredType;
use indexmap::IndexMap;

/// The table resolving declared field types to logical types during
/// automatic field mapping.
///
/// Keys are scalar type names or class names. A class-typed field resolves
/// through its class first, then through each ancestor in turn, so an entry
/// for a class also covers its subclasses.
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: IndexMap<String, String>,
}

impl TypeMap {
    /// A table without any entry.
    pub fn empty() -> TypeMap {
        TypeMap {
            entries: IndexMap::new(),
        }
    }

    /// Maps the declared type `declared` to the logical type `logical`.
    pub fn insert(&mut self, declared: impl Into<String>, logical: impl Into<String>) -> &mut Self {
        self.entries.insert(declared.into(), logical.into());
        self
    }

    pub fn with(mut self, declared: impl Into<String>, logical: impl Into<String>) -> Self {
        self.insert(declared, logical);
        self
    }

    pub fn remove(&mut self, declared: &str) -> Option<String> {
        self.entries.shift_remove(declared)
    }

    pub fn get(&self, declared: &str) -> Option<&str> {
        self.entries.get(declared).map(String::as_str)
    }

    /// Resolves a declared type to a logical type name.
    pub fn resolve(&self, ty: &DeclaredType) -> Option<&str> {
        match ty {
            DeclaredType::Scalar(name) => self.get(name),
            DeclaredType::Class(class) => class().ancestors().find_map(|class| self.get(class.name)),
            DeclaredType::Collection | DeclaredType::Any => None,
        }
    }
}

impl Default for TypeMap {
    fn default() -> TypeMap {
        TypeMap::empty()
            .with("bool", "boolean")
            .with("i32", "integer")
            .with("i64", "integer")
            .with("f64", "double")
            .with("String", "string")
            .with("DateTime", "datetime")
            .with("ObjectId", "object_id")
            .with("Bytes", "binary")
    }
}
