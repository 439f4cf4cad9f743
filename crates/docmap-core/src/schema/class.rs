use super::Entity;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Describes a document class.
///
/// `fields` lists only the fields the class itself declares. Inherited fields
/// are reached through `parent`.
///
/// A class is identified by its address: descriptors live in statics, one per
/// document type, and two descriptors sharing a name are distinct classes.
pub struct Class {
    /// Class name, used in messages and for catalog lookups
    pub name: &'static str,

    /// The class this one extends, if any
    pub parent: Option<fn() -> &'static Class>,

    /// Fields declared by this class
    pub fields: &'static [DeclaredField],

    /// Constructs a default instance
    pub new: fn() -> Box<dyn Entity>,

    /// Name of the collection storing documents of this class
    pub collection: &'static str,

    /// Name of the connection the collection lives on
    pub connection: &'static str,

    /// True for schemaless classes whose instances accept any property
    pub dynamic: bool,

    /// True when instances expose identifier accessor methods through
    /// [`Entity::as_identifiable`]
    pub identifiable: bool,
}

/// A field declared by a class.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredField {
    pub name: &'static str,
    pub ty: DeclaredType,
}

/// The statically declared type of a field.
#[derive(Clone, Copy)]
pub enum DeclaredType {
    /// A scalar type, identified by name (`"i64"`, `"String"`, ...)
    Scalar(&'static str),

    /// Another document class, stored as an embedded document
    Class(fn() -> &'static Class),

    /// A list of values
    Collection,

    /// Any value; no static type information
    Any,
}

impl Class {
    pub fn parent(&self) -> Option<&'static Class> {
        self.parent.map(|parent| parent())
    }

    /// Iterates the class and its ancestors, most derived first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> + '_ {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// Returns `true` if `self` is `other` or extends it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestors().any(|class| class == other)
    }

    /// Finds a declared field, searching the most derived class first.
    pub fn field(&self, name: &str) -> Option<&DeclaredField> {
        self.ancestors()
            .flat_map(|class| class.fields.iter())
            .find(|field| field.name == name)
    }

    /// Returns `true` if the class or one of its ancestors declares `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// All declared fields, own and inherited. A field redeclared by a
    /// subclass shadows the ancestor's declaration.
    pub fn declared_fields(&self) -> Vec<&DeclaredField> {
        let mut fields: Vec<&DeclaredField> = vec![];

        for field in self.ancestors().flat_map(|class| class.fields.iter()) {
            if !fields.iter().any(|seen| seen.name == field.name) {
                fields.push(field);
            }
        }

        fields
    }

    /// Constructs a default instance of the class.
    pub fn instantiate(&self) -> Box<dyn Entity> {
        (self.new)()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Class) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self, state);
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("parent", &self.parent().map(|parent| parent.name))
            .field("fields", &self.fields)
            .field("collection", &self.collection)
            .finish()
    }
}

impl DeclaredType {
    /// The declared type name: the scalar name or the class name.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Scalar(name) => Some(name),
            Self::Class(class) => Some(class().name),
            Self::Collection | Self::Any => None,
        }
    }

    pub fn as_class(&self) -> Option<&'static Class> {
        match self {
            Self::Class(class) => Some(class()),
            _ => None,
        }
    }
}

impl fmt::Debug for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) => f.debug_tuple("Scalar").field(name).finish(),
            Self::Class(class) => f.debug_tuple("Class").field(&class().name).finish(),
            Self::Collection => f.write_str("Collection"),
            Self::Any => f.write_str("Any"),
        }
    }
}
