use super::{merge, Field, FieldsMapping, Node, TypeMap};
use crate::schema::{Class, DeclaredType};

/// Builds a [`FieldsMapping`] from explicit declarations, from a class
/// descriptor, or both.
///
/// Explicit declarations made with [`add`](Self::add) replace any earlier
/// leaf of the same name. [`auto_configure`](Self::auto_configure) only fills
/// in names that are not mapped yet, so explicit declarations made before it
/// take precedence.
#[derive(Debug, Clone, Default)]
pub struct FieldsMappingBuilder {
    mapping: FieldsMapping,
    types: TypeMap,
}

impl FieldsMappingBuilder {
    pub fn new() -> FieldsMappingBuilder {
        FieldsMappingBuilder::default()
    }

    /// Uses `types` to resolve declared types during auto configuration.
    pub fn with_types(types: TypeMap) -> FieldsMappingBuilder {
        FieldsMappingBuilder {
            mapping: FieldsMapping::default(),
            types,
        }
    }

    pub fn types(&self) -> &TypeMap {
        &self.types
    }

    /// Maps `name` to the logical type `ty`.
    pub fn add(&mut self, name: impl Into<String>, ty: impl Into<String>) -> &mut Self {
        self.add_field(Field::new(name, ty))
    }

    /// Maps `name` to the logical type `ty`, with a declared in-memory type
    /// passed to the converter.
    pub fn add_with_hint(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        value_type: impl Into<String>,
    ) -> &mut Self {
        self.add_field(Field::new(name, ty).with_value_type(value_type))
    }

    pub fn add_field(&mut self, field: Field) -> &mut Self {
        let declared = FieldsMapping::new([(field.name().to_string(), Node::Field(field))].into());
        self.mapping = merge(declared, std::mem::take(&mut self.mapping));
        self
    }

    /// Maps `name` to an embedded document. When `name` already holds an
    /// embedded mapping the two are merged, `mapping` winning on conflicts.
    pub fn embedded(&mut self, name: impl Into<String>, mapping: FieldsMapping) -> &mut Self {
        let declared = FieldsMapping::new([(name.into(), Node::Embedded(mapping))].into());
        self.mapping = merge(declared, std::mem::take(&mut self.mapping));
        self
    }

    /// Derives mappings from the fields `class` declares, including inherited
    /// fields. Names that are already mapped are left untouched.
    pub fn auto_configure(&mut self, class: &Class) -> &mut Self {
        let derived = introspect(class, &self.types, &mut vec![]);

        tracing::debug!(
            class = class.name,
            derived = derived.len(),
            "auto-configured fields mapping"
        );

        self.mapping = merge(std::mem::take(&mut self.mapping), derived);
        self
    }

    pub fn build(&self) -> FieldsMapping {
        self.mapping.clone()
    }
}

/// Walks `class` and its ancestors, most derived first. The first declaration
/// of a name wins. Fields whose declared type does not resolve are embedded
/// when they name a class, and skipped otherwise. `visiting` holds the classes
/// being introspected, so self-referencing classes terminate.
fn introspect<'a>(class: &'a Class, types: &TypeMap, visiting: &mut Vec<&'a Class>) -> FieldsMapping {
    let mut mapping = FieldsMapping::default().into_nodes();
    visiting.push(class);

    for declared in class.ancestors().flat_map(|class| class.fields.iter()) {
        if mapping.contains_key(declared.name) {
            continue;
        }

        if let Some(ty) = types.resolve(&declared.ty) {
            let mut field = Field::new(declared.name, ty);

            if let Some(value_type) = declared.ty.name() {
                field = field.with_value_type(value_type);
            }

            mapping.insert(declared.name.to_string(), Node::Field(field));
        } else if let DeclaredType::Class(target) = declared.ty {
            let target = target();

            if visiting.contains(&target) {
                continue;
            }

            let embedded = introspect(target, types, visiting);
            mapping.insert(declared.name.to_string(), Node::Embedded(embedded));
        }
    }

    visiting.pop();
    FieldsMapping::new(mapping)
}
