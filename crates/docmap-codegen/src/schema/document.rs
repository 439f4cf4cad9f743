use super::{DocumentAttr, ErrorSet, Field};

use heck::ToSnakeCase;

#[derive(Debug)]
pub(crate) struct Document {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Struct fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Index of the field holding the parent document
    pub(crate) parent: Option<usize>,

    /// Collection name
    pub(crate) collection: String,

    /// Connection name
    pub(crate) connection: String,

    /// True when the type implements `Identifiable`
    pub(crate) identifiable: bool,
}

impl Document {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "document fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "document generics are not supported",
            ));
        }

        let mut attr = DocumentAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        let mut parent = None;

        for (index, field) in fields.iter().enumerate() {
            if !field.is_parent() {
                continue;
            }

            if parent.is_some() {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    "a document has at most one `parent` field",
                ));
            } else {
                parent = Some(index);
            }
        }

        let mut names: Vec<String> = vec![];

        for field in fields.iter().filter(|field| field.is_mapped()) {
            let name = field.name();

            if names.contains(&name) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("duplicate document field `{name}`"),
                ));
            }

            names.push(name);
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            parent,
            collection: attr
                .collection
                .map(|lit| lit.value())
                .unwrap_or_else(|| ast.ident.to_string().to_snake_case()),
            connection: attr
                .connection
                .map(|lit| lit.value())
                .unwrap_or_else(|| "default".to_string()),
            identifiable: attr.identifiable,
        })
    }

    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }

    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_mapped())
    }

    pub(crate) fn parent_field(&self) -> Option<&Field> {
        self.parent.map(|index| &self.fields[index])
    }
}
