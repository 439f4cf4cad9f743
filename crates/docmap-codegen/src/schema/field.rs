use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the struct field
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// The field holds the parent document: `#[document(parent)]`
    pub(crate) parent: Option<syn::Path>,

    /// Stored name, when it differs from the identifier
    pub(crate) rename: Option<syn::LitStr>,

    /// The field is not part of the document: `#[document(skip)]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "document fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("document") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("parent") {
                    if attrs.parent.is_some() {
                        return Err(meta.error("duplicate `parent` argument"));
                    }
                    attrs.parent = Some(meta.path.clone());
                } else if meta.path.is_ident("rename") {
                    if attrs.rename.is_some() {
                        return Err(meta.error("duplicate `rename` argument"));
                    }
                    attrs.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                } else {
                    return Err(meta.error("expected `parent`, `rename = \"..\"` or `skip`"));
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if let Some(parent) = &attrs.parent {
            if attrs.skip || attrs.rename.is_some() {
                errs.push(syn::Error::new_spanned(
                    parent,
                    "`parent` cannot be combined with `skip` or `rename`",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
        })
    }

    /// The name the field is declared and stored under.
    pub(crate) fn name(&self) -> String {
        match &self.attrs.rename {
            Some(rename) => rename.value(),
            None => self.ident.to_string(),
        }
    }

    pub(crate) fn is_parent(&self) -> bool {
        self.attrs.parent.is_some()
    }

    /// True for fields mapped to a document field.
    pub(crate) fn is_mapped(&self) -> bool {
        !self.attrs.skip && !self.is_parent()
    }
}
