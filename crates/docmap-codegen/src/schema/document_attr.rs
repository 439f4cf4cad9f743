use super::ErrorSet;

/// Struct-level `#[document(...)]` arguments.
#[derive(Debug, Default)]
pub(crate) struct DocumentAttr {
    /// Collection storing the documents, defaults to the snake-cased type name
    pub(crate) collection: Option<syn::LitStr>,

    /// Connection the collection lives on
    pub(crate) connection: Option<syn::LitStr>,

    /// True when the type implements `Identifiable`
    pub(crate) identifiable: bool,
}

impl DocumentAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("document") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("collection") {
                    if self.collection.is_some() {
                        return Err(meta.error("duplicate `collection` argument"));
                    }
                    self.collection = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("connection") {
                    if self.connection.is_some() {
                        return Err(meta.error("duplicate `connection` argument"));
                    }
                    self.connection = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("identifiable") {
                    if self.identifiable {
                        return Err(meta.error("duplicate `identifiable` argument"));
                    }
                    self.identifiable = true;
                } else {
                    return Err(meta.error(
                        "expected `collection = \"..\"`, `connection = \"..\"` or `identifiable`",
                    ));
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
