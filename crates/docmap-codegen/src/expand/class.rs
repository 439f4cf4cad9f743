use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Generates the `Document` impl, whose `describe` returns the class
    /// descriptor held in a static.
    pub(super) fn expand_document_impl(&self) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &self.document.ident;
        let name = self.document.name();
        let collection = &self.document.collection;
        let connection = &self.document.connection;
        let identifiable = self.document.identifiable;
        let parent = self.expand_parent();
        let fields = self.expand_declared_fields();

        quote! {
            impl #docmap::Document for #ident {
                fn describe() -> &'static #docmap::Class {
                    fn __docmap_new() -> #docmap::Box<dyn #docmap::Entity> {
                        #docmap::Box::new(<#ident as #docmap::Default>::default())
                    }

                    static CLASS: #docmap::Class = #docmap::Class {
                        name: #name,
                        parent: #parent,
                        fields: &[ #( #fields ),* ],
                        new: __docmap_new,
                        collection: #collection,
                        connection: #connection,
                        dynamic: false,
                        identifiable: #identifiable,
                    };

                    &CLASS
                }
            }
        }
    }

    fn expand_parent(&self) -> TokenStream {
        let docmap = &self.docmap;

        match self.document.parent_field() {
            Some(parent) => {
                let ty = &parent.ty;
                quote!(#docmap::Option::Some(<#ty as #docmap::Document>::describe))
            }
            None => quote!(#docmap::Option::None),
        }
    }

    fn expand_declared_fields(&self) -> Vec<TokenStream> {
        let docmap = &self.docmap;

        self.document
            .mapped_fields()
            .map(|field| {
                let name = field.name();
                let ty = &field.ty;

                quote! {
                    #docmap::DeclaredField {
                        name: #name,
                        ty: <#ty as #docmap::Property>::TYPE,
                    }
                }
            })
            .collect()
    }
}
