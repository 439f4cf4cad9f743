use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &self.document.ident;
        let read_body = self.expand_read_body();
        let write_body = self.expand_write_body();
        let identifiable = self.expand_as_identifiable();

        quote! {
            impl #docmap::Entity for #ident {
                fn class(&self) -> &'static #docmap::Class {
                    <Self as #docmap::Document>::describe()
                }

                fn read(&self, field: &str) -> #docmap::Option<#docmap::Value> {
                    #read_body
                }

                fn write(&mut self, field: &str, value: #docmap::Value) -> #docmap::Result<()> {
                    #write_body
                }

                #identifiable

                fn as_any(&self) -> &dyn #docmap::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn #docmap::Any {
                    self
                }

                fn into_any(self: #docmap::Box<Self>) -> #docmap::Box<dyn #docmap::Any> {
                    self
                }
            }
        }
    }

    /// Declared fields are matched by name. Other names are delegated to the
    /// parent document, if any.
    fn expand_read_body(&self) -> TokenStream {
        let docmap = &self.docmap;

        let arms = self.document.mapped_fields().map(|field| {
            let name = field.name();
            let field_ident = &field.ident;

            quote! {
                #name => #docmap::Option::Some(#docmap::Property::to_value(&self.#field_ident)),
            }
        });

        let fallback = match self.document.parent_field() {
            Some(parent) => {
                let parent_ident = &parent.ident;
                quote!(#docmap::Entity::read(&self.#parent_ident, field))
            }
            None => quote!(#docmap::Option::None),
        };

        quote! {
            match field {
                #( #arms )*
                _ => #fallback,
            }
        }
    }

    fn expand_write_body(&self) -> TokenStream {
        let docmap = &self.docmap;
        let name = self.document.name();

        let arms = self.document.mapped_fields().map(|field| {
            let field_name = field.name();
            let field_ident = &field.ident;

            quote! {
                #field_name => {
                    self.#field_ident = #docmap::Property::from_value(value)?;
                    ::core::result::Result::Ok(())
                }
            }
        });

        let fallback = match self.document.parent_field() {
            Some(parent) => {
                let parent_ident = &parent.ident;
                quote!(#docmap::Entity::write(&mut self.#parent_ident, field, value))
            }
            None => quote!(::core::result::Result::Err(
                #docmap::Error::undeclared_field(#name, field)
            )),
        };

        quote! {
            match field {
                #( #arms )*
                _ => #fallback,
            }
        }
    }

    fn expand_as_identifiable(&self) -> TokenStream {
        if !self.document.identifiable {
            return quote!();
        }

        let docmap = &self.docmap;

        quote! {
            fn as_identifiable(&self) -> #docmap::Option<&dyn #docmap::Identifiable> {
                #docmap::Option::Some(self)
            }

            fn as_identifiable_mut(&mut self) -> #docmap::Option<&mut dyn #docmap::Identifiable> {
                #docmap::Option::Some(self)
            }
        }
    }
}
