use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the document be embedded in another document's field.
    pub(super) fn expand_property_impl(&self) -> TokenStream {
        let docmap = &self.docmap;
        let ident = &self.document.ident;

        quote! {
            impl #docmap::Property for #ident {
                const TYPE: #docmap::DeclaredType =
                    #docmap::DeclaredType::Class(<#ident as #docmap::Document>::describe);

                fn to_value(&self) -> #docmap::Value {
                    #docmap::Value::Document(#docmap::extract(self))
                }

                fn from_value(value: #docmap::Value) -> #docmap::Result<Self> {
                    #docmap::load_embedded(value)
                }
            }
        }
    }
}
