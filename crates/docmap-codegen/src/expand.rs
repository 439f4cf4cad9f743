mod class;
mod entity;
mod property;

use crate::schema::Document;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The document being expanded
    document: &'a Document,

    /// Path prefix for docmap types
    docmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let document_impl = self.expand_document_impl();
        let entity_impl = self.expand_entity_impl();
        let property_impl = self.expand_property_impl();

        wrap_in_const(quote! {
            #document_impl
            #entity_impl
            #property_impl
        })
    }
}

pub(super) fn document(document: &Document) -> TokenStream {
    Expand {
        document,
        docmap: quote!(_docmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use docmap as _docmap;
            #code
        };
    }
}
