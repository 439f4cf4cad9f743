extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Document`, `Entity` and `Property` for a struct with named
/// fields.
///
/// The struct must also implement `Default` and `Debug`.
///
/// Struct arguments: `#[document(collection = "..", connection = "..",
/// identifiable)]`. Field arguments: `#[document(parent)]` on the field
/// holding the parent document, `#[document(rename = "..")]` and
/// `#[document(skip)]`.
#[proc_macro_derive(Document, attributes(document))]
pub fn derive_document(input: TokenStream) -> TokenStream {
    match docmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
