extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `persister::Model` for a struct with named fields.
///
/// Fields are persisted in declaration order; the first one is the identifier.
///
/// * `#[table = "name"]` on the struct overrides the table name.
/// * `#[embed]` marks a field holding another model.
/// * `#[embed(size = N)]` marks a `Vec` of exactly `N` models.
#[proc_macro_derive(Model, attributes(embed, table))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match persister_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Implements `persister::Primitive` for an enum whose variants carry no fields.
///
/// The enum is stored in a text column holding the variant name.
#[proc_macro_derive(Primitive)]
pub fn derive_primitive(input: TokenStream) -> TokenStream {
    match persister_codegen::generate_primitive(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
