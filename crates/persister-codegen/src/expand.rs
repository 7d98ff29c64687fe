mod model;
mod primitive_enum;
pub(super) use primitive_enum::primitive_enum;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for persister types
    persister: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();

        wrap_in_const(quote! {
            #model_impls
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        persister: quote!(_persister::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use persister as _persister;
            #code
        };
    }
}
