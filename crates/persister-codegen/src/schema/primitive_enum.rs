use super::ErrorSet;

use syn::ext::IdentExt;

/// A fieldless enum stored as the name of its variant.
#[derive(Debug)]
pub(crate) struct PrimitiveEnum {
    /// Enum name
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Variants, in declaration order
    pub(crate) variants: Vec<Variant>,
}

#[derive(Debug)]
pub(crate) struct Variant {
    /// Name written to the column
    pub(crate) name: String,

    pub(crate) ident: syn::Ident,
}

impl PrimitiveEnum {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "primitive enum generics are not supported",
            ));
        }

        if ast.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "primitive enums must have at least one variant",
            ));
        }

        let mut variants = vec![];
        let mut errs = ErrorSet::new();

        for node in &ast.variants {
            if !matches!(node.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    node,
                    "primitive enum variants must not have fields",
                ));
                continue;
            }

            variants.push(Variant {
                name: node.ident.unraw().to_string(),
                ident: node.ident.clone(),
            });
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(PrimitiveEnum {
            name: ast.ident.unraw().to_string(),
            ident: ast.ident.clone(),
            variants,
        })
    }
}
