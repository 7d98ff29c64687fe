use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Field identifier in the struct
    pub(crate) ident: syn::Ident,

    /// Persisted member name, the identifier without a raw prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// A single column value
    Primitive(syn::Type),

    /// `#[embed]`: a nested model
    Embedded(syn::Type),

    /// `#[embed(size = N)]`: a fixed-size list of nested models
    EmbeddedList { ty: syn::Type, size: syn::LitInt },
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut ty = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("embed") {
                continue;
            }

            if ty.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[embed] attribute"));
            }

            ty = Some(match &attr.meta {
                syn::Meta::Path(_) => FieldTy::Embedded(field.ty.clone()),
                syn::Meta::List(_) => {
                    let mut size = None;

                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("size") {
                            size = Some(meta.value()?.parse::<syn::LitInt>()?);
                            Ok(())
                        } else {
                            Err(meta.error("unsupported embed property; expected `size = N`"))
                        }
                    })?;

                    let Some(size) = size else {
                        return Err(syn::Error::new_spanned(attr, "expected `size = N`"));
                    };

                    // Reject negative or non-integer sizes here; range checks happen when
                    // the descriptor is built.
                    size.base10_parse::<usize>()?;

                    FieldTy::EmbeddedList {
                        ty: field.ty.clone(),
                        size,
                    }
                }
                syn::Meta::NameValue(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `#[embed]` or `#[embed(size = N)]`",
                    ));
                }
            });
        }

        Ok(Field {
            id,
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: ty.unwrap_or_else(|| FieldTy::Primitive(field.ty.clone())),
        })
    }
}
