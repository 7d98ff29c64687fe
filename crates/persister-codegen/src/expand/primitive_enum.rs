use super::wrap_in_const;
use crate::schema::PrimitiveEnum;

use proc_macro2::TokenStream;
use quote::quote;

/// Implements `Primitive` for a fieldless enum. The column holds the variant name, and
/// loading a name no variant carries is a type conversion error.
pub(crate) fn primitive_enum(item: &PrimitiveEnum) -> TokenStream {
    let persister = quote!(_persister::codegen_support);
    let ident = &item.ident;
    let name = &item.name;

    let load_arms = item.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let variant_name = &variant.name;
        quote!(#variant_name => Ok(Self::#variant_ident),)
    });

    let to_value_arms = item.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let variant_name = &variant.name;
        quote!(Self::#variant_ident => #variant_name,)
    });

    wrap_in_const(quote! {
        impl #persister::Primitive for #ident {
            const TYPE: #persister::Type = #persister::Type::String;

            fn load(value: #persister::Value) -> #persister::Result<Self> {
                let variant: #persister::String = value.try_into()?;

                match variant.as_str() {
                    #( #load_arms )*
                    _ => Err(#persister::Error::type_conversion(
                        #persister::Value::String(variant),
                        #name,
                    )),
                }
            }

            fn to_value(&self) -> #persister::Value {
                let variant = match self {
                    #( #to_value_arms )*
                };

                #persister::Value::String(#persister::String::from(variant))
            }
        }
    })
}
