use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let persister = &self.persister;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let struct_load_fields = self.expand_struct_load_fields();
        let record_values = self.expand_record_values();
        let name = &self.model.name;
        let len = self.model.fields.len();

        quote! {
            impl #persister::Model for #model_ident {
                #model_schema

                fn load(mut record: #persister::ValueRecord) -> #persister::Result<Self> {
                    record.expect_len(#len, #name)?;

                    Ok(Self {
                        #struct_load_fields
                    })
                }

                fn to_record(&self) -> #persister::ValueRecord {
                    #persister::ValueRecord::from_vec(#persister::Vec::from([
                        #record_values
                    ]))
                }
            }
        }
    }

    fn expand_struct_load_fields(&self) -> TokenStream {
        let persister = &self.persister;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let index = field.id;

                match &field.ty {
                    FieldTy::Primitive(ty) => quote! {
                        #ident: <#ty as #persister::Primitive>::load(record.take(#index))?,
                    },
                    FieldTy::Embedded(ty) => quote! {
                        #ident: <#ty as #persister::Model>::load(record.take(#index).into_record()?)?,
                    },
                    FieldTy::EmbeddedList { ty, .. } => quote! {
                        #ident: <#ty as #persister::EmbedList>::load(record.take(#index))?,
                    },
                }
            })
            .collect()
    }

    fn expand_record_values(&self) -> TokenStream {
        let persister = &self.persister;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                match &field.ty {
                    FieldTy::Primitive(ty) => quote! {
                        <#ty as #persister::Primitive>::to_value(&self.#ident),
                    },
                    FieldTy::Embedded(ty) => quote! {
                        #persister::Value::Record(<#ty as #persister::Model>::to_record(&self.#ident)),
                    },
                    FieldTy::EmbeddedList { ty, .. } => quote! {
                        <#ty as #persister::EmbedList>::to_value(&self.#ident),
                    },
                }
            })
            .collect()
    }
}
