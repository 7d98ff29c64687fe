use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Model::schema`: the declaration with one `app::Field` per struct field.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let persister = &self.persister;
        let name = &self.model.name;

        let fields = self.model.fields.iter().map(|field| {
            let name = &field.name;

            match &field.ty {
                FieldTy::Primitive(ty) => quote! {
                    #persister::app::Field::primitive(
                        #name,
                        <#ty as #persister::Primitive>::TYPE,
                    )
                },
                FieldTy::Embedded(ty) => quote! {
                    #persister::app::Field::embedded(
                        #name,
                        <#ty as #persister::Model>::schema,
                    )
                },
                FieldTy::EmbeddedList { ty, size } => quote! {
                    #persister::app::Field::embedded_list(
                        #name,
                        <<#ty as #persister::EmbedList>::Item as #persister::Model>::schema,
                        #size,
                    )
                },
            }
        });

        let table_name = self.model.table.as_ref().map(|table| {
            quote!(.with_table_name(#table))
        });

        quote! {
            fn schema() -> #persister::app::Model {
                #persister::app::Model::new::<Self>(
                    #name,
                    #persister::Vec::from([ #( #fields, )* ]),
                )
                #table_name
            }
        }
    }
}
