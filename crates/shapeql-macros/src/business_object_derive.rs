use crate::business_object_model::BusinessObjectModel;
use crate::business_object_model::FieldRole;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let model = BusinessObjectModel::from_derive_input(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let type_name_fn = model.type_name.as_ref().map(|type_name| quote! {
        fn type_name(&self) -> &'static str {
            #type_name
        }
    });

    let field_value_entries = model.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let name = &field.name;
        let value = match field.role {
            FieldRole::Object { boxed: true } => quote! {
                ::shapeql::FieldValue::object(&*self.#field_ident)
            },
            FieldRole::Object { boxed: false } => quote! {
                ::shapeql::FieldValue::object(&self.#field_ident)
            },
            FieldRole::Objects => quote! {
                ::shapeql::FieldValue::objects(&self.#field_ident)
            },
            FieldRole::Scalar => quote! {
                ::shapeql::ToFieldValue::to_field_value(&self.#field_ident)
            },
        };
        quote! { (#name, #value) }
    });

    let excluded_names =
        model.fields.iter()
            .filter(|field| field.excluded)
            .map(|field| &field.name);

    let unknown_field = quote! {
        ::std::result::Result::Err(::shapeql::FieldError::UnknownField {
            field_name: ::std::string::ToString::to_string(name),
            type_name: ::std::string::ToString::to_string(
                ::shapeql::BusinessObject::type_name(self),
            ),
        })
    };

    let set_field_body = if model.fields.is_empty() {
        quote! {
            let _ = value;
            #unknown_field
        }
    } else {
        let set_field_arms = model.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let name = &field.name;
            let assigned = match field.role {
                FieldRole::Object { boxed: true } => quote! {
                    ::std::boxed::Box::new(value.into_object()?)
                },
                FieldRole::Object { boxed: false } => quote! { value.into_object()? },
                FieldRole::Objects => quote! { value.into_objects()? },
                FieldRole::Scalar => quote! { value.decode()? },
            };
            quote! { #name => self.#field_ident = #assigned, }
        });
        quote! {
            match name {
                #(#set_field_arms)*
                _ => return #unknown_field,
            }
            ::std::result::Result::Ok(())
        }
    };

    let array_fields: Vec<_> =
        model.fields.iter()
            .filter(|field| field.is_vec)
            .collect();
    let clear_array_field_body = if array_fields.is_empty() {
        unknown_field.to_owned()
    } else {
        let clear_arms = array_fields.iter().map(|field| {
            let field_ident = &field.ident;
            let name = &field.name;
            quote! { #name => self.#field_ident.clear(), }
        });
        quote! {
            match name {
                #(#clear_arms)*
                _ => return #unknown_field,
            }
            ::std::result::Result::Ok(())
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::shapeql::BusinessObject for #ident #ty_generics #where_clause {
            #type_name_fn

            fn new_default(&self) -> ::std::boxed::Box<dyn ::shapeql::BusinessObject> {
                ::std::boxed::Box::new(
                    <Self as ::shapeql::QueryableType>::create_default(),
                )
            }

            fn field_values(
                &self,
            ) -> ::std::vec::Vec<(&'static str, ::shapeql::FieldValue<'_>)> {
                ::std::vec![#(#field_value_entries),*]
            }

            fn excluded_fields(&self) -> &[&'static str] {
                &[#(#excluded_names),*]
            }

            fn set_field(
                &mut self,
                name: &str,
                value: ::shapeql::FieldInput,
            ) -> ::std::result::Result<(), ::shapeql::FieldError> {
                #set_field_body
            }

            fn clear_array_field(
                &mut self,
                name: &str,
            ) -> ::std::result::Result<(), ::shapeql::FieldError> {
                #clear_array_field_body
            }
        }

        #[automatically_derived]
        impl #impl_generics ::shapeql::QueryableType for #ident #ty_generics #where_clause {
            fn create_default() -> Self {
                ::std::default::Default::default()
            }
        }
    })
}
