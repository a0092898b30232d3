//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates `describe` (one shape entry per field, in declaration order)
//! and `blank` (every field uninitialized).

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

use crate::field_type::field_slot_type;

/// Expands the derive for an already parsed item.
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => expand_named(input, fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                &input.ident,
                "Record cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => {
            syn::Error::new_spanned(&input.ident, "Record can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Record cannot be derived for unions.").to_compile_error()
        }
    }
}

fn expand_named(input: &DeriveInput, fields: &FieldsNamed) -> TokenStream2 {
    let name = &input.ident;
    let type_name = name.to_string();

    let mut names = Vec::new();
    let mut slot_types = Vec::new();
    for field in &fields.named {
        let Some(slot_type) = field_slot_type(&field.ty) else {
            return syn::Error::new_spanned(
                &field.ty,
                "every field of a Record must be declared as `Field<T>`",
            )
            .to_compile_error();
        };
        names.push(field.ident.clone());
        slot_types.push(slot_type);
    }
    let name_strings: Vec<String> = names
        .iter()
        .flatten()
        .map(ToString::to_string)
        .collect();

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for slot_type in &slot_types {
            where_clause
                .predicates
                .push(syn::parse_quote!(#slot_type: ::core::clone::Clone + 'static));
        }
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::fnpipe::record::Record for #name #type_generics #where_clause {
            fn describe() -> ::fnpipe::record::Shape<Self> {
                ::fnpipe::record::Shape::<Self>::new(#type_name)
                    #(
                        .field(
                            #name_strings,
                            |record| &record.#names,
                            |record| &mut record.#names,
                        )
                    )*
            }

            fn blank() -> Self {
                Self {
                    #( #names: ::fnpipe::record::Field::Uninitialized, )*
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    fn test_named_struct_expands_to_impl() {
        let input: DeriveInput = parse_quote! {
            struct Point {
                x: Field<i32>,
                y: Field<i32>,
            }
        };
        let expanded = expand(&input).to_string();
        assert!(expanded.contains("Record for Point"));
        assert!(expanded.contains("\"x\""));
        assert!(expanded.contains("\"y\""));
        assert!(!expanded.contains("compile_error"));
    }

    #[rstest]
    fn test_plain_field_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Point {
                x: Field<i32>,
                y: i32,
            }
        };
        assert!(expand(&input).to_string().contains("compile_error"));
    }

    #[rstest]
    fn test_enum_is_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Choice { A, B }
        };
        assert!(expand(&input).to_string().contains("compile_error"));
    }
}
