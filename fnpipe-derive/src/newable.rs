//! Implementation of the `#[derive(Newable)]` macro.
//!
//! Every field becomes a parameter, in declaration order. Tuple struct
//! fields are named by position (`"0"`, `"1"`, ...).

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Index, Member};

use crate::field_type::field_slot_type;

/// Expands the derive for an already parsed item.
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return syn::Error::new_spanned(&input.ident, "Newable can only be derived for structs, not enums.")
                .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Newable cannot be derived for unions.")
                .to_compile_error();
        }
    };

    let name = &input.ident;
    let type_name = name.to_string();

    let members: Vec<Member> = fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            field.ident.clone().map_or_else(
                || Member::Unnamed(Index::from(position)),
                Member::Named,
            )
        })
        .collect();
    let parameters: Vec<String> = members
        .iter()
        .map(|member| match member {
            Member::Named(ident) => ident.to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        })
        .collect();
    let bindings: Vec<TokenStream2> = fields
        .iter()
        .zip(&parameters)
        .map(|(field, parameter)| binding(field, parameter))
        .collect();

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for field in fields {
            let ty = &field.ty;
            where_clause.predicates.push(syn::parse_quote!(#ty: 'static));
        }
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let construct = if members.is_empty() {
        quote! {
            fn construct(
                _arguments: ::fnpipe::record::BoundArguments,
            ) -> ::core::result::Result<Self, ::fnpipe::Error> {
                ::core::result::Result::Ok(Self {})
            }
        }
    } else {
        quote! {
            fn construct(
                mut arguments: ::fnpipe::record::BoundArguments,
            ) -> ::core::result::Result<Self, ::fnpipe::Error> {
                ::core::result::Result::Ok(Self {
                    #( #members: #bindings, )*
                })
            }
        }
    };

    quote! {
        impl #impl_generics ::fnpipe::record::Newable for #name #type_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const PARAMETERS: &'static [&'static str] = &[#(#parameters),*];

            #construct
        }
    }
}

fn binding(field: &Field, parameter: &str) -> TokenStream2 {
    match field_slot_type(&field.ty) {
        Some(slot_type) => quote! { arguments.optional::<#slot_type>(#parameter)? },
        None => {
            let ty = &field.ty;
            quote! { arguments.required::<#ty>(#parameter)? }
        }
    }
}
