//! Params derive macro implementation.
//!
//! Generates `curly::ParamSource` implementations from struct definitions.
//! The generated `get` matches on the field name, clones the field into a
//! `curly::Value`, and reports zero-valued fields as not-present.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, FieldsNamed};

/// Main entry point for the Params derive macro.
pub fn derive_params(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_params_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_params_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = validate_struct_with_named_fields(input)?;

    let arms = fields
        .named
        .iter()
        .filter(|field| !is_skipped(field))
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field has an ident");
            let key = ident.to_string();
            quote! {
                #key => ::curly::Value::from(::core::clone::Clone::clone(&self.#ident)),
            }
        });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::curly::ParamSource for #name #ty_generics #where_clause {
            fn get(&self, name: &str) -> ::core::option::Option<::curly::Value> {
                let value = match name {
                    #(#arms)*
                    _ => return ::core::option::Option::None,
                };
                // Zero-valued fields read as not-present.
                if value.is_zero() {
                    ::core::option::Option::None
                } else {
                    ::core::option::Option::Some(value)
                }
            }
        }
    })
}

/// Validate that the input is a struct with named fields and return them.
fn validate_struct_with_named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Params can only be derived for structs",
        ));
    };
    match &data.fields {
        Fields::Named(named) => Ok(named),
        _ => Err(syn::Error::new_spanned(
            input,
            "Params requires named fields",
        )),
    }
}

/// Returns `true` if the field carries `#[params(skip)]`.
fn is_skipped(field: &Field) -> bool {
    field.attrs.iter().any(|attr| {
        if !attr.path().is_ident("params") {
            return false;
        }
        let mut skip = false;
        // Ignore malformed attribute bodies; unknown tokens simply don't skip.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
            }
            Ok(())
        });
        skip
    })
}
