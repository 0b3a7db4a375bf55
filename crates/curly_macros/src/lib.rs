//! Procedural macros for the curly format engine.
//!
//! Provides `#[derive(Params)]`, which turns a struct with named fields
//! into a named-parameter source: each field becomes a parameter under its
//! own name. See the `curly` crate documentation for usage.

use proc_macro::TokenStream;

mod params;

/// Derive a named-parameter source from a struct with named fields.
///
/// Every field must be `Clone` and convertible into `curly::Value`. A field
/// annotated `#[params(skip)]` is excluded. A field holding its type's zero
/// value (empty string, `false`, `0`, `0.0`) reports as not-present.
#[proc_macro_derive(Params, attributes(params))]
pub fn derive_params(input: TokenStream) -> TokenStream {
    params::derive_params(input)
}
