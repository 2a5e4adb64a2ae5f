//! Derive macros for the AAS metamodel.
//!
//! # `#[derive(AasElement)]`
//!
//! Expands a struct's field list into its declarative field table and
//! everything that is driven by it:
//!
//! - `impl FieldTable`, one [`FieldDescriptor`] per field in declared order;
//! - the capability trait impls for every group named in `capabilities(...)`;
//! - a `<Type>Builder` with `<Type>::builder()`;
//! - `impl Validate` for the structural required-field check;
//! - `XmlEncode`/`XmlDecode` (behind the `xml` feature of the using crate),
//!   plus `XmlRoot` when the type names its own element.
//!
//! Container attributes:
//!
//! ```ignore
//! #[aas(
//!     element = "operation",
//!     capabilities(has_extensions, referable, has_semantics, qualifiable, has_data_specification),
//!     xml(custom),
//! )]
//! ```
//!
//! `capabilities` must be listed in that canonical order, and the struct's
//! leading fields must be exactly the listed groups' fields in the same order.
//! `xml(custom)` keeps the table but leaves the XML codec to a hand-written impl.
//!
//! Field attributes: `rename = "wire"`, `item = "itemElement"` (list items),
//! `choice` (single self-named child inside a wrapper), `keep_empty` (emit the
//! list wrapper even when empty), `required`, `singular = "adder"`.
//!
//! Wire names default to the lowerCamelCase field name. The field kind
//! follows the type: `Vec<T>` is a wrapped list, everything else a single
//! element.
//!
//! # `#[derive(AasEnum)]`
//!
//! For fieldless enums with fixed wire tokens (`#[aas(rename = "xs:string")]`
//! per variant, the variant name otherwise). Generates `as_str`, `from_wire`,
//! `Display`, `FromStr`, string-valued serde impls and the XML text codec.
//!
//! Generated code refers to `::aas_model`, so the model crate declares
//! `extern crate self as aas_model;`.
//!
//! [`FieldDescriptor`]: https://docs.rs/aas-serde-support/latest/aas_serde_support/descriptor/struct.FieldDescriptor.html

mod attrs;
mod capability;
mod element;
mod enumeration;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(AasElement, attributes(aas))]
pub fn derive_aas_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    element::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(AasEnum, attributes(aas))]
pub fn derive_aas_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    enumeration::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
