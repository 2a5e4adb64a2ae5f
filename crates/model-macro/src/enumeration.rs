//! Expansion of `#[derive(AasEnum)]` for fieldless enumerations with fixed
//! wire tokens.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::variant_rename;

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "AasEnum can only be derived for enums",
        ));
    };

    let name = &input.ident;
    let type_name = name.to_string();
    let mut variants = Vec::new();
    let mut tokens = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "AasEnum variants cannot carry data",
            ));
        }
        let token = variant_rename(&variant.attrs)?.unwrap_or_else(|| variant.ident.to_string());
        variants.push(&variant.ident);
        tokens.push(token);
    }

    Ok(quote! {
        impl #name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [#name] = &[#(#name::#variants),*];

            /// The exact wire token of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    #(#name::#variants => #tokens,)*
                }
            }

            /// Looks a value up by its wire token.
            pub fn from_wire(token: &str) -> ::std::option::Option<Self> {
                match token {
                    #(#tokens => ::std::option::Option::Some(#name::#variants),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = ::aas_model::UnknownToken;

            fn from_str(token: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_wire(token).ok_or_else(|| ::aas_model::UnknownToken::new(#type_name, token))
            }
        }

        impl ::serde::Serialize for #name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let token = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as ::std::str::FromStr>::from_str(&token).map_err(::serde::de::Error::custom)
            }
        }

        impl ::aas_model::validation::Validate for #name {
            fn validate_into(
                &self,
                _path: &str,
                _errors: &mut ::std::vec::Vec<::aas_model::validation::ValidationError>,
            ) {
            }
        }

        #[cfg(feature = "xml")]
        impl ::aas_model::support::xml::XmlEncode for #name {
            fn write_element<W: ::std::io::Write>(
                &self,
                w: &mut ::aas_model::support::xml::XmlWriter<W>,
                name: &str,
            ) -> ::aas_model::support::Result<()> {
                w.text_element(name, self.as_str())
            }
        }

        #[cfg(feature = "xml")]
        impl ::aas_model::support::xml::XmlDecode for #name {
            fn read_element<R: ::std::io::BufRead>(
                r: &mut ::aas_model::support::xml::XmlReader<R>,
                start: &::aas_model::support::xml::ElementStart,
            ) -> ::aas_model::support::Result<Self> {
                let text = r.read_text()?;
                <Self as ::std::str::FromStr>::from_str(text.trim())
                    .map_err(|err| r.malformed(::std::format!("<{}>: {}", start.local_name(), err)))
            }
        }
    })
}
