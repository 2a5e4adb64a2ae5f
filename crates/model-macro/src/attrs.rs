//! Parsing of `#[aas(...)]` attributes.

use heck::ToLowerCamelCase;
use syn::spanned::Spanned;
use syn::{Attribute, Field, GenericArgument, Ident, LitStr, PathArguments, Type};

use crate::capability::{self, Capability};

/// Container-level `#[aas(...)]` options.
#[derive(Default)]
pub struct ContainerAttrs {
    /// Element name when the type names itself (roots, polymorphic items).
    pub element: Option<String>,
    pub capabilities: Vec<(&'static Capability, proc_macro2::Span)>,
    /// `xml(custom)`: keep the field table, skip the generated XML codec.
    pub custom_xml: bool,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = ContainerAttrs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("aas")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("element") {
                    let name: LitStr = meta.value()?.parse()?;
                    out.element = Some(name.value());
                    Ok(())
                } else if meta.path.is_ident("capabilities") {
                    meta.parse_nested_meta(|cap| {
                        let ident = cap
                            .path
                            .get_ident()
                            .ok_or_else(|| cap.error("expected a capability name"))?;
                        let found = capability::lookup(&ident.to_string()).ok_or_else(|| {
                            cap.error(format!(
                                "unknown capability `{ident}`, expected one of: {}",
                                capability::names().join(", ")
                            ))
                        })?;
                        out.capabilities.push((found, ident.span()));
                        Ok(())
                    })
                } else if meta.path.is_ident("xml") {
                    meta.parse_nested_meta(|xml| {
                        if xml.path.is_ident("custom") {
                            out.custom_xml = true;
                            Ok(())
                        } else {
                            Err(xml.error("expected `custom`"))
                        }
                    })
                } else {
                    Err(meta.error("unsupported aas container attribute"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Shape of a field's Rust type, which decides its wire kind.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Plain,
    Optional,
    List,
}

/// A struct field with its `#[aas(...)]` options resolved.
pub struct FieldSpec {
    pub ident: Ident,
    pub ty: Type,
    pub shape: Shape,
    pub wire_name: String,
    pub item: Option<String>,
    pub choice: bool,
    pub keep_empty: bool,
    pub required: bool,
    pub singular: Option<String>,
}

impl FieldSpec {
    pub fn parse(field: &Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "AasElement requires named fields"))?;
        let shape = if generic_arg(&field.ty, "Vec").is_some() {
            Shape::List
        } else if generic_arg(&field.ty, "Option").is_some() {
            Shape::Optional
        } else {
            Shape::Plain
        };

        let mut spec = FieldSpec {
            wire_name: ident.to_string().to_lower_camel_case(),
            ident,
            ty: field.ty.clone(),
            shape,
            item: None,
            choice: false,
            keep_empty: false,
            required: false,
            singular: None,
        };

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("aas")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    spec.wire_name = meta.value()?.parse::<LitStr>()?.value();
                } else if meta.path.is_ident("item") {
                    spec.item = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("singular") {
                    spec.singular = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("choice") {
                    spec.choice = true;
                } else if meta.path.is_ident("keep_empty") {
                    spec.keep_empty = true;
                } else if meta.path.is_ident("required") {
                    spec.required = true;
                } else {
                    return Err(meta.error("unsupported aas field attribute"));
                }
                Ok(())
            })?;
        }

        if spec.shape == Shape::List && spec.choice {
            return Err(syn::Error::new(
                spec.ident.span(),
                "`choice` applies to single-valued fields only",
            ));
        }
        if spec.shape != Shape::List && (spec.item.is_some() || spec.keep_empty || spec.singular.is_some()) {
            return Err(syn::Error::new(
                spec.ident.span(),
                "`item`, `keep_empty` and `singular` apply to list fields only",
            ));
        }
        Ok(spec)
    }

    /// Name of the incremental adder a list field gets on the builder.
    pub fn adder_name(&self) -> Ident {
        let name = match &self.singular {
            Some(singular) => singular.clone(),
            None => {
                let plural = self.ident.to_string();
                match plural.strip_suffix('s') {
                    Some(stem) if !stem.is_empty() => stem.to_string(),
                    _ => format!("add_{plural}"),
                }
            }
        };
        Ident::new(&name, self.ident.span())
    }
}

/// The single generic argument of `Wrapper<T>`, when `ty` is that wrapper.
pub fn generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Variant-level `#[aas(rename = "...")]`.
pub fn variant_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("aas")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                rename = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("unsupported aas variant attribute"))
            }
        })?;
    }
    Ok(rename)
}
