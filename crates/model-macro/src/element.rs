//! Expansion of `#[derive(AasElement)]`.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use crate::attrs::{ContainerAttrs, FieldSpec, Shape, generic_arg};
use crate::capability::{self, Access};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "AasElement can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "AasElement requires a struct with named fields",
        ));
    };

    let attrs = ContainerAttrs::parse(&input.attrs)?;
    let mut fields = named
        .named
        .iter()
        .map(FieldSpec::parse)
        .collect::<syn::Result<Vec<_>>>()?;
    apply_capabilities(&input.ident, &attrs, &mut fields)?;

    let table = field_table(input, &fields);
    let capabilities = capability_impls(input, &attrs, &fields)?;
    let builder = builder(input, &fields)?;
    let validate = validate_impl(input, &fields);
    let xml = if attrs.custom_xml {
        TokenStream::new()
    } else {
        xml_impls(input, &attrs, &fields)?
    };
    let root = match &attrs.element {
        Some(element) => {
            let name = &input.ident;
            quote! {
                #[cfg(feature = "xml")]
                impl ::aas_model::support::xml::XmlRoot for #name {
                    const ELEMENT_NAME: &'static str = #element;
                }
            }
        }
        None => TokenStream::new(),
    };

    Ok(quote! {
        #table
        #capabilities
        #builder
        #validate
        #xml
        #root
    })
}

/// Checks that the leading fields are exactly the composed capabilities'
/// fields, in canonical order, and stamps their wire names onto them.
fn apply_capabilities(name: &Ident, attrs: &ContainerAttrs, fields: &mut [FieldSpec]) -> syn::Result<()> {
    for pair in attrs.capabilities.windows(2) {
        let (previous, _) = pair[0];
        let (current, span) = pair[1];
        if capability::rank(current) <= capability::rank(previous) {
            return Err(syn::Error::new(
                span,
                format!(
                    "capabilities must be listed once each, in the order: {}",
                    capability::names().join(", ")
                ),
            ));
        }
    }

    let mut index = 0;
    for (cap, span) in &attrs.capabilities {
        for expected in cap.fields {
            let Some(field) = fields.get_mut(index) else {
                return Err(syn::Error::new(
                    *span,
                    format!(
                        "`{name}` composes `{}` but has no field `{}`",
                        cap.name, expected.field
                    ),
                ));
            };
            if field.ident != expected.field {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!(
                        "`{name}` composes `{}`, so field #{} must be `{}`, found `{}`",
                        cap.name,
                        index + 1,
                        expected.field,
                        field.ident
                    ),
                ));
            }
            let shape_ok = match expected.access {
                Access::Text | Access::Optional => field.shape == Shape::Optional,
                Access::List => field.shape == Shape::List,
            };
            if !shape_ok {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!("capability field `{}` has the wrong type", expected.field),
                ));
            }
            field.wire_name = expected.wire_name.to_string();
            field.item = expected.item.map(str::to_string);
            index += 1;
        }
    }
    Ok(())
}

fn inner_type<'a>(field: &'a FieldSpec) -> syn::Result<&'a Type> {
    let wrapper = match field.shape {
        Shape::Plain => return Ok(&field.ty),
        Shape::Optional => "Option",
        Shape::List => "Vec",
    };
    generic_arg(&field.ty, wrapper)
        .ok_or_else(|| syn::Error::new(field.ident.span(), "expected a type argument"))
}

fn field_table(input: &DeriveInput, fields: &[FieldSpec]) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let rows = fields.iter().map(|field| {
        let rust_name = field.ident.to_string();
        let wire_name = &field.wire_name;
        let kind = match field.shape {
            Shape::List => {
                let item = match &field.item {
                    Some(item) => quote!(::std::option::Option::Some(#item)),
                    None => quote!(::std::option::Option::None),
                };
                quote!(::aas_model::support::FieldKind::WrappedList { item: #item })
            }
            _ if field.choice => quote!(::aas_model::support::FieldKind::WrappedChoice),
            _ => quote!(::aas_model::support::FieldKind::Element),
        };
        let keep_empty = field.keep_empty;
        quote! {
            ::aas_model::support::FieldDescriptor {
                name: #rust_name,
                wire_name: #wire_name,
                namespace: ::aas_model::support::AAS_NAMESPACE,
                kind: #kind,
                keep_empty_wrapper: #keep_empty,
            }
        }
    });

    quote! {
        impl #impl_generics ::aas_model::support::FieldTable for #name #ty_generics #where_clause {
            const FIELDS: &'static [::aas_model::support::FieldDescriptor] = &[#(#rows),*];
        }
    }
}

fn capability_impls(input: &DeriveInput, attrs: &ContainerAttrs, fields: &[FieldSpec]) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let mut out = TokenStream::new();
    let mut index = 0;

    for (cap, _) in &attrs.capabilities {
        let trait_name = Ident::new(cap.trait_name, Span::call_site());
        let mut methods = Vec::new();
        for expected in cap.fields {
            let field = &fields[index];
            index += 1;
            let ident = &field.ident;
            let setter = format_ident!("set_{}", ident);
            let inner = inner_type(field)?;
            methods.push(match expected.access {
                Access::Text => quote! {
                    fn #ident(&self) -> ::std::option::Option<&str> {
                        self.#ident.as_deref()
                    }
                    fn #setter(&mut self, value: ::std::option::Option<::std::string::String>) {
                        self.#ident = value;
                    }
                },
                Access::Optional => quote! {
                    fn #ident(&self) -> ::std::option::Option<&#inner> {
                        self.#ident.as_ref()
                    }
                    fn #setter(&mut self, value: ::std::option::Option<#inner>) {
                        self.#ident = value;
                    }
                },
                Access::List => {
                    let mutable = format_ident!("{}_mut", ident);
                    quote! {
                        fn #ident(&self) -> &[#inner] {
                            &self.#ident
                        }
                        fn #mutable(&mut self) -> &mut ::std::vec::Vec<#inner> {
                            &mut self.#ident
                        }
                        fn #setter(&mut self, value: ::std::vec::Vec<#inner>) {
                            self.#ident = value;
                        }
                    }
                }
            });
        }
        out.extend(quote! {
            impl #impl_generics ::aas_model::capability::#trait_name for #name #ty_generics #where_clause {
                #(#methods)*
            }
        });
    }
    Ok(out)
}

fn builder(input: &DeriveInput, fields: &[FieldSpec]) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;
    let builder = format_ident!("{}Builder", name);
    let builder_doc = LitStr::new(
        &format!(
            "Fluent builder for [`{name}`].\n\nSetters overwrite, list setters replace the \
             whole list and adders append. [`build`]({builder}::build) hands out an \
             independent deep copy each time it is called."
        ),
        Span::call_site(),
    );

    let mut setters = Vec::new();
    for field in fields {
        let ident = &field.ident;
        let inner = inner_type(field)?;
        setters.push(match field.shape {
            Shape::Plain => quote! {
                pub fn #ident(mut self, value: impl ::std::convert::Into<#inner>) -> Self {
                    self.inner.#ident = value.into();
                    self
                }
            },
            Shape::Optional => quote! {
                pub fn #ident(mut self, value: impl ::std::convert::Into<#inner>) -> Self {
                    self.inner.#ident = ::std::option::Option::Some(value.into());
                    self
                }
            },
            Shape::List => {
                let adder = field.adder_name();
                quote! {
                    pub fn #ident(mut self, values: impl ::std::iter::IntoIterator<Item = #inner>) -> Self {
                        self.inner.#ident = values.into_iter().collect();
                        self
                    }
                    pub fn #adder(mut self, value: impl ::std::convert::Into<#inner>) -> Self {
                        self.inner.#ident.push(value.into());
                        self
                    }
                }
            }
        });
    }

    Ok(quote! {
        #[doc = #builder_doc]
        #[derive(Debug, Clone, Default)]
        #vis struct #builder {
            inner: #name,
        }

        impl #name {
            pub fn builder() -> #builder {
                #builder::default()
            }
        }

        impl #builder {
            pub fn new() -> Self {
                Self::default()
            }

            #(#setters)*

            pub fn build(&self) -> #name {
                ::std::clone::Clone::clone(&self.inner)
            }
        }
    })
}

fn validate_impl(input: &DeriveInput, fields: &[FieldSpec]) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let checks = fields.iter().map(|field| {
        let ident = &field.ident;
        let wire_name = &field.wire_name;
        let required = if field.required {
            quote! {
                if ::aas_model::validation::Presence::is_missing(&self.#ident) {
                    errors.push(::aas_model::validation::ValidationError::missing(path, #wire_name));
                }
            }
        } else {
            TokenStream::new()
        };
        quote! {
            #required
            ::aas_model::validation::Validate::validate_into(
                &self.#ident,
                &::aas_model::validation::child_path(path, #wire_name),
                errors,
            );
        }
    });

    quote! {
        impl #impl_generics ::aas_model::validation::Validate for #name #ty_generics #where_clause {
            fn validate_into(
                &self,
                path: &str,
                errors: &mut ::std::vec::Vec<::aas_model::validation::ValidationError>,
            ) {
                #(#checks)*
            }
        }
    }
}

fn xml_impls(input: &DeriveInput, attrs: &ContainerAttrs, fields: &[FieldSpec]) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let writes = fields.iter().enumerate().map(|(i, field)| {
        let ident = &field.ident;
        match field.shape {
            Shape::List => quote! {
                ::aas_model::support::xml::write_list(w, &fields[#i], &self.#ident)?;
            },
            Shape::Optional => quote! {
                ::aas_model::support::xml::write_single(w, &fields[#i], self.#ident.as_ref())?;
            },
            Shape::Plain => quote! {
                ::aas_model::support::xml::write_single(w, &fields[#i], ::std::option::Option::Some(&self.#ident))?;
            },
        }
    });

    let mut reads = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let ident = &field.ident;
        let inner = inner_type(field)?;
        reads.push(match field.shape {
            Shape::List => quote! {
                value.#ident = ::aas_model::support::xml::read_list::<#inner, _>(r, &fields[#i])?;
            },
            Shape::Optional => quote! {
                value.#ident = ::aas_model::support::xml::read_single::<#inner, _>(r, &fields[#i], &child)?;
            },
            Shape::Plain => quote! {
                if let ::std::option::Option::Some(v) =
                    ::aas_model::support::xml::read_single::<#inner, _>(r, &fields[#i], &child)?
                {
                    value.#ident = v;
                }
            },
        });
    }
    let indices = 0..fields.len();

    let (element_name, accepts) = match &attrs.element {
        Some(element) => (
            quote! {
                fn element_name(&self) -> ::std::option::Option<&'static str> {
                    ::std::option::Option::Some(#element)
                }
            },
            quote! {
                fn accepts(local_name: &str) -> bool {
                    local_name == #element
                }
            },
        ),
        None => (TokenStream::new(), TokenStream::new()),
    };

    Ok(quote! {
        #[cfg(feature = "xml")]
        impl #impl_generics ::aas_model::support::xml::XmlEncode for #name #ty_generics #where_clause {
            fn write_element<W: ::std::io::Write>(
                &self,
                w: &mut ::aas_model::support::xml::XmlWriter<W>,
                name: &str,
            ) -> ::aas_model::support::Result<()> {
                let fields = <Self as ::aas_model::support::FieldTable>::FIELDS;
                w.start_element(name)?;
                #(#writes)*
                w.end_element(name)
            }

            #element_name
        }

        #[cfg(feature = "xml")]
        impl #impl_generics ::aas_model::support::xml::XmlDecode for #name #ty_generics #where_clause {
            fn read_element<R: ::std::io::BufRead>(
                r: &mut ::aas_model::support::xml::XmlReader<R>,
                _start: &::aas_model::support::xml::ElementStart,
            ) -> ::aas_model::support::Result<Self> {
                let fields = <Self as ::aas_model::support::FieldTable>::FIELDS;
                let mut value = <Self as ::std::default::Default>::default();
                while let ::std::option::Option::Some(child) = r.next_child()? {
                    #(
                        if fields[#indices].matches(child.namespace(), child.local_name()) {
                            #reads
                        } else
                    )*
                    {
                        r.skip_unknown(&child)?;
                    }
                }
                r.close_element()?;
                ::std::result::Result::Ok(value)
            }

            #accepts
        }
    })
}
