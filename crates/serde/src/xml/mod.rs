//! XML serialization and deserialization for AAS elements.
//!
//! Any type with a document root element ([`XmlRoot`], implemented by the
//! model's `AasElement` derive for types that name their element) can be
//! written and read. The codec walks each type's field table: fields are
//! emitted in declared order and accepted in any order.
//!
//! ## Namespaces
//!
//! The AAS namespace is declared on the root element, with prefix `aas` by
//! default ([`XmlOptions::with_prefix`]; an empty prefix makes it the default
//! namespace). On read, any prefix bound to the AAS namespace is accepted.
//! Elements from other namespaces are skipped like unknown elements, or
//! rejected when [`XmlOptions::with_strict`] is set.
//!
//! ## Embedded data specifications
//!
//! The content shape is resolved from the data specification reference
//! through [`XmlOptions::content_shapes`]. Content that does not match the
//! resolved shape fails with `UnresolvableContentShape`, unless
//! [`XmlOptions::with_lenient_content`] is set, in which case the offending
//! embedded data specification is dropped on read.
//!
//! ## Examples
//!
//! ```
//! use aas_model::Property;
//! use aas_serde::xml::{XmlOptions, from_xml_str, to_xml_string_with};
//!
//! # fn main() -> aas_serde::Result<()> {
//! let property = Property::builder().id_short("speed").value("12.5").build();
//! let options = XmlOptions::default().with_declaration(false).with_prefix("");
//! let xml = to_xml_string_with(&property, &options)?;
//! assert!(xml.starts_with(r#"<property xmlns="https://admin-shell.io/aas/3/0">"#));
//! assert_eq!(from_xml_str::<Property>(&xml)?, property);
//! # Ok(())
//! # }
//! ```

pub mod de;
pub mod ser;

pub use aas_serde_support::xml::{XmlOptions, XmlRoot};

// Re-export serialization functions
pub use ser::{to_xml_string, to_xml_string_with, to_xml_vec, to_xml_vec_with, to_xml_writer, to_xml_writer_with};

// Re-export deserialization functions
pub use de::{from_xml_reader, from_xml_reader_with, from_xml_slice, from_xml_slice_with, from_xml_str, from_xml_str_with};
