//! # AAS Serialization Module
//!
//! JSON and XML serialization for Asset Administration Shell elements.
//!
//! ## Features
//!
//! - **JSON Support**: Thin wrappers around `serde_json` over the model's serde
//!   impls, which follow the AAS JSON mapping.
//! - **XML Support** (feature `xml`, on by default): entry points over the
//!   table-driven, namespace-aware codec in `aas-serde-support`. Every element
//!   is qualified with `https://admin-shell.io/aas/3/0`, lists are wrapped,
//!   and embedded data specification content is dispatched from its reference.
//!
//! ## AAS JSON ↔ XML Mapping
//!
//! | JSON | XML |
//! |------|-----|
//! | `{"idShort": "calc"}` | `<aas:idShort>calc</aas:idShort>` |
//! | `{"inputVariables": [{"value": {...}}]}` | `<aas:inputVariables><aas:operationVariable><aas:value>...</aas:value></aas:operationVariable></aas:inputVariables>` |
//! | `{"value": {"modelType": "Property", ...}}` | `<aas:value><aas:property>...</aas:property></aas:value>` |
//! | `{"description": [{"language": "en", "text": "..."}]}` | `<aas:description><aas:langStringTextType>...</aas:langStringTextType></aas:description>` |
//!
//! ## Examples
//!
//! ```
//! use aas_model::{Operation, OperationVariable, Property};
//!
//! # fn main() -> aas_serde::Result<()> {
//! let op = Operation::builder()
//!     .id_short("calc")
//!     .output_variable(OperationVariable::new(Property::builder().id_short("y").build()))
//!     .build();
//!
//! let from_xml: Operation = aas_serde::from_xml_str(&aas_serde::to_xml_string(&op)?)?;
//! let from_json: Operation = aas_serde::from_json_str(&aas_serde::to_json_string(&op)?)?;
//! assert_eq!(from_xml, op);
//! assert_eq!(from_json, op);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod json;

#[cfg(feature = "xml")]
pub mod xml;

pub use error::{Result, SerdeError};

pub use json::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_string_pretty,
    to_json_value, to_json_vec,
};

#[cfg(feature = "xml")]
pub use xml::{
    XmlOptions, from_xml_reader, from_xml_slice, from_xml_str, to_xml_string, to_xml_vec,
    to_xml_writer,
};
