//! # AAS Model
//!
//! Strongly-typed Rust representation of the Asset Administration Shell
//! (AAS v3.0) metamodel subset used for submodel element exchange.
//!
//! Concrete elements are composed from capability groups
//! ([`HasExtensions`], [`Referable`], [`HasSemantics`], [`Qualifiable`],
//! [`HasDataSpecification`]), each of which is a trait implemented by the
//! [`AasElement`] derive. The derive also generates a fluent builder per type,
//! the declarative field table that drives the XML codec, and the
//! required-field [`validation`].
//!
//! ```
//! use aas_model::{Operation, OperationVariable, Property, Referable};
//!
//! let op = Operation::builder()
//!     .id_short("calc")
//!     .input_variable(OperationVariable::new(Property::builder().id_short("x").build()))
//!     .build();
//!
//! assert_eq!(op.id_short(), Some("calc"));
//! assert_eq!(op.input_variables.len(), 1);
//! assert!(op.output_variables.is_empty());
//! ```
//!
//! Wire formats live in the `aas-serde` crate.

extern crate self as aas_model;

pub use aas_model_macro::{AasElement, AasEnum};
pub use aas_serde_support as support;

pub mod capability;
pub mod data_specification;
pub mod data_type;
mod error;
pub mod extension;
pub mod lang_string;
pub mod qualifier;
pub mod reference;
pub mod submodel_element;
pub mod validation;

pub use capability::{HasDataSpecification, HasExtensions, HasSemantics, Qualifiable, Referable};
pub use data_specification::{
    DataSpecificationContent, DataSpecificationIec61360, DataSpecificationPhysicalUnit,
    EmbeddedDataSpecification, LevelType, ValueList, ValueReferencePair,
};
pub use data_type::{DataTypeDefXsd, DataTypeIec61360};
pub use error::UnknownToken;
pub use extension::Extension;
pub use lang_string::{
    LangStringDefinitionTypeIec61360, LangStringNameType, LangStringPreferredNameTypeIec61360,
    LangStringShortNameTypeIec61360, LangStringTextType,
};
pub use qualifier::{Qualifier, QualifierKind};
pub use reference::{Key, KeyTypes, Reference, ReferenceTypes};
pub use submodel_element::{Operation, OperationVariable, Property, SubmodelElement};
