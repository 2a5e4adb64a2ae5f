//! Shared building blocks for the AAS metamodel and its wire formats.
//!
//! Generated model code (see the `aas-model-macro` crate) targets the items in
//! this crate rather than the public `aas-serde` entry points:
//!
//! - [`FieldDescriptor`] / [`FieldTable`]: the declarative, per-type field
//!   table that drives field order, wire names, namespaces and list wrapping.
//! - [`ContentShapeRegistry`]: maps a data specification reference to the
//!   shape of its content.
//! - [`CodecError`]: the error taxonomy shared by every codec.
//! - [`xml`] (feature `xml`): the namespace-aware reader/writer and the
//!   generic field routines that consult the field tables.

pub mod descriptor;
pub mod error;
pub mod json;
pub mod registry;

#[cfg(feature = "xml")]
pub mod xml;

pub use descriptor::{FieldDescriptor, FieldKind, FieldTable};
pub use error::{CodecError, Result};
pub use registry::{ContentShapeRegistry, IEC61360_SHAPE, PHYSICAL_UNIT_SHAPE};

/// Namespace URI of the AAS v3.0 XML serialization.
pub const AAS_NAMESPACE: &str = "https://admin-shell.io/aas/3/0";

/// Prefix bound to [`AAS_NAMESPACE`] unless configured otherwise.
pub const AAS_PREFIX: &str = "aas";
