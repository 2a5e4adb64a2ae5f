//! JSON entry points for AAS elements.
//!
//! The model's serde impls carry the AAS JSON mapping (camelCase members,
//! `modelType` on polymorphic values, embedded data specification content
//! dispatched from its reference); these functions only route `serde_json`
//! failures into [`SerdeError`](crate::SerdeError).
//!
//! ```
//! use aas_model::{DataTypeDefXsd, Operation, OperationVariable, Property};
//! use aas_serde::json::{from_json_str, to_json_string};
//!
//! # fn main() -> aas_serde::Result<()> {
//! let op = Operation::builder()
//!     .id_short("calc")
//!     .input_variable(OperationVariable::new(
//!         Property::builder().id_short("x").value_type(DataTypeDefXsd::Int).build(),
//!     ))
//!     .build();
//!
//! let json = to_json_string(&op)?;
//! assert!(json.contains(r#""modelType":"Property""#));
//! assert_eq!(from_json_str::<Operation>(&json)?, op);
//! # Ok(())
//! # }
//! ```
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Reads an element from JSON text.
///
/// ```
/// use aas_model::{DataTypeDefXsd, Property};
///
/// # fn main() -> aas_serde::Result<()> {
/// let json = r#"{"idShort": "speed", "valueType": "xs:double", "value": "12.5"}"#;
/// let property: Property = aas_serde::from_json_str(json)?;
/// assert_eq!(property.value_type, DataTypeDefXsd::Double);
/// assert_eq!(property.value.as_deref(), Some("12.5"));
/// # Ok(())
/// # }
/// ```
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

/// Writes an element as compact JSON. Empty lists and absent optionals are
/// left out.
///
/// ```
/// use aas_model::Property;
///
/// # fn main() -> aas_serde::Result<()> {
/// let property = Property::builder().id_short("speed").build();
/// assert_eq!(
///     aas_serde::to_json_string(&property)?,
///     r#"{"idShort":"speed","valueType":"xs:string"}"#
/// );
/// # Ok(())
/// # }
/// ```
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Writes an element as indented JSON.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Reads an element from JSON bytes.
///
/// ```
/// use aas_model::SubmodelElement;
///
/// # fn main() -> aas_serde::Result<()> {
/// let element: SubmodelElement =
///     aas_serde::from_json_slice(br#"{"modelType": "Operation", "idShort": "calc"}"#)?;
/// assert!(element.as_operation().is_some());
/// # Ok(())
/// # }
/// ```
pub fn from_json_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_slice(v)?)
}

/// Writes an element as compact JSON bytes.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Converts an element into a `serde_json::Value` tree.
///
/// Writing fails when embedded data specification content does not match the
/// template its reference names.
///
/// ```
/// use aas_model::{DataSpecificationIec61360, EmbeddedDataSpecification, Reference};
///
/// let mismatched = EmbeddedDataSpecification::new(
///     Reference::external(
///         "https://admin-shell.io/DataSpecificationTemplates/DataSpecificationPhysicalUnit/3/0",
///     ),
///     DataSpecificationIec61360::default(),
/// );
/// assert!(aas_serde::to_json_value(&mismatched).is_err());
/// ```
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Reads an element from a `serde_json::Value` tree.
///
/// ```
/// use aas_model::{KeyTypes, Reference};
/// use serde_json::json;
///
/// # fn main() -> aas_serde::Result<()> {
/// let reference: Reference = aas_serde::from_json_value(json!({
///     "type": "ModelReference",
///     "keys": [{ "type": "Submodel", "value": "urn:example:sm" }]
/// }))?;
/// assert_eq!(reference.keys[0].key_type, KeyTypes::Submodel);
/// # Ok(())
/// # }
/// ```
pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}
