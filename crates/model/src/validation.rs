//! Structural required-field validation.
//!
//! Builders and codecs accept incomplete elements; [`validate`] is the
//! separate pass that reports every required field left empty. A field is
//! required when it is marked `#[aas(required)]`, and missing when it is
//! `None`, an empty list or an empty string.
//!
//! ```
//! use aas_model::validation::{validate, ValidationError};
//! use aas_model::{Operation, OperationVariable};
//!
//! let op = Operation::builder()
//!     .id_short("calc")
//!     .input_variable(OperationVariable::default())
//!     .build();
//!
//! let errors = validate(&op).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::missing("inputVariables[0]", "value")]
//! );
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field {field}{}", location(.path))]
    MissingRequiredField { path: String, field: String },
}

impl ValidationError {
    pub fn missing(path: &str, field: &str) -> Self {
        ValidationError::MissingRequiredField {
            path: path.to_string(),
            field: field.to_string(),
        }
    }
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at {path}")
    }
}

/// Validates `value` and everything below it.
pub fn validate<T: Validate + ?Sized>(value: &T) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    value.validate_into("", &mut errors);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Implemented by every model type; generated by the derives.
pub trait Validate {
    /// Appends the problems found in `self`, located at `path`, to `errors`.
    fn validate_into(&self, path: &str, errors: &mut Vec<ValidationError>);
}

/// Whether a required field counts as absent.
pub trait Presence {
    fn is_missing(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_missing(&self) -> bool {
        self.is_none()
    }
}

impl<T> Presence for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

/// Joins a parent path and a child element name.
pub fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

impl Validate for String {
    fn validate_into(&self, _path: &str, _errors: &mut Vec<ValidationError>) {}
}

impl Validate for bool {
    fn validate_into(&self, _path: &str, _errors: &mut Vec<ValidationError>) {}
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate_into(&self, path: &str, errors: &mut Vec<ValidationError>) {
        (**self).validate_into(path, errors);
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate_into(&self, path: &str, errors: &mut Vec<ValidationError>) {
        if let Some(value) = self {
            value.validate_into(path, errors);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_into(&self, path: &str, errors: &mut Vec<ValidationError>) {
        for (index, item) in self.iter().enumerate() {
            item.validate_into(&format!("{path}[{index}]"), errors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, KeyTypes, Operation, OperationVariable, Property, Reference};

    #[test]
    fn test_complete_element_is_valid() {
        let op = Operation::builder()
            .id_short("calc")
            .input_variable(OperationVariable::new(Property::builder().id_short("a").build()))
            .semantic_id(Reference::external("urn:example:calc"))
            .build();
        assert_eq!(validate(&op), Ok(()));
    }

    #[test]
    fn test_reports_every_missing_field_with_path() {
        let op = Operation::builder()
            .semantic_id(Reference::builder().key(Key::new(KeyTypes::GlobalReference, "")).build())
            .input_variable(OperationVariable::new(Property::default()))
            .build();

        let errors = validate(&op).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::missing("", "idShort"),
                ValidationError::missing("semanticId/keys[0]", "value"),
                ValidationError::missing("inputVariables[0]/value", "idShort"),
            ]
        );
        assert_eq!(errors[0].to_string(), "missing required field idShort");
        assert_eq!(
            errors[1].to_string(),
            "missing required field value at semanticId/keys[0]"
        );
    }

    #[test]
    fn test_empty_key_list_is_missing() {
        let errors = validate(&Reference::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::missing("", "keys")]);
    }
}
