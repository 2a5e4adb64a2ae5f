//! Helpers for the JSON mapping of polymorphic values.
//!
//! In AAS JSON every polymorphic value carries a `modelType` member naming its
//! concrete kind. For data specification content the kind is decided by the
//! reference instead; `modelType` is written for interoperability and, when
//! present on input, must agree with the resolved shape.

use serde_json::Value;

/// Member that names the concrete kind of a polymorphic JSON object.
pub const MODEL_TYPE: &str = "modelType";

/// Returns the `modelType` of a JSON object, if it has one.
pub fn model_type(value: &Value) -> Option<&str> {
    value.get(MODEL_TYPE).and_then(Value::as_str)
}

/// Checks an optional `modelType` against the expected one.
pub fn check_model_type(value: &Value, expected: &str) -> std::result::Result<(), String> {
    match model_type(value) {
        None => Ok(()),
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(format!(
            "modelType {found} contradicts the resolved content shape {expected}"
        )),
    }
}
