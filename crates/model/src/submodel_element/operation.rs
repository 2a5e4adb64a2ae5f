use serde::{Deserialize, Serialize};

use super::SubmodelElement;
use crate::{
    AasElement, EmbeddedDataSpecification, Extension, LangStringNameType, LangStringTextType,
    Qualifier, Reference,
};

/// An invocable function with input, output and in/out arguments.
///
/// ```
/// use aas_model::{Operation, OperationVariable, Property, Referable};
///
/// let op = Operation::builder()
///     .id_short("calc")
///     .input_variable(OperationVariable::new(Property::builder().id_short("a").build()))
///     .build();
/// assert_eq!(op.id_short(), Some("calc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
#[aas(
    element = "operation",
    capabilities(has_extensions, referable, has_semantics, qualifiable, has_data_specification)
)]
pub struct Operation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[aas(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Vec::is_empty")]
    pub display_names: Vec<LangStringNameType>,
    #[serde(rename = "description", skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LangStringTextType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supplemental_semantic_ids: Vec<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<Qualifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    #[aas(item = "operationVariable")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input_variables: Vec<OperationVariable>,
    #[aas(item = "operationVariable")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output_variables: Vec<OperationVariable>,
    #[aas(item = "operationVariable")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inoutput_variables: Vec<OperationVariable>,
}

/// An argument of an [`Operation`], described by a submodel element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationVariable {
    #[aas(choice, required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<SubmodelElement>>,
}

impl OperationVariable {
    pub fn new(value: impl Into<SubmodelElement>) -> Self {
        Self {
            value: Some(Box::new(value.into())),
        }
    }
}
