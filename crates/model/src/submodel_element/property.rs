use serde::{Deserialize, Serialize};

use crate::{
    AasElement, DataTypeDefXsd, EmbeddedDataSpecification, Extension, LangStringNameType,
    LangStringTextType, Qualifier, Reference,
};

/// A single typed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
#[aas(
    element = "property",
    capabilities(has_extensions, referable, has_semantics, qualifiable, has_data_specification)
)]
pub struct Property {
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
    pub value_type: DataTypeDefXsd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<Reference>,
}
