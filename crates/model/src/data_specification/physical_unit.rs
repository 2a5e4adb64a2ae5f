use serde::{Deserialize, Serialize};

use crate::{AasElement, LangStringDefinitionTypeIec61360};

/// Data specification content describing a physical unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
#[aas(element = "dataSpecificationPhysicalUnit")]
pub struct DataSpecificationPhysicalUnit {
    #[aas(required)]
    pub unit_name: String,
    #[aas(required)]
    pub unit_symbol: String,
    #[aas(item = "langStringDefinitionTypeIec61360", required)]
    pub definition: Vec<LangStringDefinitionTypeIec61360>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub si_notation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub si_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub din_notation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ece_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ece_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nist_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_authority_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}
