use serde::{Deserialize, Serialize};

use crate::{
    AasElement, DataTypeIec61360, LangStringDefinitionTypeIec61360,
    LangStringPreferredNameTypeIec61360, LangStringShortNameTypeIec61360, Reference,
};

/// Data specification content following IEC 61360.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
#[aas(element = "dataSpecificationIec61360")]
pub struct DataSpecificationIec61360 {
    #[aas(item = "langStringPreferredNameTypeIec61360", required)]
    pub preferred_name: Vec<LangStringPreferredNameTypeIec61360>,
    #[aas(item = "langStringShortNameTypeIec61360")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub short_name: Vec<LangStringShortNameTypeIec61360>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataTypeIec61360>,
    #[aas(item = "langStringDefinitionTypeIec61360")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub definition: Vec<LangStringDefinitionTypeIec61360>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_list: Option<ValueList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_type: Option<LevelType>,
}

/// Which of min/nominal/typical/max a value denotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelType {
    pub min: bool,
    pub nom: bool,
    pub typ: bool,
    pub max: bool,
}

/// Enumerated values of a concept.
///
/// On the XML wire the pairs are always wrapped in `valueReferencePairs`,
/// even when there are none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueList {
    #[aas(item = "valueReferencePair", keep_empty, required)]
    pub value_reference_pairs: Vec<ValueReferencePair>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueReferencePair {
    #[aas(required)]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<Reference>,
}

impl ValueReferencePair {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            value_id: None,
        }
    }
}
