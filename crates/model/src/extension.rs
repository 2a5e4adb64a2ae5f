use serde::{Deserialize, Serialize};

use crate::{AasElement, DataTypeDefXsd, Reference};

/// Proprietary name/value data attached to an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
#[aas(element = "extension", capabilities(has_semantics))]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supplemental_semantic_ids: Vec<Reference>,
    #[aas(required)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DataTypeDefXsd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[aas(item = "reference")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refers_to: Vec<Reference>,
}

impl Extension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
