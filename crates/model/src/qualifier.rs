use serde::{Deserialize, Serialize};

use crate::{AasElement, AasEnum, DataTypeDefXsd, Reference};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AasEnum)]
pub enum QualifierKind {
    ValueQualifier,
    #[default]
    ConceptQualifier,
    TemplateQualifier,
}

/// A typed constraint or annotation attached to a qualifiable element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
#[aas(element = "qualifier", capabilities(has_semantics))]
pub struct Qualifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supplemental_semantic_ids: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<QualifierKind>,
    #[aas(rename = "type", required)]
    #[serde(rename = "type")]
    pub qualifier_type: String,
    pub value_type: DataTypeDefXsd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<Reference>,
}
