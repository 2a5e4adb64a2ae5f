use serde::{Deserialize, Serialize};

use crate::{AasElement, AasEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AasEnum)]
pub enum ReferenceTypes {
    #[default]
    ExternalReference,
    ModelReference,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AasEnum)]
pub enum KeyTypes {
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    EventElement,
    File,
    FragmentReference,
    #[default]
    GlobalReference,
    Identifiable,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    Referable,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

/// A reference to a model element or to an external entity, as a chain of keys.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement,
)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    #[aas(rename = "type")]
    #[serde(rename = "type")]
    pub reference_type: ReferenceTypes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_semantic_id: Option<Box<Reference>>,
    #[aas(item = "key", required)]
    pub keys: Vec<Key>,
}

impl Reference {
    /// An external reference with a single `GlobalReference` key.
    pub fn external(iri: impl Into<String>) -> Self {
        Self {
            reference_type: ReferenceTypes::ExternalReference,
            referred_semantic_id: None,
            keys: vec![Key::new(KeyTypes::GlobalReference, iri)],
        }
    }

    /// A model reference from `(type, value)` key pairs, outermost first.
    pub fn model<I, V>(keys: I) -> Self
    where
        I: IntoIterator<Item = (KeyTypes, V)>,
        V: Into<String>,
    {
        Self {
            reference_type: ReferenceTypes::ModelReference,
            referred_semantic_id: None,
            keys: keys
                .into_iter()
                .map(|(key_type, value)| Key::new(key_type, value))
                .collect(),
        }
    }

    pub fn key_values(&self) -> impl Iterator<Item = &str> + Clone {
        self.keys.iter().map(|key| key.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement)]
#[serde(rename_all = "camelCase", default)]
pub struct Key {
    #[aas(rename = "type")]
    #[serde(rename = "type")]
    pub key_type: KeyTypes,
    #[aas(required)]
    pub value: String,
}

impl Key {
    pub fn new(key_type: KeyTypes, value: impl Into<String>) -> Self {
        Self {
            key_type,
            value: value.into(),
        }
    }
}
