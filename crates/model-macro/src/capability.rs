//! The capability groups an element can compose, in canonical order.

/// How a capability field is exposed through its trait.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `Option<String>`: getter returns `Option<&str>`.
    Text,
    /// `Option<T>`: getter returns `Option<&T>`.
    Optional,
    /// `Vec<T>`: getter returns `&[T]`, plus a `_mut` accessor.
    List,
}

pub struct CapabilityField {
    pub field: &'static str,
    pub wire_name: &'static str,
    pub item: Option<&'static str>,
    pub access: Access,
}

pub struct Capability {
    pub name: &'static str,
    pub trait_name: &'static str,
    pub fields: &'static [CapabilityField],
}

pub static CAPABILITIES: &[Capability] = &[
    Capability {
        name: "has_extensions",
        trait_name: "HasExtensions",
        fields: &[CapabilityField {
            field: "extensions",
            wire_name: "extensions",
            item: Some("extension"),
            access: Access::List,
        }],
    },
    Capability {
        name: "referable",
        trait_name: "Referable",
        fields: &[
            CapabilityField {
                field: "category",
                wire_name: "category",
                item: None,
                access: Access::Text,
            },
            CapabilityField {
                field: "id_short",
                wire_name: "idShort",
                item: None,
                access: Access::Text,
            },
            CapabilityField {
                field: "display_names",
                wire_name: "displayName",
                item: Some("langStringNameType"),
                access: Access::List,
            },
            CapabilityField {
                field: "descriptions",
                wire_name: "description",
                item: Some("langStringTextType"),
                access: Access::List,
            },
        ],
    },
    Capability {
        name: "has_semantics",
        trait_name: "HasSemantics",
        fields: &[
            CapabilityField {
                field: "semantic_id",
                wire_name: "semanticId",
                item: None,
                access: Access::Optional,
            },
            CapabilityField {
                field: "supplemental_semantic_ids",
                wire_name: "supplementalSemanticIds",
                item: Some("reference"),
                access: Access::List,
            },
        ],
    },
    Capability {
        name: "qualifiable",
        trait_name: "Qualifiable",
        fields: &[CapabilityField {
            field: "qualifiers",
            wire_name: "qualifiers",
            item: Some("qualifier"),
            access: Access::List,
        }],
    },
    Capability {
        name: "has_data_specification",
        trait_name: "HasDataSpecification",
        fields: &[CapabilityField {
            field: "embedded_data_specifications",
            wire_name: "embeddedDataSpecifications",
            item: Some("embeddedDataSpecification"),
            access: Access::List,
        }],
    },
];

pub fn lookup(name: &str) -> Option<&'static Capability> {
    CAPABILITIES.iter().find(|cap| cap.name == name)
}

pub fn names() -> Vec<&'static str> {
    CAPABILITIES.iter().map(|cap| cap.name).collect()
}

/// Position in canonical composition order.
pub fn rank(cap: &Capability) -> usize {
    CAPABILITIES
        .iter()
        .position(|candidate| candidate.name == cap.name)
        .unwrap_or(usize::MAX)
}
