//! Declarative field tables.
//!
//! Every model type lists its fields once, in wire order, as a static slice of
//! [`FieldDescriptor`]s. The codecs never look at struct layout directly; they
//! walk this table.

/// How a field is laid out on the XML wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single element named after the field (leaf text or nested fields).
    Element,
    /// An outer element named after the field, holding one child per entry.
    ///
    /// `item` names the children; `None` means the items are polymorphic and
    /// name themselves.
    WrappedList { item: Option<&'static str> },
    /// An outer element named after the field, holding exactly one
    /// self-named child.
    WrappedChoice,
}

/// One row of a type's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub name: &'static str,
    /// Local element name on the wire.
    pub wire_name: &'static str,
    /// Namespace URI the element lives in.
    pub namespace: &'static str,
    pub kind: FieldKind,
    /// Emit the wrapper even when the list is empty.
    pub keep_empty_wrapper: bool,
}

impl FieldDescriptor {
    /// Item element name for wrapped lists with monomorphic items.
    pub fn item_name(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::WrappedList { item } => item,
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, FieldKind::WrappedList { .. })
    }

    /// Whether an element with the given namespace and local name is this field.
    pub fn matches(&self, namespace: Option<&str>, local_name: &str) -> bool {
        namespace == Some(self.namespace) && local_name == self.wire_name
    }
}

/// Implemented by every type that carries a field table.
pub trait FieldTable {
    /// Fields in declared (and therefore emission) order.
    const FIELDS: &'static [FieldDescriptor];

    /// Looks up a descriptor by its Rust field name.
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AAS_NAMESPACE;

    const INPUTS: FieldDescriptor = FieldDescriptor {
        name: "input_variables",
        wire_name: "inputVariables",
        namespace: AAS_NAMESPACE,
        kind: FieldKind::WrappedList {
            item: Some("operationVariable"),
        },
        keep_empty_wrapper: false,
    };

    #[test]
    fn test_matches_requires_namespace() {
        assert!(INPUTS.matches(Some(AAS_NAMESPACE), "inputVariables"));
        assert!(!INPUTS.matches(None, "inputVariables"));
        assert!(!INPUTS.matches(Some("urn:other"), "inputVariables"));
        assert!(!INPUTS.matches(Some(AAS_NAMESPACE), "outputVariables"));
    }

    #[test]
    fn test_item_name() {
        assert_eq!(INPUTS.item_name(), Some("operationVariable"));
        assert!(INPUTS.is_list());

        let id_short = FieldDescriptor {
            name: "id_short",
            wire_name: "idShort",
            namespace: AAS_NAMESPACE,
            kind: FieldKind::Element,
            keep_empty_wrapper: false,
        };
        assert_eq!(id_short.item_name(), None);
        assert!(!id_short.is_list());
    }
}
