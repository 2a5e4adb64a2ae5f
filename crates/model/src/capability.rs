//! Capability traits: the orthogonal field groups concrete elements compose.
//!
//! A type opts into a group with `#[aas(capabilities(...))]`; the derive
//! checks that the type's leading fields are the group's fields, in the
//! canonical order below, and generates the impl.
//!
//! | group | fields |
//! |-------|--------|
//! | [`HasExtensions`] | `extensions` |
//! | [`Referable`] | `category`, `id_short`, `display_names`, `descriptions` |
//! | [`HasSemantics`] | `semantic_id`, `supplemental_semantic_ids` |
//! | [`Qualifiable`] | `qualifiers` |
//! | [`HasDataSpecification`] | `embedded_data_specifications` |

use crate::{
    EmbeddedDataSpecification, Extension, LangStringNameType, LangStringTextType, Qualifier,
    Reference,
};

pub trait HasExtensions {
    fn extensions(&self) -> &[Extension];
    fn extensions_mut(&mut self) -> &mut Vec<Extension>;
    fn set_extensions(&mut self, value: Vec<Extension>);
}

/// An element that can be referred to by its short id.
pub trait Referable: HasExtensions {
    fn category(&self) -> Option<&str>;
    fn set_category(&mut self, value: Option<String>);

    fn id_short(&self) -> Option<&str>;
    fn set_id_short(&mut self, value: Option<String>);

    fn display_names(&self) -> &[LangStringNameType];
    fn display_names_mut(&mut self) -> &mut Vec<LangStringNameType>;
    fn set_display_names(&mut self, value: Vec<LangStringNameType>);

    fn descriptions(&self) -> &[LangStringTextType];
    fn descriptions_mut(&mut self) -> &mut Vec<LangStringTextType>;
    fn set_descriptions(&mut self, value: Vec<LangStringTextType>);
}

pub trait HasSemantics {
    fn semantic_id(&self) -> Option<&Reference>;
    fn set_semantic_id(&mut self, value: Option<Reference>);

    fn supplemental_semantic_ids(&self) -> &[Reference];
    fn supplemental_semantic_ids_mut(&mut self) -> &mut Vec<Reference>;
    fn set_supplemental_semantic_ids(&mut self, value: Vec<Reference>);
}

pub trait Qualifiable {
    fn qualifiers(&self) -> &[Qualifier];
    fn qualifiers_mut(&mut self) -> &mut Vec<Qualifier>;
    fn set_qualifiers(&mut self, value: Vec<Qualifier>);
}

pub trait HasDataSpecification {
    fn embedded_data_specifications(&self) -> &[EmbeddedDataSpecification];
    fn embedded_data_specifications_mut(&mut self) -> &mut Vec<EmbeddedDataSpecification>;
    fn set_embedded_data_specifications(&mut self, value: Vec<EmbeddedDataSpecification>);
}
