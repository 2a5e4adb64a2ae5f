//! Language-tagged strings.
//!
//! All five variants share the `{ language, text }` shape; they differ in the
//! element name they are listed under and in the length limits the AAS
//! metamodel puts on `text`.

use serde::{Deserialize, Serialize};

use crate::AasElement;

macro_rules! lang_string {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AasElement,
        )]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            /// BCP 47 language tag.
            #[aas(required)]
            pub language: String,
            #[aas(required)]
            pub text: String,
        }

        impl $name {
            pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
                Self {
                    language: language.into(),
                    text: text.into(),
                }
            }
        }
    };
}

lang_string! {
    /// Display name of a referable, listed as `langStringNameType`.
    LangStringNameType
}

lang_string! {
    /// Description of a referable, listed as `langStringTextType`.
    LangStringTextType
}

lang_string! {
    LangStringPreferredNameTypeIec61360
}

lang_string! {
    LangStringShortNameTypeIec61360
}

lang_string! {
    LangStringDefinitionTypeIec61360
}
