//! Namespace-aware XML encoding for AAS elements.
//!
//! The codec is table-driven: each model type exposes its
//! [`FieldTable`](crate::FieldTable) and the generated `XmlEncode`/`XmlDecode`
//! impls call the generic routines in [`fields`] once per row.
//!
//! ## Wire layout
//!
//! | Field kind | XML |
//! |------------|-----|
//! | scalar `idShort = "calc"` | `<aas:idShort>calc</aas:idShort>` |
//! | nested `semanticId` | `<aas:semanticId><aas:type>…</aas:type><aas:keys>…</aas:keys></aas:semanticId>` |
//! | wrapped list `inputVariables` | `<aas:inputVariables><aas:operationVariable>…</aas:operationVariable></aas:inputVariables>` |
//! | wrapped choice `value` | `<aas:value><aas:property>…</aas:property></aas:value>` |
//!
//! Empty lists are omitted unless the descriptor keeps the wrapper; both forms
//! decode to an empty list.
//!
//! ## Namespaces
//!
//! All elements live in [`AAS_NAMESPACE`](crate::AAS_NAMESPACE). The writer
//! declares it once on the root element (prefix `aas` by default). The reader
//! resolves prefixes through the document's own bindings, so any prefix, or
//! the default namespace, is accepted as long as it is bound to the AAS URI.

pub mod fields;
mod options;
mod primitives;
mod reader;
mod utils;
mod writer;

use std::io::{BufRead, Write};

use crate::error::Result;

pub use fields::{read_list, read_single, write_list, write_single};
pub use options::{DEFAULT_MAX_DEPTH, XmlOptions};
pub use reader::{CapturedElement, ElementStart, ReaderMark, XmlReader};
pub use writer::XmlWriter;

/// Writes a value as one XML element.
pub trait XmlEncode {
    /// Writes `self` as an element named `name` (qualified by the writer).
    fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()>;

    /// The element name this value gives itself when it appears as a
    /// polymorphic list item or wrapped choice.
    fn element_name(&self) -> Option<&'static str> {
        None
    }
}

/// Reads a value from one XML element whose start tag was just consumed.
///
/// Implementations consume everything up to and including the matching end
/// tag, so the reader is positioned after the element on success.
pub trait XmlDecode: Sized {
    fn read_element<R: BufRead>(r: &mut XmlReader<R>, start: &ElementStart) -> Result<Self>;

    /// Whether an element with this local name can be read as `Self`.
    ///
    /// Polymorphic types override this to name their variants; it is consulted
    /// for list items and wrapped choices that carry no fixed item name.
    fn accepts(local_name: &str) -> bool {
        let _ = local_name;
        true
    }
}

/// A type that can be the root element of a document.
pub trait XmlRoot: XmlEncode + XmlDecode {
    const ELEMENT_NAME: &'static str;
}

impl<T: XmlEncode + ?Sized> XmlEncode for Box<T> {
    fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        (**self).write_element(w, name)
    }

    fn element_name(&self) -> Option<&'static str> {
        (**self).element_name()
    }
}

impl<T: XmlDecode> XmlDecode for Box<T> {
    fn read_element<R: BufRead>(r: &mut XmlReader<R>, start: &ElementStart) -> Result<Self> {
        T::read_element(r, start).map(Box::new)
    }

    fn accepts(local_name: &str) -> bool {
        T::accepts(local_name)
    }
}
