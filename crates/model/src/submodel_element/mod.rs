//! Submodel elements.

mod operation;
mod property;

use serde::{Deserialize, Serialize};

use crate::Referable;
use crate::validation::{Validate, ValidationError};

pub use operation::{Operation, OperationVariable};
pub use property::Property;

/// Any concrete submodel element.
///
/// In XML each variant is written as its own element (`<aas:property>`,
/// `<aas:operation>`); in JSON the variant is named by `modelType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "modelType")]
pub enum SubmodelElement {
    Property(Property),
    Operation(Box<Operation>),
}

impl SubmodelElement {
    pub fn referable(&self) -> &dyn Referable {
        match self {
            SubmodelElement::Property(property) => property,
            SubmodelElement::Operation(operation) => &**operation,
        }
    }

    pub fn referable_mut(&mut self) -> &mut dyn Referable {
        match self {
            SubmodelElement::Property(property) => property,
            SubmodelElement::Operation(operation) => &mut **operation,
        }
    }

    pub fn id_short(&self) -> Option<&str> {
        self.referable().id_short()
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            SubmodelElement::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            SubmodelElement::Operation(operation) => Some(&**operation),
            _ => None,
        }
    }
}

impl From<Property> for SubmodelElement {
    fn from(property: Property) -> Self {
        SubmodelElement::Property(property)
    }
}

impl From<Operation> for SubmodelElement {
    fn from(operation: Operation) -> Self {
        SubmodelElement::Operation(Box::new(operation))
    }
}

impl From<Property> for Box<SubmodelElement> {
    fn from(property: Property) -> Self {
        Box::new(property.into())
    }
}

impl From<Operation> for Box<SubmodelElement> {
    fn from(operation: Operation) -> Self {
        Box::new(operation.into())
    }
}

impl Validate for SubmodelElement {
    fn validate_into(&self, path: &str, errors: &mut Vec<ValidationError>) {
        match self {
            SubmodelElement::Property(property) => property.validate_into(path, errors),
            SubmodelElement::Operation(operation) => operation.validate_into(path, errors),
        }
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{BufRead, Write};

    use super::{Operation, Property, SubmodelElement};
    use crate::support::Result;
    use crate::support::xml::{ElementStart, XmlDecode, XmlEncode, XmlReader, XmlRoot, XmlWriter};

    impl XmlEncode for SubmodelElement {
        fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
            match self {
                SubmodelElement::Property(property) => property.write_element(w, name),
                SubmodelElement::Operation(operation) => operation.write_element(w, name),
            }
        }

        fn element_name(&self) -> Option<&'static str> {
            match self {
                SubmodelElement::Property(_) => Some(Property::ELEMENT_NAME),
                SubmodelElement::Operation(_) => Some(Operation::ELEMENT_NAME),
            }
        }
    }

    impl XmlDecode for SubmodelElement {
        fn read_element<R: BufRead>(r: &mut XmlReader<R>, start: &ElementStart) -> Result<Self> {
            let name = start.local_name();
            if name == Property::ELEMENT_NAME {
                Property::read_element(r, start).map(SubmodelElement::Property)
            } else if name == Operation::ELEMENT_NAME {
                Operation::read_element(r, start).map(|operation| SubmodelElement::Operation(Box::new(operation)))
            } else {
                Err(r.malformed(format!("<{name}> is not a submodel element")))
            }
        }

        fn accepts(local_name: &str) -> bool {
            Property::accepts(local_name) || Operation::accepts(local_name)
        }
    }
}
