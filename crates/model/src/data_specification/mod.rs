//! Embedded data specifications.
//!
//! The shape of [`DataSpecificationContent`] is not self-describing on the
//! wire; it is decided by the template that
//! [`EmbeddedDataSpecification::data_specification`] refers to, through a
//! [`ContentShapeRegistry`]. Both codecs therefore treat the pair as a unit:
//! content is only written when it has the shape the reference resolves to,
//! and on read the reference is resolved first and the content parsed as the
//! resolved shape, whatever order the two appear in.

mod iec61360;
mod physical_unit;

use serde::de::Error as _;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::support::json::check_model_type;
use crate::support::registry::{check_shape, unresolved_reason};
use crate::support::{ContentShapeRegistry, IEC61360_SHAPE, PHYSICAL_UNIT_SHAPE};
use crate::validation::{Validate, ValidationError};
use crate::{AasElement, Reference};

pub use iec61360::{DataSpecificationIec61360, LevelType, ValueList, ValueReferencePair};
pub use physical_unit::DataSpecificationPhysicalUnit;

lazy_static::lazy_static! {
    /// Registry the JSON codec dispatches content with.
    static ref DEFAULT_SHAPES: ContentShapeRegistry = ContentShapeRegistry::default();
}

/// A data specification template reference paired with content for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, AasElement)]
#[aas(xml(custom))]
pub struct EmbeddedDataSpecification {
    pub data_specification: Reference,
    #[aas(choice, required)]
    pub data_specification_content: Option<DataSpecificationContent>,
}

impl EmbeddedDataSpecification {
    pub fn new(data_specification: Reference, content: impl Into<DataSpecificationContent>) -> Self {
        Self {
            data_specification,
            data_specification_content: Some(content.into()),
        }
    }
}

/// The content variants a data specification template can prescribe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "modelType")]
pub enum DataSpecificationContent {
    #[serde(rename = "DataSpecificationIec61360")]
    Iec61360(DataSpecificationIec61360),
    #[serde(rename = "DataSpecificationPhysicalUnit")]
    PhysicalUnit(DataSpecificationPhysicalUnit),
}

impl DataSpecificationContent {
    /// Element name of this content on the XML wire.
    pub fn shape(&self) -> &'static str {
        match self {
            DataSpecificationContent::Iec61360(_) => IEC61360_SHAPE,
            DataSpecificationContent::PhysicalUnit(_) => PHYSICAL_UNIT_SHAPE,
        }
    }

    /// `modelType` of this content in JSON.
    pub fn model_type(&self) -> &'static str {
        json_model_type(self.shape()).unwrap_or_default()
    }

    /// Parses JSON content as the shape `data_specification` resolves to.
    fn from_json(data_specification: &Reference, value: serde_json::Value) -> Result<Self, String> {
        let shape = DEFAULT_SHAPES
            .resolve(data_specification.key_values())
            .ok_or_else(|| unresolved_reason(data_specification.key_values()))?;
        let model_type = json_model_type(shape).ok_or_else(|| format!("no JSON mapping for content shape {shape}"))?;
        check_model_type(&value, model_type)?;

        let content = if shape == IEC61360_SHAPE {
            serde_json::from_value(value).map(DataSpecificationContent::Iec61360)
        } else {
            serde_json::from_value(value).map(DataSpecificationContent::PhysicalUnit)
        };
        content.map_err(|err| err.to_string())
    }
}

fn json_model_type(shape: &str) -> Option<&'static str> {
    match shape {
        IEC61360_SHAPE => Some("DataSpecificationIec61360"),
        PHYSICAL_UNIT_SHAPE => Some("DataSpecificationPhysicalUnit"),
        _ => None,
    }
}

impl From<DataSpecificationIec61360> for DataSpecificationContent {
    fn from(content: DataSpecificationIec61360) -> Self {
        DataSpecificationContent::Iec61360(content)
    }
}

impl From<DataSpecificationPhysicalUnit> for DataSpecificationContent {
    fn from(content: DataSpecificationPhysicalUnit) -> Self {
        DataSpecificationContent::PhysicalUnit(content)
    }
}

impl Validate for DataSpecificationContent {
    fn validate_into(&self, path: &str, errors: &mut Vec<ValidationError>) {
        match self {
            DataSpecificationContent::Iec61360(content) => content.validate_into(path, errors),
            DataSpecificationContent::PhysicalUnit(content) => content.validate_into(path, errors),
        }
    }
}

impl Serialize for EmbeddedDataSpecification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(content) = &self.data_specification_content {
            check_shape(&DEFAULT_SHAPES, self.data_specification.key_values(), content.shape())
                .map_err(S::Error::custom)?;
        }

        let mut state = serializer.serialize_struct("EmbeddedDataSpecification", 2)?;
        state.serialize_field("dataSpecification", &self.data_specification)?;
        match &self.data_specification_content {
            Some(content) => state.serialize_field("dataSpecificationContent", content)?,
            None => state.skip_field("dataSpecificationContent")?,
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEmbeddedDataSpecification {
    #[serde(default)]
    data_specification: Reference,
    #[serde(default)]
    data_specification_content: Option<serde_json::Value>,
}

impl<'de> Deserialize<'de> for EmbeddedDataSpecification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEmbeddedDataSpecification::deserialize(deserializer)?;
        let content = match raw.data_specification_content {
            Some(value) => Some(
                DataSpecificationContent::from_json(&raw.data_specification, value)
                    .map_err(D::Error::custom)?,
            ),
            None => None,
        };
        Ok(Self {
            data_specification: raw.data_specification,
            data_specification_content: content,
        })
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{BufRead, Write};

    use super::{DataSpecificationContent, DataSpecificationIec61360, DataSpecificationPhysicalUnit, EmbeddedDataSpecification};
    use crate::Reference;
    use crate::support::registry::{check_shape, unresolved_reason};
    use crate::support::xml::{
        CapturedElement, ElementStart, XmlDecode, XmlEncode, XmlReader, XmlWriter, read_single,
        write_single,
    };
    use crate::support::{AAS_NAMESPACE, CodecError, FieldTable, IEC61360_SHAPE, PHYSICAL_UNIT_SHAPE, Result};

    impl XmlEncode for DataSpecificationContent {
        fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
            match self {
                DataSpecificationContent::Iec61360(content) => content.write_element(w, name),
                DataSpecificationContent::PhysicalUnit(content) => content.write_element(w, name),
            }
        }

        fn element_name(&self) -> Option<&'static str> {
            Some(self.shape())
        }
    }

    impl XmlDecode for DataSpecificationContent {
        fn read_element<R: BufRead>(r: &mut XmlReader<R>, start: &ElementStart) -> Result<Self> {
            match start.local_name() {
                IEC61360_SHAPE => DataSpecificationIec61360::read_element(r, start).map(Self::Iec61360),
                PHYSICAL_UNIT_SHAPE => {
                    DataSpecificationPhysicalUnit::read_element(r, start).map(Self::PhysicalUnit)
                }
                other => Err(CodecError::UnresolvableContentShape {
                    path: r.path(),
                    reason: format!("<{other}> is not a data specification content shape"),
                }),
            }
        }

        fn accepts(local_name: &str) -> bool {
            matches!(local_name, IEC61360_SHAPE | PHYSICAL_UNIT_SHAPE)
        }
    }

    impl XmlEncode for EmbeddedDataSpecification {
        fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
            let fields = <Self as FieldTable>::FIELDS;
            w.start_element(name)?;
            write_single(w, &fields[0], Some(&self.data_specification))?;
            if let Some(content) = &self.data_specification_content {
                check_shape(
                    w.options().content_shapes(),
                    self.data_specification.key_values(),
                    content.shape(),
                )
                .map_err(|reason| CodecError::UnresolvableContentShape {
                    path: w.path(),
                    reason,
                })?;
            }
            write_single(w, &fields[1], self.data_specification_content.as_ref())?;
            w.end_element(name)
        }
    }

    impl XmlDecode for EmbeddedDataSpecification {
        fn read_element<R: BufRead>(r: &mut XmlReader<R>, _start: &ElementStart) -> Result<Self> {
            let fields = <Self as FieldTable>::FIELDS;
            let mut value = Self::default();
            let mut captured = None;
            while let Some(child) = r.next_child()? {
                if fields[0].matches(child.namespace(), child.local_name()) {
                    if let Some(reference) = read_single::<Reference, _>(r, &fields[0], &child)? {
                        value.data_specification = reference;
                    }
                } else if fields[1].matches(child.namespace(), child.local_name()) {
                    captured = Some(r.capture_element(&child)?);
                } else {
                    r.skip_unknown(&child)?;
                }
            }

            // Closed even when the content fails: lenient list readers resume
            // after this element.
            let content = match captured {
                Some(captured) => read_content(r, captured, &value.data_specification),
                None => Ok(None),
            };
            r.close_element()?;
            value.data_specification_content = content?;
            Ok(value)
        }
    }

    fn read_content<R: BufRead>(
        r: &mut XmlReader<R>,
        captured: CapturedElement,
        data_specification: &Reference,
    ) -> Result<Option<DataSpecificationContent>> {
        if !captured.has_children() {
            return Ok(None);
        }
        let Some(shape) = r
            .options()
            .content_shapes()
            .resolve(data_specification.key_values())
        else {
            return Err(CodecError::UnresolvableContentShape {
                path: format!("{}/{}", r.path(), captured.start().local_name()),
                reason: unresolved_reason(data_specification.key_values()),
            });
        };

        let mark = r.mark();
        let result = read_resolved(r, captured, shape);
        if result.is_err() {
            r.restore(mark);
        }
        result.map(Some)
    }

    fn read_resolved<R: BufRead>(
        r: &mut XmlReader<R>,
        captured: CapturedElement,
        shape: &'static str,
    ) -> Result<DataSpecificationContent> {
        r.reenter(captured);
        let mut content = None;
        while let Some(child) = r.next_child()? {
            let is_content = content.is_none()
                && child.namespace() == Some(AAS_NAMESPACE)
                && DataSpecificationContent::accepts(child.local_name());
            if !is_content {
                r.skip_unknown(&child)?;
                continue;
            }
            if child.local_name() != shape {
                return Err(CodecError::UnresolvableContentShape {
                    path: r.path(),
                    reason: format!(
                        "reference resolves to {shape}, but the content is {}",
                        child.local_name()
                    ),
                });
            }
            content = Some(DataSpecificationContent::read_element(r, &child)?);
        }
        let path = r.path();
        r.close_element()?;
        content.ok_or_else(|| CodecError::UnresolvableContentShape {
            path,
            reason: format!("content holds no {shape} element"),
        })
    }
}
