use std::io::Write;

use aas_serde_support::xml::{XmlOptions, XmlRoot, XmlWriter};
use tracing::trace;

use crate::error::{Result, SerdeError};

/// Serialize an AAS element to an XML string.
pub fn to_xml_string<T: XmlRoot>(value: &T) -> Result<String> {
    to_xml_string_with(value, &XmlOptions::default())
}

/// Serialize an AAS element to an XML string with explicit options.
pub fn to_xml_string_with<T: XmlRoot>(value: &T, options: &XmlOptions) -> Result<String> {
    let buffer = to_xml_vec_with(value, options)?;
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}

/// Serialize an AAS element to an XML byte vector.
pub fn to_xml_vec<T: XmlRoot>(value: &T) -> Result<Vec<u8>> {
    to_xml_vec_with(value, &XmlOptions::default())
}

pub fn to_xml_vec_with<T: XmlRoot>(value: &T, options: &XmlOptions) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer_with(value, &mut buffer, options)?;
    Ok(buffer)
}

/// Serialize an AAS element to an XML writer.
pub fn to_xml_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: XmlRoot,
    W: Write,
{
    to_xml_writer_with(value, writer, &XmlOptions::default())
}

pub fn to_xml_writer_with<T, W>(value: &T, writer: W, options: &XmlOptions) -> Result<()>
where
    T: XmlRoot,
    W: Write,
{
    trace!(root = T::ELEMENT_NAME, "writing XML document");
    let mut w = XmlWriter::new(writer, options.clone());
    w.write_declaration()?;
    w.write_root(value)?;
    w.finish()?;
    trace!(root = T::ELEMENT_NAME, "finished XML document");
    Ok(())
}
