use std::io::BufRead;

use aas_serde_support::xml::{XmlOptions, XmlReader, XmlRoot};
use tracing::trace;

use crate::error::Result;

/// Deserialize an AAS element from an XML string.
pub fn from_xml_str<T: XmlRoot>(xml: &str) -> Result<T> {
    from_xml_str_with(xml, &XmlOptions::default())
}

/// Deserialize an AAS element from an XML string with explicit options.
pub fn from_xml_str_with<T: XmlRoot>(xml: &str, options: &XmlOptions) -> Result<T> {
    from_xml_reader_with(xml.as_bytes(), options)
}

/// Deserialize an AAS element from an XML byte slice.
pub fn from_xml_slice<T: XmlRoot>(xml: &[u8]) -> Result<T> {
    from_xml_slice_with(xml, &XmlOptions::default())
}

pub fn from_xml_slice_with<T: XmlRoot>(xml: &[u8], options: &XmlOptions) -> Result<T> {
    from_xml_reader_with(xml, options)
}

/// Deserialize an AAS element from any buffered reader.
pub fn from_xml_reader<R: BufRead, T: XmlRoot>(reader: R) -> Result<T> {
    from_xml_reader_with(reader, &XmlOptions::default())
}

pub fn from_xml_reader_with<R: BufRead, T: XmlRoot>(reader: R, options: &XmlOptions) -> Result<T> {
    trace!(root = T::ELEMENT_NAME, "reading XML document");
    let mut reader = XmlReader::new(reader, options.clone());
    let value = reader.read_document::<T>()?;
    trace!(root = T::ELEMENT_NAME, "finished XML document");
    Ok(value)
}
