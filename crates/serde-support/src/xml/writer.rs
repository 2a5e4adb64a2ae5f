use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{XmlOptions, XmlRoot};
use crate::error::{CodecError, Result};

/// Streaming XML writer that qualifies every element with the AAS namespace.
///
/// The namespace declaration is attached to the first element written, which
/// is the document root.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
    options: XmlOptions,
    root_written: bool,
    path: Vec<String>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(inner: W, options: XmlOptions) -> Self {
        let writer = match options.indent() {
            Some(indent) => Writer::new_with_indent(inner, b' ', indent),
            None => Writer::new(inner),
        };
        Self {
            writer,
            options,
            root_written: false,
            path: Vec::new(),
        }
    }

    pub fn options(&self) -> &XmlOptions {
        &self.options
    }

    /// Slash-separated path of the currently open elements.
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Writes the XML declaration if the options ask for one.
    pub fn write_declaration(&mut self) -> Result<()> {
        if self.options.declaration() {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        Ok(())
    }

    /// Writes `value` as the document root.
    pub fn write_root<T: XmlRoot>(&mut self, value: &T) -> Result<()> {
        value.write_element(self, T::ELEMENT_NAME)
    }

    /// Fails unless `namespace` is the one this writer binds.
    pub fn ensure_namespace(&self, namespace: &str) -> Result<()> {
        if namespace == self.options.namespace() {
            Ok(())
        } else {
            Err(CodecError::Unencodable {
                path: self.path(),
                message: format!("namespace {namespace} is not bound by this writer"),
            })
        }
    }

    pub fn start_element(&mut self, name: &str) -> Result<()> {
        let start = self.open_tag(name);
        self.writer.write_event(Event::Start(start))?;
        self.path.push(name.to_string());
        Ok(())
    }

    pub fn end_element(&mut self, name: &str) -> Result<()> {
        let qualified = self.qualify(name).into_owned();
        self.writer.write_event(Event::End(BytesEnd::new(qualified)))?;
        self.path.pop();
        Ok(())
    }

    /// Writes a childless element, `<aas:name/>`.
    pub fn empty_element(&mut self, name: &str) -> Result<()> {
        let start = self.open_tag(name);
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    /// Writes `<aas:name>text</aas:name>`, escaping the text.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        // An empty start/end pair would pick up indentation whitespace when
        // pretty-printing, which then reads back as text.
        if text.is_empty() {
            return self.empty_element(name);
        }
        let start = self.open_tag(name);
        let qualified = self.qualify(name).into_owned();
        self.writer.write_event(Event::Start(start))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(qualified)))?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        let mut inner = self.writer.into_inner();
        inner.flush()?;
        Ok(inner)
    }

    fn qualify<'n>(&self, name: &'n str) -> Cow<'n, str> {
        if self.options.prefix().is_empty() {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("{}:{}", self.options.prefix(), name))
        }
    }

    fn open_tag(&mut self, name: &str) -> BytesStart<'static> {
        let mut start = BytesStart::new(self.qualify(name).into_owned());
        if !self.root_written {
            let namespace = self.options.namespace();
            if self.options.prefix().is_empty() {
                start.push_attribute(("xmlns", namespace));
            } else {
                let attribute = format!("xmlns:{}", self.options.prefix());
                start.push_attribute((attribute.as_str(), namespace));
            }
            self.root_written = true;
        }
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(options: XmlOptions, f: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> Result<()>) -> String {
        let mut w = XmlWriter::new(Vec::new(), options);
        f(&mut w).unwrap();
        String::from_utf8(w.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_root_declares_prefixed_namespace() {
        let xml = written(XmlOptions::default().with_declaration(false), |w| {
            w.start_element("operation")?;
            w.text_element("idShort", "calc")?;
            w.end_element("operation")
        });
        assert_eq!(
            xml,
            "<aas:operation xmlns:aas=\"https://admin-shell.io/aas/3/0\">\
             <aas:idShort>calc</aas:idShort></aas:operation>"
        );
    }

    #[test]
    fn test_default_namespace_when_prefix_empty() {
        let xml = written(
            XmlOptions::default().with_declaration(false).with_prefix(""),
            |w| {
                w.start_element("property")?;
                w.end_element("property")
            },
        );
        assert_eq!(
            xml,
            "<property xmlns=\"https://admin-shell.io/aas/3/0\"></property>"
        );
    }

    #[test]
    fn test_declaration_and_escaping() {
        let xml = written(XmlOptions::default(), |w| {
            w.start_element("property")?;
            w.text_element("value", "a < b & c")?;
            w.end_element("property")
        });
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<aas:value>a &lt; b &amp; c</aas:value>"));
    }

    #[test]
    fn test_empty_text_is_self_closing() {
        let xml = written(
            XmlOptions::default().with_declaration(false).with_indent(2),
            |w| {
                w.start_element("property")?;
                w.text_element("value", "")?;
                w.end_element("property")
            },
        );
        assert!(xml.contains("<aas:value/>"));
    }

    #[test]
    fn test_path_tracks_open_elements() {
        let mut w = XmlWriter::new(Vec::new(), XmlOptions::default());
        w.start_element("operation").unwrap();
        w.start_element("inputVariables").unwrap();
        assert_eq!(w.path(), "operation/inputVariables");
        w.end_element("inputVariables").unwrap();
        assert_eq!(w.path(), "operation");
    }

    #[test]
    fn test_ensure_namespace() {
        let w = XmlWriter::new(Vec::new(), XmlOptions::default());
        assert!(w.ensure_namespace(crate::AAS_NAMESPACE).is_ok());
        assert!(matches!(
            w.ensure_namespace("urn:other"),
            Err(CodecError::Unencodable { .. })
        ));
    }
}
