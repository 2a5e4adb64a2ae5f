use std::io::{BufRead, Write};

use super::{ElementStart, XmlDecode, XmlEncode, XmlReader, XmlWriter, utils};
use crate::error::Result;

impl XmlEncode for String {
    fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        w.text_element(name, self)
    }
}

impl XmlEncode for str {
    fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        w.text_element(name, self)
    }
}

impl XmlDecode for String {
    fn read_element<R: BufRead>(r: &mut XmlReader<R>, _start: &ElementStart) -> Result<Self> {
        r.read_text()
    }
}

impl XmlEncode for bool {
    fn write_element<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        w.text_element(name, utils::bool_to_string(*self))
    }
}

impl XmlDecode for bool {
    fn read_element<R: BufRead>(r: &mut XmlReader<R>, start: &ElementStart) -> Result<Self> {
        let text = r.read_text()?;
        utils::parse_bool(&text).ok_or_else(|| {
            r.malformed(format!(
                "<{}> expects a boolean, found {:?}",
                start.local_name(),
                text
            ))
        })
    }
}
