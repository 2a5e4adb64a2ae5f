//! Generic per-field routines that generated codecs call once per table row.

use std::io::{BufRead, Write};

use tracing::warn;

use super::{ElementStart, XmlDecode, XmlEncode, XmlReader, XmlWriter};
use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::error::{CodecError, Result};

/// Writes a single-valued field. `None` writes nothing.
pub fn write_single<T, W>(w: &mut XmlWriter<W>, field: &FieldDescriptor, value: Option<&T>) -> Result<()>
where
    T: XmlEncode + ?Sized,
    W: Write,
{
    let Some(value) = value else {
        return Ok(());
    };
    w.ensure_namespace(field.namespace)?;

    match field.kind {
        FieldKind::Element => value.write_element(w, field.wire_name),
        FieldKind::WrappedChoice => {
            w.start_element(field.wire_name)?;
            let name = self_name(w, field, value)?;
            value.write_element(w, name)?;
            w.end_element(field.wire_name)
        }
        FieldKind::WrappedList { .. } => Err(CodecError::Unencodable {
            path: w.path(),
            message: format!("field {} is a list but was given a single value", field.name),
        }),
    }
}

/// Writes a list field inside its wrapper element.
///
/// An empty list writes nothing, or an empty wrapper when the descriptor keeps it.
pub fn write_list<T, W>(w: &mut XmlWriter<W>, field: &FieldDescriptor, items: &[T]) -> Result<()>
where
    T: XmlEncode,
    W: Write,
{
    w.ensure_namespace(field.namespace)?;
    if items.is_empty() {
        if field.keep_empty_wrapper {
            w.empty_element(field.wire_name)?;
        }
        return Ok(());
    }

    w.start_element(field.wire_name)?;
    for item in items {
        let name = match field.item_name() {
            Some(name) => name,
            None => self_name(w, field, item)?,
        };
        item.write_element(w, name)?;
    }
    w.end_element(field.wire_name)
}

/// Reads a single-valued field whose element `start` was just entered.
///
/// For a wrapped choice the first child the target type accepts is read and
/// any others are treated as unknown. An empty wrapper yields `None`.
pub fn read_single<T, R>(r: &mut XmlReader<R>, field: &FieldDescriptor, start: &ElementStart) -> Result<Option<T>>
where
    T: XmlDecode,
    R: BufRead,
{
    match field.kind {
        FieldKind::Element => T::read_element(r, start).map(Some),
        FieldKind::WrappedChoice => {
            let mut value = None;
            while let Some(child) = r.next_child()? {
                let wanted = value.is_none()
                    && child.namespace() == Some(field.namespace)
                    && T::accepts(child.local_name());
                if wanted {
                    value = Some(T::read_element(r, &child)?);
                } else {
                    r.skip_unknown(&child)?;
                }
            }
            r.close_element()?;
            Ok(value)
        }
        FieldKind::WrappedList { .. } => Err(r.malformed(format!(
            "field {} is a list but was read as a single value",
            field.name
        ))),
    }
}

/// Reads the items of a list field whose wrapper element was just entered.
///
/// With lenient content enabled, items that fail only because their content
/// shape cannot be resolved are dropped with a warning.
pub fn read_list<T, R>(r: &mut XmlReader<R>, field: &FieldDescriptor) -> Result<Vec<T>>
where
    T: XmlDecode,
    R: BufRead,
{
    let mut items = Vec::new();
    while let Some(child) = r.next_child()? {
        let is_item = child.namespace() == Some(field.namespace)
            && match field.item_name() {
                Some(name) => child.local_name() == name,
                None => T::accepts(child.local_name()),
            };
        if !is_item {
            r.skip_unknown(&child)?;
            continue;
        }

        match T::read_element(r, &child) {
            Ok(item) => items.push(item),
            Err(err) if r.options().lenient_content() && err.is_unresolvable_content() => {
                warn!(field = field.wire_name, error = %err, "dropping list item with unresolvable content");
            }
            Err(err) => return Err(err),
        }
    }
    r.close_element()?;
    Ok(items)
}

fn self_name<T, W>(w: &XmlWriter<W>, field: &FieldDescriptor, value: &T) -> Result<&'static str>
where
    T: XmlEncode + ?Sized,
    W: Write,
{
    value.element_name().ok_or_else(|| CodecError::Unencodable {
        path: w.path(),
        message: format!("items of {} must name their own element", field.wire_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AAS_NAMESPACE;
    use crate::xml::XmlOptions;

    const NAMES: FieldDescriptor = FieldDescriptor {
        name: "names",
        wire_name: "names",
        namespace: AAS_NAMESPACE,
        kind: FieldKind::WrappedList { item: Some("name") },
        keep_empty_wrapper: false,
    };

    const KEPT: FieldDescriptor = FieldDescriptor {
        keep_empty_wrapper: true,
        ..NAMES
    };

    const CHOICE: FieldDescriptor = FieldDescriptor {
        name: "value",
        wire_name: "value",
        namespace: AAS_NAMESPACE,
        kind: FieldKind::WrappedChoice,
        keep_empty_wrapper: false,
    };

    fn write(f: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> Result<()>) -> Result<String> {
        let mut w = XmlWriter::new(Vec::new(), XmlOptions::default().with_declaration(false));
        w.start_element("root")?;
        f(&mut w)?;
        w.end_element("root")?;
        Ok(String::from_utf8(w.finish()?).unwrap())
    }

    fn enter<'a>(xml: &'a str, options: XmlOptions) -> (XmlReader<&'a [u8]>, ElementStart) {
        let mut r = XmlReader::from_xml(xml, options);
        r.next_child().unwrap().unwrap();
        let field = r.next_child().unwrap().unwrap();
        (r, field)
    }

    #[test]
    fn test_write_list() {
        let names = vec!["a".to_string(), "b".to_string()];
        let xml = write(|w| write_list(w, &NAMES, &names)).unwrap();
        assert!(xml.contains("<aas:names><aas:name>a</aas:name><aas:name>b</aas:name></aas:names>"));
    }

    #[test]
    fn test_empty_list_wrapper() {
        let empty: Vec<String> = Vec::new();
        let omitted = write(|w| write_list(w, &NAMES, &empty)).unwrap();
        assert!(!omitted.contains("names"));

        let kept = write(|w| write_list(w, &KEPT, &empty)).unwrap();
        assert!(kept.contains("<aas:names/>"));
    }

    #[test]
    fn test_choice_requires_self_named_value() {
        let err = write(|w| write_single(w, &CHOICE, Some(&"plain".to_string()))).unwrap_err();
        assert!(matches!(err, CodecError::Unencodable { .. }));
    }

    #[test]
    fn test_foreign_namespace_is_unencodable() {
        let foreign = FieldDescriptor {
            namespace: "urn:other",
            ..NAMES
        };
        let err = write(|w| write_list(w, &foreign, &["x".to_string()])).unwrap_err();
        assert!(matches!(err, CodecError::Unencodable { .. }));
    }

    #[test]
    fn test_read_list_skips_foreign_items() {
        let (mut r, _) = enter(
            r#"<aas:root xmlns:aas="https://admin-shell.io/aas/3/0" xmlns:x="urn:x">
                 <aas:names>
                   <aas:name>a</aas:name>
                   <x:name>foreign</x:name>
                   <aas:name>b</aas:name>
                 </aas:names>
               </aas:root>"#,
            XmlOptions::default(),
        );
        let names: Vec<String> = read_list(&mut r, &NAMES).unwrap();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(r.path(), "root");
    }

    #[test]
    fn test_read_empty_wrapper() {
        let (mut r, _) = enter(
            r#"<aas:root xmlns:aas="https://admin-shell.io/aas/3/0"><aas:names/></aas:root>"#,
            XmlOptions::default(),
        );
        let names: Vec<String> = read_list(&mut r, &NAMES).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_read_single_element() {
        let id_short = FieldDescriptor {
            name: "id_short",
            wire_name: "idShort",
            namespace: AAS_NAMESPACE,
            kind: FieldKind::Element,
            keep_empty_wrapper: false,
        };
        let (mut r, start) = enter(
            r#"<aas:root xmlns:aas="https://admin-shell.io/aas/3/0"><aas:idShort>calc</aas:idShort></aas:root>"#,
            XmlOptions::default(),
        );
        let value: Option<String> = read_single(&mut r, &id_short, &start).unwrap();
        assert_eq!(value.as_deref(), Some("calc"));
    }
}
