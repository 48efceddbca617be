// crates/kml-rs-xml/src/builder.rs

//! Serializes element trees produced by the `kml-rs` encoder into KML text.

use crate::error::KmlXmlError;
use kml_rs::{Element, GX_NAMESPACE, KML_NAMESPACE, KmlDocument, encode_document};
use log::trace;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Output settings for the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Indentation character and width per level; `None` writes everything
    /// on one line.
    pub indent: Option<(u8, usize)>,
    /// Whether to start the output with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
    /// Namespace declarations (attribute name, URI) added to the root element.
    pub namespaces: Vec<(String, String)>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Some((b' ', 2)),
            xml_declaration: true,
            namespaces: vec![
                ("xmlns".into(), KML_NAMESPACE.into()),
                ("xmlns:gx".into(), GX_NAMESPACE.into()),
            ],
        }
    }
}

/// Serializes a `KmlDocument` into a KML string using the default options.
///
/// # Errors
/// Returns a `KmlXmlError` if encoding the entity graph hits a structural
/// error or the writer fails.
pub fn save_kml_to_string(document: &KmlDocument) -> Result<String, KmlXmlError> {
    save_kml_to_string_with(document, &WriteOptions::default())
}

/// Serializes a `KmlDocument` with explicit output options.
pub fn save_kml_to_string_with(
    document: &KmlDocument,
    options: &WriteOptions,
) -> Result<String, KmlXmlError> {
    let root = encode_document(document)?;
    write_element_to_string(&root, options)
}

/// Serializes any element tree, using `root` as the document element.
pub fn write_element_to_string(
    root: &Element,
    options: &WriteOptions,
) -> Result<String, KmlXmlError> {
    let buffer = Vec::new();
    let mut writer = match options.indent {
        Some((ch, size)) => Writer::new_with_indent(buffer, ch, size),
        None => Writer::new(buffer),
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, root, &options.namespaces)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    namespaces: &[(String, String)],
) -> Result<(), KmlXmlError> {
    trace!("Writing <{}>", element.name());
    let mut start = BytesStart::new(element.name());
    for (key, uri) in namespaces {
        if element.attribute(key).is_none() {
            start.push_attribute((key.as_str(), uri.as_str()));
        }
    }
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children().is_empty() && element.text().is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child, &[])?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
