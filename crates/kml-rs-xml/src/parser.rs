// crates/kml-rs-xml/src/parser.rs

//! Reads KML text into the raw element tree consumed by the `kml-rs` driver.

use crate::error::KmlXmlError;
use kml_rs::{KmlDocument, Node, RawElement, decode, decode_document};
use log::trace;
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

/// Parses a KML string and decodes the `<kml>` document it contains.
///
/// # Errors
/// Returns a `KmlXmlError` if the markup is ill-formed or the document has a
/// structure the object model cannot represent. Malformed field values are
/// not errors: they decode to their defaults.
pub fn load_kml_from_str(xml_content: &str) -> Result<KmlDocument, KmlXmlError> {
    let root = parse_raw_tree(xml_content)?;
    Ok(decode_document(&root)?)
}

/// Parses a fragment whose root is a single entity element, e.g. a bare
/// `<Link>...</Link>`.
pub fn load_node_from_str(xml_content: &str) -> Result<Node, KmlXmlError> {
    let root = parse_raw_tree(xml_content)?;
    Ok(decode(&root)?)
}

/// Builds the raw element tree for `xml_content`.
///
/// Namespace declarations are dropped from the attribute maps and entity and
/// character references are resolved. Text of an element without children is
/// kept verbatim (`None` when empty); text around child elements is trimmed
/// away as formatting. Comments, processing instructions and the XML
/// declaration are skipped.
pub fn parse_raw_tree(xml_content: &str) -> Result<RawElement, KmlXmlError> {
    let mut reader = Reader::from_str(xml_content);
    let decoder = reader.decoder();

    // Open elements, each with the text collected so far.
    let mut stack: Vec<(RawElement, String)> = Vec::new();
    let mut root: Option<RawElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push((open_element(&e, decoder)?, String::new()));
            }
            Event::Empty(e) => {
                let element = open_element(&e, decoder)?;
                close_element(&mut stack, &mut root, element, "");
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches.
                if let Some((element, text)) = stack.pop() {
                    close_element(&mut stack, &mut root, element, &text);
                }
            }
            Event::Text(t) => {
                if let Some((_, text)) = stack.last_mut() {
                    text.push_str(&decoder.decode(&t).map_err(quick_xml::Error::from)?);
                }
            }
            Event::CData(c) => {
                if let Some((_, text)) = stack.last_mut() {
                    text.push_str(&decoder.decode(&c).map_err(quick_xml::Error::from)?);
                }
            }
            Event::GeneralRef(r) => {
                if let Some((_, text)) = stack.last_mut() {
                    match r.resolve_char_ref()? {
                        Some(ch) => text.push(ch),
                        None => {
                            let name = decoder.decode(&r).map_err(quick_xml::Error::from)?;
                            let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                                KmlXmlError::UnknownEntity {
                                    name: name.to_string(),
                                }
                            })?;
                            text.push_str(resolved);
                        }
                    }
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some((open, _)) = stack.pop() {
        return Err(KmlXmlError::UnclosedElement { name: open.name });
    }
    root.ok_or(KmlXmlError::MissingRoot)
}

fn open_element(start: &BytesStart<'_>, decoder: Decoder) -> Result<RawElement, KmlXmlError> {
    let qname = start.name();
    let name = decoder
        .decode(qname.as_ref())
        .map_err(quick_xml::Error::from)?;
    let mut element = RawElement::new(name.into_owned());

    for attr in start.attributes() {
        let attr = attr?;
        let key = decoder
            .decode(attr.key.as_ref())
            .map_err(quick_xml::Error::from)?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr.decode_and_unescape_value(decoder)?;
        element.attributes.insert(key.into_owned(), value.into_owned());
    }
    trace!("Opened <{}>", element.name);
    Ok(element)
}

/// Finishes an element and attaches it to its parent (or makes it the root).
fn close_element(
    stack: &mut [(RawElement, String)],
    root: &mut Option<RawElement>,
    mut element: RawElement,
    text: &str,
) {
    // Free-text fields keep their whitespace; scalar coercion trims itself.
    let text = if element.children.is_empty() {
        text
    } else {
        text.trim()
    };
    if !text.is_empty() {
        element.text = Some(text.into());
    }
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
