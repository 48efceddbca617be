// crates/kml-rs/src/driver.rs

//! Walks between raw parsed trees, entity graphs and element trees.
//!
//! Decoding never fails on a single malformed value (the coercion layer
//! absorbs those) or on an unknown scalar field. It fails on structural
//! problems only: a complex element with no entry in the type table, or a
//! known element under a parent that cannot own it.

use crate::element::Element;
use crate::error::KmlError;
use crate::model::{Entity, Node};
use crate::raw::RawElement;
use crate::types::{KML_ROOT, field_name, local_name};
use log::{debug, trace};

/// The concrete entity types the decoder can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Link,
    Icon,
    Schema,
    SimpleField,
    SimpleArrayField,
}

/// Local element name -> entity type. `Url` is the KML 2.0 name of `Link`.
const ELEMENT_TABLE: &[(&str, ElementKind)] = &[
    ("Link", ElementKind::Link),
    ("Url", ElementKind::Link),
    ("Icon", ElementKind::Icon),
    ("Schema", ElementKind::Schema),
    ("SimpleField", ElementKind::SimpleField),
    ("SimpleArrayField", ElementKind::SimpleArrayField),
];

impl ElementKind {
    /// Looks up an element name, ignoring any namespace prefix.
    pub fn from_name(name: &str) -> Option<Self> {
        let local = local_name(name);
        ELEMENT_TABLE
            .iter()
            .find(|(n, _)| *n == local)
            .map(|(_, kind)| *kind)
    }

    fn decode(self, raw: &RawElement) -> Result<Node, KmlError> {
        Ok(match self {
            ElementKind::Link => Node::Link(decode_as(raw)?),
            ElementKind::Icon => Node::Icon(decode_as(raw)?),
            ElementKind::Schema => Node::Schema(decode_as(raw)?),
            ElementKind::SimpleField => Node::SimpleField(decode_as(raw)?),
            ElementKind::SimpleArrayField => Node::SimpleArrayField(decode_as(raw)?),
        })
    }
}

/// A decoded `<kml>` document: its top-level entities in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlDocument {
    pub nodes: Vec<Node>,
}

/// Where an encoded entity goes.
pub enum Target<'a> {
    /// Into a fresh `<kml>` document root.
    Document,
    /// Appended to an owning element.
    Within(&'a mut Element),
}

/// Decodes a raw element into whichever entity its name selects.
///
/// # Errors
/// [`KmlError::UnknownElement`] if the name is not in the type table.
pub fn decode(raw: &RawElement) -> Result<Node, KmlError> {
    ElementKind::from_name(&raw.name)
        .ok_or_else(|| KmlError::UnknownElement {
            name: raw.name.clone(),
        })?
        .decode(raw)
}

/// Decodes a raw element as the given entity type, regardless of its name.
///
/// XML attributes go through the type's constructor. Text-only children are
/// applied as fields by [`field_name`], so `gx:` fields only match their
/// prefixed form. Children naming an entity type are decoded recursively and
/// handed to the parent.
pub fn decode_as<T: Entity>(raw: &RawElement) -> Result<T, KmlError> {
    trace!("Decoding <{}> as {}", raw.name, T::ELEMENT_NAME);
    let mut entity = T::from_attributes(&raw.attributes);

    for child in &raw.children {
        if ElementKind::from_name(&child.name).is_some() {
            entity.adopt(decode(child)?)?;
        } else if child.is_leaf() {
            let value = child.text.as_deref().unwrap_or("");
            if !entity.set_field(field_name(&child.name), value) {
                debug!("Ignoring unknown field <{}> in <{}>", child.name, raw.name);
            }
        } else {
            return Err(KmlError::UnknownElement {
                name: child.name.clone(),
            });
        }
    }

    if let Some(text) = raw.text.as_deref().filter(|t| !t.trim().is_empty()) {
        debug!("Ignoring text content '{}' of <{}>", text, raw.name);
    }
    Ok(entity)
}

/// Decodes a whole `<kml>` document.
///
/// # Errors
/// [`KmlError::UnexpectedRoot`] if the root is not `<kml>`, plus any error
/// from [`decode`] for the top-level children.
pub fn decode_document(root: &RawElement) -> Result<KmlDocument, KmlError> {
    if root.local_name() != KML_ROOT {
        return Err(KmlError::UnexpectedRoot {
            expected: KML_ROOT,
            found: root.name.clone(),
        });
    }

    let mut nodes = Vec::with_capacity(root.children.len());
    for child in &root.children {
        if child.is_leaf() && ElementKind::from_name(&child.name).is_none() {
            debug!("Ignoring unknown top-level field <{}>", child.name);
            continue;
        }
        nodes.push(decode(child)?);
    }
    Ok(KmlDocument { nodes })
}

/// Encodes an entity.
///
/// With [`Target::Document`] the entity is wrapped in a new `<kml>` root,
/// which is returned. With [`Target::Within`] it is appended to the given
/// element and `None` is returned.
pub fn encode<E: Entity>(entity: &E, target: Target<'_>) -> Result<Option<Element>, KmlError> {
    let element = entity.to_element()?;
    match target {
        Target::Document => {
            let mut root = Element::new(KML_ROOT);
            root.push_child(element);
            Ok(Some(root))
        }
        Target::Within(parent) => {
            parent.push_child(element);
            Ok(None)
        }
    }
}

/// Encodes a document's entities, in order, under a `<kml>` root.
pub fn encode_document(document: &KmlDocument) -> Result<Element, KmlError> {
    let mut root = Element::new(KML_ROOT);
    for node in &document.nodes {
        root.push_child(node.to_element()?);
    }
    Ok(root)
}
