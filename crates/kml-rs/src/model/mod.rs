// crates/kml-rs/src/model/mod.rs

//! The entity hierarchy.
//!
//! KML describes its elements as an inheritance chain (`Object` ->
//! `BasicLink` -> `Link` -> `Icon`). Here every level is a plain struct that
//! embeds its base level and implements [`Fields`] for the fields it adds.
//! Each `Fields` method calls the embedded base first, so:
//!
//! - hydrating runs base-to-derived over the same [`AttributeMap`],
//! - encoding appends ancestor fields before the level's own fields,
//! - [`Fields::set_field`] tries the level's own names before the base's.
//!
//! Concrete element types additionally implement [`Entity`].

mod icon;
mod link;
mod object;
mod schema;
mod simple_field;

pub use icon::{Icon, IconPalette};
pub use link::{
    BasicLink, DEFAULT_REFRESH_INTERVAL, DEFAULT_VIEW_BOUND_SCALE, DEFAULT_VIEW_REFRESH_TIME,
    Link, RefreshMode, ViewRefreshMode,
};
pub use object::ObjectBase;
pub use schema::{Schema, SchemaField};
pub use simple_field::{SimpleArrayField, SimpleField, SimpleFieldType};

use crate::coerce::AttributeMap;
use crate::element::Element;
use crate::error::KmlError;

/// One row of a level's field table: the field name and how to set it from
/// raw text.
pub type FieldSetter<T> = (&'static str, fn(&mut T, &str));

/// The per-level hydrate/set/append capability.
pub trait Fields {
    /// Applies this level's fields, and all ancestor levels' fields, from an
    /// attribute map. Ancestors are applied first.
    fn hydrate(&mut self, attributes: &AttributeMap);

    /// Sets one field by name. Returns `false` if neither this level nor any
    /// ancestor declares `name`; the value is then ignored.
    fn set_field(&mut self, name: &str, raw: &str) -> bool;

    /// Appends ancestor fields, then this level's fields, skipping values
    /// equal to their declared default.
    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError>;
}

/// A concrete, nameable element type.
pub trait Entity: Fields + Default {
    /// Element name written on encode.
    const ELEMENT_NAME: &'static str;

    /// Builds an entity from its attribute map.
    fn from_attributes(attributes: &AttributeMap) -> Self {
        let mut entity = Self::default();
        entity.hydrate(attributes);
        entity
    }

    /// Takes ownership of a decoded child entity. Leaf types own nothing.
    fn adopt(&mut self, child: Node) -> Result<(), KmlError> {
        Err(KmlError::UnexpectedChild {
            parent: Self::ELEMENT_NAME,
            child: child.element_name().into(),
        })
    }

    /// Encodes the entity (and any children it owns) into a fresh element.
    fn to_element(&self) -> Result<Element, KmlError> {
        let mut element = Element::new(Self::ELEMENT_NAME);
        self.append_fields(&mut element)?;
        Ok(element)
    }
}

/// Applies the rows of `table` whose names are present in `attributes`.
pub(crate) fn apply_table<T>(target: &mut T, table: &[FieldSetter<T>], attributes: &AttributeMap) {
    for (name, setter) in table {
        if let Some(raw) = attributes.get(name) {
            setter(target, raw);
        }
    }
}

/// Runs the setter for `name` if `table` declares it.
pub(crate) fn set_from_table<T>(
    target: &mut T,
    table: &[FieldSetter<T>],
    name: &str,
    raw: &str,
) -> bool {
    match table.iter().find(|(n, _)| *n == name) {
        Some((_, setter)) => {
            setter(target, raw);
            true
        }
        None => false,
    }
}

/// Any decoded entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Link(Link),
    Icon(Icon),
    Schema(Schema),
    SimpleField(SimpleField),
    SimpleArrayField(SimpleArrayField),
}

impl Node {
    pub fn element_name(&self) -> &'static str {
        match self {
            Node::Link(_) => Link::ELEMENT_NAME,
            Node::Icon(_) => Icon::ELEMENT_NAME,
            Node::Schema(_) => Schema::ELEMENT_NAME,
            Node::SimpleField(_) => SimpleField::ELEMENT_NAME,
            Node::SimpleArrayField(_) => SimpleArrayField::ELEMENT_NAME,
        }
    }

    pub fn to_element(&self) -> Result<Element, KmlError> {
        match self {
            Node::Link(e) => e.to_element(),
            Node::Icon(e) => e.to_element(),
            Node::Schema(e) => e.to_element(),
            Node::SimpleField(e) => e.to_element(),
            Node::SimpleArrayField(e) => e.to_element(),
        }
    }
}

impl From<Link> for Node {
    fn from(e: Link) -> Self {
        Node::Link(e)
    }
}

impl From<Icon> for Node {
    fn from(e: Icon) -> Self {
        Node::Icon(e)
    }
}

impl From<Schema> for Node {
    fn from(e: Schema) -> Self {
        Node::Schema(e)
    }
}

impl From<SimpleField> for Node {
    fn from(e: SimpleField) -> Self {
        Node::SimpleField(e)
    }
}

impl From<SimpleArrayField> for Node {
    fn from(e: SimpleArrayField) -> Self {
        Node::SimpleArrayField(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_entities_are_plain_data() {
        assert_send_sync::<Node>();
        assert_send_sync::<Element>();
    }

    #[test]
    fn test_leaf_entity_rejects_children() {
        let mut field = SimpleField::default();
        let err = field.adopt(Node::Link(Link::default())).unwrap_err();
        assert_eq!(
            err,
            KmlError::UnexpectedChild {
                parent: "SimpleField",
                child: "Link".into()
            }
        );
    }

    #[test]
    fn test_node_element_names() {
        assert_eq!(Node::from(Icon::default()).element_name(), "Icon");
        assert_eq!(
            Node::from(SimpleArrayField::default()).element_name(),
            "gx:SimpleArrayField"
        );
    }
}
