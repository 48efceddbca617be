// crates/kml-rs/src/model/schema.rs

use super::{
    Entity, FieldSetter, Fields, Node, ObjectBase, SimpleArrayField, SimpleField, apply_table,
    set_from_table,
};
use crate::coerce::AttributeMap;
use crate::element::Element;
use crate::error::KmlError;

/// A field declared by a [`Schema`], scalar or array.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaField {
    Simple(SimpleField),
    Array(SimpleArrayField),
}

impl SchemaField {
    pub fn field(&self) -> &SimpleField {
        match self {
            SchemaField::Simple(f) => f,
            SchemaField::Array(a) => &a.field,
        }
    }

    fn to_element(&self) -> Result<Element, KmlError> {
        match self {
            SchemaField::Simple(f) => f.to_element(),
            SchemaField::Array(a) => a.to_element(),
        }
    }
}

/// `<Schema>`: a user-defined type for extended data. Owns its field
/// declarations, which are written in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub object: ObjectBase,
    pub name: Option<String>,
    pub fields: Vec<SchemaField>,
}

impl Schema {
    const FIELDS: &'static [FieldSetter<Self>] = &[("name", |s, raw| s.name = Some(raw.into()))];

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            object: ObjectBase {
                id: Some(id.into()),
                target_id: None,
            },
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.field().name == name)
    }
}

impl Fields for Schema {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        self.object.hydrate(attributes);
        apply_table(self, Self::FIELDS, attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        set_from_table(self, Self::FIELDS, name, raw) || self.object.set_field(name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        self.object.append_fields(element)?;
        element.set_optional_attribute("name", self.name.as_deref())?;
        for field in &self.fields {
            element.push_child(field.to_element()?);
        }
        Ok(())
    }
}

impl Entity for Schema {
    const ELEMENT_NAME: &'static str = "Schema";

    fn adopt(&mut self, child: Node) -> Result<(), KmlError> {
        match child {
            Node::SimpleField(f) => self.fields.push(SchemaField::Simple(f)),
            Node::SimpleArrayField(a) => self.fields.push(SchemaField::Array(a)),
            other => {
                return Err(KmlError::UnexpectedChild {
                    parent: Self::ELEMENT_NAME,
                    child: other.element_name().into(),
                });
            }
        }
        Ok(())
    }
}
