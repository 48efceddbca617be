// crates/kml-rs/src/model/simple_field.rs

//! Field declarations inside a `<Schema>`.

use super::{Entity, FieldSetter, Fields, apply_table, set_from_table};
use crate::codec::{TokenEnum, token_enum};
use crate::coerce::{AttributeMap, parse_reference, parse_token};
use crate::element::Element;
use crate::error::KmlError;
use crate::types::ResourceRef;

token_enum! {
    /// Value type of a custom data field.
    pub enum SimpleFieldType default String {
        String => "string",
        Int => "int",
        UInt => "uint",
        Short => "short",
        UShort => "ushort",
        Float => "float",
        Double => "double",
        Bool => "bool",
    }
}

/// `<SimpleField type=".." name="..">`: one typed field of a custom schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleField {
    pub field_type: SimpleFieldType,
    pub name: String,
    /// Unit of measure.
    pub uom: Option<ResourceRef>,
    /// Name shown to the user instead of `name`. May contain HTML.
    pub display_name: Option<String>,
}

impl SimpleField {
    const FIELDS: &'static [FieldSetter<Self>] = &[
        ("type", |f, raw| f.field_type = parse_token(raw)),
        ("name", |f, raw| f.name = raw.into()),
        ("uom", |f, raw| f.uom = parse_reference(raw)),
        ("displayName", |f, raw| f.display_name = Some(raw.into())),
    ];

    pub fn new(name: impl Into<String>, field_type: SimpleFieldType) -> Self {
        Self {
            field_type,
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Fields for SimpleField {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        apply_table(self, Self::FIELDS, attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        set_from_table(self, Self::FIELDS, name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        // `type` and `name` are required by the schema and always written.
        element.set_attribute("type", self.field_type.to_token())?;
        element.set_attribute("name", self.name.as_str())?;
        element.set_optional_attribute("uom", self.uom.as_ref())?;
        element.add_simple_child("displayName", self.display_name.as_deref());
        Ok(())
    }
}

impl Entity for SimpleField {
    const ELEMENT_NAME: &'static str = "SimpleField";
}

/// `<gx:SimpleArrayField>`: a field whose value is a sequence, e.g. the
/// per-point heart rate of a `gx:Track`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleArrayField {
    pub field: SimpleField,
}

impl SimpleArrayField {
    pub fn new(name: impl Into<String>, field_type: SimpleFieldType) -> Self {
        Self {
            field: SimpleField::new(name, field_type),
        }
    }
}

impl Fields for SimpleArrayField {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        self.field.hydrate(attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        self.field.set_field(name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        self.field.append_fields(element)
    }
}

impl Entity for SimpleArrayField {
    const ELEMENT_NAME: &'static str = "gx:SimpleArrayField";
}
