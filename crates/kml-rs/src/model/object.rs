// crates/kml-rs/src/model/object.rs

use super::{FieldSetter, Fields, apply_table, set_from_table};
use crate::coerce::AttributeMap;
use crate::element::Element;
use crate::error::KmlError;

/// Fields shared by every KML object: the `id` and `targetId` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectBase {
    pub id: Option<String>,
    /// Id of the object this one updates (used inside `<Update>`).
    pub target_id: Option<String>,
}

impl ObjectBase {
    const FIELDS: &'static [FieldSetter<Self>] = &[
        ("id", |o, raw| o.id = Some(raw.into())),
        ("targetId", |o, raw| o.target_id = Some(raw.into())),
    ];
}

impl Fields for ObjectBase {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        apply_table(self, Self::FIELDS, attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        set_from_table(self, Self::FIELDS, name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        element.set_optional_attribute("id", self.id.as_deref())?;
        element.set_optional_attribute("targetId", self.target_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_written_as_attributes() {
        let object = ObjectBase {
            id: Some("link-1".into()),
            target_id: None,
        };
        let mut el = Element::new("Link");
        object.append_fields(&mut el).unwrap();

        assert_eq!(el.attributes(), [("id".to_string(), "link-1".to_string())]);
        assert!(el.children().is_empty());
    }

    #[test]
    fn test_set_field_dispatch() {
        let mut object = ObjectBase::default();
        assert!(object.set_field("targetId", "t"));
        assert!(!object.set_field("href", "a.kml"));
        assert_eq!(object.target_id.as_deref(), Some("t"));
    }
}
