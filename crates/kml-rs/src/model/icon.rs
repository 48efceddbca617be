// crates/kml-rs/src/model/icon.rs

use super::{Entity, FieldSetter, Fields, Link, apply_table, set_from_table};
use crate::coerce::{AttributeMap, parse_float};
use crate::element::Element;
use crate::error::KmlError;

/// Sub-region of an icon palette image, in pixels (`gx:x`, `gx:y`, `gx:w`, `gx:h`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IconPalette {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The image used by an icon style or an overlay.
///
/// When `palette` is present the icon is one cell of a larger palette
/// image, and all four `gx:` coordinates are written together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
    pub link: Link,
    pub palette: Option<IconPalette>,
}

impl Icon {
    const FIELDS: &'static [FieldSetter<Self>] = &[
        ("gx:x", |i, raw| i.palette_mut().x = parse_float("gx:x", raw, 0.0)),
        ("gx:y", |i, raw| i.palette_mut().y = parse_float("gx:y", raw, 0.0)),
        ("gx:w", |i, raw| i.palette_mut().w = parse_float("gx:w", raw, 0.0)),
        ("gx:h", |i, raw| i.palette_mut().h = parse_float("gx:h", raw, 0.0)),
    ];

    pub fn new(href: &str) -> Self {
        Self {
            link: Link::new(href),
            palette: None,
        }
    }

    fn palette_mut(&mut self) -> &mut IconPalette {
        self.palette.get_or_insert_with(IconPalette::default)
    }
}

impl Fields for Icon {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        self.link.hydrate(attributes);
        apply_table(self, Self::FIELDS, attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        set_from_table(self, Self::FIELDS, name, raw) || self.link.set_field(name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        self.link.append_fields(element)?;
        // All or nothing.
        if let Some(p) = &self.palette {
            element.push_child(Element::with_text("gx:x", p.x.to_string()));
            element.push_child(Element::with_text("gx:y", p.y.to_string()));
            element.push_child(Element::with_text("gx:w", p.w.to_string()));
            element.push_child(Element::with_text("gx:h", p.h.to_string()));
        }
        Ok(())
    }
}

impl Entity for Icon {
    const ELEMENT_NAME: &'static str = "Icon";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RefreshMode;

    fn child_names(el: &Element) -> Vec<&str> {
        el.children().iter().map(Element::name).collect()
    }

    #[test]
    fn test_palette_absent_by_default() {
        let el = Icon::new("palette.png").to_element().unwrap();
        assert_eq!(child_names(&el), ["href"]);
    }

    #[test]
    fn test_single_coordinate_emits_whole_group() {
        let mut icon = Icon::new("palette.png");
        assert!(icon.set_field("gx:w", "32"));

        let el = icon.to_element().unwrap();
        assert_eq!(child_names(&el), ["href", "gx:x", "gx:y", "gx:w", "gx:h"]);
        assert_eq!(el.child_text("gx:x"), Some("0"));
        assert_eq!(el.child_text("gx:w"), Some("32"));
    }

    #[test]
    fn test_non_finite_coordinate_uses_zero() {
        let mut icon = Icon::default();
        assert!(icon.set_field("gx:h", "NaN"));
        assert_eq!(icon.palette, Some(IconPalette::default()));
        assert_eq!(icon.clone(), icon);
    }

    #[test]
    fn test_group_follows_link_fields() {
        let mut icon = Icon::new("palette.png");
        icon.link.refresh_mode = RefreshMode::OnExpire;
        icon.palette = Some(IconPalette {
            x: 32.0,
            y: 64.0,
            w: 32.0,
            h: 32.0,
        });

        let el = icon.to_element().unwrap();
        assert_eq!(
            child_names(&el),
            ["href", "refreshMode", "gx:x", "gx:y", "gx:w", "gx:h"]
        );
    }

    #[test]
    fn test_hydrate_reads_every_level() {
        let attributes: AttributeMap = [
            ("id", "icon-7"),
            ("href", "http://maps.example.com/pal.png"),
            ("viewBoundScale", "0.75"),
            ("gx:y", "16"),
        ]
        .into_iter()
        .collect();

        let icon = Icon::from_attributes(&attributes);
        assert_eq!(icon.link.basic.object.id.as_deref(), Some("icon-7"));
        assert!(icon.link.href().is_some());
        assert_eq!(icon.link.view_bound_scale, 0.75);
        assert_eq!(
            icon.palette,
            Some(IconPalette {
                y: 16.0,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_unknown_name_falls_through_every_level() {
        let mut icon = Icon::default();
        assert!(!icon.set_field("scale", "2"));
        assert!(!icon.set_field("x", "3"));
        assert_eq!(icon, Icon::default());
    }
}
