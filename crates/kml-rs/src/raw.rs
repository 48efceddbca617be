// crates/kml-rs/src/raw.rs

//! The inbound tree handed to the decode driver by a markup parser.

use crate::coerce::AttributeMap;
use crate::types::local_name;

/// One parsed element: qualified name, XML attributes, child elements in
/// document order and (trimmed) text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawElement {
    pub name: String,
    pub attributes: AttributeMap,
    pub children: Vec<RawElement>,
    pub text: Option<String>,
}

impl RawElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builds a text-only element such as `<refreshMode>onInterval</refreshMode>`.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_child(mut self, child: RawElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// `true` for elements that can only carry a scalar field value.
    pub fn is_leaf(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}
