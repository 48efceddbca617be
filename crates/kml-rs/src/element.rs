// crates/kml-rs/src/element.rs

//! The outbound element tree produced by an encode pass.

use crate::error::KmlError;
use core::fmt::Display;
use log::trace;

/// One markup element: name, ordered attributes, ordered children, text.
///
/// The building API is append-only. Attributes and children are written out
/// in the order they were added, which is the field declaration order of the
/// entity that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a leaf element holding only text, e.g. `<href>a.kml</href>`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given (qualified) name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Element::text)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// `true` for elements with neither attributes nor children.
    pub fn is_leaf(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// Appends an attribute.
    ///
    /// # Errors
    /// Returns [`KmlError::DuplicateAttribute`] if the key was already set.
    /// A repeated key means an entity wrote the same field twice.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), KmlError> {
        let key = key.into();
        if self.attributes.iter().any(|(k, _)| *k == key) {
            return Err(KmlError::DuplicateAttribute {
                element: self.name.clone(),
                attribute: key,
            });
        }
        self.attributes.push((key, value.into()));
        Ok(())
    }

    /// Appends an attribute only when a value is present.
    pub fn set_optional_attribute<T: Display>(
        &mut self,
        key: &str,
        value: Option<T>,
    ) -> Result<(), KmlError> {
        match value {
            Some(v) => self.set_attribute(key, v.to_string()),
            None => Ok(()),
        }
    }

    pub fn push_child(&mut self, child: Element) {
        trace!("<{}> += <{}>", self.name, child.name);
        self.children.push(child);
    }

    /// Appends `<name>value</name>` when a value is present.
    pub fn add_simple_child<T: Display>(&mut self, name: &str, value: Option<T>) {
        if let Some(v) = value {
            self.push_child(Element::with_text(name, v.to_string()));
        }
    }

    /// Appends `<name>value</name>` unless `value` equals `default`.
    pub fn add_simple_child_with_default<T: PartialEq + Display>(
        &mut self,
        name: &str,
        value: T,
        default: T,
    ) {
        if value != default {
            self.push_child(Element::with_text(name, value.to_string()));
        }
    }
}
