// crates/kml-rs/src/error.rs

use core::fmt;

/// Structural errors raised while building or decoding an entity graph.
///
/// Malformed scalar values and unknown field names never show up here: they
/// are absorbed by the coercion layer and logged. Everything in this enum is
/// either a bug in an entity's write logic or a document shape the object
/// model cannot represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KmlError {
    /// An attribute key was set twice on the same element node.
    DuplicateAttribute { element: String, attribute: String },

    /// A complex child element has no entry in the element type table.
    UnknownElement { name: String },

    /// A known entity element appeared under a parent that cannot own it.
    UnexpectedChild { parent: &'static str, child: String },

    /// The document root was not the expected element.
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for KmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmlError::DuplicateAttribute { element, attribute } => write!(
                f,
                "Attribute '{}' set twice on element <{}>",
                attribute, element
            ),
            KmlError::UnknownElement { name } => {
                write!(f, "Unknown element type: <{}>", name)
            }
            KmlError::UnexpectedChild { parent, child } => {
                write!(f, "Element <{}> cannot contain <{}>", parent, child)
            }
            KmlError::UnexpectedRoot { expected, found } => write!(
                f,
                "Expected document root <{}> but found <{}>",
                expected, found
            ),
        }
    }
}

impl std::error::Error for KmlError {}

#[cfg(test)]
mod tests {
    use super::KmlError;

    #[test]
    fn test_display_duplicate_attribute() {
        let err = KmlError::DuplicateAttribute {
            element: "Link".into(),
            attribute: "id".into(),
        };
        assert_eq!(err.to_string(), "Attribute 'id' set twice on element <Link>");
    }

    #[test]
    fn test_display_unexpected_child() {
        let err = KmlError::UnexpectedChild {
            parent: "SimpleField",
            child: "Link".into(),
        };
        assert_eq!(err.to_string(), "Element <SimpleField> cannot contain <Link>");
    }

    #[test]
    fn test_display_unexpected_root() {
        let err = KmlError::UnexpectedRoot {
            expected: "kml",
            found: "gpx".into(),
        };
        assert_eq!(
            err.to_string(),
            "Expected document root <kml> but found <gpx>"
        );
    }
}
