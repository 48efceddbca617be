// crates/kml-rs-xml/src/error.rs

use core::fmt;
use kml_rs::KmlError;
use quick_xml::Error as XmlError;
use quick_xml::events::attributes::AttrError;
use std::string::FromUtf8Error;

/// Errors that can occur while reading or writing KML text.
#[derive(Debug)]
pub enum KmlXmlError {
    /// A structural error from the object model (unknown element, misplaced
    /// child, duplicate attribute).
    Model(KmlError),

    /// An error from the underlying `quick-xml` reader (ill-formed markup,
    /// bad encoding).
    XmlReading(XmlError),

    /// A malformed attribute in the source text.
    XmlAttribute(AttrError),

    /// An error from the underlying `quick-xml` writer.
    XmlWriting(std::io::Error),

    /// The written bytes were not valid UTF-8.
    Utf8(FromUtf8Error),

    /// An entity reference other than the five predefined XML entities or a
    /// character reference.
    UnknownEntity { name: String },

    /// The input ended while an element was still open.
    UnclosedElement { name: String },

    /// The input contained no root element.
    MissingRoot,
}

impl From<KmlError> for KmlXmlError {
    fn from(e: KmlError) -> Self {
        KmlXmlError::Model(e)
    }
}

impl From<XmlError> for KmlXmlError {
    fn from(e: XmlError) -> Self {
        KmlXmlError::XmlReading(e)
    }
}

impl From<AttrError> for KmlXmlError {
    fn from(e: AttrError) -> Self {
        KmlXmlError::XmlAttribute(e)
    }
}

impl From<std::io::Error> for KmlXmlError {
    fn from(e: std::io::Error) -> Self {
        KmlXmlError::XmlWriting(e)
    }
}

impl From<FromUtf8Error> for KmlXmlError {
    fn from(e: FromUtf8Error) -> Self {
        KmlXmlError::Utf8(e)
    }
}

impl fmt::Display for KmlXmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmlXmlError::Model(e) => write!(f, "KML model error: {}", e),
            KmlXmlError::XmlReading(e) => write!(f, "XML parsing error: {}", e),
            KmlXmlError::XmlAttribute(e) => write!(f, "XML attribute error: {}", e),
            KmlXmlError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            KmlXmlError::Utf8(e) => write!(f, "Invalid UTF-8 in output: {}", e),
            KmlXmlError::UnknownEntity { name } => {
                write!(f, "Unknown entity reference: &{};", name)
            }
            KmlXmlError::UnclosedElement { name } => {
                write!(f, "Unexpected end of input inside <{}>", name)
            }
            KmlXmlError::MissingRoot => write!(f, "Document has no root element"),
        }
    }
}

impl std::error::Error for KmlXmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmlXmlError::Model(e) => Some(e),
            KmlXmlError::XmlReading(e) => Some(e),
            KmlXmlError::XmlAttribute(e) => Some(e),
            KmlXmlError::XmlWriting(e) => Some(e),
            KmlXmlError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KmlXmlError;
    use kml_rs::KmlError;

    #[test]
    fn test_from_model_error() {
        let err: KmlXmlError = KmlError::UnknownElement {
            name: "Placemark".into(),
        }
        .into();
        assert!(matches!(err, KmlXmlError::Model(KmlError::UnknownElement { .. })));
        assert_eq!(
            err.to_string(),
            "KML model error: Unknown element type: <Placemark>"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::other("disk full");
        let err: KmlXmlError = io_err.into();
        assert!(matches!(err, KmlXmlError::XmlWriting(_)));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err();
        let err: KmlXmlError = utf8_err.into();
        assert!(matches!(err, KmlXmlError::Utf8(_)));
    }

    #[test]
    fn test_display_unclosed() {
        let err = KmlXmlError::UnclosedElement { name: "Link".into() };
        assert_eq!(err.to_string(), "Unexpected end of input inside <Link>");
    }
}
