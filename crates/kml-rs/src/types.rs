// crates/kml-rs/src/types.rs

//! Shared value types and vocabulary constants.

use core::fmt;
use log::warn;
use url::Url;

// --- Namespaces ---

/// Default namespace of KML 2.2 documents.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Namespace of the Google extension elements.
pub const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// Prefix bound to [`GX_NAMESPACE`] in written documents.
pub const GX_PREFIX: &str = "gx";

/// Name of the document root element.
pub const KML_ROOT: &str = "kml";

/// Strips a namespace prefix from a qualified name (`gx:x` -> `x`).
pub fn local_name(qualified: &str) -> &str {
    match qualified.rsplit_once(':') {
        Some((_, local)) => local,
        None => qualified,
    }
}

/// Name under which a child element's value is dispatched to entity fields.
///
/// Extension fields keep their `gx:` prefix, so `<x>` and `<gx:x>` are
/// different fields. Any other prefix (e.g. an explicit `kml:`) is stripped.
pub fn field_name(qualified: &str) -> &str {
    match qualified.split_once(':') {
        Some((GX_PREFIX, _)) => qualified,
        Some((_, local)) => local,
        None => qualified,
    }
}

/// A reference to an external resource, as found in `<href>` or `@uom`.
///
/// KML files routinely point at files relative to the document (or to the
/// root of a KMZ archive), so a reference is either a fully parsed absolute
/// URL or the relative reference text as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceRef {
    Absolute(Url),
    Relative(String),
}

impl ResourceRef {
    /// Parses raw reference text.
    ///
    /// Returns `None` for empty input and for text that is not a legal
    /// reference (embedded whitespace or control characters, or an absolute
    /// URL that fails to parse). Never returns an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            warn!("Dropping malformed resource reference '{}'", trimmed);
            return None;
        }

        match Url::parse(trimmed) {
            Ok(url) => Some(ResourceRef::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Some(ResourceRef::Relative(trimmed.into()))
            }
            Err(e) => {
                warn!("Dropping malformed resource reference '{}': {}", trimmed, e);
                None
            }
        }
    }

    /// The reference text as it is written back out.
    pub fn as_str(&self) -> &str {
        match self {
            ResourceRef::Absolute(url) => url.as_str(),
            ResourceRef::Relative(path) => path,
        }
    }

    /// Returns the parsed URL for absolute references.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            ResourceRef::Absolute(url) => Some(url),
            ResourceRef::Relative(_) => None,
        }
    }

    /// Resolves the reference against the location of the owning document.
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        match self {
            ResourceRef::Absolute(url) => Some(url.clone()),
            ResourceRef::Relative(path) => base.join(path).ok(),
        }
    }
}

impl From<Url> for ResourceRef {
    fn from(url: Url) -> Self {
        ResourceRef::Absolute(url)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
