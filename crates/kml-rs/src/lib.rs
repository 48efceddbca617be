// crates/kml-rs/src/lib.rs

#![doc = "Object model for KML documents."]
#![doc = ""]
#![doc = "Entities are built from parsed attribute maps and encode themselves back"]
#![doc = "into element trees, eliding fields left at their declared defaults."]
#![doc = "Markup text is handled elsewhere (see the `kml-rs-xml` crate):"]
#![doc = "- inbound, a parser supplies a `RawElement` tree to `decode` / `decode_document`;"]
#![doc = "- outbound, `encode` / `encode_document` produce an `Element` tree for a writer."]

// --- Foundation Modules ---
pub mod codec;
pub mod coerce;
pub mod error;
pub mod types;

// --- Trees ---
pub mod element;
pub mod raw;

// --- Entities and the driver ---
pub mod driver;
pub mod model;

// --- Top-level Exports ---
pub use codec::TokenEnum;
pub use coerce::AttributeMap;
pub use driver::{
    ElementKind, KmlDocument, Target, decode, decode_as, decode_document, encode, encode_document,
};
pub use element::Element;
pub use error::KmlError;
pub use model::{
    BasicLink, Entity, Fields, Icon, IconPalette, Link, Node, ObjectBase, RefreshMode, Schema,
    SchemaField, SimpleArrayField, SimpleField, SimpleFieldType, ViewRefreshMode,
};
pub use raw::RawElement;
pub use types::{GX_NAMESPACE, GX_PREFIX, KML_NAMESPACE, KML_ROOT, ResourceRef};
