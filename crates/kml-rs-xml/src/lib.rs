// crates/kml-rs-xml/src/lib.rs

#![doc = "Reads and writes KML text for the `kml-rs` object model."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_kml_from_str`: Parsing a `<kml>` document into typed entities."]
#![doc = "- `load_node_from_str`: Parsing a single entity fragment such as a bare `<Link>`."]
#![doc = "- `save_kml_to_string`: Serializing a document back into KML text, eliding defaults."]

// --- Crate Modules ---

mod builder;
mod error;
mod parser;

// --- Public API Re-exports ---

pub use builder::{
    WriteOptions, save_kml_to_string, save_kml_to_string_with, write_element_to_string,
};
pub use error::KmlXmlError;
pub use parser::{load_kml_from_str, load_node_from_str, parse_raw_tree};
