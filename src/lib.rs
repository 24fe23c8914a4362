//! Reader and writer for [GML 2.1.2](https://www.ogc.org/standards/gml)
//! geometries, held in memory as flat interleaved coordinate buffers.
//!
//! The codec owns neither an XML tree nor reference-system knowledge: reading
//! walks any tree exposing [`xml::XmlElement`] (an adapter for `roxmltree` is
//! provided), writing appends into any [`xml::TreeSink`], and axis orders
//! come from a caller-supplied [`srs::SrsRegistry`]. Parsing is permissive:
//! malformed coordinate tokens become NAN, unknown reference systems fall
//! back to easting-first order, and unrecognized elements are skipped.
//!
//! On the write side, GML 2 has no native content encoding for points, the
//! multi geometries or envelopes; those kinds serialize as structurally
//! valid empty elements rather than errors.
//!
//! ```
//! use gml2::geometry::Geometry;
//! use gml2::srs::SrsTable;
//! use gml2::GmlReader;
//!
//! let xml = r#"<gml:Point xmlns:gml="http://www.opengis.net/gml">
//!   <gml:coordinates>1,2</gml:coordinates>
//! </gml:Point>"#;
//! let doc = roxmltree::Document::parse(xml).unwrap();
//! let reader = GmlReader::new(SrsTable::new());
//! let geometry = reader.read_geometry(&doc.root_element()).unwrap().unwrap();
//! assert!(matches!(geometry, Geometry::Point(_)));
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod error;
pub mod feature;
pub mod geometry;
pub mod reader;
pub mod srs;
#[cfg(test)]
pub(crate) mod test;
pub mod writer;
pub mod xml;

pub use reader::{GmlReader, ParseContext};
pub use writer::{FeatureWriter, GmlWriter, WriteOptions};
