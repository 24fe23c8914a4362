//! Write side: [`crate::geometry::Geometry`] values into GML 2 elements.

mod coordinates;
mod feature;
mod geometry;

pub use feature::FeatureWriter;
pub use geometry::{element_name, GmlWriter};

/// Parameters governing one serialization pass.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Reference system stamped as `srsName` on emitted elements and used
    /// for axis-order-aware coordinate formatting.
    pub srs_name: Option<String>,
    /// Encode Polygon with the `Surface` element.
    pub surface: bool,
    /// Encode MultiPolygon with the `MultiSurface` element.
    pub multi_surface: bool,
    /// Encode MultiLineString with the `MultiCurve` element.
    pub multi_curve: bool,
    /// Namespace of emitted feature property elements.
    pub feature_namespace: String,
    /// Schema location advertised by collection-level collaborators, e.g.
    /// [`crate::xml::SCHEMA_LOCATION`].
    pub schema_location: Option<String>,
}
