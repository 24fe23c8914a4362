//! Read side: GML 2 elements into [`crate::geometry::Geometry`] values.

mod context;
pub(crate) mod coordinates;
mod geometry;

pub use context::ParseContext;
pub use geometry::GmlReader;
