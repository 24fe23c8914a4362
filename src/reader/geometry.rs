//! Element dispatch: recursively assembling geometries from GML 2 elements.

use crate::error::{Gml2Error, Result};
use crate::geometry::{
    Envelope, Geometry, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::reader::coordinates::read_flat_coordinates;
use crate::reader::ParseContext;
use crate::srs::SrsRegistry;
use crate::xml::{XmlElement, GMLNS};

fn is_gml<E: XmlElement>(node: &E, local_name: &str) -> bool {
    node.namespace_uri() == Some(GMLNS) && node.local_name() == local_name
}

/// Reads GML 2 geometry elements into [`Geometry`] values.
///
/// The dispatch table is closed: Point, LineString, LinearRing, Polygon,
/// MultiPoint, MultiLineString, MultiPolygon and the GML 2 `Box` shorthand.
/// Anything else is skipped silently, including elements outside the GML
/// namespace.
#[derive(Debug, Clone)]
pub struct GmlReader<R> {
    registry: R,
}

impl<R: SrsRegistry> GmlReader<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Reads one geometry element. `Ok(None)` means the element was not a
    /// recognized geometry, or lacked the coordinates a geometry requires.
    pub fn read_geometry<E: XmlElement>(&self, node: &E) -> Result<Option<Geometry>> {
        let mut context = ParseContext::new();
        self.read_geometry_with(node, &mut context)
    }

    /// Like [`GmlReader::read_geometry`], threading caller-provided
    /// inherited metadata (e.g. a collection-level `srsName`).
    pub fn read_geometry_with<E: XmlElement>(
        &self,
        node: &E,
        context: &mut ParseContext,
    ) -> Result<Option<Geometry>> {
        if node.namespace_uri() != Some(GMLNS) {
            return Ok(None);
        }
        self.enter(node, context);
        let result = self.dispatch(node, context);
        context.pop();
        result
    }

    /// Pushes a context frame for `node`, inheriting whatever it does not
    /// declare itself.
    fn enter<E: XmlElement>(&self, node: &E, context: &mut ParseContext) {
        let dimension = node
            .attr("srsDimension")
            .and_then(|value| value.trim().parse().ok());
        context.push(node.attr("srsName"), dimension);
    }

    fn dispatch<E: XmlElement>(
        &self,
        node: &E,
        context: &mut ParseContext,
    ) -> Result<Option<Geometry>> {
        let geometry = match node.local_name() {
            "Point" => self.read_point(node, context).map(Geometry::Point),
            "LineString" => self.read_line_string(node, context).map(Geometry::LineString),
            "LinearRing" => self.read_linear_ring(node, context).map(Geometry::LinearRing),
            "Polygon" => self.read_polygon(node, context)?.map(Geometry::Polygon),
            "MultiPoint" => Some(Geometry::MultiPoint(self.read_multi_point(node, context)?)),
            "MultiLineString" => Some(Geometry::MultiLineString(
                self.read_multi_line_string(node, context)?,
            )),
            "MultiPolygon" => Some(Geometry::MultiPolygon(
                self.read_multi_polygon(node, context)?,
            )),
            "Box" => Some(Geometry::Envelope(self.read_box(node, context)?)),
            _ => None,
        };
        Ok(geometry)
    }

    fn read_coordinates_child<E: XmlElement>(
        &self,
        node: &E,
        context: &ParseContext,
    ) -> Option<crate::geometry::CoordBuffer> {
        node.child_elements()
            .find(|child| is_gml(child, "coordinates"))
            .map(|child| read_flat_coordinates(&child, context, &self.registry))
    }

    fn read_point<E: XmlElement>(&self, node: &E, context: &ParseContext) -> Option<Point> {
        self.read_coordinates_child(node, context).map(Point::new)
    }

    fn read_line_string<E: XmlElement>(
        &self,
        node: &E,
        context: &ParseContext,
    ) -> Option<LineString> {
        self.read_coordinates_child(node, context).map(LineString::new)
    }

    fn read_linear_ring<E: XmlElement>(
        &self,
        node: &E,
        context: &ParseContext,
    ) -> Option<LinearRing> {
        self.read_coordinates_child(node, context).map(LinearRing::new)
    }

    /// The outer boundary is positionally pinned at ring index 0 no matter
    /// where it appears among the inner boundaries; inner boundaries keep
    /// their document order. A polygon without an outer boundary reads as
    /// `None`.
    fn read_polygon<E: XmlElement>(
        &self,
        node: &E,
        context: &mut ParseContext,
    ) -> Result<Option<Polygon>> {
        let mut exterior: Option<LinearRing> = None;
        let mut interiors: Vec<LinearRing> = Vec::new();
        for child in node.child_elements() {
            if is_gml(&child, "outerBoundaryIs") {
                if let Some(ring) = self.read_boundary_ring(&child, context)? {
                    exterior = Some(ring);
                }
            } else if is_gml(&child, "innerBoundaryIs") {
                if let Some(ring) = self.read_boundary_ring(&child, context)? {
                    interiors.push(ring);
                }
            }
        }
        Ok(exterior.map(|exterior| {
            let mut rings = Vec::with_capacity(1 + interiors.len());
            rings.push(exterior);
            rings.extend(interiors);
            Polygon::new(rings)
        }))
    }

    fn read_boundary_ring<E: XmlElement>(
        &self,
        boundary: &E,
        context: &mut ParseContext,
    ) -> Result<Option<LinearRing>> {
        for child in boundary.child_elements() {
            if is_gml(&child, "LinearRing") {
                if let Some(Geometry::LinearRing(ring)) =
                    self.read_geometry_with(&child, context)?
                {
                    return Ok(Some(ring));
                }
            }
        }
        Ok(None)
    }

    fn read_multi_point<E: XmlElement>(
        &self,
        node: &E,
        context: &mut ParseContext,
    ) -> Result<MultiPoint> {
        let mut points = Vec::new();
        for member in node.child_elements() {
            if !is_gml(&member, "pointMember") {
                continue;
            }
            for child in member.child_elements() {
                if let Some(Geometry::Point(point)) = self.read_geometry_with(&child, context)? {
                    points.push(point);
                }
            }
        }
        Ok(MultiPoint::new(points))
    }

    fn read_multi_line_string<E: XmlElement>(
        &self,
        node: &E,
        context: &mut ParseContext,
    ) -> Result<MultiLineString> {
        let mut lines = Vec::new();
        for member in node.child_elements() {
            if !is_gml(&member, "lineStringMember") {
                continue;
            }
            for child in member.child_elements() {
                if let Some(Geometry::LineString(line)) =
                    self.read_geometry_with(&child, context)?
                {
                    lines.push(line);
                }
            }
        }
        Ok(MultiLineString::new(lines))
    }

    fn read_multi_polygon<E: XmlElement>(
        &self,
        node: &E,
        context: &mut ParseContext,
    ) -> Result<MultiPolygon> {
        let mut polygons = Vec::new();
        for member in node.child_elements() {
            if !is_gml(&member, "polygonMember") {
                continue;
            }
            for child in member.child_elements() {
                if let Some(Geometry::Polygon(polygon)) =
                    self.read_geometry_with(&child, context)?
                {
                    polygons.push(polygon);
                }
            }
        }
        Ok(MultiPolygon::new(polygons))
    }

    /// The `Box` shorthand: two corner tuples in one `coordinates` child.
    fn read_box<E: XmlElement>(&self, node: &E, context: &ParseContext) -> Result<Envelope> {
        let coords = self
            .read_coordinates_child(node, context)
            .unwrap_or_default();
        if coords.num_coords() < 2 {
            return Err(Gml2Error::InvalidBox(coords.num_coords()));
        }
        let flat = coords.as_slice();
        Ok(Envelope::new(flat[0], flat[1], flat[3], flat[4]))
    }
}
