//! Write-side dispatch: abstract geometry type plus capability flags decide
//! the output element name; per-kind serializers emit the children.

use crate::error::Result;
use crate::geometry::{Geometry, GeometryType, LineString, LinearRing, Polygon};
use crate::srs::SrsRegistry;
use crate::writer::coordinates::format_coordinates;
use crate::writer::WriteOptions;
use crate::xml::{TreeSink, GMLNS};

/// Chooses the output element name for a geometry under the active
/// capability flags.
///
/// The same geometry kind maps to different names depending on the flags, so
/// this is a pure function over the tagged variant rather than a method on
/// the geometry.
pub fn element_name(geometry: &Geometry, options: &WriteOptions) -> &'static str {
    match geometry.geometry_type() {
        GeometryType::Envelope => "Envelope",
        GeometryType::Polygon if options.surface => "Surface",
        GeometryType::MultiPolygon if options.multi_surface => "MultiSurface",
        GeometryType::MultiLineString if options.multi_curve => "MultiCurve",
        GeometryType::Point => "Point",
        GeometryType::LineString => "LineString",
        GeometryType::LinearRing => "LinearRing",
        GeometryType::Polygon => "Polygon",
        GeometryType::MultiPoint => "MultiPoint",
        GeometryType::MultiLineString => "MultiLineString",
        GeometryType::MultiPolygon => "MultiPolygon",
    }
}

/// Serializes geometries into GML 2 elements appended to a caller-supplied
/// parent.
#[derive(Debug, Clone)]
pub struct GmlWriter<R> {
    registry: R,
    options: WriteOptions,
}

impl<R: SrsRegistry> GmlWriter<R> {
    pub fn new(registry: R, options: WriteOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Appends one geometry element to `parent`.
    ///
    /// Point, MultiPoint, MultiLineString/MultiCurve, MultiPolygon/
    /// MultiSurface and Envelope have no native GML 2 content encoding: the
    /// element is still created, but left empty. That limitation of the
    /// schema version is deliberate and not an error.
    pub fn write_geometry<S: TreeSink>(
        &self,
        sink: &mut S,
        parent: &mut S::Elem,
        geometry: &Geometry,
    ) -> Result<()> {
        let name = element_name(geometry, &self.options);
        let mut elem = sink.create_element(GMLNS, name)?;
        self.populate(sink, &mut elem, name, geometry)?;
        sink.append_child(parent, elem);
        Ok(())
    }

    fn populate<S: TreeSink>(
        &self,
        sink: &mut S,
        elem: &mut S::Elem,
        name: &str,
        geometry: &Geometry,
    ) -> Result<()> {
        match geometry {
            Geometry::LineString(line) => self.write_curve_or_line_string(sink, elem, name, line),
            Geometry::LinearRing(ring) => self.write_linear_ring(sink, elem, ring),
            Geometry::Polygon(polygon) => self.write_surface_or_polygon(sink, elem, name, polygon),
            Geometry::Point(_)
            | Geometry::MultiPoint(_)
            | Geometry::MultiLineString(_)
            | Geometry::MultiPolygon(_)
            | Geometry::Envelope(_) => Ok(()),
        }
    }

    fn set_srs_name<S: TreeSink>(&self, sink: &mut S, elem: &mut S::Elem) {
        if let Some(srs) = self.options.srs_name.as_deref() {
            sink.set_attribute(elem, "srsName", srs);
        }
    }

    fn create_coordinates_node<S: TreeSink>(&self, sink: &mut S) -> Result<S::Elem> {
        let mut coordinates = sink.create_element(GMLNS, "coordinates")?;
        sink.set_attribute(&mut coordinates, "decimal", ".");
        sink.set_attribute(&mut coordinates, "cs", ",");
        sink.set_attribute(&mut coordinates, "ts", " ");
        Ok(coordinates)
    }

    fn append_coordinates<S: TreeSink>(
        &self,
        sink: &mut S,
        elem: &mut S::Elem,
        coords: &crate::geometry::CoordBuffer,
    ) -> Result<()> {
        let mut coordinates = self.create_coordinates_node(sink)?;
        let text = format_coordinates(coords, self.options.srs_name.as_deref(), &self.registry);
        sink.append_text(&mut coordinates, &text);
        sink.append_child(elem, coordinates);
        Ok(())
    }

    /// The leaf forms get a `coordinates` child; the composite `Curve` form
    /// wraps a `segments` element holding one `LineStringSegment` and
    /// recurses through the same routine.
    fn write_curve_or_line_string<S: TreeSink>(
        &self,
        sink: &mut S,
        elem: &mut S::Elem,
        name: &str,
        line: &LineString,
    ) -> Result<()> {
        if name != "LineStringSegment" {
            self.set_srs_name(sink, elem);
        }
        match name {
            "LineString" | "LineStringSegment" => self.append_coordinates(sink, elem, line.coords()),
            "Curve" => {
                let mut segments = sink.create_element(GMLNS, "segments")?;
                let mut segment = sink.create_element(GMLNS, "LineStringSegment")?;
                self.write_curve_or_line_string(sink, &mut segment, "LineStringSegment", line)?;
                sink.append_child(&mut segments, segment);
                sink.append_child(elem, segments);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn write_linear_ring<S: TreeSink>(
        &self,
        sink: &mut S,
        elem: &mut S::Elem,
        ring: &LinearRing,
    ) -> Result<()> {
        self.set_srs_name(sink, elem);
        self.append_coordinates(sink, elem, ring.coords())
    }

    /// The leaf forms serialize the ring sequence as boundary children; the
    /// composite `Surface` form wraps a `patches` element holding one
    /// `PolygonPatch` and recurses.
    ///
    /// Ring order, not ring index, decides the boundary element: the first
    /// ring written becomes `outerBoundaryIs`, every later ring
    /// `innerBoundaryIs`.
    fn write_surface_or_polygon<S: TreeSink>(
        &self,
        sink: &mut S,
        elem: &mut S::Elem,
        name: &str,
        polygon: &Polygon,
    ) -> Result<()> {
        if name != "PolygonPatch" {
            self.set_srs_name(sink, elem);
        }
        match name {
            "Polygon" | "PolygonPatch" => {
                let mut exterior_written = false;
                for ring in polygon.rings() {
                    let boundary_name = if exterior_written {
                        "innerBoundaryIs"
                    } else {
                        "outerBoundaryIs"
                    };
                    exterior_written = true;
                    let mut boundary = sink.create_element(GMLNS, boundary_name)?;
                    let mut linear_ring = sink.create_element(GMLNS, "LinearRing")?;
                    self.write_linear_ring(sink, &mut linear_ring, ring)?;
                    sink.append_child(&mut boundary, linear_ring);
                    sink.append_child(elem, boundary);
                }
                Ok(())
            }
            "Surface" => {
                let mut patches = sink.create_element(GMLNS, "patches")?;
                let mut patch = sink.create_element(GMLNS, "PolygonPatch")?;
                self.write_surface_or_polygon(sink, &mut patch, "PolygonPatch", polygon)?;
                sink.append_child(&mut patches, patch);
                sink.append_child(elem, patches);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{CoordBuffer, Envelope, MultiLineString, MultiPoint, MultiPolygon, Point};
    use crate::srs::{AxisOrder, SrsTable};
    use crate::test::xml::{TestElement, TestSink};
    use crate::xml::GMLNS;

    fn registry() -> SrsTable {
        [("EPSG:4326", AxisOrder::NorthEast)].into_iter().collect()
    }

    fn write(geometry: &Geometry, options: WriteOptions) -> TestElement {
        let writer = GmlWriter::new(registry(), options);
        let mut sink = TestSink;
        let mut parent = sink.create_element("", "parent").unwrap();
        writer.write_geometry(&mut sink, &mut parent, geometry).unwrap();
        parent.children.into_iter().next().unwrap()
    }

    fn line() -> LineString {
        LineString::new(CoordBuffer::new(vec![1., 2., 0., 3., 4., 0.]))
    }

    fn square_ring(offset: f64) -> LinearRing {
        LinearRing::new(CoordBuffer::new(vec![
            offset,
            offset,
            0.,
            offset + 1.,
            offset,
            0.,
            offset + 1.,
            offset + 1.,
            0.,
            offset,
            offset,
            0.,
        ]))
    }

    #[test]
    fn line_string_gets_coordinates_child() {
        let elem = write(&line().into(), WriteOptions::default());
        assert_eq!(elem.name, "LineString");
        assert_eq!(elem.namespace, GMLNS);
        let coordinates = elem.child("coordinates").unwrap();
        assert_eq!(coordinates.attr("decimal"), Some("."));
        assert_eq!(coordinates.attr("cs"), Some(","));
        assert_eq!(coordinates.attr("ts"), Some(" "));
        assert_eq!(coordinates.text, "1,2 3,4");
    }

    #[test]
    fn srs_name_is_stamped_and_swaps_axes() {
        let options = WriteOptions {
            srs_name: Some("EPSG:4326".to_string()),
            ..Default::default()
        };
        let elem = write(&line().into(), options);
        assert_eq!(elem.attr("srsName"), Some("EPSG:4326"));
        assert_eq!(elem.child("coordinates").unwrap().text, "2,1 4,3");
    }

    #[test]
    fn polygon_boundary_names_follow_ring_order() {
        let polygon = Polygon::new(vec![square_ring(0.), square_ring(10.)]);
        let elem = write(&polygon.into(), WriteOptions::default());
        assert_eq!(elem.name, "Polygon");
        let names: Vec<_> = elem.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["outerBoundaryIs", "innerBoundaryIs"]);
        let outer = &elem.children[0];
        let ring = outer.child("LinearRing").unwrap();
        assert!(ring.child("coordinates").unwrap().text.starts_with("0,0"));
    }

    #[test]
    fn surface_flag_wraps_polygon_in_patches() {
        let polygon = Polygon::new(vec![square_ring(0.)]);
        let options = WriteOptions {
            surface: true,
            ..Default::default()
        };
        let elem = write(&polygon.into(), options);
        assert_eq!(elem.name, "Surface");
        let patches = elem.child("patches").unwrap();
        let patch = patches.child("PolygonPatch").unwrap();
        // patches carry no srsName of their own
        assert_eq!(patch.attr("srsName"), None);
        assert_eq!(patch.children[0].name, "outerBoundaryIs");
    }

    #[test]
    fn multi_polygon_name_honors_multi_surface_flag() {
        let multi = MultiPolygon::new(vec![Polygon::new(vec![square_ring(0.)])]);
        let elem = write(&multi.clone().into(), WriteOptions::default());
        assert_eq!(elem.name, "MultiPolygon");
        let options = WriteOptions {
            multi_surface: true,
            ..Default::default()
        };
        let elem = write(&multi.into(), options);
        assert_eq!(elem.name, "MultiSurface");
    }

    #[test]
    fn multi_line_string_name_honors_multi_curve_flag() {
        let multi = MultiLineString::new(vec![line()]);
        let options = WriteOptions {
            multi_curve: true,
            ..Default::default()
        };
        let elem = write(&multi.into(), options);
        assert_eq!(elem.name, "MultiCurve");
        assert!(elem.children.is_empty());
    }

    #[test]
    fn unsupported_kinds_write_empty_elements() {
        let point = Point::new(CoordBuffer::new(vec![1., 2., 0.]));
        let elem = write(&point.into(), WriteOptions::default());
        assert_eq!(elem.name, "Point");
        assert!(elem.children.is_empty());
        assert!(elem.text.is_empty());

        let multi = MultiPoint::new(vec![]);
        let elem = write(&multi.into(), WriteOptions::default());
        assert_eq!(elem.name, "MultiPoint");
        assert!(elem.children.is_empty());

        let envelope = Envelope::new(0., 0., 1., 1.);
        let elem = write(&envelope.into(), WriteOptions::default());
        assert_eq!(elem.name, "Envelope");
        assert!(elem.children.is_empty());
    }

    #[test]
    fn linear_ring_writes_standalone() {
        let elem = write(&square_ring(0.).into(), WriteOptions::default());
        assert_eq!(elem.name, "LinearRing");
        assert!(elem.child("coordinates").is_some());
    }

    #[test]
    fn written_polygon_reads_back() {
        let polygon = Polygon::new(vec![square_ring(0.), square_ring(10.)]);
        let elem = write(&polygon.clone().into(), WriteOptions::default());
        let reader = crate::reader::GmlReader::new(registry());
        let reread = reader.read_geometry(&&elem).unwrap().unwrap();
        assert_eq!(reread, Geometry::Polygon(polygon));
    }

    #[test]
    fn written_line_string_reads_back_under_swapped_axes() {
        let options = WriteOptions {
            srs_name: Some("EPSG:4326".to_string()),
            ..Default::default()
        };
        let elem = write(&line().into(), options);
        let reader = crate::reader::GmlReader::new(registry());
        let reread = reader.read_geometry(&&elem).unwrap().unwrap();
        assert_eq!(reread, Geometry::LineString(line()));
    }
}
