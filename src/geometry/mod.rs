//! In-memory geometry model: a closed set of GML 2 geometry kinds over flat
//! coordinate buffers.
//!
//! Leaf kinds own a [`CoordBuffer`]; composite kinds own their children in
//! document order. A polygon's ring at index 0 is its exterior ring.

mod coords;

pub use coords::CoordBuffer;

use std::fmt;

/// Abstract geometry type names, as used by the write-side dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    Envelope,
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::Envelope => "Envelope",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: CoordBuffer,
}

impl Point {
    pub fn new(coords: CoordBuffer) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: CoordBuffer,
}

impl LineString {
    pub fn new(coords: CoordBuffer) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }
}

/// A closed coordinate sequence bounding a polygon's exterior or one of its
/// interior holes.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    coords: CoordBuffer,
}

impl LinearRing {
    pub fn new(coords: CoordBuffer) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }
}

/// A polygon as an ordered ring sequence: index 0 is the exterior ring, the
/// rest are interior rings in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// A coordinate-box extent, the GML 2 `Box` shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

/// A tagged variant over every geometry kind this codec reads or writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    Envelope(Envelope),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::LinearRing(_) => GeometryType::LinearRing,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::Envelope(_) => GeometryType::Envelope,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<LinearRing> for Geometry {
    fn from(value: LinearRing) -> Self {
        Geometry::LinearRing(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<Envelope> for Geometry {
    fn from(value: Envelope) -> Self {
        Geometry::Envelope(value)
    }
}
