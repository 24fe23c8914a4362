//! Parsing GML `coordinates` text into flat xyz buffers.

use crate::geometry::CoordBuffer;
use crate::reader::ParseContext;
use crate::srs::{axis_order_or_default, SrsRegistry};
use crate::xml::XmlElement;

/// Malformed tokens degrade to the NAN sentinel, never an error.
fn parse_token(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}

fn parse_dimension_attr<E: XmlElement>(node: &E, name: &str) -> Option<usize> {
    node.attr(name).and_then(|value| value.trim().parse().ok())
}

/// Resolves the coordinate dimension of a coordinates-bearing element.
///
/// Precedence: `srsDimension` on the element itself, the legacy `dimension`
/// attribute, the dimension inherited from the structural parent, then 2.
/// Unparseable attribute values fall through to the next source.
pub(crate) fn resolve_dimension<E: XmlElement>(node: &E, context: &ParseContext) -> usize {
    parse_dimension_attr(node, "srsDimension")
        .or_else(|| parse_dimension_attr(node, "dimension"))
        .or_else(|| context.dimension())
        .unwrap_or(2)
}

/// Reads the text of a `coordinates` element into a flat xyz buffer.
///
/// Tokens are split on runs of whitespace and commas, grouped by the
/// resolved dimension and axis-swapped when the active reference system is
/// northing-first. Missing tuple components read as NAN; `z` is synthesized
/// as 0 for two-dimensional input.
pub(crate) fn read_flat_coordinates<E: XmlElement>(
    node: &E,
    context: &ParseContext,
    registry: &impl SrsRegistry,
) -> CoordBuffer {
    let text = node.text_content();
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    let dim = resolve_dimension(node, context).max(1);
    let order = axis_order_or_default(registry, context.srs_name());

    let mut buffer = CoordBuffer::with_capacity(tokens.len() / dim);
    for chunk in tokens.chunks(dim) {
        let x = chunk.first().copied().map_or(f64::NAN, parse_token);
        let y = chunk.get(1).copied().map_or(f64::NAN, parse_token);
        let z = if dim == 3 {
            chunk.get(2).copied().map_or(f64::NAN, parse_token)
        } else {
            0.0
        };
        if order.east_first() {
            buffer.push_coord(x, y, z);
        } else {
            buffer.push_coord(y, x, z);
        }
    }
    buffer
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::srs::{AxisOrder, SrsTable};
    use crate::xml::XmlElement;

    fn parse_doc(xml: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(xml).unwrap()
    }

    fn read(xml: &str, context: &ParseContext, registry: &SrsTable) -> CoordBuffer {
        let doc = parse_doc(xml);
        read_flat_coordinates(&doc.root_element(), context, registry)
    }

    #[test]
    fn splits_on_whitespace_and_commas() {
        let buffer = read(
            "<coordinates> 1,2 3,4\n5,6 </coordinates>",
            &ParseContext::new(),
            &SrsTable::new(),
        );
        assert_eq!(buffer.as_slice(), &[1., 2., 0., 3., 4., 0., 5., 6., 0.]);
    }

    #[test]
    fn north_first_srs_swaps_axes() {
        let registry: SrsTable = [("EPSG:4326", AxisOrder::NorthEast)].into_iter().collect();
        let context = ParseContext::with_defaults(Some("EPSG:4326"), None);
        let buffer = read("<coordinates>2,1</coordinates>", &context, &registry);
        assert_eq!(buffer.get_x(0), 1.);
        assert_eq!(buffer.get_y(0), 2.);
    }

    #[test]
    fn unknown_srs_keeps_east_first_order() {
        let context = ParseContext::with_defaults(Some("urn:x-unknown"), None);
        let buffer = read("<coordinates>2,1</coordinates>", &context, &SrsTable::new());
        assert_eq!(buffer.get_x(0), 2.);
        assert_eq!(buffer.get_y(0), 1.);
    }

    #[test]
    fn explicit_dimension_beats_parent_dimension() {
        let context = ParseContext::with_defaults(None, Some(2));
        let doc = parse_doc(r#"<coordinates srsDimension="3">1,2,3 4,5,6</coordinates>"#);
        assert_eq!(resolve_dimension(&doc.root_element(), &context), 3);
        let buffer = read_flat_coordinates(&doc.root_element(), &context, &SrsTable::new());
        assert_eq!(buffer.as_slice(), &[1., 2., 3., 4., 5., 6.]);
    }

    #[test]
    fn legacy_dimension_attribute_applies() {
        let doc = parse_doc(r#"<coordinates dimension="3">1,2,3</coordinates>"#);
        assert_eq!(resolve_dimension(&doc.root_element(), &ParseContext::new()), 3);
    }

    #[test]
    fn parent_dimension_applies_when_undeclared() {
        let context = ParseContext::with_defaults(None, Some(3));
        let buffer = read("<coordinates>1,2,3</coordinates>", &context, &SrsTable::new());
        assert_eq!(buffer.as_slice(), &[1., 2., 3.]);
    }

    #[test]
    fn unparseable_dimension_attribute_falls_through() {
        let doc = parse_doc(r#"<coordinates srsDimension="abc">1,2</coordinates>"#);
        assert_eq!(resolve_dimension(&doc.root_element(), &ParseContext::new()), 2);
    }

    #[test]
    fn malformed_token_becomes_nan_sentinel() {
        let buffer = read(
            "<coordinates>1,bogus 3,4</coordinates>",
            &ParseContext::new(),
            &SrsTable::new(),
        );
        assert_eq!(buffer.get_x(0), 1.);
        assert!(buffer.get_y(0).is_nan());
        assert_eq!(buffer.get_x(1), 3.);
    }

    #[test]
    fn trailing_partial_tuple_reads_nan() {
        let buffer = read(
            "<coordinates>1,2 3</coordinates>",
            &ParseContext::new(),
            &SrsTable::new(),
        );
        assert_eq!(buffer.num_coords(), 2);
        assert_eq!(buffer.get_x(1), 3.);
        assert!(buffer.get_y(1).is_nan());
    }

    #[test]
    fn text_content_spans_nested_nodes() {
        let doc = parse_doc("<coordinates>1,<!-- comment -->2</coordinates>");
        assert_eq!(doc.root_element().text_content(), "1,2");
    }
}
