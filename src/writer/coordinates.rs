//! Formatting flat coordinate buffers as GML `coordinates` text.

use itertools::Itertools;

use crate::geometry::CoordBuffer;
use crate::srs::{axis_order_or_default, SrsRegistry};

/// Formats a buffer as `coordinates` text: 2D tuples `x,y` separated by
/// single spaces, axis-swapped when the reference system is northing-first.
/// The z component is discarded (GML 2 simple-features profile).
pub(crate) fn format_coordinates(
    buffer: &CoordBuffer,
    srs_name: Option<&str>,
    registry: &impl SrsRegistry,
) -> String {
    let order = axis_order_or_default(registry, srs_name);
    buffer
        .iter_coords()
        .map(|(x, y, _z)| {
            if order.east_first() {
                format!("{},{}", x, y)
            } else {
                format!("{},{}", y, x)
            }
        })
        .join(" ")
}
