//! Reference-system collaboration: resolving a spatial reference system
//! identifier to its axis order.
//!
//! Only the *order* of the first two axes matters to this codec; reprojection
//! is out of scope.

use std::collections::HashMap;

/// Order in which a reference system prescribes its coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrder {
    /// Easting first (the `enu` orientation family). Also the fallback when
    /// a reference system is unknown.
    #[default]
    EastNorth,
    /// Northing first (the `neu` orientation family). Coordinate tuples are
    /// swapped on both read and write.
    NorthEast,
}

impl AxisOrder {
    pub fn east_first(&self) -> bool {
        matches!(self, AxisOrder::EastNorth)
    }
}

/// Resolves a reference-system identifier to its axis order.
///
/// Lookups are read-only and must be safe to call from multiple independent
/// codec invocations.
pub trait SrsRegistry {
    /// Returns the axis order for `srs_name`, or `None` when the identifier
    /// is unknown. Callers fall back to [`AxisOrder::EastNorth`].
    fn axis_order(&self, srs_name: &str) -> Option<AxisOrder>;
}

impl<R: SrsRegistry + ?Sized> SrsRegistry for &R {
    fn axis_order(&self, srs_name: &str) -> Option<AxisOrder> {
        (**self).axis_order(srs_name)
    }
}

/// Applies the default-orientation rule: an absent or unresolvable reference
/// system is east-north, never an error.
pub(crate) fn axis_order_or_default(
    registry: &impl SrsRegistry,
    srs_name: Option<&str>,
) -> AxisOrder {
    srs_name
        .and_then(|name| registry.axis_order(name))
        .unwrap_or_default()
}

/// In-memory [`SrsRegistry`] backed by a map of known identifiers.
#[derive(Debug, Clone, Default)]
pub struct SrsTable {
    orders: HashMap<String, AxisOrder>,
}

impl SrsTable {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, srs_name: impl Into<String>, order: AxisOrder) {
        self.orders.insert(srs_name.into(), order);
    }
}

impl SrsRegistry for SrsTable {
    fn axis_order(&self, srs_name: &str) -> Option<AxisOrder> {
        self.orders.get(srs_name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, AxisOrder)> for SrsTable {
    fn from_iter<T: IntoIterator<Item = (S, AxisOrder)>>(iter: T) -> Self {
        Self {
            orders: iter
                .into_iter()
                .map(|(name, order)| (name.into(), order))
                .collect(),
        }
    }
}
