//! The feature-element hook: emit one feature's identifier and properties,
//! routing the geometry property through the geometry writer.

use std::collections::HashMap;

use crate::error::Result;
use crate::feature::{Feature, PropertyValue};
use crate::srs::SrsRegistry;
use crate::writer::GmlWriter;
use crate::xml::TreeSink;

/// How a property serializes, memoized per property name so the decision is
/// made once per writer rather than once per feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropertyKind {
    Geometry,
    Text,
}

/// Writes single feature elements.
///
/// The caller creates (and names) the feature element itself; this hook
/// fills it with the `fid` attribute and one property child per non-null
/// property, in the feature's natural property order.
#[derive(Debug)]
pub struct FeatureWriter<R> {
    geometry: GmlWriter<R>,
    serializers: HashMap<String, PropertyKind>,
}

impl<R: SrsRegistry> FeatureWriter<R> {
    pub fn new(geometry_writer: GmlWriter<R>) -> Self {
        Self {
            geometry: geometry_writer,
            serializers: HashMap::new(),
        }
    }

    pub fn write_feature<S: TreeSink>(
        &mut self,
        sink: &mut S,
        node: &mut S::Elem,
        feature: &Feature,
    ) -> Result<()> {
        if let Some(fid) = feature.id() {
            sink.set_attribute(node, "fid", fid);
        }
        let feature_ns = self.geometry.options().feature_namespace.clone();
        for (name, value) in feature.properties() {
            if matches!(value, PropertyValue::Null) {
                continue;
            }
            let kind = *self.serializers.entry(name.to_owned()).or_insert_with(|| {
                if name == feature.geometry_name()
                    || matches!(value, PropertyValue::Geometry(_))
                {
                    PropertyKind::Geometry
                } else {
                    PropertyKind::Text
                }
            });
            let mut property = sink.create_element(&feature_ns, name)?;
            match (kind, value) {
                (PropertyKind::Geometry, PropertyValue::Geometry(geometry)) => {
                    self.geometry.write_geometry(sink, &mut property, geometry)?;
                }
                (_, value) => {
                    sink.append_text(&mut property, &value.to_text());
                }
            }
            sink.append_child(node, property);
        }
        Ok(())
    }
}
