//! XML tree capabilities consumed by the codec.
//!
//! The codec never owns a DOM. Reading walks any tree whose elements expose
//! [`XmlElement`]; writing appends into any tree builder exposing
//! [`TreeSink`]. An adapter for [`roxmltree`] covers the read side.

use crate::error::Result;

/// Namespace URI of GML 2 elements.
pub const GMLNS: &str = "http://www.opengis.net/gml";

/// Schema location of the GML 2.1.2 feature schema, paired with [`GMLNS`].
pub const SCHEMA_LOCATION: &str =
    "http://www.opengis.net/gml http://schemas.opengis.net/gml/2.1.2/feature.xsd";

/// Read-side view of one XML element.
pub trait XmlElement: Sized {
    /// Namespace URI of this element, if any.
    fn namespace_uri(&self) -> Option<&str>;

    /// Local (unprefixed) element name.
    fn local_name(&self) -> &str;

    /// Attribute value looked up by unqualified name.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Child elements in document order. Text, comment and processing
    /// instruction children are invisible here.
    fn child_elements(&self) -> impl Iterator<Item = Self>;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;
}

impl<'a, 'input> XmlElement for roxmltree::Node<'a, 'input> {
    fn namespace_uri(&self) -> Option<&str> {
        self.tag_name().namespace()
    }

    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attribute(name)
    }

    fn child_elements(&self) -> impl Iterator<Item = Self> {
        self.children().filter(|child| child.is_element())
    }

    fn text_content(&self) -> String {
        self.descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect()
    }
}

/// Write-side tree building capability.
///
/// Element creation is the one fallible operation: a sink that cannot create
/// elements fails the write in progress, there is no recovery.
pub trait TreeSink {
    /// Owned element handle produced by this sink.
    type Elem;

    fn create_element(&mut self, namespace: &str, local_name: &str) -> Result<Self::Elem>;

    fn append_child(&mut self, parent: &mut Self::Elem, child: Self::Elem);

    fn set_attribute(&mut self, elem: &mut Self::Elem, name: &str, value: &str);

    fn append_text(&mut self, elem: &mut Self::Elem, text: &str);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roxmltree_adapter_exposes_namespace_and_text() {
        let doc = roxmltree::Document::parse(
            r#"<gml:Point xmlns:gml="http://www.opengis.net/gml" srsName="EPSG:4326">
                 <gml:coordinates>1,2</gml:coordinates>
               </gml:Point>"#,
        )
        .unwrap();
        let point = doc.root_element();
        assert_eq!(point.namespace_uri(), Some(GMLNS));
        assert_eq!(point.local_name(), "Point");
        assert_eq!(point.attr("srsName"), Some("EPSG:4326"));

        let children: Vec<_> = point.child_elements().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].local_name(), "coordinates");
        assert_eq!(children[0].text_content(), "1,2");
    }
}
