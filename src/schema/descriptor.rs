//! # Field Descriptors
//!
//! Each entity carries a `const` table of [`FieldDescriptor`]s. A descriptor
//! holds everything the driver needs to know about one field: where it lives
//! on the wire in each format, which schema versions contain it, and its
//! position among its siblings.
//!
//! ```rust
//! use cdxkit::schema::{FieldDescriptor, SchemaVersion};
//!
//! const HASHES: FieldDescriptor = FieldDescriptor::new("hashes")
//!     .wrapped("hashes", "hash")
//!     .since(SchemaVersion::V1_3)
//!     .bind("hashes", 4);
//!
//! assert_eq!(HASHES.ordinal, 4);
//! assert_eq!(HASHES.wrapper_name, Some("hashes"));
//! ```

use super::{Channel, SchemaVersion, XmlNode};

/// Field metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field identity, used by the entity getter and setter
    pub ident: &'static str,
    /// Output position among the sibling fields
    pub ordinal: u16,
    /// Name in JSON, and the default element or attribute name in XML
    pub wire_name: &'static str,
    /// XML name when it differs from the JSON name (item name for collections)
    pub xml_name: Option<&'static str>,
    /// XML element enclosing the items of a collection
    pub wrapper_name: Option<&'static str>,
    /// First version containing the field (inclusive)
    pub introduced: Option<SchemaVersion>,
    /// Last version containing the field (inclusive)
    pub removed: Option<SchemaVersion>,
    /// Formats the field participates in
    pub channel: Channel,
    /// Placement of the field inside its XML parent
    pub xml_node: XmlNode,
}

impl FieldDescriptor {
    /// New descriptor for a field present in both formats and every version
    pub const fn new(wire_name: &'static str) -> Self {
        Self {
            ident: wire_name,
            ordinal: 0,
            wire_name,
            xml_name: None,
            wrapper_name: None,
            introduced: None,
            removed: None,
            channel: Channel::Both,
            xml_node: XmlNode::Element,
        }
    }

    /// Attach the Rust field identity and ordinal
    pub const fn bind(self, ident: &'static str, ordinal: u16) -> Self {
        Self {
            ident,
            ordinal,
            ..self
        }
    }

    /// Field exists from `version` onwards
    pub const fn since(self, version: SchemaVersion) -> Self {
        Self {
            introduced: Some(version),
            ..self
        }
    }

    /// Field exists up to and including `version`
    pub const fn until(self, version: SchemaVersion) -> Self {
        Self {
            removed: Some(version),
            ..self
        }
    }

    /// Field only exists in JSON documents
    pub const fn json_only(self) -> Self {
        Self {
            channel: Channel::JsonOnly,
            ..self
        }
    }

    /// Field only exists in XML documents
    pub const fn xml_only(self) -> Self {
        Self {
            channel: Channel::XmlOnly,
            ..self
        }
    }

    /// XML element or attribute name, when different from the JSON name
    pub const fn xml_name(self, name: &'static str) -> Self {
        Self {
            xml_name: Some(name),
            ..self
        }
    }

    /// XML collection wrapped in `wrapper`, one `item` element per entry
    pub const fn wrapped(self, wrapper: &'static str, item: &'static str) -> Self {
        Self {
            wrapper_name: Some(wrapper),
            xml_name: Some(item),
            ..self
        }
    }

    /// Written as an attribute of the XML parent
    pub const fn attribute(self) -> Self {
        Self {
            xml_node: XmlNode::Attribute,
            ..self
        }
    }

    /// Written as the text body of the XML parent
    pub const fn text(self) -> Self {
        Self {
            xml_node: XmlNode::Text,
            ..self
        }
    }

    /// Captures child elements from foreign XML namespaces
    pub const fn foreign(self) -> Self {
        Self {
            xml_node: XmlNode::Foreign,
            ..self
        }
    }
}

/// Descriptors of one entity sorted by ordinal
pub fn ordered(fields: &'static [FieldDescriptor]) -> Vec<&'static FieldDescriptor> {
    let mut ordered: Vec<&FieldDescriptor> = fields.iter().collect();
    ordered.sort_by_key(|field| field.ordinal);
    ordered
}

/// First pair of fields sharing an ordinal, if any
pub fn duplicate_ordinal(
    fields: &'static [FieldDescriptor],
) -> Option<(&'static str, &'static str)> {
    ordered(fields)
        .windows(2)
        .find(|pair| pair[0].ordinal == pair[1].ordinal)
        .map(|pair| (pair[0].ident, pair[1].ident))
}
