//! # Format Channels
//!
//! Decides whether a field takes part in a JSON or XML document and under
//! which name. A field whose channel excludes a format does not exist for that
//! format at all, in either direction.

use std::fmt::Display;
use std::str::FromStr;

use super::FieldDescriptor;
use crate::CdxError;

/// Wire format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON document
    Json,
    /// XML document
    Xml,
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Xml => write!(f, "xml"),
        }
    }
}

impl FromStr for Format {
    type Err = CdxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err(CdxError::InvalidValue(format!("unknown format `{value}`"))),
        }
    }
}

/// Formats a field participates in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Channel {
    /// JSON documents only
    JsonOnly,
    /// XML documents only
    XmlOnly,
    /// Both formats
    #[default]
    Both,
}

impl Channel {
    /// Does the channel include the format
    pub const fn includes(&self, format: Format) -> bool {
        matches!(
            (self, format),
            (Channel::Both, _) | (Channel::JsonOnly, Format::Json) | (Channel::XmlOnly, Format::Xml)
        )
    }
}

/// Where a field sits inside its XML parent element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum XmlNode {
    /// Child element(s), optionally grouped in a wrapper element
    #[default]
    Element,
    /// Attribute of the parent
    Attribute,
    /// Text body of the parent
    Text,
    /// Child elements bound to a non-CycloneDX namespace
    Foreign,
}

/// Name and placement of a field for one format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireShape {
    /// Key (JSON), element or attribute name (XML); the item name for wrapped collections
    pub name: &'static str,
    /// XML wrapper element name
    pub wrapper: Option<&'static str>,
    /// XML placement, always [`XmlNode::Element`] for JSON
    pub node: XmlNode,
}

/// Channel of a field
pub fn channel_for(field: &FieldDescriptor) -> Channel {
    field.channel
}

/// Wire name and wrapper of a field for a format, `None` when the channel excludes it
pub fn wire_shape_for(field: &FieldDescriptor, format: Format) -> Option<WireShape> {
    if !channel_for(field).includes(format) {
        return None;
    }
    Some(match format {
        Format::Json => WireShape {
            name: field.wire_name,
            wrapper: None,
            node: XmlNode::Element,
        },
        Format::Xml => WireShape {
            name: field.xml_name.unwrap_or(field.wire_name),
            wrapper: field.wrapper_name,
            node: field.xml_node,
        },
    })
}
