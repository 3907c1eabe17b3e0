//! # Schema Metadata
//!
//! Version registry, field descriptors and the two resolvers deciding whether
//! a field appears in a given (version, format) pair.

pub mod channel;
pub mod descriptor;
pub mod version;
pub mod visibility;

pub use channel::{Channel, Format, WireShape, XmlNode, channel_for, wire_shape_for};
pub use descriptor::FieldDescriptor;
pub use version::SchemaVersion;
pub use visibility::{is_present, is_visible};
