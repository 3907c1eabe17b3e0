//! # cdxkit Error
use thiserror::Error;

use crate::schema::SchemaVersion;

/// cdxkit Error
#[derive(Error, Debug)]
pub enum CdxError {
    /// The document could not be bound to the object model
    #[error("Failed to parse BOM at `{path}`: {message}")]
    Parse {
        /// Dotted path of the field that failed (`metadata.tools.components[0].type`)
        path: String,
        /// What went wrong
        message: String,
    },

    /// A field is present in the input but does not exist in the target version
    #[error("Field `{field}` of {entity} is not part of CycloneDX {version}")]
    VersionMismatch {
        /// Entity the field belongs to
        entity: &'static str,
        /// Field identity
        field: &'static str,
        /// Target version of the conversion
        version: SchemaVersion,
    },

    /// An enumerated value outside of the known set
    #[error("Unknown {kind} value `{value}`")]
    UnknownVariant {
        /// Name of the enumeration
        kind: &'static str,
        /// Value found in the document
        value: String,
    },

    /// No variant of a polymorphic field accepts the input shape
    #[error("No variant of {union} accepts a {shape}")]
    UnresolvedUnion {
        /// Union type name
        union: &'static str,
        /// Description of the offending node
        shape: String,
    },

    /// A leaf value could not be coerced into its field type
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Unsupported or unrecognised schema version
    #[error("Unsupported CycloneDX version: {0}")]
    UnsupportedVersion(String),

    /// Descriptor table and field type do not agree
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Parsing Configuration Error
    #[error("Failed to parse the configuration file: {0}")]
    ConfigParseError(String),

    /// IO Error
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    /// Yaml Error
    #[error("Yaml Error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    /// JSON Error
    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// XML Error
    #[error("XML Error: {0}")]
    XmlError(String),
    /// Figment Error
    #[error("Figment Error: {0}")]
    FigmentError(#[from] figment::Error),
    /// Base64 Error
    #[error("Base64 Error: {0}")]
    Base64Error(#[from] base64::DecodeError),
    /// Error parsing a datetime
    #[error("{0}")]
    ParseDateTimeError(#[from] chrono::ParseError),
}

impl CdxError {
    /// Build a parse error for the current node
    pub fn parse(message: impl Into<String>) -> Self {
        CdxError::Parse {
            path: String::new(),
            message: message.into(),
        }
    }

    /// Prefix the error path with a field name or list index (`[3]`)
    ///
    /// Any error that is not already a [`CdxError::Parse`] is folded into one,
    /// so a failing conversion always surfaces a single parse error carrying
    /// the full path.
    pub fn within(self, segment: &str) -> Self {
        match self {
            CdxError::Parse { path, message } => {
                let path = if path.is_empty() {
                    segment.to_string()
                } else if path.starts_with('[') {
                    format!("{segment}{path}")
                } else {
                    format!("{segment}.{path}")
                };
                CdxError::Parse { path, message }
            }
            other => CdxError::Parse {
                path: segment.to_string(),
                message: other.to_string(),
            },
        }
    }

    /// Field path of a parse error
    pub fn path(&self) -> Option<&str> {
        match self {
            CdxError::Parse { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for CdxError {
    fn from(error: quick_xml::Error) -> Self {
        CdxError::XmlError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_nesting() {
        let error = CdxError::UnknownVariant {
            kind: "ComponentType",
            value: "widget".to_string(),
        }
        .within("type")
        .within("[0]")
        .within("components")
        .within("tools")
        .within("metadata");

        assert_eq!(error.path(), Some("metadata.tools.components[0].type"));
        assert!(error.to_string().contains("widget"));
    }
}
