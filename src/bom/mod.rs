//! # BOM Conversion
//!
//! Entry points converting a [`Bom`] to and from JSON or XML documents for a
//! target CycloneDX version.
//!
//! ```rust
//! use cdxkit::bom::{deserialize, serialize};
//! use cdxkit::models::{Bom, Component, ComponentType};
//! use cdxkit::schema::{Format, SchemaVersion};
//!
//! let mut bom = Bom::default();
//! bom.components.push(Component::new(ComponentType::Library, "libfoo"));
//!
//! let json = serialize(&bom, SchemaVersion::V1_5, Format::Json).unwrap();
//! let parsed = deserialize(&json, SchemaVersion::V1_5, Format::Json).unwrap();
//! assert_eq!(parsed, bom);
//! ```

pub mod json;
pub mod xml;
pub mod xmltree;

use log::debug;
use std::path::PathBuf;

use crate::CdxError;
use crate::bind::{Context, VersionMismatchWarning};
use crate::models::Bom;
use crate::schema::{Format, SchemaVersion};
use crate::utils::config::ConverterConfig;

/// BOM Parser Trait
pub trait BomParser {
    /// Parse a document, detecting its format and declared version
    fn parse(&self, data: &[u8]) -> Result<Bom, CdxError>;

    /// Parse a document from a file path
    fn parse_path(&self, path: PathBuf) -> Result<Bom, CdxError> {
        let data = std::fs::read(path)?;
        self.parse(&data)
    }
}

/// Converts BOMs between the object model and documents
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with the given configuration
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Converter configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Render a BOM as a document of the target version and format
    pub fn serialize(
        &self,
        bom: &Bom,
        version: SchemaVersion,
        format: Format,
    ) -> Result<String, CdxError> {
        debug!("Serializing BOM as CycloneDX {} ({})", version, format);
        let ctx = Context::new(version, format, &self.config);

        match format {
            Format::Json => json::to_document(bom, &ctx, self.config.pretty),
            Format::Xml => {
                xml::to_document(bom, &ctx, self.config.pretty, self.config.xml_declaration)
            }
        }
        .map_err(into_parse_error)
    }

    /// Bind a document of the target version and format onto a BOM
    pub fn deserialize(
        &self,
        document: &str,
        version: SchemaVersion,
        format: Format,
    ) -> Result<Bom, CdxError> {
        self.deserialize_with_warnings(document, version, format)
            .map(|(bom, _)| bom)
    }

    /// Like [`Converter::deserialize`], also returning the fields dropped
    /// because they are not part of the target version
    pub fn deserialize_with_warnings(
        &self,
        document: &str,
        version: SchemaVersion,
        format: Format,
    ) -> Result<(Bom, Vec<VersionMismatchWarning>), CdxError> {
        debug!("Deserializing CycloneDX {} ({}) document", version, format);
        let ctx = Context::new(version, format, &self.config);

        let bom = match format {
            Format::Json => json::from_document(document, &ctx),
            Format::Xml => xml::from_document(document, &ctx),
        }
        .map_err(into_parse_error)?;

        let warnings = ctx.take_warnings();
        if !warnings.is_empty() {
            debug!("Dropped {} out-of-version fields", warnings.len());
        }
        Ok((bom, warnings))
    }
}

impl BomParser for Converter {
    fn parse(&self, data: &[u8]) -> Result<Bom, CdxError> {
        let document = std::str::from_utf8(data)
            .map_err(|e| CdxError::parse(format!("document is not UTF-8: {e}")))?;
        let (format, version) = detect(document)?;
        self.deserialize(document, version, format)
    }
}

/// Every conversion failure surfaces as a single parse error
fn into_parse_error(error: CdxError) -> CdxError {
    match error {
        CdxError::Parse { .. } => error,
        other => CdxError::Parse {
            path: String::new(),
            message: other.to_string(),
        },
    }
}

/// Render a BOM with the default configuration
pub fn serialize(bom: &Bom, version: SchemaVersion, format: Format) -> Result<String, CdxError> {
    Converter::default().serialize(bom, version, format)
}

/// Bind a document with the default configuration
pub fn deserialize(document: &str, version: SchemaVersion, format: Format) -> Result<Bom, CdxError> {
    Converter::default().deserialize(document, version, format)
}

/// Detect the format and the declared version of a document
pub fn detect(document: &str) -> Result<(Format, SchemaVersion), CdxError> {
    let document = document.trim_start_matches('\u{feff}').trim_start();

    if document.starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(document)?;
        let version = value
            .get("specVersion")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| CdxError::parse("missing `specVersion`"))?;
        Ok((Format::Json, version.parse()?))
    } else if document.starts_with('<') {
        let root = xmltree::parse(document)?;
        let namespace = root
            .namespace
            .as_deref()
            .ok_or_else(|| CdxError::parse("root element has no CycloneDX namespace"))?;
        Ok((Format::Xml, SchemaVersion::from_xml_namespace(namespace)?))
    } else {
        Err(CdxError::parse("document is neither JSON nor XML"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        let (format, version) = detect(r#"  {"bomFormat": "CycloneDX", "specVersion": "1.4"}"#).unwrap();
        assert_eq!(format, Format::Json);
        assert_eq!(version, SchemaVersion::V1_4);
    }

    #[test]
    fn test_detect_xml() {
        let (format, version) = detect(
            r#"<?xml version="1.0"?><bom xmlns="http://cyclonedx.org/schema/bom/1.3" version="1"/>"#,
        )
        .unwrap();
        assert_eq!(format, Format::Xml);
        assert_eq!(version, SchemaVersion::V1_3);
    }

    #[test]
    fn test_detect_failures() {
        assert!(detect("bom").is_err());
        assert!(detect(r#"{"bomFormat": "CycloneDX"}"#).is_err());
        assert!(detect(r#"{"specVersion": "0.9"}"#).is_err());
        assert!(detect("<bom/>").is_err());
    }

    #[test]
    fn test_errors_are_parse_errors() {
        let error = deserialize("{ not json", SchemaVersion::V1_5, Format::Json).unwrap_err();
        assert!(matches!(error, CdxError::Parse { .. }));

        let error = deserialize("<bom>", SchemaVersion::V1_5, Format::Xml).unwrap_err();
        assert!(matches!(error, CdxError::Parse { .. }));

        let error = deserialize("<other/>", SchemaVersion::V1_5, Format::Xml).unwrap_err();
        assert!(matches!(error, CdxError::Parse { .. }));
    }
}
