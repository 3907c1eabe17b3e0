//! # CycloneDX Schema Versions
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::CdxError;

/// Base of the CycloneDX XML namespace
const XML_NAMESPACE_BASE: &str = "http://cyclonedx.org/schema/bom/";

/// CycloneDX Schema Version
///
/// Variants are declared in release order so the derived ordering is the
/// release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[allow(non_camel_case_types)]
pub enum SchemaVersion {
    /// CycloneDX v1.2
    #[serde(rename = "1.2")]
    V1_2,
    /// CycloneDX v1.3
    #[serde(rename = "1.3")]
    V1_3,
    /// CycloneDX v1.4
    #[serde(rename = "1.4")]
    V1_4,
    /// CycloneDX v1.5
    #[serde(rename = "1.5")]
    V1_5,
    /// CycloneDX v1.6
    #[serde(rename = "1.6")]
    V1_6,
}

impl SchemaVersion {
    const ALL: [SchemaVersion; 5] = [
        SchemaVersion::V1_2,
        SchemaVersion::V1_3,
        SchemaVersion::V1_4,
        SchemaVersion::V1_5,
        SchemaVersion::V1_6,
    ];

    /// All supported versions, oldest first
    pub const fn all() -> &'static [SchemaVersion] {
        &Self::ALL
    }

    /// Newest supported version
    pub const fn latest() -> SchemaVersion {
        SchemaVersion::V1_6
    }

    /// Compare two versions by release sequence
    pub fn compare(a: SchemaVersion, b: SchemaVersion) -> Ordering {
        a.cmp(&b)
    }

    /// Version as written in `specVersion` (`"1.5"`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V1_2 => "1.2",
            SchemaVersion::V1_3 => "1.3",
            SchemaVersion::V1_4 => "1.4",
            SchemaVersion::V1_5 => "1.5",
            SchemaVersion::V1_6 => "1.6",
        }
    }

    /// XML namespace of the `<bom>` root element
    pub fn xml_namespace(&self) -> String {
        format!("{}{}", XML_NAMESPACE_BASE, self.as_str())
    }

    /// JSON schema URI written to `$schema`
    pub fn json_schema(&self) -> String {
        format!("http://cyclonedx.org/schema/bom-{}.schema.json", self.as_str())
    }

    /// Recognise a version from a CycloneDX XML namespace
    pub fn from_xml_namespace(namespace: &str) -> Result<Self, CdxError> {
        namespace
            .trim_end_matches('/')
            .strip_prefix(XML_NAMESPACE_BASE)
            .ok_or_else(|| CdxError::UnsupportedVersion(namespace.to_string()))?
            .parse()
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = CdxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().trim_start_matches('v');
        SchemaVersion::ALL
            .iter()
            .find(|version| version.as_str() == value)
            .copied()
            .ok_or_else(|| CdxError::UnsupportedVersion(value.to_string()))
    }
}

/// Reads `"1.5"` as well as a bare `1.5`, which YAML and env values produce
impl<'de> serde::Deserialize<'de> for SchemaVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = SchemaVersion;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a CycloneDX schema version such as \"1.5\"")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Self::Value, E> {
                self.visit_str(&value.to_string())
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
                self.visit_str(&value.to_string())
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
                self.visit_str(&value.to_string())
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let all = SchemaVersion::all();
        assert_eq!(all.first(), Some(&SchemaVersion::V1_2));
        assert_eq!(all.last(), Some(&SchemaVersion::latest()));
        for pair in all.windows(2) {
            assert_eq!(SchemaVersion::compare(pair[0], pair[1]), Ordering::Less);
            assert_eq!(SchemaVersion::compare(pair[1], pair[0]), Ordering::Greater);
        }
        assert_eq!(
            SchemaVersion::compare(SchemaVersion::V1_4, SchemaVersion::V1_4),
            Ordering::Equal
        );
    }

    #[test]
    fn test_parsing() {
        for version in SchemaVersion::all() {
            let parsed: SchemaVersion = version.as_str().parse().unwrap();
            assert_eq!(&parsed, version);
        }
        assert_eq!("v1.5".parse::<SchemaVersion>().unwrap(), SchemaVersion::V1_5);
        assert!("1.1".parse::<SchemaVersion>().is_err());
        assert!("2.0".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let quoted: SchemaVersion = serde_json::from_str(r#""1.4""#).unwrap();
        assert_eq!(quoted, SchemaVersion::V1_4);
        let number: SchemaVersion = serde_json::from_str("1.5").unwrap();
        assert_eq!(number, SchemaVersion::V1_5);
        let yaml: SchemaVersion = serde_yaml::from_str("1.6").unwrap();
        assert_eq!(yaml, SchemaVersion::V1_6);

        assert!(serde_json::from_str::<SchemaVersion>("2").is_err());
        assert!(serde_json::from_str::<SchemaVersion>("1.1").is_err());
        assert_eq!(serde_json::to_string(&SchemaVersion::V1_3).unwrap(), r#""1.3""#);
    }

    #[test]
    fn test_namespaces() {
        let ns = SchemaVersion::V1_4.xml_namespace();
        assert_eq!(ns, "http://cyclonedx.org/schema/bom/1.4");
        assert_eq!(
            SchemaVersion::from_xml_namespace(&ns).unwrap(),
            SchemaVersion::V1_4
        );
        assert!(SchemaVersion::from_xml_namespace("urn:example").is_err());
        assert_eq!(
            SchemaVersion::V1_6.json_schema(),
            "http://cyclonedx.org/schema/bom-1.6.schema.json"
        );
    }
}
