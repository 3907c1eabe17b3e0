//! # Vulnerabilities
use chrono::{DateTime, Utc};

use super::Property;
use crate::bind::macros::{entity, wire_enum};
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

wire_enum! {
    /// Severity
    pub enum Severity {
        /// Critical
        Critical => "critical",
        /// High
        High => "high",
        /// Medium
        Medium => "medium",
        /// Low
        Low => "low",
        /// Informational
        Info => "info",
        /// None
        None => "none",
        /// Unknown
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Risk scoring method
    pub enum ScoreMethod {
        /// CVSS v2
        CvssV2 => "CVSSv2",
        /// CVSS v3
        CvssV3 => "CVSSv3",
        /// CVSS v3.1
        CvssV31 => "CVSSv31",
        /// CVSS v4
        CvssV4 => "CVSSv4",
        /// OWASP Risk Rating
        Owasp => "OWASP",
        /// Stakeholder-Specific Vulnerability Categorization
        Ssvc => "SSVC",
        /// Other
        Other => "other",
    }
}

entity! {
    /// Known vulnerability
    pub struct Vulnerability {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Identifier (`CVE-2021-44228`)
        id: Option<String> => 1, Field::new("id"),
        /// Source of the identifier
        source: Option<VulnerabilitySource> => 2, Field::new("source"),
        /// Ratings
        ratings: Vec<Rating> => 3, Field::new("ratings").wrapped("ratings", "rating"),
        /// Description
        description: Option<String> => 4, Field::new("description"),
        /// Detail
        detail: Option<String> => 5, Field::new("detail"),
        /// Recommendation
        recommendation: Option<String> => 6, Field::new("recommendation"),
        /// Creation time
        created: Option<DateTime<Utc>> => 7, Field::new("created"),
        /// Publication time
        published: Option<DateTime<Utc>> => 8, Field::new("published"),
        /// Last update
        updated: Option<DateTime<Utc>> => 9, Field::new("updated"),
        /// Affected components and services
        affects: Vec<VulnerabilityTarget> => 10, Field::new("affects").wrapped("affects", "target"),
        /// Properties
        properties: Vec<Property> => 11, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Source of a vulnerability identifier
    pub struct VulnerabilitySource {
        /// Name (`NVD`)
        name: Option<String> => 0, Field::new("name"),
        /// URL
        url: Option<String> => 1, Field::new("url"),
    }
}

entity! {
    /// Severity rating
    pub struct Rating {
        /// Source of the rating
        source: Option<VulnerabilitySource> => 0, Field::new("source"),
        /// Numeric score
        score: Option<f64> => 1, Field::new("score"),
        /// Severity
        severity: Option<Severity> => 2, Field::new("severity"),
        /// Scoring method
        method: Option<ScoreMethod> => 3, Field::new("method"),
        /// Vector string
        vector: Option<String> => 4, Field::new("vector"),
        /// Justification
        justification: Option<String> => 5, Field::new("justification").since(V::V1_5),
    }
}

entity! {
    /// Affected component or service
    pub struct VulnerabilityTarget {
        /// `bom-ref` of the affected entity
        reference: Option<String> => 0, Field::new("ref"),
    }
}
