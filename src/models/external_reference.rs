//! # External References
use super::Hash;
use crate::bind::macros::{entity, wire_enum};
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

wire_enum! {
    /// Type of an external reference
    pub enum ExternalReferenceType {
        /// Version control system
        Vcs => "vcs",
        /// Issue or defect tracker
        IssueTracker => "issue-tracker",
        /// Website
        Website => "website",
        /// Security advisories
        Advisories => "advisories",
        /// Bill of materials
        Bom => "bom",
        /// Mailing list or discussion group
        MailingList => "mailing-list",
        /// Social media account
        Social => "social",
        /// Real-time chat platform
        Chat => "chat",
        /// Documentation
        Documentation => "documentation",
        /// Community or commercial support
        Support => "support",
        /// Source code distribution
        SourceDistribution => "source-distribution",
        /// Binary distribution
        Distribution => "distribution",
        /// License information
        License => "license",
        /// Build system metadata
        BuildMeta => "build-meta",
        /// Build system
        BuildSystem => "build-system",
        /// Release notes
        ReleaseNotes => "release-notes",
        /// Security contact
        SecurityContact => "security-contact",
        /// Model card
        ModelCard => "model-card",
        /// Log
        Log => "log",
        /// Configuration
        Configuration => "configuration",
        /// Evidence
        Evidence => "evidence",
        /// Formulation
        Formulation => "formulation",
        /// Attestation
        Attestation => "attestation",
        /// Threat model
        ThreatModel => "threat-model",
        /// Adversary model
        AdversaryModel => "adversary-model",
        /// Risk assessment
        RiskAssessment => "risk-assessment",
        /// Vulnerability assertion
        VulnerabilityAssertion => "vulnerability-assertion",
        /// Exploitability statement
        ExploitabilityStatement => "exploitability-statement",
        /// Penetration test report
        PentestReport => "pentest-report",
        /// Static analysis report
        StaticAnalysisReport => "static-analysis-report",
        /// Dynamic analysis report
        DynamicAnalysisReport => "dynamic-analysis-report",
        /// Runtime analysis report
        RuntimeAnalysisReport => "runtime-analysis-report",
        /// Component analysis report
        ComponentAnalysisReport => "component-analysis-report",
        /// Maturity report
        MaturityReport => "maturity-report",
        /// Certification report
        CertificationReport => "certification-report",
        /// Codified infrastructure
        CodifiedInfrastructure => "codified-infrastructure",
        /// Quality metrics
        QualityMetrics => "quality-metrics",
        /// Plan of action and milestones
        Poam => "poam",
        /// Electronic signature
        ElectronicSignature => "electronic-signature",
        /// Digital signature
        DigitalSignature => "digital-signature",
        /// RFC 9116 `security.txt`
        Rfc9116 => "rfc-9116",
        /// Other
        Other => "other",
    }
}

entity! {
    /// Pointer to a resource outside of the BOM
    pub struct ExternalReference {
        /// Kind of resource
        reference_type: Option<ExternalReferenceType> => 0, Field::new("type").attribute(),
        /// Location of the resource
        url: Option<String> => 1, Field::new("url"),
        /// Comment
        comment: Option<String> => 2, Field::new("comment"),
        /// Hashes of the resource
        hashes: Vec<Hash> => 3, Field::new("hashes").wrapped("hashes", "hash").since(V::V1_3),
    }
}

impl ExternalReference {
    /// New reference
    pub fn new(reference_type: ExternalReferenceType, url: impl Into<String>) -> Self {
        Self {
            reference_type: Some(reference_type),
            url: Some(url.into()),
            ..Default::default()
        }
    }
}
