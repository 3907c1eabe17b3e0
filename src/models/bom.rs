//! # Bill of Materials
use uuid::Uuid;

use super::{
    Component, Declarations, Dependency, Extension, ExternalReference, Formula, Metadata,
    Property, Service, Signature, Vulnerability,
};
use crate::bind::macros::entity;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// CycloneDX Bill of Materials
    ///
    /// `bomFormat`, `specVersion` and the XML namespace are not fields, they
    /// are written from the target version of each conversion.
    pub struct Bom {
        /// Serial number (`urn:uuid:...`)
        serial_number: Option<String> => 0, Field::new("serialNumber").attribute(),
        /// Revision of the BOM
        version: Option<i64> => 1, Field::new("version").attribute(),
        /// Metadata
        metadata: Option<Metadata> => 2, Field::new("metadata"),
        /// Components
        components: Vec<Component> => 3, Field::new("components").wrapped("components", "component"),
        /// Services
        services: Vec<Service> => 4, Field::new("services").wrapped("services", "service"),
        /// External references
        external_references: Vec<ExternalReference> => 5,
            Field::new("externalReferences").wrapped("externalReferences", "reference"),
        /// Dependency graph
        dependencies: Vec<Dependency> => 6, Field::new("dependencies").wrapped("dependencies", "dependency"),
        /// Properties
        properties: Vec<Property> => 7, Field::new("properties").wrapped("properties", "property").since(V::V1_3),
        /// Vulnerabilities
        vulnerabilities: Vec<Vulnerability> => 8,
            Field::new("vulnerabilities").wrapped("vulnerabilities", "vulnerability").since(V::V1_4),
        /// Formulation
        formulation: Vec<Formula> => 9, Field::new("formulation").wrapped("formulation", "formula").since(V::V1_5),
        /// Conformance declarations
        declarations: Option<Declarations> => 10, Field::new("declarations").since(V::V1_6),
        /// Enveloped signature
        signature: Option<Signature> => 11, Field::new("signature").json_only().since(V::V1_4),
        /// Foreign namespace extensions
        extensions: Vec<Extension> => 12, Field::new("extensions").xml_only().foreign(),
    }
}

impl Bom {
    /// New BOM with a fresh serial number, revision 1
    pub fn new() -> Self {
        Self {
            serial_number: Some(Self::generate_serial_number()),
            version: Some(1),
            ..Default::default()
        }
    }

    /// Random `urn:uuid:` serial number
    pub fn generate_serial_number() -> String {
        format!("urn:uuid:{}", Uuid::new_v4())
    }

    /// Every component, nested ones included
    pub fn all_components(&self) -> Vec<&Component> {
        self.components.iter().flat_map(Component::walk).collect()
    }

    /// Component by `bom-ref`
    pub fn find_component(&self, bom_ref: &str) -> Option<&Component> {
        self.all_components()
            .into_iter()
            .find(|component| component.bom_ref.as_deref() == Some(bom_ref))
    }
}
