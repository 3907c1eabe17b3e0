//! # Services
use super::{Extension, ExternalReference, LicenseChoice, OrganizationalEntity, Property, Signature};
use crate::bind::macros::entity;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// Service (API, microservice, function, ...)
    pub struct Service {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Provider
        provider: Option<OrganizationalEntity> => 1, Field::new("provider"),
        /// Group or namespace
        group: Option<String> => 2, Field::new("group"),
        /// Name
        name: Option<String> => 3, Field::new("name"),
        /// Version
        version: Option<String> => 4, Field::new("version"),
        /// Description
        description: Option<String> => 5, Field::new("description"),
        /// Endpoint URIs
        endpoints: Vec<String> => 6, Field::new("endpoints").wrapped("endpoints", "endpoint"),
        /// Requires authentication
        authenticated: Option<bool> => 7, Field::new("authenticated"),
        /// Crosses a trust boundary
        x_trust_boundary: Option<bool> => 8, Field::new("x-trust-boundary"),
        /// Trust zone
        trust_zone: Option<String> => 9, Field::new("trustZone").since(V::V1_5),
        /// Licenses
        licenses: Option<LicenseChoice> => 10, Field::new("licenses"),
        /// External references
        external_references: Vec<ExternalReference> => 11,
            Field::new("externalReferences").wrapped("externalReferences", "reference"),
        /// Properties
        properties: Vec<Property> => 12, Field::new("properties").wrapped("properties", "property").since(V::V1_3),
        /// Sub-services
        services: Vec<Service> => 13, Field::new("services").wrapped("services", "service"),
        /// Tags
        tags: Vec<String> => 14, Field::new("tags").wrapped("tags", "tag").since(V::V1_6),
        /// Enveloped signature
        signature: Option<Signature> => 15, Field::new("signature").json_only().since(V::V1_4),
        /// Foreign namespace extensions
        extensions: Vec<Extension> => 16, Field::new("extensions").xml_only().foreign(),
    }
}

impl Service {
    /// New service
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
