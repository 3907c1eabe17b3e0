//! # CycloneDX Models
//!
//! Every entity is declared with its descriptor table. All fields are
//! optional in the model: whether a document is complete is a question for
//! schema validation, not for binding.

mod attestation;
mod bom;
mod component;
mod dependency;
mod extension;
mod external_reference;
mod formulation;
mod hash;
mod license;
mod lifecycle;
mod metadata;
mod model_card;
mod organization;
mod property;
mod service;
mod signature;
mod tool;
mod vulnerability;

pub use attestation::{
    Affirmation, Assessor, Attestation, AttestationMap, Claim, Confidence, Conformance,
    Declarations, OrganizationalSignatory, Signatory, SignatoryKind, SignedSignatory,
};
pub use bom::Bom;
pub use component::{Component, ComponentScope, ComponentType};
pub use dependency::{Dependency, RefLink};
pub use extension::Extension;
pub use external_reference::{ExternalReference, ExternalReferenceType};
pub use formulation::{Command, Formula, Step, Task, TaskType, Workflow};
pub use hash::{Hash, HashAlgorithm};
pub use license::{AttachedText, License, LicenseChoice, LicenseChoiceKind, LicenseExpression};
pub use lifecycle::{Lifecycle, LifecycleKind, LifecyclePhase, NamedLifecycle, PhaseLifecycle};
pub use metadata::Metadata;
pub use model_card::{
    Considerations, EnergyActivity, EnergyConsumption, EnergyProvider, EnergySource,
    EnvironmentalConsiderations, FairnessAssessment, Measure, MeasureKind, ModelCard, Quantity,
    Risk, RiskDescription, RiskKind,
};
pub use organization::{OrganizationalContact, OrganizationalEntity, PostalAddress};
pub use property::Property;
pub use service::Service;
pub use signature::Signature;
pub use tool::{Tool, ToolChoice, ToolChoiceKind, ToolInformation};
pub use vulnerability::{
    Rating, ScoreMethod, Severity, Vulnerability, VulnerabilitySource, VulnerabilityTarget,
};

use crate::bind::Entity;
use crate::schema::FieldDescriptor;

/// Entity name with its descriptor table
pub type CatalogueEntry = (&'static str, &'static [FieldDescriptor]);

fn entry<E: Entity>() -> CatalogueEntry {
    (E::NAME, E::descriptors())
}

/// Descriptor tables of every entity
pub fn catalogue() -> Vec<CatalogueEntry> {
    vec![
        entry::<Bom>(),
        entry::<Metadata>(),
        entry::<Tool>(),
        entry::<ToolInformation>(),
        entry::<Component>(),
        entry::<Service>(),
        entry::<OrganizationalEntity>(),
        entry::<OrganizationalContact>(),
        entry::<PostalAddress>(),
        entry::<Hash>(),
        entry::<License>(),
        entry::<LicenseExpression>(),
        entry::<AttachedText>(),
        entry::<ExternalReference>(),
        entry::<Property>(),
        entry::<Dependency>(),
        entry::<PhaseLifecycle>(),
        entry::<NamedLifecycle>(),
        entry::<ModelCard>(),
        entry::<Considerations>(),
        entry::<RiskDescription>(),
        entry::<FairnessAssessment>(),
        entry::<EnvironmentalConsiderations>(),
        entry::<EnergyConsumption>(),
        entry::<EnergyProvider>(),
        entry::<Quantity>(),
        entry::<Formula>(),
        entry::<Workflow>(),
        entry::<Task>(),
        entry::<Step>(),
        entry::<Command>(),
        entry::<Vulnerability>(),
        entry::<VulnerabilitySource>(),
        entry::<Rating>(),
        entry::<VulnerabilityTarget>(),
        entry::<Declarations>(),
        entry::<Assessor>(),
        entry::<Attestation>(),
        entry::<AttestationMap>(),
        entry::<Conformance>(),
        entry::<Confidence>(),
        entry::<Claim>(),
        entry::<Affirmation>(),
        entry::<SignedSignatory>(),
        entry::<OrganizationalSignatory>(),
    ]
}

/// Descriptor table of one entity by name
pub fn descriptors_of(name: &str) -> Option<&'static [FieldDescriptor]> {
    catalogue()
        .into_iter()
        .find(|(entity, _)| entity.eq_ignore_ascii_case(name))
        .map(|(_, fields)| fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::descriptor::duplicate_ordinal;
    use crate::schema::{Channel, XmlNode};

    #[test]
    fn test_ordinals_unique() {
        for (name, fields) in catalogue() {
            assert_eq!(duplicate_ordinal(fields), None, "{name} has duplicate ordinals");
        }
    }

    #[test]
    fn test_idents_resolve() {
        for (name, fields) in catalogue() {
            let mut idents: Vec<&str> = fields.iter().map(|f| f.ident).collect();
            idents.sort();
            idents.dedup();
            assert_eq!(idents.len(), fields.len(), "{name} repeats a field identity");
        }
        let mut component = Component::default();
        for field in Component::descriptors() {
            assert!(component.field(field.ident).is_some());
            assert!(component.field_mut(field.ident).is_some());
        }
    }

    #[test]
    fn test_version_bounds_ordered() {
        for (name, fields) in catalogue() {
            for field in fields {
                if let (Some(introduced), Some(removed)) = (field.introduced, field.removed) {
                    assert!(introduced <= removed, "{name}.{} has an empty range", field.ident);
                }
            }
        }
    }

    #[test]
    fn test_wrappers_only_on_elements() {
        for (name, fields) in catalogue() {
            for field in fields {
                if field.wrapper_name.is_some() {
                    assert_eq!(field.xml_node, XmlNode::Element, "{name}.{}", field.ident);
                }
                if field.xml_node == XmlNode::Foreign {
                    assert_eq!(field.channel, Channel::XmlOnly, "{name}.{}", field.ident);
                }
            }
        }
    }

    #[test]
    fn test_descriptors_of() {
        assert!(descriptors_of("component").is_some());
        assert!(descriptors_of("Spaceship").is_none());
    }

    #[test]
    fn test_bom_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bom>();
        assert_send_sync::<crate::Converter>();
    }
}
