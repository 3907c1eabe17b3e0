//! # Declarations and Attestations
//!
//! Conformance claims against standards, who assessed them, and the signed
//! affirmation of the results.
use serde_json::Value;

use super::{ExternalReference, OrganizationalEntity, Signature};
use crate::CdxError;
use crate::bind::macros::entity;
use crate::bind::union::{self, first_xml};
use crate::bind::{Bind, Context, Shape, Union, Variant};
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// Conformance declarations
    pub struct Declarations {
        /// Assessors
        assessors: Vec<Assessor> => 0, Field::new("assessors").wrapped("assessors", "assessor"),
        /// Attestations
        attestations: Vec<Attestation> => 1, Field::new("attestations").wrapped("attestations", "attestation"),
        /// Claims
        claims: Vec<Claim> => 2, Field::new("claims").wrapped("claims", "claim"),
        /// Affirmation
        affirmation: Option<Affirmation> => 3, Field::new("affirmation"),
        /// Enveloped signature
        signature: Option<Signature> => 4, Field::new("signature").json_only(),
    }
}

entity! {
    /// Party assessing conformance
    pub struct Assessor {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Independent of the assessed party
        third_party: Option<bool> => 1, Field::new("thirdParty"),
        /// Organization
        organization: Option<OrganizationalEntity> => 2, Field::new("organization"),
    }
}

entity! {
    /// Attestation by an assessor
    pub struct Attestation {
        /// Summary
        summary: Option<String> => 0, Field::new("summary"),
        /// `bom-ref` of the assessor
        assessor: Option<String> => 1, Field::new("assessor"),
        /// Requirements mapped to claims
        map: Vec<AttestationMap> => 2, Field::new("map"),
    }
}

entity! {
    /// Requirement with the claims supporting it
    pub struct AttestationMap {
        /// `bom-ref` of the requirement
        requirement: Option<String> => 0, Field::new("requirement"),
        /// `bom-ref`s of supporting claims
        claims: Vec<String> => 1, Field::new("claims").wrapped("claims", "claim"),
        /// `bom-ref`s of counter claims
        counter_claims: Vec<String> => 2, Field::new("counterClaims").wrapped("counterClaims", "counterClaim"),
        /// Conformance
        conformance: Option<Conformance> => 3, Field::new("conformance"),
        /// Confidence
        confidence: Option<Confidence> => 4, Field::new("confidence"),
    }
}

entity! {
    /// Degree of conformance
    pub struct Conformance {
        /// Score between 0 and 1
        score: Option<f64> => 0, Field::new("score"),
        /// Rationale
        rationale: Option<String> => 1, Field::new("rationale"),
        /// `bom-ref`s of mitigation strategies
        mitigation_strategies: Vec<String> => 2,
            Field::new("mitigationStrategies").wrapped("mitigationStrategies", "mitigationStrategy"),
    }
}

entity! {
    /// Confidence in a conformance score
    pub struct Confidence {
        /// Score between 0 and 1
        score: Option<f64> => 0, Field::new("score"),
        /// Rationale
        rationale: Option<String> => 1, Field::new("rationale"),
    }
}

entity! {
    /// Claim about a target
    pub struct Claim {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// `bom-ref` of the target
        target: Option<String> => 1, Field::new("target"),
        /// Predicate
        predicate: Option<String> => 2, Field::new("predicate"),
        /// `bom-ref`s of mitigation strategies
        mitigation_strategies: Vec<String> => 3,
            Field::new("mitigationStrategies").wrapped("mitigationStrategies", "mitigationStrategy"),
        /// Reasoning
        reasoning: Option<String> => 4, Field::new("reasoning"),
        /// `bom-ref`s of evidence
        evidence: Vec<String> => 5, Field::new("evidence"),
        /// `bom-ref`s of counter evidence
        counter_evidence: Vec<String> => 6, Field::new("counterEvidence"),
        /// External references
        external_references: Vec<ExternalReference> => 7,
            Field::new("externalReferences").wrapped("externalReferences", "reference"),
    }
}

entity! {
    /// Statement affirming the declarations
    pub struct Affirmation {
        /// Statement
        statement: Option<String> => 0, Field::new("statement"),
        /// Signatories
        signatories: Vec<Signatory> => 1, Field::new("signatories").wrapped("signatories", "signatory"),
        /// Enveloped signature
        signature: Option<Signature> => 2, Field::new("signature").json_only(),
    }
}

entity! {
    /// Signatory identified by a digital signature
    pub struct SignedSignatory {
        /// Name
        name: Option<String> => 0, Field::new("name"),
        /// Role
        role: Option<String> => 1, Field::new("role"),
        /// Signature
        signature: Option<Signature> => 2, Field::new("signature").json_only(),
    }
}

entity! {
    /// Signatory identified by its organization
    pub struct OrganizationalSignatory {
        /// Name
        name: Option<String> => 0, Field::new("name"),
        /// Role
        role: Option<String> => 1, Field::new("role"),
        /// Organization
        organization: Option<OrganizationalEntity> => 2, Field::new("organization"),
        /// Reference to the signed document
        external_reference: Option<ExternalReference> => 3, Field::new("externalReference"),
    }
}

/// Signatory of an affirmation
///
/// The signature of [`Signatory::Signed`] only exists in JSON, so XML
/// documents always read back as [`Signatory::Organizational`].
#[derive(Debug, Clone, PartialEq)]
pub enum Signatory {
    /// Digitally signed
    Signed(SignedSignatory),
    /// Organization and external reference
    Organizational(OrganizationalSignatory),
}

/// Variant of [`Signatory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatoryKind {
    /// [`Signatory::Signed`]
    Signed,
    /// [`Signatory::Organizational`]
    Organizational,
}

impl Union for Signatory {
    type Tag = SignatoryKind;
    const NAME: &'static str = "Signatory";

    fn variants() -> &'static [Variant<SignatoryKind>] {
        const VARIANTS: &[Variant<SignatoryKind>] = &[
            Variant {
                name: "signed",
                since: Some(V::V1_6),
                accepts: |shape| shape.has("signature"),
                tag: SignatoryKind::Signed,
            },
            Variant {
                name: "organizational",
                since: Some(V::V1_6),
                accepts: Shape::is_object,
                tag: SignatoryKind::Organizational,
            },
        ];
        VARIANTS
    }

    fn tag(&self) -> SignatoryKind {
        match self {
            Signatory::Signed(_) => SignatoryKind::Signed,
            Signatory::Organizational(_) => SignatoryKind::Organizational,
        }
    }
}

impl Bind for Signatory {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        if !union::emits(self, ctx) {
            return Ok(None);
        }
        match self {
            Signatory::Signed(signed) => signed.to_json(ctx),
            Signatory::Organizational(organizational) => organizational.to_json(ctx),
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        match union::accept::<Self>(&Shape::of_json(value), ctx)? {
            Some(SignatoryKind::Signed) => Ok(SignedSignatory::from_json(value, ctx)?.map(Signatory::Signed)),
            Some(SignatoryKind::Organizational) => {
                Ok(OrganizationalSignatory::from_json(value, ctx)?.map(Signatory::Organizational))
            }
            None => Ok(None),
        }
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        if !union::emits(self, ctx) {
            return Ok(Vec::new());
        }
        match self {
            Signatory::Signed(signed) => signed.to_xml(name, ctx),
            Signatory::Organizational(organizational) => organizational.to_xml(name, ctx),
        }
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(element) = first_xml(Self::NAME, elements)? else {
            return Ok(None);
        };
        match union::accept::<Self>(&Shape::of_xml(element), ctx)? {
            Some(SignatoryKind::Signed) => Ok(SignedSignatory::from_xml(&[element], ctx)?.map(Signatory::Signed)),
            Some(SignatoryKind::Organizational) => Ok(OrganizationalSignatory::from_xml(&[element], ctx)?
                .map(Signatory::Organizational)),
            None => Ok(None),
        }
    }
}
