#![allow(dead_code)]

use std::path::PathBuf;

use cdxkit::bom::xmltree::XmlElement;
use cdxkit::models::*;
use cdxkit::{Format, SchemaVersion};
use chrono::{DateTime, Utc};
use serde_json::json;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture exists")
}

fn timestamp(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn acme() -> OrganizationalEntity {
    let mut acme = OrganizationalEntity::new("Acme Inc");
    acme.url.push("https://acme.example".to_string());
    acme.contact.push(OrganizationalContact {
        name: Some("Jane Doe".to_string()),
        email: Some("jane@acme.example".to_string()),
        ..Default::default()
    });
    acme
}

fn model_card(version: SchemaVersion) -> ModelCard {
    let mut considerations = Considerations {
        users: vec!["analysts".to_string()],
        use_cases: vec!["classification".to_string()],
        technical_limitations: vec!["english only".to_string()],
        ethical_considerations: vec![
            Risk::Described(RiskDescription {
                name: Some("bias".to_string()),
                mitigation_strategy: Some("review".to_string()),
            }),
            Risk::Bare("misuse".to_string()),
        ],
        fairness_assessments: vec![FairnessAssessment {
            group_at_risk: Some("minorities".to_string()),
            harms: Some("misclassification".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    if version >= SchemaVersion::V1_6 {
        let mut provider = EnergyProvider {
            bom_ref: Some("provider-1".to_string()),
            description: Some("grid".to_string()),
            organization: Some(OrganizationalEntity::new("Power Co")),
            energy_source: Some(EnergySource::Wind),
            energy_provided: Some(Measure::Bare(10.0)),
            ..Default::default()
        };
        provider
            .external_references
            .push(ExternalReference::new(ExternalReferenceType::Website, "https://power.example"));

        considerations.environmental_considerations = Some(EnvironmentalConsiderations {
            energy_consumptions: vec![EnergyConsumption {
                activity: Some(EnergyActivity::Training),
                energy_providers: vec![provider],
                activity_energy_cost: Some(Measure::new(0.5, "kWh")),
                co2_cost_equivalent: Some(Measure::new(2.0, "tCO2eq")),
                co2_cost_offset: Some(Measure::Bare(1.5)),
                ..Default::default()
            }],
            properties: vec![Property::new("region", "eu-west")],
        });
    }

    ModelCard {
        bom_ref: Some("model-card-1".to_string()),
        considerations: Some(considerations),
    }
}

fn library(version: SchemaVersion, format: Format) -> Component {
    let mut library = Component::new(ComponentType::Library, "libfoo")
        .with_version("1.2.3")
        .with_bom_ref("pkg:generic/libfoo@1.2.3")
        .with_purl("pkg:generic/libfoo@1.2.3");
    library.group = Some("org.example".to_string());
    library.description = Some("Foo & bar <utilities>".to_string());
    library.scope = Some(ComponentScope::Required);
    library.hashes.push(Hash::new(
        HashAlgorithm::Sha256,
        "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae",
    ));
    library.licenses = Some(LicenseChoice::Licenses(vec![
        License::spdx("MIT"),
        License {
            name: Some("Custom".to_string()),
            text: Some(AttachedText::encode("text/plain", b"custom terms")),
            url: Some("https://acme.example/license".to_string()),
            ..Default::default()
        },
    ]));
    library.copyright = Some("Copyright Acme".to_string());
    library.cpe = Some("cpe:2.3:a:acme:libfoo:1.2.3:*:*:*:*:*:*:*".to_string());
    library.supplier = Some(acme());

    let mut reference = ExternalReference::new(ExternalReferenceType::Vcs, "https://git.example/libfoo");
    reference.comment = Some("upstream".to_string());
    if version >= SchemaVersion::V1_3 {
        reference.hashes.push(Hash::new(HashAlgorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        library.properties.push(Property::new("cdx:build", "release"));
    }
    library.external_references.push(reference);

    library
        .components
        .push(Component::new(ComponentType::File, "libfoo.so").with_bom_ref("libfoo.so"));

    if version >= SchemaVersion::V1_5 {
        library.model_card = Some(model_card(version));
    }
    if version >= SchemaVersion::V1_6 {
        library.tags = vec!["native".to_string(), "core".to_string()];
        library.omnibor_id.push("gitoid:blob:sha1:261eeb9e9f8b2b4b0d119366dda99c6fd7d35c64".to_string());
        library.manufacturer = Some(acme());
        library.authors.push(OrganizationalContact::new("Sam"));
    }
    if version >= SchemaVersion::V1_4 && format == Format::Json {
        library.signature = Some(Signature(json!({"algorithm": "ES256", "value": "c2lnbmF0dXJl"})));
    }
    if format == Format::Xml {
        let mut build = XmlElement::new("ext:build").with_namespace("urn:example:ext");
        build
            .children
            .push(XmlElement::new("ext:id").with_namespace("urn:example:ext").with_text("42"));
        library.extensions.push(Extension(build));
    }
    library
}

fn declarations(format: Format) -> Declarations {
    let signatory = match format {
        Format::Json => Signatory::Signed(SignedSignatory {
            name: Some("Tom".to_string()),
            role: Some("CEO".to_string()),
            signature: Some(Signature(json!({"algorithm": "ES256", "value": "YWJj"}))),
        }),
        Format::Xml => Signatory::Organizational(OrganizationalSignatory {
            name: Some("Tom".to_string()),
            role: Some("CEO".to_string()),
            organization: Some(acme()),
            external_reference: Some(ExternalReference::new(
                ExternalReferenceType::ElectronicSignature,
                "https://acme.example/signed.pdf",
            )),
        }),
    };

    Declarations {
        assessors: vec![Assessor {
            bom_ref: Some("assessor-1".to_string()),
            third_party: Some(true),
            organization: Some(OrganizationalEntity::new("Audit Co")),
        }],
        attestations: vec![Attestation {
            summary: Some("SSDF conformance".to_string()),
            assessor: Some("assessor-1".to_string()),
            map: vec![AttestationMap {
                requirement: Some("requirement-1".to_string()),
                claims: vec!["claim-1".to_string()],
                conformance: Some(Conformance {
                    score: Some(0.8),
                    rationale: Some("mostly".to_string()),
                    ..Default::default()
                }),
                confidence: Some(Confidence {
                    score: Some(1.0),
                    rationale: None,
                }),
                ..Default::default()
            }],
        }],
        claims: vec![Claim {
            bom_ref: Some("claim-1".to_string()),
            target: Some("pkg:generic/libfoo@1.2.3".to_string()),
            predicate: Some("is reviewed".to_string()),
            evidence: vec!["evidence-1".to_string(), "evidence-2".to_string()],
            ..Default::default()
        }],
        affirmation: Some(Affirmation {
            statement: Some("I affirm".to_string()),
            signatories: vec![signatory],
            signature: None,
        }),
        signature: None,
    }
}

/// A BOM using every field that exists in `version` for `format`
pub fn sample_bom(version: SchemaVersion, format: Format) -> Bom {
    let mut bom = Bom {
        serial_number: Some("urn:uuid:3e671687-395b-41f5-a30f-a58921a69b79".to_string()),
        version: Some(1),
        ..Default::default()
    };

    let mut metadata = Metadata {
        timestamp: Some(timestamp("2024-05-01T08:15:30Z")),
        component: Some(Component::new(ComponentType::Application, "app").with_bom_ref("app")),
        supplier: Some(acme()),
        ..Default::default()
    };
    metadata.authors.push(OrganizationalContact::new("Jane Doe"));
    metadata.tools = Some(if version >= SchemaVersion::V1_5 {
        ToolChoice::Structured(ToolInformation {
            components: vec![Component::new(ComponentType::Application, "scanner").with_version("2.0")],
            services: vec![Service::new("scan-api")],
        })
    } else {
        ToolChoice::Legacy(vec![Tool::new("Acme", "scanner", "2.0")])
    });
    if version >= SchemaVersion::V1_3 {
        metadata.licenses = Some(LicenseChoice::expression("CC0-1.0"));
        metadata.properties.push(Property::new("origin", "ci"));
    }
    if version >= SchemaVersion::V1_5 {
        metadata.lifecycles = vec![
            Lifecycle::phase(LifecyclePhase::Build),
            Lifecycle::Named(NamedLifecycle {
                name: Some("platform-testing".to_string()),
                description: Some("integration".to_string()),
            }),
        ];
    }
    bom.metadata = Some(metadata);

    bom.components.push(library(version, format));

    let mut service = Service::new("auth-api");
    service.bom_ref = Some("auth-api".to_string());
    service.endpoints = vec!["https://auth.example/v1".to_string()];
    service.authenticated = Some(true);
    service.x_trust_boundary = Some(false);
    if version >= SchemaVersion::V1_5 {
        service.trust_zone = Some("dmz".to_string());
    }
    bom.services.push(service);

    bom.external_references
        .push(ExternalReference::new(ExternalReferenceType::Website, "https://acme.example"));

    let mut dependency = Dependency::new("app", &["pkg:generic/libfoo@1.2.3", "auth-api"]);
    if version >= SchemaVersion::V1_6 {
        dependency.provides.push(RefLink::from("crypto-spec"));
    }
    bom.dependencies.push(dependency);
    bom.dependencies.push(Dependency::new("pkg:generic/libfoo@1.2.3", &[]));

    if version >= SchemaVersion::V1_3 {
        bom.properties.push(Property::new("build", "42"));
    }
    if version >= SchemaVersion::V1_4 {
        bom.vulnerabilities.push(Vulnerability {
            bom_ref: Some("vuln-1".to_string()),
            id: Some("CVE-2021-44228".to_string()),
            source: Some(VulnerabilitySource {
                name: Some("NVD".to_string()),
                url: Some("https://nvd.nist.gov/vuln/detail/CVE-2021-44228".to_string()),
            }),
            ratings: vec![Rating {
                score: Some(10.0),
                severity: Some(Severity::Critical),
                method: Some(ScoreMethod::CvssV31),
                vector: Some("AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H".to_string()),
                justification: (version >= SchemaVersion::V1_5).then(|| "remote".to_string()),
                ..Default::default()
            }],
            description: Some("Log4Shell".to_string()),
            created: Some(timestamp("2021-12-10T00:00:00Z")),
            affects: vec![VulnerabilityTarget {
                reference: Some("pkg:generic/libfoo@1.2.3".to_string()),
            }],
            ..Default::default()
        });
    }
    if version >= SchemaVersion::V1_4 && format == Format::Json {
        bom.signature = Some(Signature(json!({"algorithm": "RS256", "value": "Ym9t"})));
    }
    if version >= SchemaVersion::V1_5 {
        bom.formulation.push(Formula {
            bom_ref: Some("formula-1".to_string()),
            components: vec![Component::new(ComponentType::Application, "rustc").with_version("1.85.0")],
            workflows: vec![Workflow {
                bom_ref: Some("workflow-1".to_string()),
                uid: Some("wf-1".to_string()),
                name: Some("release".to_string()),
                task_types: vec![TaskType::Build, TaskType::Release],
                tasks: vec![Task {
                    bom_ref: Some("task-1".to_string()),
                    uid: Some("task-1".to_string()),
                    task_types: vec![TaskType::Build],
                    steps: vec![Step {
                        name: Some("compile".to_string()),
                        commands: vec![Command {
                            executed: Some("cargo build --release".to_string()),
                            ..Default::default()
                        }],
                        ..Default::default()
                    }],
                    time_start: Some(timestamp("2024-05-01T08:00:00Z")),
                    time_end: Some(timestamp("2024-05-01T08:10:00.500Z")),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        });
    }
    if version >= SchemaVersion::V1_6 {
        bom.declarations = Some(declarations(format));
    }
    if format == Format::Xml {
        bom.extensions.push(Extension(
            XmlElement::new("vendor:note")
                .with_namespace("urn:example:vendor")
                .with_text("internal"),
        ));
    }
    bom
}
