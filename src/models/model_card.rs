//! # Model Cards
//!
//! Considerations attached to machine learning model components, including
//! the environmental cost of training and running them.
use serde_json::Value;

use super::{ExternalReference, OrganizationalEntity, Property};
use crate::CdxError;
use crate::bind::macros::{entity, wire_enum};
use crate::bind::union::{self, first_xml};
use crate::bind::{Bind, Context, Shape, Union, Variant};
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

wire_enum! {
    /// Lifecycle activity energy is consumed by
    pub enum EnergyActivity {
        /// Design
        Design => "design",
        /// Data collection
        DataCollection => "data-collection",
        /// Data preparation
        DataPreparation => "data-preparation",
        /// Training
        Training => "training",
        /// Fine tuning
        FineTuning => "fine-tuning",
        /// Validation
        Validation => "validation",
        /// Deployment
        Deployment => "deployment",
        /// Inference
        Inference => "inference",
        /// Other
        Other => "other",
    }
}

wire_enum! {
    /// Source of provided energy
    pub enum EnergySource {
        /// Coal
        Coal => "coal",
        /// Oil
        Oil => "oil",
        /// Natural gas
        NaturalGas => "natural-gas",
        /// Nuclear
        Nuclear => "nuclear",
        /// Wind
        Wind => "wind",
        /// Solar
        Solar => "solar",
        /// Geothermal
        Geothermal => "geothermal",
        /// Hydropower
        Hydropower => "hydropower",
        /// Biofuel
        Biofuel => "biofuel",
        /// Unknown
        Unknown => "unknown",
        /// Other
        Other => "other",
    }
}

entity! {
    /// Model card of a machine learning model
    pub struct ModelCard {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Considerations
        considerations: Option<Considerations> => 1, Field::new("considerations"),
    }
}

entity! {
    /// Intended use, limitations and risks of a model
    pub struct Considerations {
        /// Intended users
        users: Vec<String> => 0, Field::new("users").wrapped("users", "user"),
        /// Intended use cases
        use_cases: Vec<String> => 1, Field::new("useCases").wrapped("useCases", "useCase"),
        /// Known technical limitations
        technical_limitations: Vec<String> => 2,
            Field::new("technicalLimitations").wrapped("technicalLimitations", "technicalLimitation"),
        /// Performance tradeoffs
        performance_tradeoffs: Vec<String> => 3,
            Field::new("performanceTradeoffs").wrapped("performanceTradeoffs", "performanceTradeoff"),
        /// Ethical risks
        ethical_considerations: Vec<Risk> => 4,
            Field::new("ethicalConsiderations").wrapped("ethicalConsiderations", "ethicalConsideration"),
        /// Environmental impact
        environmental_considerations: Option<EnvironmentalConsiderations> => 5,
            Field::new("environmentalConsiderations").since(V::V1_6),
        /// Fairness assessments
        fairness_assessments: Vec<FairnessAssessment> => 6,
            Field::new("fairnessAssessments").wrapped("fairnessAssessments", "fairnessAssessment"),
    }
}

entity! {
    /// Risk with its mitigation
    pub struct RiskDescription {
        /// Name of the risk
        name: Option<String> => 0, Field::new("name"),
        /// Mitigation strategy
        mitigation_strategy: Option<String> => 1, Field::new("mitigationStrategy"),
    }
}

/// Ethical consideration
#[derive(Debug, Clone, PartialEq)]
pub enum Risk {
    /// Risk with its mitigation
    Described(RiskDescription),
    /// Free text
    Bare(String),
}

/// Variant of [`Risk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskKind {
    /// [`Risk::Described`]
    Described,
    /// [`Risk::Bare`]
    Bare,
}

impl Union for Risk {
    type Tag = RiskKind;
    const NAME: &'static str = "Risk";

    fn variants() -> &'static [Variant<RiskKind>] {
        const VARIANTS: &[Variant<RiskKind>] = &[
            Variant {
                name: "described",
                since: None,
                accepts: Shape::is_object,
                tag: RiskKind::Described,
            },
            Variant {
                name: "bare",
                since: None,
                accepts: Shape::is_scalar,
                tag: RiskKind::Bare,
            },
        ];
        VARIANTS
    }

    fn tag(&self) -> RiskKind {
        match self {
            Risk::Described(_) => RiskKind::Described,
            Risk::Bare(_) => RiskKind::Bare,
        }
    }
}

impl Bind for Risk {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        match self {
            Risk::Described(risk) => risk.to_json(ctx),
            Risk::Bare(text) => text.to_json(ctx),
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        match union::accept::<Self>(&Shape::of_json(value), ctx)? {
            Some(RiskKind::Described) => Ok(RiskDescription::from_json(value, ctx)?.map(Risk::Described)),
            Some(RiskKind::Bare) => Ok(String::from_json(value, ctx)?.map(Risk::Bare)),
            None => Ok(None),
        }
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        match self {
            Risk::Described(risk) => risk.to_xml(name, ctx),
            Risk::Bare(text) => text.to_xml(name, ctx),
        }
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(element) = first_xml(Self::NAME, elements)? else {
            return Ok(None);
        };
        match union::accept::<Self>(&Shape::of_xml(element), ctx)? {
            Some(RiskKind::Described) => {
                Ok(RiskDescription::from_xml(&[element], ctx)?.map(Risk::Described))
            }
            Some(RiskKind::Bare) => Ok(String::from_xml(&[element], ctx)?.map(Risk::Bare)),
            None => Ok(None),
        }
    }
}

entity! {
    /// Fairness assessment for a group at risk
    pub struct FairnessAssessment {
        /// Group at risk
        group_at_risk: Option<String> => 0, Field::new("groupAtRisk"),
        /// Expected benefits
        benefits: Option<String> => 1, Field::new("benefits"),
        /// Expected harms
        harms: Option<String> => 2, Field::new("harms"),
        /// Mitigation strategy
        mitigation_strategy: Option<String> => 3, Field::new("mitigationStrategy"),
    }
}

entity! {
    /// Environmental impact of a model
    pub struct EnvironmentalConsiderations {
        /// Energy consumed per lifecycle activity
        energy_consumptions: Vec<EnergyConsumption> => 0,
            Field::new("energyConsumptions").wrapped("energyConsumptions", "energyConsumption"),
        /// Properties
        properties: Vec<Property> => 1, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Energy consumed by one lifecycle activity
    pub struct EnergyConsumption {
        /// Activity
        activity: Option<EnergyActivity> => 0, Field::new("activity"),
        /// Providers of the consumed energy
        energy_providers: Vec<EnergyProvider> => 1,
            Field::new("energyProviders").wrapped("energyProviders", "energyProvider"),
        /// Energy cost of the activity
        activity_energy_cost: Option<Measure> => 2, Field::new("activityEnergyCost"),
        /// CO2 equivalent of the activity
        co2_cost_equivalent: Option<Measure> => 3, Field::new("co2CostEquivalent"),
        /// CO2 offset
        co2_cost_offset: Option<Measure> => 4, Field::new("co2CostOffset"),
        /// Properties
        properties: Vec<Property> => 5, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Provider of energy
    pub struct EnergyProvider {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Description
        description: Option<String> => 1, Field::new("description"),
        /// Organization providing the energy
        organization: Option<OrganizationalEntity> => 2, Field::new("organization"),
        /// Source of the energy
        energy_source: Option<EnergySource> => 3, Field::new("energySource"),
        /// Amount of energy provided
        energy_provided: Option<Measure> => 4, Field::new("energyProvided"),
        /// External references
        external_references: Vec<ExternalReference> => 5,
            Field::new("externalReferences").wrapped("externalReferences", "reference"),
    }
}

entity! {
    /// Value with its unit
    pub struct Quantity {
        /// Value
        value: Option<f64> => 0, Field::new("value"),
        /// Unit (`kWh`, `tCO2eq`)
        unit: Option<String> => 1, Field::new("unit"),
    }
}

/// Energy or CO2 measure
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    /// Value with its unit
    Measured(Quantity),
    /// Number without a unit
    Bare(f64),
}

impl Measure {
    /// Value with its unit
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Measure::Measured(Quantity {
            value: Some(value),
            unit: Some(unit.into()),
        })
    }

    /// Numeric value
    pub fn value(&self) -> Option<f64> {
        match self {
            Measure::Measured(quantity) => quantity.value,
            Measure::Bare(value) => Some(*value),
        }
    }
}

/// Variant of [`Measure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    /// [`Measure::Measured`]
    Measured,
    /// [`Measure::Bare`]
    Bare,
}

impl Union for Measure {
    type Tag = MeasureKind;
    const NAME: &'static str = "Measure";

    fn variants() -> &'static [Variant<MeasureKind>] {
        const VARIANTS: &[Variant<MeasureKind>] = &[
            Variant {
                name: "measured",
                since: None,
                accepts: Shape::is_object,
                tag: MeasureKind::Measured,
            },
            Variant {
                name: "bare",
                since: None,
                accepts: Shape::is_scalar,
                tag: MeasureKind::Bare,
            },
        ];
        VARIANTS
    }

    fn tag(&self) -> MeasureKind {
        match self {
            Measure::Measured(_) => MeasureKind::Measured,
            Measure::Bare(_) => MeasureKind::Bare,
        }
    }
}

impl Bind for Measure {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        match self {
            Measure::Measured(quantity) => quantity.to_json(ctx),
            Measure::Bare(value) => value.to_json(ctx),
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        match union::accept::<Self>(&Shape::of_json(value), ctx)? {
            Some(MeasureKind::Measured) => Ok(Quantity::from_json(value, ctx)?.map(Measure::Measured)),
            Some(MeasureKind::Bare) => Ok(f64::from_json(value, ctx)?.map(Measure::Bare)),
            None => Ok(None),
        }
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        match self {
            Measure::Measured(quantity) => quantity.to_xml(name, ctx),
            Measure::Bare(value) => value.to_xml(name, ctx),
        }
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(element) = first_xml(Self::NAME, elements)? else {
            return Ok(None);
        };
        match union::accept::<Self>(&Shape::of_xml(element), ctx)? {
            Some(MeasureKind::Measured) => Ok(Quantity::from_xml(&[element], ctx)?.map(Measure::Measured)),
            Some(MeasureKind::Bare) => Ok(f64::from_xml(&[element], ctx)?.map(Measure::Bare)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Format, SchemaVersion};
    use crate::utils::config::{ConverterConfig, Policy};
    use serde_json::json;

    fn ctx(format: Format, config: &ConverterConfig) -> Context {
        Context::new(SchemaVersion::V1_6, format, config)
    }

    #[test]
    fn test_measure_shapes() {
        let ctx = ctx(Format::Json, &ConverterConfig::default());

        let measured = Measure::from_json(&json!({"value": 0.5, "unit": "kWh"}), &ctx).unwrap();
        assert_eq!(measured, Some(Measure::new(0.5, "kWh")));

        let bare = Measure::from_json(&json!(12.25), &ctx).unwrap();
        assert_eq!(bare, Some(Measure::Bare(12.25)));
        assert_eq!(bare.unwrap().to_json(&ctx).unwrap(), Some(json!(12.25)));

        assert!(Measure::from_json(&json!([1, 2]), &ctx).is_err());
    }

    #[test]
    fn test_measure_xml() {
        let ctx = ctx(Format::Xml, &ConverterConfig::default());
        let bare = XmlElement::new("co2CostOffset").with_text("3.5");
        assert_eq!(Measure::from_xml(&[&bare], &ctx).unwrap(), Some(Measure::Bare(3.5)));

        let elements = Measure::new(2.0, "tCO2eq").to_xml("co2CostEquivalent", &ctx).unwrap();
        assert_eq!(elements[0].child("unit").unwrap().text.as_deref(), Some("tCO2eq"));
        assert_eq!(
            Measure::from_xml(&[&elements[0]], &ctx).unwrap(),
            Some(Measure::new(2.0, "tCO2eq"))
        );
    }

    #[test]
    fn test_risk_shapes() {
        let ctx = ctx(Format::Json, &ConverterConfig::default());
        let described = json!({"name": "bias", "mitigationStrategy": "review"});
        assert!(matches!(
            Risk::from_json(&described, &ctx).unwrap(),
            Some(Risk::Described(_))
        ));
        assert_eq!(
            Risk::from_json(&json!("misuse"), &ctx).unwrap(),
            Some(Risk::Bare("misuse".to_string()))
        );
    }

    #[test]
    fn test_unknown_activity() {
        let value = json!({"activity": "mining", "activityEnergyCost": {"value": 1.0, "unit": "kWh"}});

        let lenient = ctx(Format::Json, &ConverterConfig::default());
        let consumption = EnergyConsumption::from_json(&value, &lenient).unwrap().unwrap();
        assert_eq!(consumption.activity, None);
        assert_eq!(consumption.activity_energy_cost, Some(Measure::new(1.0, "kWh")));

        let config = ConverterConfig {
            unknown_enums: Policy::Strict,
            ..Default::default()
        };
        let strict = ctx(Format::Json, &config);
        let error = EnergyConsumption::from_json(&value, &strict).unwrap_err();
        assert!(matches!(error, CdxError::Parse { .. }));
        assert_eq!(error.path(), Some("activity"));
    }
}
