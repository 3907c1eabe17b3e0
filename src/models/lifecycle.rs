//! # Lifecycles
use serde_json::Value;

use crate::CdxError;
use crate::bind::macros::{entity, wire_enum};
use crate::bind::union::{self, first_xml};
use crate::bind::{Bind, Context, Shape, Union, Variant};
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor as Field;

wire_enum! {
    /// Pre-defined lifecycle phase
    pub enum LifecyclePhase {
        /// Design
        Design => "design",
        /// Before build
        PreBuild => "pre-build",
        /// Build
        Build => "build",
        /// After build
        PostBuild => "post-build",
        /// Operations
        Operations => "operations",
        /// Discovery
        Discovery => "discovery",
        /// Decommission
        Decommission => "decommission",
    }
}

entity! {
    /// Lifecycle given by a pre-defined phase
    pub struct PhaseLifecycle {
        /// Phase
        phase: Option<LifecyclePhase> => 0, Field::new("phase"),
    }
}

entity! {
    /// Custom lifecycle
    pub struct NamedLifecycle {
        /// Name
        name: Option<String> => 0, Field::new("name"),
        /// Description
        description: Option<String> => 1, Field::new("description"),
    }
}

/// Lifecycle stage the BOM was produced in
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle {
    /// Pre-defined phase
    Phase(PhaseLifecycle),
    /// Custom lifecycle
    Named(NamedLifecycle),
}

impl Lifecycle {
    /// Pre-defined phase
    pub fn phase(phase: LifecyclePhase) -> Self {
        Lifecycle::Phase(PhaseLifecycle { phase: Some(phase) })
    }
}

/// Variant of [`Lifecycle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleKind {
    /// [`Lifecycle::Phase`]
    Phase,
    /// [`Lifecycle::Named`]
    Named,
}

impl Union for Lifecycle {
    type Tag = LifecycleKind;
    const NAME: &'static str = "Lifecycle";

    fn variants() -> &'static [Variant<LifecycleKind>] {
        const VARIANTS: &[Variant<LifecycleKind>] = &[
            Variant {
                name: "phase",
                since: None,
                accepts: |shape| shape.has("phase"),
                tag: LifecycleKind::Phase,
            },
            Variant {
                name: "named",
                since: None,
                accepts: Shape::is_object,
                tag: LifecycleKind::Named,
            },
        ];
        VARIANTS
    }

    fn tag(&self) -> LifecycleKind {
        match self {
            Lifecycle::Phase(_) => LifecycleKind::Phase,
            Lifecycle::Named(_) => LifecycleKind::Named,
        }
    }
}

impl Bind for Lifecycle {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        match self {
            Lifecycle::Phase(phase) => phase.to_json(ctx),
            Lifecycle::Named(named) => named.to_json(ctx),
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        match union::accept::<Self>(&Shape::of_json(value), ctx)? {
            Some(LifecycleKind::Phase) => Ok(PhaseLifecycle::from_json(value, ctx)?
                .filter(|phase| phase.phase.is_some())
                .map(Lifecycle::Phase)),
            Some(LifecycleKind::Named) => Ok(NamedLifecycle::from_json(value, ctx)?.map(Lifecycle::Named)),
            None => Ok(None),
        }
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        match self {
            Lifecycle::Phase(phase) => phase.to_xml(name, ctx),
            Lifecycle::Named(named) => named.to_xml(name, ctx),
        }
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(element) = first_xml(Self::NAME, elements)? else {
            return Ok(None);
        };
        match union::accept::<Self>(&Shape::of_xml(element), ctx)? {
            Some(LifecycleKind::Phase) => Ok(PhaseLifecycle::from_xml(&[element], ctx)?
                .filter(|phase| phase.phase.is_some())
                .map(Lifecycle::Phase)),
            Some(LifecycleKind::Named) => Ok(NamedLifecycle::from_xml(&[element], ctx)?.map(Lifecycle::Named)),
            None => Ok(None),
        }
    }
}
