//! # Tools
//!
//! `metadata.tools` was a plain list of [`Tool`]s up to 1.4. Version 1.5
//! replaced it with an object listing the tools as components and services,
//! the legacy list stayed valid but deprecated.
use serde_json::Value;

use super::{Component, ExternalReference, Hash, Service};
use crate::CdxError;
use crate::bind::macros::entity;
use crate::bind::union::{self, first_xml};
use crate::bind::{Bind, Context, Shape, Union, Variant};
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// Tool used to create the BOM (legacy form)
    pub struct Tool {
        /// Vendor
        vendor: Option<String> => 0, Field::new("vendor"),
        /// Name
        name: Option<String> => 1, Field::new("name"),
        /// Version
        version: Option<String> => 2, Field::new("version"),
        /// Hashes of the tool
        hashes: Vec<Hash> => 3, Field::new("hashes").wrapped("hashes", "hash"),
        /// External references
        external_references: Vec<ExternalReference> => 4,
            Field::new("externalReferences").wrapped("externalReferences", "reference").since(V::V1_4),
    }
}

impl Tool {
    /// Tool by vendor, name and version
    pub fn new(vendor: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            vendor: Some(vendor.into()),
            name: Some(name.into()),
            version: Some(version.into()),
            ..Default::default()
        }
    }
}

entity! {
    /// Tools described as components and services
    pub struct ToolInformation {
        /// Tools that are components
        components: Vec<Component> => 0, Field::new("components").wrapped("components", "component"),
        /// Tools that are services
        services: Vec<Service> => 1, Field::new("services").wrapped("services", "service"),
    }
}

/// Tools of the BOM metadata
#[derive(Debug, Clone, PartialEq)]
pub enum ToolChoice {
    /// List of [`Tool`]s
    Legacy(Vec<Tool>),
    /// [`ToolInformation`], only defined from 1.5
    Structured(ToolInformation),
}

/// Variant of [`ToolChoice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolChoiceKind {
    /// [`ToolChoice::Legacy`]
    Legacy,
    /// [`ToolChoice::Structured`]
    Structured,
}

impl Union for ToolChoice {
    type Tag = ToolChoiceKind;
    const NAME: &'static str = "ToolChoice";

    fn variants() -> &'static [Variant<ToolChoiceKind>] {
        const VARIANTS: &[Variant<ToolChoiceKind>] = &[
            Variant {
                name: "legacy",
                since: None,
                accepts: |shape| shape.is_sequence() || shape.has("tool"),
                tag: ToolChoiceKind::Legacy,
            },
            Variant {
                name: "structured",
                since: Some(V::V1_5),
                accepts: Shape::is_object,
                tag: ToolChoiceKind::Structured,
            },
        ];
        VARIANTS
    }

    fn tag(&self) -> ToolChoiceKind {
        match self {
            ToolChoice::Legacy(_) => ToolChoiceKind::Legacy,
            ToolChoice::Structured(_) => ToolChoiceKind::Structured,
        }
    }
}

impl Bind for ToolChoice {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        if !union::emits(self, ctx) {
            return Ok(None);
        }
        match self {
            ToolChoice::Legacy(tools) => Ok(Some(
                tools.to_json(ctx)?.unwrap_or_else(|| Value::Array(Vec::new())),
            )),
            ToolChoice::Structured(information) => information.to_json(ctx),
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(tag) = union::accept::<Self>(&Shape::of_json(value), ctx)? else {
            return Ok(None);
        };
        match tag {
            ToolChoiceKind::Legacy => Ok(Vec::<Tool>::from_json(value, ctx)?.map(ToolChoice::Legacy)),
            ToolChoiceKind::Structured => {
                Ok(ToolInformation::from_json(value, ctx)?.map(ToolChoice::Structured))
            }
        }
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        if !union::emits(self, ctx) {
            return Ok(Vec::new());
        }
        match self {
            ToolChoice::Legacy(tools) => {
                let mut element = XmlElement::new(name);
                element.children = tools.to_xml("tool", ctx)?;
                Ok(vec![element])
            }
            ToolChoice::Structured(information) => information.to_xml(name, ctx),
        }
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(element) = first_xml(Self::NAME, elements)? else {
            return Ok(None);
        };
        let shape = Shape::of_xml(element);
        // `<tools/>` is valid in every version, read it as an empty legacy list
        if shape.is_object() && shape.keys.is_empty() {
            return Ok(Some(ToolChoice::Legacy(Vec::new())));
        }
        let Some(tag) = union::accept::<Self>(&shape, ctx)? else {
            return Ok(None);
        };
        match tag {
            ToolChoiceKind::Legacy => {
                let tools = element.children_named("tool");
                Ok(Vec::<Tool>::from_xml(&tools, ctx)
                    .map_err(|e| e.within("tool"))?
                    .map(ToolChoice::Legacy))
            }
            ToolChoiceKind::Structured => {
                Ok(ToolInformation::from_xml(&[element], ctx)?.map(ToolChoice::Structured))
            }
        }
    }
}
