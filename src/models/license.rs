//! # Licenses
//!
//! A `licenses` field holds either a list of licenses or a single SPDX
//! license expression:
//!
//! ```json
//! "licenses": [{"license": {"id": "MIT"}}, {"license": {"name": "Custom"}}]
//! "licenses": [{"expression": "MIT OR Apache-2.0"}]
//! ```
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde_json::{Map, Value};

use super::Property;
use crate::CdxError;
use crate::bind::macros::entity;
use crate::bind::union::{self, first_xml};
use crate::bind::{Bind, Context, Shape, Union, Variant};
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// Text attachment, optionally base64 encoded
    pub struct AttachedText {
        /// MIME type of the content
        content_type: Option<String> => 0, Field::new("contentType").xml_name("content-type").attribute(),
        /// `base64` when the content is encoded
        encoding: Option<String> => 1, Field::new("encoding").attribute(),
        /// Content
        content: Option<String> => 2, Field::new("content").text(),
    }
}

impl AttachedText {
    /// Plain text attachment
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: Some("text/plain".to_string()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Base64 encoded attachment
    pub fn encode(content_type: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            encoding: Some("base64".to_string()),
            content: Some(STANDARD.encode(data)),
        }
    }

    /// Decoded bytes of the content
    pub fn decode(&self) -> Result<Vec<u8>, CdxError> {
        let content = self.content.as_deref().unwrap_or_default();
        match self.encoding.as_deref() {
            Some("base64") => {
                // Encoded attachments are commonly wrapped across lines
                let compact: String = content.split_whitespace().collect();
                Ok(STANDARD.decode(compact)?)
            }
            Some(other) => Err(CdxError::InvalidValue(format!(
                "unsupported attachment encoding `{other}`"
            ))),
            None => Ok(content.as_bytes().to_vec()),
        }
    }
}

entity! {
    /// License by SPDX identifier or by name
    pub struct License {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute().since(V::V1_5),
        /// `declared` or `concluded`
        acknowledgement: Option<String> => 1, Field::new("acknowledgement").attribute().since(V::V1_6),
        /// SPDX license identifier
        id: Option<String> => 2, Field::new("id"),
        /// License name when there is no SPDX identifier
        name: Option<String> => 3, Field::new("name"),
        /// License text
        text: Option<AttachedText> => 4, Field::new("text"),
        /// License URL
        url: Option<String> => 5, Field::new("url"),
        /// Properties
        properties: Vec<Property> => 6, Field::new("properties").wrapped("properties", "property").since(V::V1_5),
    }
}

impl License {
    /// License by SPDX identifier
    pub fn spdx(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// License by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

entity! {
    /// SPDX license expression
    pub struct LicenseExpression {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute().since(V::V1_5),
        /// `declared` or `concluded`
        acknowledgement: Option<String> => 1, Field::new("acknowledgement").attribute().since(V::V1_6),
        /// Expression (`MIT OR Apache-2.0`)
        expression: Option<String> => 2, Field::new("expression").text(),
    }
}

/// Licenses of a component, service or BOM
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseChoice {
    /// A single SPDX expression
    Expression(LicenseExpression),
    /// Individual licenses
    Licenses(Vec<License>),
}

impl LicenseChoice {
    /// Choice holding an expression
    pub fn expression(expression: impl Into<String>) -> Self {
        LicenseChoice::Expression(LicenseExpression {
            expression: Some(expression.into()),
            ..Default::default()
        })
    }
}

/// Variant of [`LicenseChoice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseChoiceKind {
    /// [`LicenseChoice::Expression`]
    Expression,
    /// [`LicenseChoice::Licenses`]
    Licenses,
}

impl Union for LicenseChoice {
    type Tag = LicenseChoiceKind;
    const NAME: &'static str = "LicenseChoice";

    fn variants() -> &'static [Variant<LicenseChoiceKind>] {
        const VARIANTS: &[Variant<LicenseChoiceKind>] = &[
            Variant {
                name: "expression",
                since: None,
                accepts: |shape| shape.has("expression"),
                tag: LicenseChoiceKind::Expression,
            },
            Variant {
                name: "licenses",
                since: None,
                accepts: |shape| shape.is_sequence() || shape.is_object(),
                tag: LicenseChoiceKind::Licenses,
            },
        ];
        VARIANTS
    }

    fn tag(&self) -> LicenseChoiceKind {
        match self {
            LicenseChoice::Expression(_) => LicenseChoiceKind::Expression,
            LicenseChoice::Licenses(_) => LicenseChoiceKind::Licenses,
        }
    }
}

fn expression_from_json(value: &Value, ctx: &Context) -> Result<Option<LicenseExpression>, CdxError> {
    match value {
        Value::Array(items) => {
            let Some((index, item)) = items
                .iter()
                .enumerate()
                .find(|(_, item)| item.get("expression").is_some())
            else {
                return Ok(None);
            };
            if items.len() > 1 {
                debug!("License expression given with {} entries, reading one", items.len());
            }
            LicenseExpression::from_json(item, ctx).map_err(|e| e.within(&format!("[{index}]")))
        }
        other => LicenseExpression::from_json(other, ctx),
    }
}

fn licenses_from_json(value: &Value, ctx: &Context) -> Result<Vec<License>, CdxError> {
    let items = match value {
        Value::Array(items) => items.iter().collect::<Vec<&Value>>(),
        other => vec![other],
    };

    let mut licenses = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Some(inner) = item.get("license") else {
            debug!("Skipping licenses[{}] without a `license` key", index);
            continue;
        };
        let license = License::from_json(inner, ctx)
            .map_err(|e| e.within("license").within(&format!("[{index}]")))?;
        licenses.extend(license);
    }
    Ok(licenses)
}

impl Bind for LicenseChoice {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        match self {
            LicenseChoice::Expression(expression) => Ok(expression
                .to_json(ctx)?
                .map(|value| Value::Array(vec![value]))),
            LicenseChoice::Licenses(licenses) => {
                let mut items = Vec::with_capacity(licenses.len());
                for (index, license) in licenses.iter().enumerate() {
                    let within = |e: CdxError| e.within("license").within(&format!("[{index}]"));
                    if let Some(value) = license.to_json(ctx).map_err(within)? {
                        let mut item = Map::new();
                        item.insert("license".to_string(), value);
                        items.push(Value::Object(item));
                    }
                }
                Ok((!items.is_empty()).then_some(Value::Array(items)))
            }
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(tag) = union::accept::<Self>(&Shape::of_json(value), ctx)? else {
            return Ok(None);
        };
        match tag {
            LicenseChoiceKind::Expression => {
                Ok(expression_from_json(value, ctx)?.map(LicenseChoice::Expression))
            }
            LicenseChoiceKind::Licenses => {
                Ok(Some(LicenseChoice::Licenses(licenses_from_json(value, ctx)?)))
            }
        }
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        let mut element = XmlElement::new(name);
        match self {
            LicenseChoice::Expression(expression) => {
                element.children = expression.to_xml("expression", ctx)?;
            }
            LicenseChoice::Licenses(licenses) if licenses.is_empty() => return Ok(Vec::new()),
            LicenseChoice::Licenses(licenses) => {
                element.children = licenses.to_xml("license", ctx)?;
            }
        }
        Ok(vec![element])
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let Some(element) = first_xml(Self::NAME, elements)? else {
            return Ok(None);
        };
        let Some(tag) = union::accept::<Self>(&Shape::of_xml(element), ctx)? else {
            return Ok(None);
        };
        match tag {
            LicenseChoiceKind::Expression => {
                let expressions = element.children_named("expression");
                Ok(LicenseExpression::from_xml(&expressions, ctx)?.map(LicenseChoice::Expression))
            }
            LicenseChoiceKind::Licenses => {
                let licenses = element.children_named("license");
                Ok(Vec::<License>::from_xml(&licenses, ctx)
                    .map_err(|e| e.within("license"))?
                    .map(LicenseChoice::Licenses))
            }
        }
    }
}
