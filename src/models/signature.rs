//! # Enveloped Signatures
//!
//! JSON Signature Format payloads are carried untouched. XML documents sign
//! with XML Signature instead, so these fields never appear in XML.
use serde_json::Value;

use crate::CdxError;
use crate::bind::{Bind, Context, Shape};
use crate::bom::xmltree::XmlElement;

/// Opaque signature payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature(pub Value);

impl Signature {
    /// Algorithm named in the payload, if any
    pub fn algorithm(&self) -> Option<&str> {
        self.0.get("algorithm").and_then(Value::as_str)
    }
}

impl Bind for Signature {
    fn to_json(&self, _ctx: &Context) -> Result<Option<Value>, CdxError> {
        Ok(Some(self.0.clone()))
    }

    fn from_json(value: &Value, _ctx: &Context) -> Result<Option<Self>, CdxError> {
        match value {
            Value::Object(_) | Value::Array(_) => Ok(Some(Signature(value.clone()))),
            other => Err(CdxError::parse(format!(
                "expected a signature object, found {}",
                Shape::of_json(other)
            ))),
        }
    }

    fn to_xml(&self, _name: &str, _ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        Ok(Vec::new())
    }

    fn from_xml(_elements: &[&XmlElement], _ctx: &Context) -> Result<Option<Self>, CdxError> {
        Ok(None)
    }
}
