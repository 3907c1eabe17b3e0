//! # XML Extensions
//!
//! CycloneDX XML allows elements from other namespaces inside most entities.
//! They are kept verbatim and written back with their namespace declaration.
//! JSON has no equivalent.
use serde_json::Value;

use crate::CdxError;
use crate::bind::{Bind, Context};
use crate::bom::xmltree::XmlElement;

/// Foreign namespace element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extension(pub XmlElement);

impl Extension {
    /// Extension element `name` in `namespace`
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Extension(XmlElement::new(name).with_namespace(namespace))
    }

    /// Namespace URI of the extension
    pub fn namespace(&self) -> Option<&str> {
        self.0.namespace.as_deref()
    }
}

impl Bind for Extension {
    fn to_json(&self, _ctx: &Context) -> Result<Option<Value>, CdxError> {
        Ok(None)
    }

    fn from_json(_value: &Value, _ctx: &Context) -> Result<Option<Self>, CdxError> {
        Ok(None)
    }

    fn to_xml(&self, _name: &str, _ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        if self.0.namespace.is_none() {
            return Err(CdxError::InvalidValue(format!(
                "extension `{}` has no namespace",
                self.0.name
            )));
        }
        Ok(vec![self.0.clone()])
    }

    fn from_xml(elements: &[&XmlElement], _ctx: &Context) -> Result<Option<Self>, CdxError> {
        Ok(elements.first().map(|element| Extension((*element).clone())))
    }
}
