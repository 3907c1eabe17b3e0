//! # Dependency Graph
//!
//! Edges reference entities by their `bom-ref`, which keeps the model a tree.
use serde_json::Value;

use crate::CdxError;
use crate::bind::macros::entity;
use crate::bind::{Bind, Context, Scalar};
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

/// Reference to another entity by `bom-ref`
///
/// A plain string in JSON, an element carrying a `ref` attribute in XML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RefLink(pub String);

impl RefLink {
    /// Referenced `bom-ref`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RefLink {
    fn from(value: &str) -> Self {
        RefLink(value.to_string())
    }
}

impl Bind for RefLink {
    fn to_json(&self, _ctx: &Context) -> Result<Option<Value>, CdxError> {
        Ok(Some(Value::String(self.0.clone())))
    }

    fn from_json(value: &Value, _ctx: &Context) -> Result<Option<Self>, CdxError> {
        String::from_json_value(value).map(|text| Some(RefLink(text)))
    }

    fn to_xml(&self, name: &str, _ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        let mut element = XmlElement::new(name);
        element.push_attribute("ref", self.0.as_str());
        Ok(vec![element])
    }

    fn from_xml(elements: &[&XmlElement], _ctx: &Context) -> Result<Option<Self>, CdxError> {
        match elements.first() {
            Some(element) => element
                .attribute("ref")
                .map(|reference| Some(RefLink(reference.to_string())))
                .ok_or_else(|| CdxError::parse("missing `ref` attribute")),
            None => Ok(None),
        }
    }
}

entity! {
    /// Direct dependencies of one entity
    pub struct Dependency {
        /// `bom-ref` of the dependent entity
        reference: Option<String> => 0, Field::new("ref").attribute(),
        /// Entities it depends on
        depends_on: Vec<RefLink> => 1, Field::new("dependsOn").xml_name("dependency"),
        /// Entities whose specification it implements
        provides: Vec<RefLink> => 2, Field::new("provides").since(V::V1_6),
    }
}

impl Dependency {
    /// Dependency node for `reference`
    pub fn new(reference: impl Into<String>, depends_on: &[&str]) -> Self {
        Self {
            reference: Some(reference.into()),
            depends_on: depends_on.iter().map(|r| RefLink::from(*r)).collect(),
            provides: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::xmltree;
    use crate::schema::{Format, SchemaVersion};
    use crate::utils::config::ConverterConfig;
    use serde_json::json;

    fn ctx(version: SchemaVersion, format: Format) -> Context {
        Context::new(version, format, &ConverterConfig::default())
    }

    #[test]
    fn test_json() {
        let ctx = ctx(SchemaVersion::V1_5, Format::Json);
        let dependency = Dependency::new("app", &["libfoo", "libbar"]);
        let value = dependency.to_json(&ctx).unwrap().unwrap();
        assert_eq!(value, json!({"ref": "app", "dependsOn": ["libfoo", "libbar"]}));
        assert_eq!(Dependency::from_json(&value, &ctx).unwrap(), Some(dependency));
    }

    #[test]
    fn test_xml() {
        let ctx = ctx(SchemaVersion::V1_6, Format::Xml);
        let mut dependency = Dependency::new("app", &["libfoo"]);
        dependency.provides.push(RefLink::from("crypto-spec"));

        let element = dependency.to_xml("dependency", &ctx).unwrap().remove(0);
        let xml = xmltree::write(&element, false, false).unwrap();
        assert_eq!(
            xml,
            r#"<dependency ref="app"><dependency ref="libfoo"/><provides ref="crypto-spec"/></dependency>"#
        );

        let parsed = xmltree::parse(&xml).unwrap();
        assert_eq!(Dependency::from_xml(&[&parsed], &ctx).unwrap(), Some(dependency));
    }

    #[test]
    fn test_missing_ref() {
        let ctx = ctx(SchemaVersion::V1_6, Format::Xml);
        let element = xmltree::parse(r#"<dependency ref="a"><dependency/></dependency>"#).unwrap();
        let error = Dependency::from_xml(&[&element], &ctx).unwrap_err();
        assert_eq!(error.path(), Some("dependency[0]"));
    }
}
