//! # XML Element Tree
//!
//! Owned element tree that XML documents are parsed into before entity
//! binding starts, and that the XML driver builds before writing.

use std::borrow::Cow;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::{NsReader, Writer};

use crate::CdxError;

/// Namespace prefix shared by every CycloneDX version
pub(crate) const CYCLONEDX_NAMESPACE: &str = "http://cyclonedx.org/schema/bom/";

/// XML Element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified name as written (`ext:build` or `component`)
    pub name: String,
    /// Namespace URI the element is bound to, `None` to inherit the parent's
    pub namespace: Option<String>,
    /// Attributes in document order (namespace declarations excluded)
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
    /// Text body
    pub text: Option<String>,
}

impl XmlElement {
    /// New empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Element with a text body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Element bound to a namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Namespace prefix, if the name carries one
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Bound to a namespace that is not a CycloneDX one
    pub fn is_foreign(&self) -> bool {
        self.namespace
            .as_deref()
            .is_some_and(|ns| !ns.starts_with(CYCLONEDX_NAMESPACE))
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Add an attribute
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// CycloneDX child elements with a given local name
    pub fn children_named(&self, name: &str) -> Vec<&XmlElement> {
        self.children
            .iter()
            .filter(|child| !child.is_foreign() && child.local_name() == name)
            .collect()
    }

    /// First CycloneDX child element with a given local name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|child| !child.is_foreign() && child.local_name() == name)
    }

    /// Child elements bound to foreign namespaces
    pub fn foreign_children(&self) -> Vec<&XmlElement> {
        self.children.iter().filter(|child| child.is_foreign()).collect()
    }
}

fn xml_error(error: impl std::fmt::Display) -> CdxError {
    CdxError::XmlError(error.to_string())
}

fn utf8(bytes: &[u8]) -> Result<String, CdxError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(xml_error)
}

fn open(resolved: ResolveResult, start: &BytesStart) -> Result<XmlElement, CdxError> {
    let mut element = XmlElement::new(utf8(start.name().as_ref())?);
    element.namespace = match resolved {
        ResolveResult::Bound(namespace) => Some(utf8(namespace.as_ref())?),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(CdxError::XmlError(format!(
                "unknown namespace prefix `{}`",
                String::from_utf8_lossy(&prefix)
            )));
        }
    };

    for attribute in start.attributes() {
        let attribute = attribute.map_err(xml_error)?;
        let key = utf8(attribute.key.as_ref())?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attribute.unescape_value().map_err(xml_error)?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn close(
    mut element: XmlElement,
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
) -> Result<(), CdxError> {
    // Text around child elements is indentation; leaf text is kept as written
    if !element.children.is_empty() {
        element.text = element
            .text
            .take()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
    }
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(CdxError::XmlError("multiple root elements".to_string())),
    }
    Ok(())
}

fn append_text(stack: &mut [XmlElement], text: Cow<'_, str>) {
    if let Some(current) = stack.last_mut() {
        match current.text.as_mut() {
            Some(existing) => existing.push_str(&text),
            None => current.text = Some(text.into_owned()),
        }
    }
}

/// Parse an XML document into its root element
pub fn parse(document: &str) -> Result<XmlElement, CdxError> {
    let mut reader = NsReader::from_str(document);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event().map_err(xml_error)?;
        match event {
            Event::Start(start) => {
                let element = open(resolved, &start)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open(resolved, &start)?;
                close(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| CdxError::XmlError("unbalanced end tag".to_string()))?;
                close(element, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(xml_error)?;
                append_text(&mut stack, text);
            }
            Event::CData(data) => {
                let text = utf8(&data.into_inner())?;
                append_text(&mut stack, Cow::Owned(text));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(CdxError::XmlError("unexpected end of document".to_string()));
    }
    root.ok_or_else(|| CdxError::XmlError("document has no root element".to_string()))
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &XmlElement,
    inherited: Option<&str>,
) -> Result<(), CdxError> {
    let mut start = BytesStart::new(element.name.as_str());

    if let Some(namespace) = element.namespace.as_deref() {
        if Some(namespace) != inherited {
            match element.prefix() {
                Some(prefix) => {
                    let key = format!("xmlns:{prefix}");
                    start.push_attribute((key.as_str(), namespace));
                }
                None => start.push_attribute(("xmlns", namespace)),
            }
        }
    }
    for (key, value) in element.attributes.iter() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_none() {
        writer.write_event(Event::Empty(start)).map_err(xml_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(xml_error)?;
    if let Some(text) = element.text.as_deref() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_error)?;
    }
    let scope = element.namespace.as_deref().or(inherited);
    for child in element.children.iter() {
        write_element(writer, child, scope)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_error)?;
    Ok(())
}

/// Render an element tree as an XML document
pub fn write(root: &XmlElement, pretty: bool, declaration: bool) -> Result<String, CdxError> {
    let mut writer = if pretty {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };

    if declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
    }
    write_element(&mut writer, root, None)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}
