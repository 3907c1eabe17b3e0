//! # XML Driver
//!
//! Same traversal as the JSON driver, with each field placed according to its
//! XML node kind: attribute, text body, (wrapped) child elements, or foreign
//! namespace extensions. Child element order follows the field ordinals,
//! which the CycloneDX XSDs require.

use log::trace;

use super::xmltree::{self, XmlElement};
use crate::CdxError;
use crate::bind::{Context, Entity};
use crate::models::Bom;
use crate::schema::descriptor::ordered;
use crate::schema::{Format, WireShape, XmlNode, is_visible, wire_shape_for};

/// Name of the document root element
pub const ROOT_ELEMENT: &str = "bom";

fn missing_accessor<E: Entity>(ident: &str) -> CdxError {
    CdxError::Metadata(format!("{} has no accessor for `{}`", E::NAME, ident))
}

fn path_segment(shape: &WireShape) -> &'static str {
    shape.wrapper.unwrap_or(shape.name)
}

/// Write an entity as an XML element named `name`
pub fn entity_to_xml<E: Entity>(entity: &E, name: &str, ctx: &Context) -> Result<XmlElement, CdxError> {
    let mut element = XmlElement::new(name);

    for field in ordered(E::descriptors()) {
        let Some(shape) = ctx.shape(field) else {
            trace!("Skipping {}.{} for {}", E::NAME, field.ident, ctx.version());
            continue;
        };
        let value = entity
            .field(field.ident)
            .ok_or_else(|| missing_accessor::<E>(field.ident))?;
        let within = |e: CdxError| e.within(path_segment(&shape));

        match shape.node {
            XmlNode::Attribute => {
                if let Some(text) = value.emit_xml_text(ctx).map_err(within)? {
                    element.push_attribute(shape.name, text);
                }
            }
            XmlNode::Text => {
                if let Some(text) = value.emit_xml_text(ctx).map_err(within)? {
                    element.text = Some(text);
                }
            }
            XmlNode::Element | XmlNode::Foreign => {
                let items = value.emit_xml(shape.name, ctx).map_err(within)?;
                match shape.wrapper {
                    Some(_) if items.is_empty() => {}
                    Some(wrapper) => {
                        let mut group = XmlElement::new(wrapper);
                        group.children = items;
                        element.children.push(group);
                    }
                    None => element.children.extend(items),
                }
            }
        }
    }
    Ok(element)
}

/// The input nodes a field is read from
enum Source<'e> {
    Text(&'e str),
    Elements(Vec<&'e XmlElement>),
}

fn source<'e>(element: &'e XmlElement, shape: &WireShape) -> Option<Source<'e>> {
    match shape.node {
        XmlNode::Attribute => element.attribute(shape.name).map(Source::Text),
        XmlNode::Text => element.text.as_deref().map(Source::Text),
        XmlNode::Foreign => {
            let foreign = element.foreign_children();
            (!foreign.is_empty()).then_some(Source::Elements(foreign))
        }
        XmlNode::Element => match shape.wrapper {
            // A present but empty wrapper still sets the field
            Some(wrapper) => element
                .child(wrapper)
                .map(|group| Source::Elements(group.children_named(shape.name))),
            None => {
                let children = element.children_named(shape.name);
                (!children.is_empty()).then_some(Source::Elements(children))
            }
        },
    }
}

/// Bind an XML element onto a new entity
pub fn entity_from_xml<E: Entity>(element: &XmlElement, ctx: &Context) -> Result<E, CdxError> {
    let mut entity = E::default();

    for field in ordered(E::descriptors()) {
        let Some(shape) = wire_shape_for(field, Format::Xml) else {
            continue;
        };
        let Some(input) = source(element, &shape) else {
            continue;
        };
        let within = |e: CdxError| e.within(path_segment(&shape));

        if !is_visible(field, ctx.version()) {
            ctx.out_of_version(E::NAME, field.ident).map_err(within)?;
            continue;
        }

        let value = entity
            .field_mut(field.ident)
            .ok_or_else(|| missing_accessor::<E>(field.ident))?;
        match input {
            Source::Text(text) => value.absorb_xml_text(text, ctx).map_err(within)?,
            Source::Elements(elements) => value.absorb_xml(&elements, ctx).map_err(within)?,
        }
    }
    Ok(entity)
}

/// Render a BOM as an XML document
pub fn to_document(
    bom: &Bom,
    ctx: &Context,
    pretty: bool,
    declaration: bool,
) -> Result<String, CdxError> {
    let root = entity_to_xml(bom, ROOT_ELEMENT, ctx)?.with_namespace(ctx.version().xml_namespace());
    xmltree::write(&root, pretty, declaration)
}

/// Bind an XML document onto a BOM
pub fn from_document(document: &str, ctx: &Context) -> Result<Bom, CdxError> {
    let root = xmltree::parse(document)?;

    if root.local_name() != ROOT_ELEMENT || root.is_foreign() {
        return Err(CdxError::parse(format!(
            "expected a `{}` root element, found `{}`",
            ROOT_ELEMENT, root.name
        )));
    }
    if let Some(namespace) = root.namespace.as_deref() {
        let expected = ctx.version().xml_namespace();
        if namespace != expected {
            log::warn!(
                "Document namespace is {}, reading it as CycloneDX {}",
                namespace,
                ctx.version()
            );
        }
    }

    entity_from_xml(&root, ctx)
}
