//! # Polymorphic Fields
//!
//! A polymorphic field holds one of a closed set of variants. On input the
//! variant is chosen from the structural [`Shape`] of the node: each union
//! declares an ordered table of [`Variant`] matchers and the first one that
//! accepts the shape wins. On output the held variant is written as-is.
//!
//! The order of the table is part of each union's contract, since one shape
//! can satisfy several matchers (an empty object satisfies most of them).

use std::collections::BTreeSet;
use std::fmt::Display;

use serde_json::Value;

use super::Context;
use crate::CdxError;
use crate::bom::xmltree::XmlElement;
use crate::schema::SchemaVersion;

/// Kind of node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// JSON object or XML element with children / attributes
    Object,
    /// JSON array
    Sequence,
    /// JSON string, number or boolean, or an XML element holding only text
    Scalar,
    /// JSON null
    Null,
}

/// Structural summary of an input node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Kind of node
    pub kind: ShapeKind,
    /// Keys of an object, keys of the objects inside a sequence, or the
    /// attribute and child element names of an XML element
    pub keys: BTreeSet<String>,
}

impl Shape {
    /// Shape of a JSON node
    pub fn of_json(value: &Value) -> Self {
        match value {
            Value::Object(object) => Self {
                kind: ShapeKind::Object,
                keys: object.keys().cloned().collect(),
            },
            Value::Array(items) => Self {
                kind: ShapeKind::Sequence,
                keys: items
                    .iter()
                    .filter_map(Value::as_object)
                    .flat_map(|object| object.keys().cloned())
                    .collect(),
            },
            Value::Null => Self {
                kind: ShapeKind::Null,
                keys: BTreeSet::new(),
            },
            _ => Self {
                kind: ShapeKind::Scalar,
                keys: BTreeSet::new(),
            },
        }
    }

    /// Shape of an XML element
    pub fn of_xml(element: &XmlElement) -> Self {
        let keys: BTreeSet<String> = element
            .attributes
            .iter()
            .map(|(key, _)| key.clone())
            .chain(element.children.iter().map(|child| child.local_name().to_string()))
            .collect();

        let text = element.text.as_deref().is_some_and(|text| !text.trim().is_empty());
        let kind = if keys.is_empty() && text {
            ShapeKind::Scalar
        } else {
            ShapeKind::Object
        };
        Self { kind, keys }
    }

    /// Does the node carry a key
    pub fn has(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Object node
    pub fn is_object(&self) -> bool {
        self.kind == ShapeKind::Object
    }

    /// Sequence node
    pub fn is_sequence(&self) -> bool {
        self.kind == ShapeKind::Sequence
    }

    /// Scalar node
    pub fn is_scalar(&self) -> bool {
        self.kind == ShapeKind::Scalar
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = self.keys.iter().cloned().collect::<Vec<String>>().join(", ");
        match self.kind {
            ShapeKind::Object => write!(f, "object {{{keys}}}"),
            ShapeKind::Sequence if keys.is_empty() => write!(f, "sequence"),
            ShapeKind::Sequence => write!(f, "sequence of {{{keys}}}"),
            ShapeKind::Scalar => write!(f, "scalar"),
            ShapeKind::Null => write!(f, "null"),
        }
    }
}

/// One variant of a union and the shapes it accepts
#[derive(Debug)]
pub struct Variant<T: 'static> {
    /// Variant name used in diagnostics
    pub name: &'static str,
    /// First version defining the variant
    pub since: Option<SchemaVersion>,
    /// Shape predicate
    pub accepts: fn(&Shape) -> bool,
    /// Tag identifying the variant
    pub tag: T,
}

/// A closed union of variant shapes
pub trait Union {
    /// Variant tag
    type Tag: Copy + PartialEq + 'static;

    /// Union name used in diagnostics
    const NAME: &'static str;

    /// Matchers in priority order
    fn variants() -> &'static [Variant<Self::Tag>];

    /// Tag of the held variant
    fn tag(&self) -> Self::Tag;

    /// Pure classification of an input shape
    fn classify(shape: &Shape) -> Result<Self::Tag, CdxError> {
        resolve(Self::NAME, shape, Self::variants()).map(|variant| variant.tag)
    }
}

/// First variant accepting the shape
pub fn resolve<'v, T>(
    union: &'static str,
    shape: &Shape,
    variants: &'v [Variant<T>],
) -> Result<&'v Variant<T>, CdxError> {
    variants
        .iter()
        .find(|variant| (variant.accepts)(shape))
        .ok_or_else(|| CdxError::UnresolvedUnion {
            union,
            shape: shape.to_string(),
        })
}

/// Resolve an input node and apply the version policy to the chosen variant
///
/// `Ok(None)` means the variant does not exist in the target version and was
/// dropped.
pub fn accept<U: Union>(shape: &Shape, ctx: &Context) -> Result<Option<U::Tag>, CdxError> {
    let variant = resolve(U::NAME, shape, U::variants())?;
    if ctx.in_version(variant.since, None) {
        Ok(Some(variant.tag))
    } else {
        ctx.out_of_version(U::NAME, variant.name)?;
        Ok(None)
    }
}

/// Is the held variant part of the target version
pub fn emits<U: Union>(value: &U, ctx: &Context) -> bool {
    let tag = value.tag();
    let since = U::variants()
        .iter()
        .find(|variant| variant.tag == tag)
        .and_then(|variant| variant.since);
    let visible = ctx.in_version(since, None);
    if !visible {
        log::debug!(
            "Omitting {} variant not defined in CycloneDX {}",
            U::NAME,
            ctx.version()
        );
    }
    visible
}

/// Shape of the XML elements carrying a union field
pub(crate) fn first_xml<'e>(
    union: &'static str,
    elements: &[&'e XmlElement],
) -> Result<Option<&'e XmlElement>, CdxError> {
    match elements {
        [] => Ok(None),
        [element] => Ok(Some(*element)),
        [element, ..] => {
            log::debug!("{} given {} elements, reading the first", union, elements.len());
            Ok(Some(*element))
        }
    }
}
