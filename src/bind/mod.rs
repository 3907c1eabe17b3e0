//! # Binding Layer
//!
//! The contract between the object model and the serialization driver.
//!
//! - [`Bind`] converts one field value to and from both wire formats.
//! - [`Entity`] exposes an entity's descriptor table plus a getter and setter
//!   keyed by field identity.
//! - [`FieldValue`] is the object-safe face of [`Bind`] handed out by those
//!   accessors.
//!
//! Entities and enumerations are declared through the `entity!` and
//! `wire_enum!` macros, polymorphic fields implement [`Bind`] on top of
//! [`union`].

use serde_json::Value;

use crate::CdxError;
use crate::bom::xmltree::XmlElement;
use crate::schema::FieldDescriptor;

pub mod context;
pub(crate) mod macros;
pub mod scalar;
pub mod union;

pub use context::{Context, VersionMismatchWarning};
pub use scalar::Scalar;
pub use union::{Shape, ShapeKind, Union, Variant};

/// Conversion of a field value to and from JSON and XML
///
/// Readers return `Ok(None)` when the value is dropped from the model
/// (unknown enumerated value or a variant outside the target version under
/// the lenient policies).
pub trait Bind: Sized {
    /// JSON value, `None` when nothing is written
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError>;

    /// Read from a JSON value
    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError>;

    /// XML elements named `name`, empty when nothing is written
    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError>;

    /// Read from the XML elements carrying this field
    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError>;

    /// Attribute or text body form
    fn to_xml_text(&self, _ctx: &Context) -> Result<Option<String>, CdxError> {
        Err(CdxError::Metadata(format!(
            "{} cannot be written as XML text",
            std::any::type_name::<Self>()
        )))
    }

    /// Read from an attribute or text body
    fn from_xml_text(_text: &str, _ctx: &Context) -> Result<Option<Self>, CdxError> {
        Err(CdxError::Metadata(format!(
            "{} cannot be read from XML text",
            std::any::type_name::<Self>()
        )))
    }
}

/// Object-safe access to a field value
pub trait FieldValue {
    /// Getter: JSON form
    fn emit_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError>;
    /// Getter: XML element form
    fn emit_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError>;
    /// Getter: XML attribute or text form
    fn emit_xml_text(&self, ctx: &Context) -> Result<Option<String>, CdxError>;
    /// Setter: JSON form
    fn absorb_json(&mut self, value: &Value, ctx: &Context) -> Result<(), CdxError>;
    /// Setter: XML element form
    fn absorb_xml(&mut self, elements: &[&XmlElement], ctx: &Context) -> Result<(), CdxError>;
    /// Setter: XML attribute or text form
    fn absorb_xml_text(&mut self, text: &str, ctx: &Context) -> Result<(), CdxError>;
}

impl<T: Bind> FieldValue for T {
    fn emit_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        self.to_json(ctx)
    }

    fn emit_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        self.to_xml(name, ctx)
    }

    fn emit_xml_text(&self, ctx: &Context) -> Result<Option<String>, CdxError> {
        self.to_xml_text(ctx)
    }

    fn absorb_json(&mut self, value: &Value, ctx: &Context) -> Result<(), CdxError> {
        if let Some(value) = T::from_json(value, ctx)? {
            *self = value;
        }
        Ok(())
    }

    fn absorb_xml(&mut self, elements: &[&XmlElement], ctx: &Context) -> Result<(), CdxError> {
        if let Some(value) = T::from_xml(elements, ctx)? {
            *self = value;
        }
        Ok(())
    }

    fn absorb_xml_text(&mut self, text: &str, ctx: &Context) -> Result<(), CdxError> {
        if let Some(value) = T::from_xml_text(text, ctx)? {
            *self = value;
        }
        Ok(())
    }
}

/// A node of the BOM tree
pub trait Entity: Default {
    /// Type name used in diagnostics
    const NAME: &'static str;

    /// Descriptor table, one entry per field
    fn descriptors() -> &'static [FieldDescriptor];

    /// Getter keyed by field identity
    fn field(&self, ident: &str) -> Option<&dyn FieldValue>;

    /// Setter keyed by field identity
    fn field_mut(&mut self, ident: &str) -> Option<&mut dyn FieldValue>;
}

impl<T: Bind> Bind for Option<T> {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        match self {
            Some(value) => value.to_json(ctx),
            None => Ok(None),
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        if value.is_null() {
            return Ok(Some(None));
        }
        Ok(Some(ctx.tolerate(T::from_json(value, ctx))?.flatten()))
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        match self {
            Some(value) => value.to_xml(name, ctx),
            None => Ok(Vec::new()),
        }
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        if elements.is_empty() {
            return Ok(Some(None));
        }
        Ok(Some(ctx.tolerate(T::from_xml(elements, ctx))?.flatten()))
    }

    fn to_xml_text(&self, ctx: &Context) -> Result<Option<String>, CdxError> {
        match self {
            Some(value) => value.to_xml_text(ctx),
            None => Ok(None),
        }
    }

    fn from_xml_text(text: &str, ctx: &Context) -> Result<Option<Self>, CdxError> {
        Ok(Some(ctx.tolerate(T::from_xml_text(text, ctx))?.flatten()))
    }
}

impl<T: Bind> Bind for Vec<T> {
    fn to_json(&self, ctx: &Context) -> Result<Option<Value>, CdxError> {
        let mut items = Vec::with_capacity(self.len());
        for (index, item) in self.iter().enumerate() {
            if let Some(value) = item
                .to_json(ctx)
                .map_err(|e| e.within(&format!("[{index}]")))?
            {
                items.push(value);
            }
        }
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Value::Array(items)))
        }
    }

    fn from_json(value: &Value, ctx: &Context) -> Result<Option<Self>, CdxError> {
        let array = value.as_array().ok_or_else(|| {
            CdxError::parse(format!("expected an array, found {}", Shape::of_json(value)))
        })?;

        let mut items = Vec::with_capacity(array.len());
        for (index, item) in array.iter().enumerate() {
            let item = ctx
                .tolerate(T::from_json(item, ctx))
                .map_err(|e| e.within(&format!("[{index}]")))?;
            if let Some(item) = item.flatten() {
                items.push(item);
            }
        }
        Ok(Some(items))
    }

    fn to_xml(&self, name: &str, ctx: &Context) -> Result<Vec<XmlElement>, CdxError> {
        let mut elements = Vec::with_capacity(self.len());
        for (index, item) in self.iter().enumerate() {
            elements.extend(
                item.to_xml(name, ctx)
                    .map_err(|e| e.within(&format!("[{index}]")))?,
            );
        }
        Ok(elements)
    }

    fn from_xml(elements: &[&XmlElement], ctx: &Context) -> Result<Option<Self>, CdxError> {
        let mut items = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let item = ctx
                .tolerate(T::from_xml(&[*element], ctx))
                .map_err(|e| e.within(&format!("[{index}]")))?;
            if let Some(item) = item.flatten() {
                items.push(item);
            }
        }
        Ok(Some(items))
    }
}
