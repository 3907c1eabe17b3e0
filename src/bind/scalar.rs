//! # Scalar Leaves
//!
//! Primitive values written as a JSON scalar, an XML attribute, an XML text
//! body or a simple XML element.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};

use super::Shape;
use crate::CdxError;

/// Primitive leaf value
pub trait Scalar: Sized {
    /// Name used in error messages
    const KIND: &'static str;

    /// Text form (XML attribute / body)
    fn to_text(&self) -> String;

    /// Parse the text form
    fn from_text(text: &str) -> Result<Self, CdxError>;

    /// JSON form, a string unless overridden
    fn to_json_value(&self) -> Result<Value, CdxError> {
        Ok(Value::String(self.to_text()))
    }

    /// Read the JSON form
    ///
    /// Numbers and booleans are accepted through their text form.
    fn from_json_value(value: &Value) -> Result<Self, CdxError> {
        match value {
            Value::String(text) => Self::from_text(text),
            Value::Number(number) => Self::from_text(&number.to_string()),
            Value::Bool(flag) => Self::from_text(&flag.to_string()),
            other => Err(CdxError::InvalidValue(format!(
                "expected {} but found {}",
                Self::KIND,
                Shape::of_json(other)
            ))),
        }
    }
}

impl Scalar for String {
    const KIND: &'static str = "string";

    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Result<Self, CdxError> {
        Ok(text.to_string())
    }
}

impl Scalar for bool {
    const KIND: &'static str = "boolean";

    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, CdxError> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(CdxError::InvalidValue(format!("`{other}` is not a boolean"))),
        }
    }

    fn to_json_value(&self) -> Result<Value, CdxError> {
        Ok(Value::Bool(*self))
    }
}

impl Scalar for i64 {
    const KIND: &'static str = "integer";

    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, CdxError> {
        text.trim()
            .parse()
            .map_err(|_| CdxError::InvalidValue(format!("`{text}` is not an integer")))
    }

    fn to_json_value(&self) -> Result<Value, CdxError> {
        Ok(Value::Number((*self).into()))
    }
}

impl Scalar for f64 {
    const KIND: &'static str = "number";

    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, CdxError> {
        text.trim()
            .parse()
            .map_err(|_| CdxError::InvalidValue(format!("`{text}` is not a number")))
    }

    fn to_json_value(&self) -> Result<Value, CdxError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| CdxError::InvalidValue(format!("{self} cannot be written as JSON")))
    }
}

impl Scalar for DateTime<Utc> {
    const KIND: &'static str = "timestamp";

    fn to_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_text(text: &str) -> Result<Self, CdxError> {
        Ok(DateTime::parse_from_rfc3339(text.trim())?.with_timezone(&Utc))
    }
}

crate::bind::macros::scalar_bind!(String, bool, i64, f64, DateTime<Utc>);
