//! # JSON Driver
//!
//! Walks an entity's descriptors in ordinal order, writing each present field
//! under its JSON key, and binds JSON objects back onto entities.

use log::trace;
use serde_json::{Map, Value};

use crate::CdxError;
use crate::bind::{Context, Entity, Shape};
use crate::models::Bom;
use crate::schema::descriptor::ordered;
use crate::schema::{Format, is_visible, wire_shape_for};

/// Value of the JSON `bomFormat` key
pub const BOM_FORMAT: &str = "CycloneDX";

fn missing_accessor<E: Entity>(ident: &str) -> CdxError {
    CdxError::Metadata(format!("{} has no accessor for `{}`", E::NAME, ident))
}

/// Write an entity as a JSON object
pub fn entity_to_json<E: Entity>(entity: &E, ctx: &Context) -> Result<Map<String, Value>, CdxError> {
    let mut object = Map::new();

    for field in ordered(E::descriptors()) {
        let Some(shape) = ctx.shape(field) else {
            trace!("Skipping {}.{} for {}", E::NAME, field.ident, ctx.version());
            continue;
        };
        let value = entity
            .field(field.ident)
            .ok_or_else(|| missing_accessor::<E>(field.ident))?;

        if let Some(json) = value.emit_json(ctx).map_err(|e| e.within(shape.name))? {
            object.insert(shape.name.to_string(), json);
        }
    }
    Ok(object)
}

/// Bind a JSON object onto a new entity
///
/// Keys that no descriptor claims are ignored. Keys of fields outside the
/// JSON channel are ignored. Keys of fields outside the target version go
/// through the version policy.
pub fn entity_from_json<E: Entity>(value: &Value, ctx: &Context) -> Result<E, CdxError> {
    let object = value.as_object().ok_or_else(|| {
        CdxError::parse(format!(
            "expected an object for {}, found {}",
            E::NAME,
            Shape::of_json(value)
        ))
    })?;

    let mut entity = E::default();
    for field in ordered(E::descriptors()) {
        let Some(shape) = wire_shape_for(field, Format::Json) else {
            continue;
        };
        let Some(raw) = object.get(shape.name) else {
            continue;
        };
        if !is_visible(field, ctx.version()) {
            ctx.out_of_version(E::NAME, field.ident)
                .map_err(|e| e.within(shape.name))?;
            continue;
        }

        entity
            .field_mut(field.ident)
            .ok_or_else(|| missing_accessor::<E>(field.ident))?
            .absorb_json(raw, ctx)
            .map_err(|e| e.within(shape.name))?;
    }
    Ok(entity)
}

/// Render a BOM as a JSON document
pub fn to_document(bom: &Bom, ctx: &Context, pretty: bool) -> Result<String, CdxError> {
    let version = ctx.version();

    let mut document = Map::new();
    document.insert("$schema".to_string(), Value::String(version.json_schema()));
    document.insert("bomFormat".to_string(), Value::String(BOM_FORMAT.to_string()));
    document.insert("specVersion".to_string(), Value::String(version.to_string()));
    document.extend(entity_to_json(bom, ctx)?);

    let document = Value::Object(document);
    Ok(if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    })
}

/// Bind a JSON document onto a BOM
pub fn from_document(document: &str, ctx: &Context) -> Result<Bom, CdxError> {
    let value: Value = serde_json::from_str(document)?;

    match value.get("bomFormat").and_then(Value::as_str) {
        Some(BOM_FORMAT) | None => {}
        Some(other) => {
            return Err(CdxError::parse(format!("unsupported bomFormat `{other}`")).within("bomFormat"));
        }
    }
    if let Some(declared) = value.get("specVersion").and_then(Value::as_str) {
        if declared != ctx.version().as_str() {
            log::warn!(
                "Document declares CycloneDX {}, reading it as {}",
                declared,
                ctx.version()
            );
        }
    }

    entity_from_json(&value, ctx)
}
