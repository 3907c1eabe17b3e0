use anyhow::{Result, anyhow};
use cdxkit::models::{catalogue, descriptors_of};
use cdxkit::schema::{Format, SchemaVersion, descriptor::ordered, wire_shape_for};
use console::style;
use log::info;

pub fn run(entity: Option<String>) -> Result<()> {
    let Some(entity) = entity else {
        info!("----- {:^26} -----", "Entities");
        for (name, fields) in catalogue() {
            info!(" > {:<28}: {} fields", name, fields.len());
        }
        return Ok(());
    };

    let fields = descriptors_of(&entity).ok_or_else(|| anyhow!("Unknown entity: {}", entity))?;

    info!("----- {:^26} -----", entity);
    for field in ordered(fields) {
        let json = wire_shape_for(field, Format::Json)
            .map(|shape| shape.name.to_string())
            .unwrap_or_else(|| "-".to_string());
        let xml = match wire_shape_for(field, Format::Xml) {
            Some(shape) => match shape.wrapper {
                Some(wrapper) => format!("{}/{}", wrapper, shape.name),
                None => shape.name.to_string(),
            },
            None => "-".to_string(),
        };
        let since = field.introduced.unwrap_or(SchemaVersion::V1_2);
        let range = match field.removed {
            Some(until) => format!("{}..={}", since, until),
            None => format!("{}+", since),
        };

        info!(
            " {:>2} {:<28} json: {:<24} xml: {:<40} {}",
            field.ordinal,
            style(field.ident).bold(),
            json,
            xml,
            style(range).cyan()
        );
    }
    Ok(())
}
