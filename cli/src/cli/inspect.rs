use std::path::PathBuf;

use anyhow::{Result, anyhow};
use cdxkit::models::{Bom, ToolChoice};
use cdxkit::{Converter, ConverterConfig, detect};
use log::info;

pub fn run(config: ConverterConfig, input: PathBuf) -> Result<()> {
    if !input.is_file() {
        return Err(anyhow!(
            "Input file does not exist or is not a file: {}",
            input.display()
        ));
    }
    let document = std::fs::read_to_string(&input)?;
    let (format, version) = detect(&document)?;

    let (bom, warnings) =
        Converter::new(config).deserialize_with_warnings(&document, version, format)?;

    info!("----- {:^26} -----", "Document");
    info!(" > {:<24}: {}", "Format", format);
    info!(" > {:<24}: {}", "Spec Version", version);
    if let Some(serial) = &bom.serial_number {
        info!(" > {:<24}: {}", "Serial Number", serial);
    }
    if let Some(bom_version) = bom.version {
        info!(" > {:<24}: {}", "Version", bom_version);
    }
    if let Some(timestamp) = bom.metadata.as_ref().and_then(|m| m.timestamp) {
        info!(" > {:<24}: {}", "Timestamp", timestamp.to_rfc3339());
    }
    if let Some(tools) = tool_names(&bom) {
        info!(" > {:<24}: {}", "Tools", tools);
    }

    print_stats(
        "Contents",
        vec![
            ("Components", bom.all_components().len()),
            ("Services", bom.services.len()),
            ("Dependencies", bom.dependencies.len()),
            ("Vulnerabilities", bom.vulnerabilities.len()),
            ("External References", bom.external_references.len()),
            ("Formulas", bom.formulation.len()),
            ("Extensions", bom.extensions.len()),
        ],
    );

    if !warnings.is_empty() {
        info!("----- {:^26} -----", "Out of Version Fields");
        for warning in warnings.iter() {
            info!(" > {}", warning);
        }
    }
    Ok(())
}

fn tool_names(bom: &Bom) -> Option<String> {
    let names: Vec<String> = match bom.metadata.as_ref()?.tools.as_ref()? {
        ToolChoice::Legacy(tools) => tools.iter().filter_map(|t| t.name.clone()).collect(),
        ToolChoice::Structured(tools) => tools
            .components
            .iter()
            .filter_map(|c| c.name.clone())
            .chain(tools.services.iter().filter_map(|s| s.name.clone()))
            .collect(),
    };
    (!names.is_empty()).then(|| names.join(", "))
}

fn print_stats(title: &str, stats: Vec<(&str, usize)>) {
    info!("----- {:^26} -----", title);
    for (name, value) in stats.iter() {
        info!(" > {:<24}: {}", name, value);
    }
}
