use std::path::PathBuf;

use anyhow::{Result, anyhow};
use cdxkit::{Converter, ConverterConfig, Format, SchemaVersion, detect};
use console::style;
use log::{debug, info, warn};

pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub to_version: Option<SchemaVersion>,
    pub to_format: Option<Format>,
}

pub fn run(config: ConverterConfig, options: ConvertOptions) -> Result<()> {
    if !options.input.is_file() {
        return Err(anyhow!(
            "Input file does not exist or is not a file: {}",
            options.input.display()
        ));
    }
    let document = std::fs::read_to_string(&options.input)?;
    let (format, version) = detect(&document)?;
    info!("Input  : CycloneDX {} ({})", version, format);

    let target_version = options.to_version.unwrap_or(config.default_version);
    let target_format = options.to_format.unwrap_or(format);

    let converter = Converter::new(config);
    let (bom, warnings) = converter.deserialize_with_warnings(&document, version, format)?;
    for warning in warnings.iter() {
        warn!("Dropped {}", warning);
    }

    if target_version < version {
        warn!(
            "Downgrading from {} to {}, fields introduced after {} are not written",
            version, target_version, target_version
        );
    }

    let output = converter.serialize(&bom, target_version, target_format)?;
    info!("Output : CycloneDX {} ({})", target_version, target_format);

    match options.output {
        Some(path) => {
            debug!("Writing output to: {}", path.display());
            std::fs::write(&path, output)?;
            info!("{} {}", style("Wrote").green(), path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}
