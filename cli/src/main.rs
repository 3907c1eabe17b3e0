#![deny(unsafe_code)]

use anyhow::Result;
use cdxkit::ConverterConfig;
use log::{debug, warn};

mod cli;

use cli::{ArgumentCommands, init, update_config};

fn main() -> Result<()> {
    let arguments = init();

    let mut config = if arguments.config.exists() {
        match ConverterConfig::load(&arguments.config) {
            Ok(config) => config,
            Err(error) => {
                warn!("Failed to load configuration: {}", error);
                ConverterConfig::default()
            }
        }
    } else {
        debug!("No configuration file at {}", arguments.config.display());
        ConverterConfig::default()
    };

    match arguments.commands {
        Some(ArgumentCommands::Convert {
            input,
            output,
            to_version,
            to_format,
            strict,
        }) => {
            update_config(&mut config, strict);
            cli::convert::run(
                config,
                cli::convert::ConvertOptions {
                    input,
                    output,
                    to_version,
                    to_format,
                },
            )
        }
        Some(ArgumentCommands::Inspect { input }) => cli::inspect::run(config, input),
        Some(ArgumentCommands::Fields { entity }) => cli::fields::run(entity),
        None => {
            warn!("No command provided, see `cdxkit --help`");
            Ok(())
        }
    }
}
