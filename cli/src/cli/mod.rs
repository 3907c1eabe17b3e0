use clap::{Parser, Subcommand};
use console::style;
use cdxkit::{CDXKIT_BANNER, CDXKIT_VERSION, ConverterConfig, Format, Policy, SchemaVersion};
use std::path::PathBuf;

pub mod convert;
pub mod fields;
pub mod inspect;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable Debugging
    #[clap(long, env, default_value_t = false)]
    pub debug: bool,

    /// Disable Banner
    #[clap(long, default_value_t = false)]
    pub disable_banner: bool,

    /// Configuration file path
    #[clap(short, long, env = "CDXKIT_CONFIG", default_value = "./cdxkit.yml")]
    pub config: PathBuf,

    /// Subcommands
    #[clap(subcommand)]
    pub commands: Option<ArgumentCommands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArgumentCommands {
    /// Convert a CycloneDX document to another version or format
    Convert {
        /// Input document (JSON or XML)
        input: PathBuf,
        /// Output path, stdout when not set
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Target CycloneDX version (defaults to the configured version)
        #[clap(long)]
        to_version: Option<SchemaVersion>,
        /// Target format (defaults to the input format)
        #[clap(long)]
        to_format: Option<Format>,
        /// Fail on out-of-version fields and unknown enumeration values
        #[clap(long, default_value_t = false)]
        strict: bool,
    },
    /// Summarise a CycloneDX document
    Inspect {
        /// Input document (JSON or XML)
        input: PathBuf,
    },
    /// List the fields of a model entity across versions
    Fields {
        /// Entity name (e.g. `Component`)
        entity: Option<String>,
    },
}

pub fn init() -> Arguments {
    let arguments = Arguments::parse();

    let log_level = match &arguments.debug {
        false => log::LevelFilter::Info,
        true => log::LevelFilter::Debug,
    };

    env_logger::builder()
        .parse_default_env()
        .format_module_path(false)
        .filter_level(log_level)
        .init();

    if !arguments.disable_banner {
        eprintln!(
            "{}    by {} - v{}\n",
            style(CDXKIT_BANNER).green(),
            style(AUTHOR).red(),
            style(CDXKIT_VERSION).blue()
        );
    }

    arguments
}

/// Apply command line overrides on top of the loaded configuration
pub fn update_config(config: &mut ConverterConfig, strict: bool) {
    if strict {
        config.version_policy = Policy::Strict;
        config.unknown_enums = Policy::Strict;
    }
}
