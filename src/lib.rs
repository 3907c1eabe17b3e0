//! # cdxkit
//!
//! Typed CycloneDX object model with version-aware JSON and XML
//! serialization for schema versions 1.2 through 1.6.
//!
#![warn(missing_docs, unused_imports)]
#![allow(clippy::result_large_err)]
#![deny(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod bind;
pub mod bom;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;

pub use bom::{BomParser, Converter, deserialize, detect, serialize};
pub use error::CdxError;
pub use schema::{Format, SchemaVersion};
pub use utils::config::{ConverterConfig, Policy};

/// cdxkit Banner
pub const CDXKIT_BANNER: &str = r#"           _      _    _ _
  ___ __| |_  _| | _(_) |_
 / __/ _` \ \/ / |/ / | __|
| (_| (_| |>  <|   <| | |_
 \___\__,_/_/\_\_|\_\_|\__|"#;

/// cdxkit Version
pub const CDXKIT_VERSION: &str = env!("CARGO_PKG_VERSION");
