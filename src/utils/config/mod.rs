//! # cdxkit Configuration
//!
//! Conversion settings, loaded from a YAML file and `CDXKIT_` environment
//! variables.
//!
//! ## Example
//!
//! ```yaml
//! version_policy: strict
//! unknown_enums: lenient
//! pretty: true
//! xml_declaration: true
//! default_version: "1.6"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use log::debug;
use std::path::PathBuf;

use crate::error::CdxError as Error;
use crate::schema::SchemaVersion;

/// How out-of-version fields and unknown enumerated values are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Drop the value, log a warning and continue
    #[default]
    Lenient,
    /// Fail the conversion
    Strict,
}

/// Converter Configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConverterConfig {
    /// Input fields that do not exist in the target version
    ///
    /// Env: `CDXKIT_VERSION_POLICY`
    #[serde(default)]
    pub version_policy: Policy,

    /// Enumerated values outside of the known set
    ///
    /// Env: `CDXKIT_UNKNOWN_ENUMS`
    #[serde(default)]
    pub unknown_enums: Policy,

    /// Indent output documents
    ///
    /// Env: `CDXKIT_PRETTY`
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Write the `<?xml ...?>` declaration
    ///
    /// Env: `CDXKIT_XML_DECLARATION`
    #[serde(default = "default_true")]
    pub xml_declaration: bool,

    /// Target version when none is given
    ///
    /// Env: `CDXKIT_DEFAULT_VERSION`
    #[serde(default)]
    pub default_version: SchemaVersion,
}

fn default_true() -> bool {
    true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            version_policy: Policy::Lenient,
            unknown_enums: Policy::Lenient,
            pretty: true,
            xml_declaration: true,
            default_version: SchemaVersion::latest(),
        }
    }
}

impl ConverterConfig {
    /// Strict on both out-of-version fields and unknown values
    pub fn strict() -> Self {
        Self {
            version_policy: Policy::Strict,
            unknown_enums: Policy::Strict,
            ..Default::default()
        }
    }

    fn figment(base: Figment) -> Figment {
        Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(base)
            .merge(Env::prefixed("CDXKIT_"))
    }

    /// Load the Configuration
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        debug!("Loading Configuration: {:?}", path);
        let config = Self::figment(Figment::from(Yaml::file(path))).extract()?;
        debug!("Finished Loading Configuration");
        Ok(config)
    }

    /// Load the Configuration from a String
    pub fn load_str(data: impl Into<String>) -> Result<Self, Error> {
        let data = data.into();
        debug!("Loading Configuration from str");
        Ok(Self::figment(Figment::from(Yaml::string(&data))).extract()?)
    }

    /// Save the Configuration
    pub fn save(&self, path: &PathBuf) -> Result<(), Error> {
        debug!("Saving Configuration: {:?}", path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = serde_yaml::to_string(self)?;
        std::fs::write(path, config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    // Loading reads `CDXKIT_` env vars, so every load runs inside a jail

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.version_policy, Policy::Lenient);
        assert_eq!(config.unknown_enums, Policy::Lenient);
        assert!(config.pretty);
        assert_eq!(config.default_version, SchemaVersion::V1_6);
    }

    #[test]
    fn test_load_str() {
        Jail::expect_with(|_| {
            let config = ConverterConfig::load_str(
                "version_policy: strict\npretty: false\ndefault_version: \"1.4\"\n",
            )
            .map_err(|error| error.to_string())?;
            assert_eq!(config.version_policy, Policy::Strict);
            assert_eq!(config.unknown_enums, Policy::Lenient);
            assert!(!config.pretty);
            assert!(config.xml_declaration);
            assert_eq!(config.default_version, SchemaVersion::V1_4);
            Ok(())
        });
    }

    #[test]
    fn test_unquoted_version() {
        Jail::expect_with(|_| {
            let config = ConverterConfig::load_str("default_version: 1.5\n")
                .map_err(|error| error.to_string())?;
            assert_eq!(config.default_version, SchemaVersion::V1_5);

            assert!(ConverterConfig::load_str("default_version: 1.1\n").is_err());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("CDXKIT_DEFAULT_VERSION", "1.4");
            jail.set_env("CDXKIT_VERSION_POLICY", "strict");

            let config = ConverterConfig::load_str("default_version: \"1.6\"\n")
                .map_err(|error| error.to_string())?;
            assert_eq!(config.default_version, SchemaVersion::V1_4);
            assert_eq!(config.version_policy, Policy::Strict);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_policy() {
        Jail::expect_with(|_| {
            assert!(ConverterConfig::load_str("version_policy: sometimes\n").is_err());
            Ok(())
        });
    }

    #[test]
    fn test_save_and_load() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("config").join("cdxkit.yml");
            let config = ConverterConfig::strict();
            config.save(&path).map_err(|error| error.to_string())?;

            let loaded = ConverterConfig::load(&path).map_err(|error| error.to_string())?;
            assert_eq!(loaded, config);
            Ok(())
        });
    }
}
