use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_MAX_FILE_SIZE, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

/// vCard versions accepted in `serialization.version`.
const SUPPORTED_VERSIONS: [&str; 3] = ["2.1", "3.0", "4.0"];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub serialization: SerializationConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Target version and option switches used when writing VCF text.
#[derive(Debug, Clone, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each switch maps onto one serializer option flag"
)]
pub struct SerializationConfig {
    pub version: String,
    pub write_groups: bool,
    pub write_empty_properties: bool,
    pub write_non_standard_properties: bool,
    pub write_non_standard_parameters: bool,
    pub write_rfc9554_extensions: bool,
    pub include_agent_as_separate_vcard: bool,
    pub limit_line_length: bool,
}

impl SerializationConfig {
    /// ## Summary
    /// Checks that the configured target version is one the codec can write.
    ///
    /// ## Errors
    /// Returns a validation error for any version other than 2.1, 3.0 or 4.0.
    pub fn validate(&self) -> CoreResult<()> {
        if SUPPORTED_VERSIONS.contains(&self.version.trim()) {
            Ok(())
        } else {
            Err(CoreError::ValidationError(format!(
                "unsupported vCard version in serialization.version: {}",
                self.version
            )))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Upper bound for a single input file, in bytes.
    pub max_file_size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `vcardkit.toml` and `VCARDKIT_*`
    /// environment variables. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> CoreResult<Self> {
        let settings = Config::builder()
            .set_default("serialization.version", "3.0")?
            .set_default("serialization.write_groups", true)?
            .set_default("serialization.write_empty_properties", false)?
            .set_default("serialization.write_non_standard_properties", true)?
            .set_default("serialization.write_non_standard_parameters", false)?
            .set_default("serialization.write_rfc9554_extensions", false)?
            .set_default("serialization.include_agent_as_separate_vcard", false)?
            .set_default("serialization.limit_line_length", true)?
            .set_default("input.max_file_size", DEFAULT_MAX_FILE_SIZE)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env vars, e.g. VCARDKIT_SERIALIZATION__VERSION=4.0
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.serialization.validate()?;

        tracing::debug!(version = %settings.serialization.version, "Settings loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `vcardkit.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialization(version: &str) -> SerializationConfig {
        SerializationConfig {
            version: version.to_string(),
            write_groups: true,
            write_empty_properties: false,
            write_non_standard_properties: true,
            write_non_standard_parameters: false,
            write_rfc9554_extensions: false,
            include_agent_as_separate_vcard: false,
            limit_line_length: true,
        }
    }

    #[test_log::test]
    fn validate_accepts_supported_versions() {
        for version in SUPPORTED_VERSIONS {
            assert!(serialization(version).validate().is_ok(), "{version}");
        }
    }

    #[test]
    fn validate_rejects_unknown_version() {
        let err = serialization("5.0").validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(msg) if msg.contains("5.0")));
    }

    #[test]
    fn validate_trims_whitespace() {
        assert!(serialization(" 4.0 ").validate().is_ok());
    }

    #[test]
    fn logging_config_clone() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };
        assert_eq!(config.clone().level, "debug");
    }
}
