//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hs_application::registry::{list_message_readers, list_message_writers};
use hs_domain::error::{Error, Result};

use crate::config::{CodecSettings, LoggingConfig, StrategiesConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `StrategiesConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `HS_CODECS__MAX_IN_MEMORY_SIZE`)
    pub fn load(&self) -> Result<StrategiesConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(StrategiesConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (e.g., HS_LOGGING__LEVEL)
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: StrategiesConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_strategies_config(&config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &StrategiesConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the loaded configuration
pub fn validate_strategies_config(config: &StrategiesConfig) -> Result<()> {
    validate_codec_settings(&config.codecs)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_codec_settings(settings: &CodecSettings) -> Result<()> {
    if settings.max_in_memory_size == 0 {
        return Err(Error::configuration("Codec max_in_memory_size cannot be 0"));
    }

    let readers: Vec<&str> = list_message_readers().into_iter().map(|(n, _)| n).collect();
    if let Some(unknown) = settings
        .readers
        .iter()
        .find(|name| !readers.contains(&name.as_str()))
    {
        return Err(Error::configuration(format!(
            "Unknown message reader '{unknown}'. Available readers: {readers:?}"
        )));
    }

    let writers: Vec<&str> = list_message_writers().into_iter().map(|(n, _)| n).collect();
    if let Some(unknown) = settings
        .writers
        .iter()
        .find(|name| !writers.contains(&name.as_str()))
    {
        return Err(Error::configuration(format!(
            "Unknown message writer '{unknown}'. Available writers: {writers:?}"
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}
