//! Root configuration type

use serde::{Deserialize, Serialize};

use super::codecs::CodecSettings;
use super::logging::LoggingConfig;

/// Handler strategies configuration
///
/// Mirrors the layout of `hs.toml`:
///
/// ```toml
/// [codecs]
/// register_defaults = true
/// max_in_memory_size = 262144
/// readers = ["string", "json"]
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategiesConfig {
    /// Codec selection and limits
    pub codecs: CodecSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}
