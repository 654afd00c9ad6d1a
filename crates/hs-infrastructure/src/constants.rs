//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hs";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "HS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "HS_LOG";

/// File name prefix for rolling log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "hs";
