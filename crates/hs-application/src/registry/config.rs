//! Codec configuration
//!
//! Options handed to codec factories.

use std::collections::HashMap;

/// Default limit on the number of bytes a reader buffers (256 KiB)
pub const DEFAULT_MAX_IN_MEMORY_SIZE: usize = 256 * 1024;

/// Configuration for codec creation
///
/// Contains all configuration options that a codec might need.
/// Codecs should use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Maximum number of body bytes a reader may buffer
    pub max_in_memory_size: usize,
    /// Additional codec-specific configuration
    pub extra: HashMap<String, String>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_in_memory_size: DEFAULT_MAX_IN_MEMORY_SIZE,
            extra: HashMap::new(),
        }
    }
}

impl CodecConfig {
    /// Create a config with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the in-memory buffer limit
    pub fn with_max_in_memory_size(mut self, max_in_memory_size: usize) -> Self {
        self.max_in_memory_size = max_in_memory_size;
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
