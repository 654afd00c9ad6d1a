//! Codec configuration types

use std::collections::HashMap;

use hs_application::registry::{CodecConfig, DEFAULT_MAX_IN_MEMORY_SIZE};
use serde::{Deserialize, Serialize};

/// Codec settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecSettings {
    /// Add registered codecs to the strategies at bootstrap
    pub register_defaults: bool,

    /// Maximum number of body bytes a reader may buffer
    pub max_in_memory_size: usize,

    /// Registered readers to use, by name; empty selects the default set
    pub readers: Vec<String>,

    /// Registered writers to use, by name; empty selects the default set
    pub writers: Vec<String>,

    /// Codec-specific options passed through to codec factories
    pub extra: HashMap<String, String>,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            register_defaults: true,
            max_in_memory_size: DEFAULT_MAX_IN_MEMORY_SIZE,
            readers: Vec::new(),
            writers: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl CodecSettings {
    /// The configuration handed to codec factories
    pub fn to_codec_config(&self) -> CodecConfig {
        CodecConfig {
            max_in_memory_size: self.max_in_memory_size,
            extra: self.extra.clone(),
        }
    }
}
