//! Codec registry container
//!
//! Exposes the linkme codec registry as a [`ComponentContainer`], so the
//! configured codecs can be added to strategies like any other container
//! content.

use std::sync::Arc;

use hs_application::registry::{
    CodecConfig, default_message_readers, default_message_writers, resolve_message_reader,
    resolve_message_writer,
};
use hs_domain::error::{Error, Result};
use hs_domain::ports::{ComponentContainer, MessageReader, MessageWriter, ViewResolver};

use crate::config::CodecSettings;

/// Container instantiating registered codecs by name
///
/// With no names configured the default codec set of the registry is used,
/// in `(order, name)` order. Otherwise codecs come in the configured order.
/// Each query creates fresh instances through the codec factories.
#[derive(Debug, Clone, Default)]
pub struct RegisteredCodecContainer {
    config: CodecConfig,
    readers: Vec<String>,
    writers: Vec<String>,
}

impl RegisteredCodecContainer {
    /// Container of the default codecs, built with `config`
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            readers: Vec::new(),
            writers: Vec::new(),
        }
    }

    /// Container of the codecs selected by `settings`
    pub fn from_settings(settings: &CodecSettings) -> Self {
        Self::new(settings.to_codec_config())
            .with_readers(settings.readers.iter().cloned())
            .with_writers(settings.writers.iter().cloned())
    }

    /// Select readers by registered name
    pub fn with_readers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Select writers by registered name
    pub fn with_writers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.writers = names.into_iter().map(Into::into).collect();
        self
    }
}

impl ComponentContainer for RegisteredCodecContainer {
    fn message_readers(&self) -> Result<Vec<Arc<dyn MessageReader>>> {
        if self.readers.is_empty() {
            return default_message_readers(&self.config).map_err(Error::container_access);
        }
        self.readers
            .iter()
            .map(|name| resolve_message_reader(name, &self.config).map_err(Error::container_access))
            .collect()
    }

    fn message_writers(&self) -> Result<Vec<Arc<dyn MessageWriter>>> {
        if self.writers.is_empty() {
            return default_message_writers(&self.config).map_err(Error::container_access);
        }
        self.writers
            .iter()
            .map(|name| resolve_message_writer(name, &self.config).map_err(Error::container_access))
            .collect()
    }

    fn view_resolvers(&self) -> Result<Vec<Arc<dyn ViewResolver>>> {
        Ok(Vec::new())
    }
}
