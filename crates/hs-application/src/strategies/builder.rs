//! Handler strategies builder

use std::sync::Arc;

use hs_domain::error::{Error, Result};
use hs_domain::ports::{ComponentContainer, MessageReader, MessageWriter, ViewResolver};
use tracing::debug;

use super::HandlerStrategies;
use crate::registry::{CodecConfig, default_message_readers, default_message_writers};

/// Accumulates strategies and produces [`HandlerStrategies`]
///
/// `build` snapshots the current lists, so the builder can keep being
/// extended without affecting strategies built earlier.
#[derive(Clone, Default)]
pub struct HandlerStrategiesBuilder {
    readers: Vec<Arc<dyn MessageReader>>,
    writers: Vec<Arc<dyn MessageWriter>>,
    view_resolvers: Vec<Arc<dyn ViewResolver>>,
}

impl HandlerStrategiesBuilder {
    /// Create a builder with no strategies
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        readers: Vec<Arc<dyn MessageReader>>,
        writers: Vec<Arc<dyn MessageWriter>>,
        view_resolvers: Vec<Arc<dyn ViewResolver>>,
    ) -> Self {
        Self {
            readers,
            writers,
            view_resolvers,
        }
    }

    /// Append a message reader
    pub fn with_message_reader(mut self, reader: Arc<dyn MessageReader>) -> Self {
        self.readers.push(reader);
        self
    }

    /// Append a message writer
    pub fn with_message_writer(mut self, writer: Arc<dyn MessageWriter>) -> Self {
        self.writers.push(writer);
        self
    }

    /// Append a view resolver
    pub fn with_view_resolver(mut self, resolver: Arc<dyn ViewResolver>) -> Self {
        self.view_resolvers.push(resolver);
        self
    }

    /// Append every reader, writer and view resolver held by `container`
    ///
    /// Instances are appended in container order. If any query fails the
    /// error is returned and the builder is dropped; use
    /// [`try_populate_from`](Self::try_populate_from) to keep it.
    pub fn populate_from(mut self, container: &dyn ComponentContainer) -> Result<Self> {
        self.try_populate_from(container)?;
        Ok(self)
    }

    /// In-place variant of [`populate_from`](Self::populate_from)
    ///
    /// If any query fails nothing is appended and the builder keeps the
    /// entries it already had.
    pub fn try_populate_from(&mut self, container: &dyn ComponentContainer) -> Result<&mut Self> {
        let readers = container.message_readers()?;
        let writers = container.message_writers()?;
        let view_resolvers = container.view_resolvers()?;

        debug!(
            readers = readers.len(),
            writers = writers.len(),
            view_resolvers = view_resolvers.len(),
            "Populating handler strategies from container"
        );

        self.readers.extend(readers);
        self.writers.extend(writers);
        self.view_resolvers.extend(view_resolvers);
        Ok(self)
    }

    /// Append the default readers and writers of the codec registry
    pub fn with_default_codecs(mut self, config: &CodecConfig) -> Result<Self> {
        let readers = default_message_readers(config).map_err(Error::codec)?;
        let writers = default_message_writers(config).map_err(Error::codec)?;

        debug!(
            readers = readers.len(),
            writers = writers.len(),
            "Registering default codecs"
        );

        self.readers.extend(readers);
        self.writers.extend(writers);
        Ok(self)
    }

    /// Number of readers added so far
    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Number of writers added so far
    pub fn writer_count(&self) -> usize {
        self.writers.len()
    }

    /// Number of view resolvers added so far
    pub fn view_resolver_count(&self) -> usize {
        self.view_resolvers.len()
    }

    /// Snapshot the current lists into immutable strategies
    pub fn build(&self) -> HandlerStrategies {
        HandlerStrategies::from_parts(
            self.readers.clone(),
            self.writers.clone(),
            self.view_resolvers.clone(),
        )
    }
}
