//! Handler Strategies
//!
//! The immutable registry of message readers, message writers and view
//! resolvers a functional handler uses, plus the builder that assembles it.
//!
//! ## Resolution order
//!
//! Every list keeps registration order, and every lookup (`reader_for`,
//! `writer_for`, `resolve_view`) returns the first match in that order.
//!
//! ## Example
//!
//! ```ignore
//! use hs_application::HandlerStrategies;
//!
//! let strategies = HandlerStrategies::empty()
//!     .with_message_reader(reader)
//!     .with_message_writer(writer)
//!     .build();
//!
//! assert_eq!(strategies.message_readers().count(), 1);
//! assert_eq!(strategies.view_resolvers().next().is_none(), true);
//! ```

mod builder;

pub use builder::HandlerStrategiesBuilder;

use std::fmt;
use std::sync::Arc;

use hs_domain::error::Result;
use hs_domain::ports::{ComponentContainer, MessageReader, MessageWriter, View, ViewResolver};
use hs_domain::value_objects::{ElementType, MediaType};

use crate::registry::CodecConfig;

/// Immutable, ordered collection of handler strategies
///
/// Cloning is cheap: the three lists are shared, never copied.
#[derive(Clone)]
pub struct HandlerStrategies {
    readers: Arc<[Arc<dyn MessageReader>]>,
    writers: Arc<[Arc<dyn MessageWriter>]>,
    view_resolvers: Arc<[Arc<dyn ViewResolver>]>,
}

impl HandlerStrategies {
    pub(crate) fn from_parts(
        readers: Vec<Arc<dyn MessageReader>>,
        writers: Vec<Arc<dyn MessageWriter>>,
        view_resolvers: Vec<Arc<dyn ViewResolver>>,
    ) -> Self {
        Self {
            readers: readers.into(),
            writers: writers.into(),
            view_resolvers: view_resolvers.into(),
        }
    }

    /// Start from a builder with no strategies at all
    pub fn empty() -> HandlerStrategiesBuilder {
        HandlerStrategiesBuilder::new()
    }

    /// Build strategies from every capability registered in `container`
    pub fn of(container: &dyn ComponentContainer) -> Result<Self> {
        Ok(Self::empty().populate_from(container)?.build())
    }

    /// Build strategies holding the default codecs of the codec registry
    pub fn with_defaults(config: &CodecConfig) -> Result<Self> {
        Ok(Self::empty().with_default_codecs(config)?.build())
    }

    /// A builder preloaded with these strategies
    pub fn to_builder(&self) -> HandlerStrategiesBuilder {
        HandlerStrategiesBuilder::from_parts(
            self.readers.to_vec(),
            self.writers.to_vec(),
            self.view_resolvers.to_vec(),
        )
    }

    /// Message readers, in registration order
    ///
    /// Every call returns a new iterator over the same readers.
    pub fn message_readers(
        &self,
    ) -> impl ExactSizeIterator<Item = Arc<dyn MessageReader>> + Clone + '_ {
        self.readers.iter().cloned()
    }

    /// Message writers, in registration order
    pub fn message_writers(
        &self,
    ) -> impl ExactSizeIterator<Item = Arc<dyn MessageWriter>> + Clone + '_ {
        self.writers.iter().cloned()
    }

    /// View resolvers, in registration order
    pub fn view_resolvers(
        &self,
    ) -> impl ExactSizeIterator<Item = Arc<dyn ViewResolver>> + Clone + '_ {
        self.view_resolvers.iter().cloned()
    }

    /// Whether all three lists are empty
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty() && self.writers.is_empty() && self.view_resolvers.is_empty()
    }

    /// First reader able to decode `element` from `media_type`
    pub fn reader_for(
        &self,
        element: &ElementType,
        media_type: Option<&MediaType>,
    ) -> Option<Arc<dyn MessageReader>> {
        self.readers
            .iter()
            .find(|r| r.can_read(element, media_type))
            .cloned()
    }

    /// First writer able to encode `element` as `media_type`
    pub fn writer_for(
        &self,
        element: &ElementType,
        media_type: Option<&MediaType>,
    ) -> Option<Arc<dyn MessageWriter>> {
        self.writers
            .iter()
            .find(|w| w.can_write(element, media_type))
            .cloned()
    }

    /// Ask each view resolver in turn for `view_name`
    ///
    /// Returns the first view found; an error from a resolver stops the
    /// search.
    pub async fn resolve_view(
        &self,
        view_name: &str,
        locale: Option<&str>,
    ) -> Result<Option<Arc<dyn View>>> {
        for resolver in self.view_resolvers.iter() {
            if let Some(view) = resolver.resolve_view_name(view_name, locale).await? {
                tracing::debug!(
                    view = view_name,
                    resolver = resolver.resolver_name(),
                    "View resolved"
                );
                return Ok(Some(view));
            }
        }
        Ok(None)
    }
}

impl Default for HandlerStrategies {
    fn default() -> Self {
        Self::empty().build()
    }
}

impl fmt::Debug for HandlerStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerStrategies")
            .field(
                "readers",
                &self.readers.iter().map(|r| r.reader_name()).collect::<Vec<_>>(),
            )
            .field(
                "writers",
                &self.writers.iter().map(|w| w.writer_name()).collect::<Vec<_>>(),
            )
            .field(
                "view_resolvers",
                &self
                    .view_resolvers
                    .iter()
                    .map(|v| v.resolver_name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
