//! Static singleton container
//!
//! Holds named [`Component`] singletons registered up front and exposes
//! them by capability once refreshed.

use std::fmt;
use std::sync::{Arc, RwLock};

use hs_domain::error::{Error, Result};
use hs_domain::ports::{
    CapabilityKind, Component, ComponentContainer, MessageReader, MessageWriter, ViewResolver,
};
use tracing::debug;

/// Container lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// Accepting registrations, not queryable yet
    Created,
    /// Refreshed and queryable
    Active,
    /// Closed for good
    Closed,
}

#[derive(Default)]
struct Inner {
    components: Vec<(String, Arc<dyn Component>)>,
    closed: bool,
    active: bool,
}

impl Inner {
    fn state(&self) -> ContainerState {
        if self.closed {
            ContainerState::Closed
        } else if self.active {
            ContainerState::Active
        } else {
            ContainerState::Created
        }
    }
}

/// Container of named singletons
///
/// Singletons are enumerated in registration order. A singleton that
/// implements several capabilities shows up under each of them.
///
/// # Example
///
/// ```ignore
/// let container = StaticComponentContainer::new();
/// container.register_singleton("textCodec", Arc::new(PlainTextCodec))?;
/// container.refresh()?;
///
/// let strategies = HandlerStrategies::of(&container)?;
/// ```
#[derive(Default)]
pub struct StaticComponentContainer {
    inner: RwLock<Inner>,
}

impl StaticComponentContainer {
    /// Create an empty, not yet refreshed container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `component` under `name`
    ///
    /// Names must be unique. Registration is allowed until the container
    /// is closed.
    pub fn register_singleton(&self, name: &str, component: Arc<dyn Component>) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Error::container_access("Lock poisoned"))?;

        if inner.closed {
            return Err(Error::container_access(format!(
                "Cannot register '{name}': container already closed"
            )));
        }
        if inner.components.iter().any(|(existing, _)| existing == name) {
            return Err(Error::invalid_argument(format!(
                "A singleton named '{name}' is already registered"
            )));
        }

        debug!(name, "Registered singleton");
        inner.components.push((name.to_string(), component));
        Ok(())
    }

    /// Activate the container so it can be queried
    pub fn refresh(&self) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Error::container_access("Lock poisoned"))?;

        if inner.closed {
            return Err(Error::container_access(
                "Container cannot be refreshed after close",
            ));
        }
        inner.active = true;
        debug!(singletons = inner.components.len(), "Container refreshed");
        Ok(())
    }

    /// Deactivate the container; later queries fail
    pub fn close(&self) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Error::container_access("Lock poisoned"))?;
        inner.active = false;
        inner.closed = true;
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> Result<ContainerState> {
        let inner = self
            .inner
            .read()
            .map_err(|_| Error::container_access("Lock poisoned"))?;
        Ok(inner.state())
    }

    /// Registered names, in registration order
    pub fn singleton_names(&self) -> Result<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| Error::container_access("Lock poisoned"))?;
        Ok(inner.components.iter().map(|(name, _)| name.clone()).collect())
    }

    /// Names of the singletons implementing `kind`, in registration order
    pub fn names_for(&self, kind: CapabilityKind) -> Result<Vec<String>> {
        let active = self.active_components()?;
        Ok(active
            .into_iter()
            .filter(|(_, component)| Arc::clone(component).implements(kind))
            .map(|(name, _)| name)
            .collect())
    }

    fn active_components(&self) -> Result<Vec<(String, Arc<dyn Component>)>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| Error::container_access("Lock poisoned"))?;

        if inner.state() != ContainerState::Active {
            return Err(Error::container_access(
                "Container not initialized or already closed",
            ));
        }
        Ok(inner.components.clone())
    }

    fn capabilities<T: ?Sized>(
        &self,
        view: fn(Arc<dyn Component>) -> Option<Arc<T>>,
    ) -> Result<Vec<Arc<T>>> {
        Ok(self
            .active_components()?
            .into_iter()
            .filter_map(|(_, component)| view(component))
            .collect())
    }
}

impl ComponentContainer for StaticComponentContainer {
    fn message_readers(&self) -> Result<Vec<Arc<dyn MessageReader>>> {
        self.capabilities(|c| c.as_message_reader())
    }

    fn message_writers(&self) -> Result<Vec<Arc<dyn MessageWriter>>> {
        self.capabilities(|c| c.as_message_writer())
    }

    fn view_resolvers(&self) -> Result<Vec<Arc<dyn ViewResolver>>> {
        self.capabilities(|c| c.as_view_resolver())
    }
}

impl fmt::Debug for StaticComponentContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("StaticComponentContainer");
        match self.inner.read() {
            Ok(inner) => debug
                .field("state", &inner.state())
                .field(
                    "singletons",
                    &inner.components.iter().map(|(n, _)| n).collect::<Vec<_>>(),
                )
                .finish(),
            Err(_) => debug.finish_non_exhaustive(),
        }
    }
}
