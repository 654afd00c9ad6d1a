//! Component Container Ports
//!
//! The registry can be populated from a dependency-injection container.
//! The container is an external collaborator; this module only fixes the
//! contract it must satisfy and the way singletons advertise the
//! capabilities they implement.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ports::codec::{MessageReader, MessageWriter};
use crate::ports::view::ViewResolver;

/// Capability kinds a container can be queried for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// [`MessageReader`]
    MessageReader,
    /// [`MessageWriter`]
    MessageWriter,
    /// [`ViewResolver`]
    ViewResolver,
}

impl CapabilityKind {
    /// All kinds, in population order
    pub const ALL: [CapabilityKind; 3] = [
        CapabilityKind::MessageReader,
        CapabilityKind::MessageWriter,
        CapabilityKind::ViewResolver,
    ];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::MessageReader => "message_reader",
            CapabilityKind::MessageWriter => "message_writer",
            CapabilityKind::ViewResolver => "view_resolver",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component Container Port
///
/// Returns every registered instance of a capability kind, in the
/// container's enumeration order. Implementations fail with
/// [`Error::ContainerAccess`](crate::error::Error::ContainerAccess) when
/// they cannot be queried.
pub trait ComponentContainer: Send + Sync {
    /// All registered message readers
    fn message_readers(&self) -> Result<Vec<Arc<dyn MessageReader>>>;

    /// All registered message writers
    fn message_writers(&self) -> Result<Vec<Arc<dyn MessageWriter>>>;

    /// All registered view resolvers
    fn view_resolvers(&self) -> Result<Vec<Arc<dyn ViewResolver>>>;
}

/// A singleton held by a container
///
/// Each `as_*` method returns the component viewed as that capability, or
/// `None` when it does not implement it. A single component may implement
/// several capabilities.
///
/// # Example
///
/// ```ignore
/// impl Component for PlainTextCodec {
///     fn as_message_reader(self: Arc<Self>) -> Option<Arc<dyn MessageReader>> {
///         Some(self)
///     }
///     fn as_message_writer(self: Arc<Self>) -> Option<Arc<dyn MessageWriter>> {
///         Some(self)
///     }
/// }
/// ```
pub trait Component: Send + Sync + 'static {
    /// This component as a message reader
    fn as_message_reader(self: Arc<Self>) -> Option<Arc<dyn MessageReader>> {
        None
    }

    /// This component as a message writer
    fn as_message_writer(self: Arc<Self>) -> Option<Arc<dyn MessageWriter>> {
        None
    }

    /// This component as a view resolver
    fn as_view_resolver(self: Arc<Self>) -> Option<Arc<dyn ViewResolver>> {
        None
    }

    /// Whether this component implements `kind`
    fn implements(self: Arc<Self>, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::MessageReader => self.as_message_reader().is_some(),
            CapabilityKind::MessageWriter => self.as_message_writer().is_some(),
            CapabilityKind::ViewResolver => self.as_view_resolver().is_some(),
        }
    }
}
