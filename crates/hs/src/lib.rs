//! # Handler Strategies
//!
//! An ordered registry of the message readers, message writers and view
//! resolvers a functional web handler uses.
//!
//! Strategies are assembled with a builder or collected from a component
//! container, and are immutable once built. Each list keeps registration
//! order and can be iterated any number of times.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use hs::HandlerStrategies;
//! use hs::providers::{StringMessageReader, StringMessageWriter};
//!
//! let strategies = HandlerStrategies::empty()
//!     .with_message_reader(Arc::new(StringMessageReader::new()))
//!     .with_message_writer(Arc::new(StringMessageWriter::new()))
//!     .build();
//!
//! assert_eq!(strategies.message_readers().count(), 1);
//! assert_eq!(strategies.message_writers().count(), 1);
//! assert!(strategies.view_resolvers().next().is_none());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capability ports, value objects and errors
//! - `application` - The strategies registry, its builder and the codec registry
//! - `providers` - String and JSON codecs, Tera view resolver
//! - `infrastructure` - Config, logging, component containers and bootstrap

/// Domain layer - capability ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hs_domain::*;
}

/// Application layer - strategies registry and codec registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use hs_application::*;
}

/// Providers - concrete codecs and view resolvers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use hs_providers::*;
}

/// Infrastructure layer - config, logging, containers and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use hs_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use application::{HandlerStrategies, HandlerStrategiesBuilder};
pub use domain::{Error, Result};
pub use infrastructure::{
    ConfigLoader, RegisteredCodecContainer, StaticComponentContainer, StrategiesConfig,
    build_handler_strategies,
};
