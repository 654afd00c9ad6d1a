//! Component containers
//!
//! Implementations of the [`ComponentContainer`](hs_domain::ports::ComponentContainer)
//! port that [`HandlerStrategies::of`](hs_application::HandlerStrategies::of)
//! populates from.
//!
//! ```text
//! StaticComponentContainer   named singletons, registration order
//! RegisteredCodecContainer   linkme codec registry, configured names
//! ```

pub mod codec;
pub mod singleton;

pub use codec::RegisteredCodecContainer;
pub use singleton::StaticComponentContainer;
