//! # Handler Strategies Infrastructure
//!
//! Cross-cutting concerns around the strategy registry:
//!
//! - [`config`]: figment-based configuration (`hs.toml` + `HS_` env vars)
//! - [`logging`]: tracing subscriber setup
//! - [`error_ext`]: context helpers mapping foreign errors to domain errors
//! - [`container`]: component containers the registry can be populated from
//! - [`bootstrap`]: assembles the [`HandlerStrategies`](hs_application::HandlerStrategies)
//!   an application starts with

// Force linkme registration of the provider codecs
extern crate hs_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_handler_strategies, load_handler_strategies};
pub use config::{ConfigLoader, StrategiesConfig};
pub use container::{RegisteredCodecContainer, StaticComponentContainer};
