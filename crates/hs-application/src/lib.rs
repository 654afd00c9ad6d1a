//! Application Layer - Handler Strategies
//!
//! This crate holds the strategy registry itself and the compile-time codec
//! registry it can draw default codecs from.
//!
//! ## Architecture
//!
//! The application layer:
//! - Aggregates capability objects into an immutable [`HandlerStrategies`]
//! - Populates the registry explicitly or from a
//!   [`ComponentContainer`](hs_domain::ports::ComponentContainer)
//! - Declares the `linkme` slices concrete codecs register into
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `hs-domain`: For capability ports, value objects and errors
//! - Pure Rust libraries for logging, streams and registration

pub mod registry;
pub mod strategies;

pub use strategies::{HandlerStrategies, HandlerStrategiesBuilder};
