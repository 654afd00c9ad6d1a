//! Domain Layer - Handler Strategies
//!
//! Core types shared by every other crate in the workspace:
//!
//! - [`error`]: the domain [`Error`](error::Error) and [`Result`](error::Result)
//! - [`value_objects`]: [`MediaType`](value_objects::MediaType) and
//!   [`ElementType`](value_objects::ElementType)
//! - [`ports`]: capability traits (readers, writers, view resolvers) and the
//!   component container contract
//!
//! This crate has no knowledge of concrete codecs, containers or
//! configuration.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
