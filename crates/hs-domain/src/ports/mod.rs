//! Ports
//!
//! Capability contracts the registry aggregates, and the container
//! contract it can be populated from.

pub mod codec;
pub mod container;
pub mod view;

pub use codec::{
    BodyStream, Element, ElementStream, Hints, MessageReader, MessageWriter, supports_media_type,
};
pub use container::{CapabilityKind, Component, ComponentContainer};
pub use view::{Model, View, ViewResolver};
