//! Value Objects
//!
//! Immutable descriptors exchanged between the registry and its
//! capability objects.

pub mod element_type;
pub mod media_type;

pub use element_type::ElementType;
pub use media_type::MediaType;
