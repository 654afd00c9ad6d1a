//! # Handler Strategy Providers
//!
//! Concrete capability objects for handler strategies.
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`codec`] | String and JSON message readers/writers |
//! | [`view`] | Tera-backed view resolver |
//!
//! Codecs register themselves into the codec registry of
//! `hs-application`; linking this crate is enough to make them available
//! as default codecs.

pub mod codec;
pub mod constants;
#[cfg(feature = "view-tera")]
pub mod view;

#[cfg(feature = "codec-json")]
pub use codec::json::{JsonMessageReader, JsonMessageWriter};
#[cfg(feature = "codec-string")]
pub use codec::string::{StringMessageReader, StringMessageWriter};
#[cfg(feature = "view-tera")]
pub use view::tera::TeraViewResolver;
