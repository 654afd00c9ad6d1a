//! View resolvers

pub mod tera;
