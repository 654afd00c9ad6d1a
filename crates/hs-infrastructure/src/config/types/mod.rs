//! Configuration types module

pub mod app;
pub mod codecs;
pub mod logging;

// Re-export main types
pub use app::StrategiesConfig;
pub use codecs::CodecSettings;
pub use logging::LoggingConfig;
