//! Message Reader Registry
//!
//! Auto-registration system for message readers using linkme distributed slices.
//! Readers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::sync::Arc;

use hs_domain::ports::MessageReader;

use super::config::CodecConfig;

/// Registry entry for message readers
///
/// Each reader implementation registers itself with this entry using
/// `#[linkme::distributed_slice(MESSAGE_READERS)]`. The entry contains
/// metadata and a factory function to create reader instances.
pub struct MessageReaderEntry {
    /// Unique reader name (e.g., "string", "json")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Position among default codecs; lower comes first
    pub order: i32,
    /// Whether the reader is part of the default codec set
    pub default_codec: bool,
    /// Factory function to create reader instance
    pub factory: fn(&CodecConfig) -> Result<Arc<dyn MessageReader>, String>,
}

// Auto-collection via linkme distributed slices - codecs submit entries at compile time
#[linkme::distributed_slice]
pub static MESSAGE_READERS: [MessageReaderEntry] = [..];

fn sorted_entries() -> Vec<&'static MessageReaderEntry> {
    let mut entries: Vec<&'static MessageReaderEntry> = MESSAGE_READERS.iter().collect();
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));
    entries
}

/// Resolve message reader by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn MessageReader>)` - Created reader instance
/// * `Err(String)` - Error message if reader not found or creation failed
pub fn resolve_message_reader(
    name: &str,
    config: &CodecConfig,
) -> Result<Arc<dyn MessageReader>, String> {
    for entry in MESSAGE_READERS {
        if entry.name == name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = sorted_entries().iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown message reader '{}'. Available readers: {:?}",
        name, available
    ))
}

/// Instantiate every default reader, in `(order, name)` order
pub fn default_message_readers(
    config: &CodecConfig,
) -> Result<Vec<Arc<dyn MessageReader>>, String> {
    sorted_entries()
        .into_iter()
        .filter(|e| e.default_codec)
        .map(|e| (e.factory)(config).map_err(|err| format!("{}: {}", e.name, err)))
        .collect()
}

/// List all registered message readers
///
/// Returns a list of (name, description) tuples, sorted by `(order, name)`.
pub fn list_message_readers() -> Vec<(&'static str, &'static str)> {
    sorted_entries()
        .into_iter()
        .map(|e| (e.name, e.description))
        .collect()
}
