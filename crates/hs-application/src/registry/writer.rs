//! Message Writer Registry
//!
//! Auto-registration system for message writers using linkme distributed slices.
//! Writers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::sync::Arc;

use hs_domain::ports::MessageWriter;

use super::config::CodecConfig;

/// Registry entry for message writers
///
/// Each writer implementation registers itself with this entry using
/// `#[linkme::distributed_slice(MESSAGE_WRITERS)]`. The entry contains
/// metadata and a factory function to create writer instances.
pub struct MessageWriterEntry {
    /// Unique writer name (e.g., "string", "json")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Position among default codecs; lower comes first
    pub order: i32,
    /// Whether the writer is part of the default codec set
    pub default_codec: bool,
    /// Factory function to create writer instance
    pub factory: fn(&CodecConfig) -> Result<Arc<dyn MessageWriter>, String>,
}

// Auto-collection via linkme distributed slices - codecs submit entries at compile time
#[linkme::distributed_slice]
pub static MESSAGE_WRITERS: [MessageWriterEntry] = [..];

fn sorted_entries() -> Vec<&'static MessageWriterEntry> {
    let mut entries: Vec<&'static MessageWriterEntry> = MESSAGE_WRITERS.iter().collect();
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));
    entries
}

/// Resolve message writer by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn MessageWriter>)` - Created writer instance
/// * `Err(String)` - Error message if writer not found or creation failed
pub fn resolve_message_writer(
    name: &str,
    config: &CodecConfig,
) -> Result<Arc<dyn MessageWriter>, String> {
    for entry in MESSAGE_WRITERS {
        if entry.name == name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = sorted_entries().iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown message writer '{}'. Available writers: {:?}",
        name, available
    ))
}

/// Instantiate every default writer, in `(order, name)` order
pub fn default_message_writers(
    config: &CodecConfig,
) -> Result<Vec<Arc<dyn MessageWriter>>, String> {
    sorted_entries()
        .into_iter()
        .filter(|e| e.default_codec)
        .map(|e| (e.factory)(config).map_err(|err| format!("{}: {}", e.name, err)))
        .collect()
}

/// List all registered message writers
///
/// Returns a list of (name, description) tuples, sorted by `(order, name)`.
pub fn list_message_writers() -> Vec<(&'static str, &'static str)> {
    sorted_entries()
        .into_iter()
        .map(|e| (e.name, e.description))
        .collect()
}
