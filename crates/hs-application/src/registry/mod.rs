//! Codec Registry System
//!
//! Defines the auto-registration infrastructure for message codecs.
//! Uses the `linkme` crate for compile-time registration of readers and
//! writers that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Codec Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Codec defines:     #[linkme::distributed_slice(READERS)]    │
//! │                        static ENTRY: MessageReaderEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static READERS: [Entry] = [..]       │
//! │                              ↓                                  │
//! │  3. Builder queries:   default_message_readers(&config)         │
//! │                              ↓                                  │
//! │  4. Container selects: readers = ["string"] → StringReader      │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Codec (in hs-providers)
//!
//! ```ignore
//! use hs_application::registry::{MessageReaderEntry, MESSAGE_READERS};
//!
//! #[linkme::distributed_slice(MESSAGE_READERS)]
//! static STRING_READER: MessageReaderEntry = MessageReaderEntry {
//!     name: "string",
//!     description: "UTF-8 text reader",
//!     order: 0,
//!     default_codec: true,
//!     factory: |config| Ok(Arc::new(StringMessageReader::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Codec
//!
//! ```ignore
//! use hs_application::registry::resolve_message_reader;
//!
//! let reader = resolve_message_reader("string", &CodecConfig::default())?;
//! ```
//!
//! Slice order depends on link order, so every listing is sorted by
//! `(order, name)`.

pub mod config;
pub mod reader;
pub mod writer;

pub use config::{CodecConfig, DEFAULT_MAX_IN_MEMORY_SIZE};
pub use reader::{
    MESSAGE_READERS, MessageReaderEntry, default_message_readers, list_message_readers,
    resolve_message_reader,
};
pub use writer::{
    MESSAGE_WRITERS, MessageWriterEntry, default_message_writers, list_message_writers,
    resolve_message_writer,
};
