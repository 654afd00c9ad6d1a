//! Tests for the codec registry
//!
//! Registers test codecs into the linkme slices; no real codecs are linked
//! into this test binary, so the registry holds exactly these entries.

use std::sync::Arc;

use hs_application::HandlerStrategies;
use hs_application::registry::{
    CodecConfig, MESSAGE_READERS, MESSAGE_WRITERS, MessageReaderEntry, MessageWriterEntry,
    default_message_readers, list_message_readers, list_message_writers, resolve_message_reader,
    resolve_message_writer,
};
use hs_domain::ports::{MessageReader, MessageWriter};

use crate::support::{DummyMessageReader, DummyMessageWriter};

#[linkme::distributed_slice(MESSAGE_READERS)]
static LATE_READER: MessageReaderEntry = MessageReaderEntry {
    name: "late",
    description: "Registered last among defaults",
    order: 10,
    default_codec: true,
    factory: |_config: &CodecConfig| {
        let reader: Arc<dyn MessageReader> = Arc::new(DummyMessageReader::new("late"));
        Ok(reader)
    },
};

#[linkme::distributed_slice(MESSAGE_READERS)]
static EARLY_READER: MessageReaderEntry = MessageReaderEntry {
    name: "early",
    description: "Registered first among defaults",
    order: -10,
    default_codec: true,
    factory: |_config: &CodecConfig| {
        let reader: Arc<dyn MessageReader> = Arc::new(DummyMessageReader::new("early"));
        Ok(reader)
    },
};

#[linkme::distributed_slice(MESSAGE_READERS)]
static OPTIONAL_READER: MessageReaderEntry = MessageReaderEntry {
    name: "optional",
    description: "Available by name only",
    order: 0,
    default_codec: false,
    factory: |_config: &CodecConfig| {
        let reader: Arc<dyn MessageReader> = Arc::new(DummyMessageReader::new("optional"));
        Ok(reader)
    },
};

#[linkme::distributed_slice(MESSAGE_WRITERS)]
static LIMITED_WRITER: MessageWriterEntry = MessageWriterEntry {
    name: "limited",
    description: "Refuses configurations without a buffer",
    order: 0,
    default_codec: true,
    factory: |config: &CodecConfig| {
        if config.max_in_memory_size == 0 {
            return Err("max_in_memory_size must be positive".to_string());
        }
        let writer: Arc<dyn MessageWriter> = Arc::new(DummyMessageWriter::new("limited"));
        Ok(writer)
    },
};

#[test]
fn test_list_readers_sorted_by_order() {
    let names: Vec<&str> = list_message_readers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, ["early", "optional", "late"]);
}

#[test]
fn test_list_providers_has_descriptions() {
    for (name, description) in list_message_readers()
        .into_iter()
        .chain(list_message_writers())
    {
        assert!(
            !description.is_empty(),
            "Codec '{}' should have a description",
            name
        );
    }
}

#[test]
fn test_default_readers_skip_optional_entries() {
    let readers = default_message_readers(&CodecConfig::default()).expect("factories succeed");
    let names: Vec<&str> = readers.iter().map(|r| r.reader_name()).collect();
    assert_eq!(names, ["early", "late"]);
}

#[test]
fn test_resolve_optional_reader_by_name() {
    let reader =
        resolve_message_reader("optional", &CodecConfig::default()).expect("registered reader");
    assert_eq!(reader.reader_name(), "optional");
}

#[test]
fn test_resolve_unknown_writer_lists_available() {
    match resolve_message_writer("nonexistent_writer_xyz", &CodecConfig::default()) {
        Err(err) => assert!(err.contains("limited"), "{err}"),
        Ok(_) => panic!("Expected error for unknown writer"),
    }
}

#[test]
fn test_with_defaults_builds_registered_codecs() {
    let strategies = HandlerStrategies::with_defaults(&CodecConfig::default())
        .expect("default codecs build");

    assert_eq!(strategies.message_readers().count(), 2);
    assert_eq!(strategies.message_writers().count(), 1);
    assert!(strategies.view_resolvers().next().is_none());
}

#[test]
fn test_failing_factory_surfaces_codec_error() {
    let config = CodecConfig::default().with_max_in_memory_size(0);
    let err = HandlerStrategies::with_defaults(&config).expect_err("writer factory refuses");
    assert!(
        err.to_string().contains("max_in_memory_size must be positive"),
        "{err}"
    );
}
