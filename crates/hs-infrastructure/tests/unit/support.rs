//! Shared test components

use std::env;
use std::sync::Arc;

use futures::stream;
use hs_domain::ports::{
    BodyStream, Component, ElementStream, Hints, MessageReader, MessageWriter,
};
use hs_domain::value_objects::{ElementType, MediaType};

/// Codec serving as both reader and writer for `text/csv`
pub struct CsvCodec;

impl MessageReader for CsvCodec {
    fn reader_name(&self) -> &str {
        "csv"
    }

    fn can_read(&self, _element: &ElementType, media_type: Option<&MediaType>) -> bool {
        media_type.is_some_and(|m| m.subtype() == "csv")
    }

    fn readable_media_types(&self) -> Vec<MediaType> {
        vec![MediaType::new("text", "csv")]
    }

    fn read(&self, _element: &ElementType, _body: BodyStream, _hints: &Hints) -> ElementStream {
        Box::pin(stream::empty())
    }
}

impl MessageWriter for CsvCodec {
    fn writer_name(&self) -> &str {
        "csv"
    }

    fn can_write(&self, _element: &ElementType, media_type: Option<&MediaType>) -> bool {
        media_type.is_some_and(|m| m.subtype() == "csv")
    }

    fn writable_media_types(&self) -> Vec<MediaType> {
        vec![MediaType::new("text", "csv")]
    }

    fn write(
        &self,
        _input: ElementStream,
        _element: &ElementType,
        _content_type: Option<&MediaType>,
        _hints: &Hints,
    ) -> BodyStream {
        Box::pin(stream::empty())
    }
}

impl Component for CsvCodec {
    fn as_message_reader(self: Arc<Self>) -> Option<Arc<dyn MessageReader>> {
        Some(self)
    }

    fn as_message_writer(self: Arc<Self>) -> Option<Arc<dyn MessageWriter>> {
        Some(self)
    }
}

/// Helper to set env var safely
///
/// Callers use variable names unique to their test.
pub fn set_env(key: &str, value: &str) {
    // SAFETY: every test touches its own variables only
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
pub fn remove_env(key: &str) {
    // SAFETY: every test touches its own variables only
    unsafe {
        env::remove_var(key);
    }
}
