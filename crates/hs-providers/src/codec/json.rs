//! JSON codec
//!
//! Reads and writes `serde_json::Value` elements.

use std::sync::Arc;

use futures::{TryStreamExt, future, stream};
use hs_application::registry::{
    CodecConfig, MESSAGE_READERS, MESSAGE_WRITERS, MessageReaderEntry, MessageWriterEntry,
};
use hs_domain::error::{Error, Result};
use hs_domain::ports::{
    BodyStream, Component, Element, ElementStream, Hints, MessageReader, MessageWriter,
    supports_media_type,
};
use hs_domain::value_objects::{ElementType, MediaType};
use serde_json::Value;

use super::collect_body;
use crate::constants::{JSON_CODEC_NAME, JSON_CODEC_ORDER};

fn json_media_types() -> Vec<MediaType> {
    vec![
        MediaType::application_json(),
        MediaType::new("application", "*+json"),
    ]
}

/// Reader decoding a JSON body into one `serde_json::Value`
#[derive(Debug, Clone)]
pub struct JsonMessageReader {
    max_in_memory_size: usize,
}

impl JsonMessageReader {
    /// Reader with the default buffer limit
    pub fn new() -> Self {
        Self::from_config(&CodecConfig::default())
    }

    /// Reader honoring the limits in `config`
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            max_in_memory_size: config.max_in_memory_size,
        }
    }
}

impl Default for JsonMessageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageReader for JsonMessageReader {
    fn reader_name(&self) -> &str {
        JSON_CODEC_NAME
    }

    fn can_read(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool {
        element.is::<Value>() && supports_media_type(&json_media_types(), media_type)
    }

    fn readable_media_types(&self) -> Vec<MediaType> {
        json_media_types()
    }

    fn read(&self, element: &ElementType, body: BodyStream, _hints: &Hints) -> ElementStream {
        if !element.is::<Value>() {
            let err = Error::codec(format!("JSON reader cannot produce {element}"));
            return Box::pin(stream::once(future::ready(Err(err))));
        }

        let limit = self.max_in_memory_size;
        Box::pin(stream::once(async move {
            let bytes = collect_body(body, limit).await?;
            let value: Value = serde_json::from_slice(&bytes)?;
            Ok::<Element, Error>(Box::new(value))
        }))
    }
}

impl Component for JsonMessageReader {
    fn as_message_reader(self: Arc<Self>) -> Option<Arc<dyn MessageReader>> {
        Some(self)
    }
}

/// Writer encoding `serde_json::Value` elements
///
/// A single element is written as one document; zero or several elements
/// are written as a JSON array.
#[derive(Debug, Clone, Default)]
pub struct JsonMessageWriter;

impl JsonMessageWriter {
    /// Create a JSON writer
    pub fn new() -> Self {
        Self
    }
}

fn into_value(element: Element) -> Result<Value> {
    element
        .downcast::<Value>()
        .map(|value| *value)
        .map_err(|_| Error::codec("JSON writer received a non-Value element"))
}

impl MessageWriter for JsonMessageWriter {
    fn writer_name(&self) -> &str {
        JSON_CODEC_NAME
    }

    fn can_write(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool {
        element.is::<Value>() && supports_media_type(&json_media_types(), media_type)
    }

    fn writable_media_types(&self) -> Vec<MediaType> {
        json_media_types()
    }

    fn write(
        &self,
        input: ElementStream,
        _element: &ElementType,
        _content_type: Option<&MediaType>,
        _hints: &Hints,
    ) -> BodyStream {
        Box::pin(stream::once(async move {
            let elements: Vec<Element> = input.try_collect().await?;
            let mut values = elements
                .into_iter()
                .map(into_value)
                .collect::<Result<Vec<Value>>>()?;

            let document = if values.len() == 1 {
                values.remove(0)
            } else {
                Value::Array(values)
            };
            Ok::<Vec<u8>, Error>(serde_json::to_vec(&document)?)
        }))
    }
}

impl Component for JsonMessageWriter {
    fn as_message_writer(self: Arc<Self>) -> Option<Arc<dyn MessageWriter>> {
        Some(self)
    }
}

#[linkme::distributed_slice(MESSAGE_READERS)]
static JSON_READER: MessageReaderEntry = MessageReaderEntry {
    name: JSON_CODEC_NAME,
    description: "serde_json reader for application/json and application/*+json",
    order: JSON_CODEC_ORDER,
    default_codec: true,
    factory: |config: &CodecConfig| Ok(Arc::new(JsonMessageReader::from_config(config))),
};

#[linkme::distributed_slice(MESSAGE_WRITERS)]
static JSON_WRITER: MessageWriterEntry = MessageWriterEntry {
    name: JSON_CODEC_NAME,
    description: "serde_json writer for application/json and application/*+json",
    order: JSON_CODEC_ORDER,
    default_codec: true,
    factory: |_config: &CodecConfig| Ok(Arc::new(JsonMessageWriter::new())),
};
