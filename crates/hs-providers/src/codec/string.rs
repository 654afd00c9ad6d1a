//! String codec
//!
//! Reads and writes `String` elements as UTF-8 text.

use std::sync::Arc;

use futures::{StreamExt, future, stream};
use hs_application::registry::{
    CodecConfig, MESSAGE_READERS, MESSAGE_WRITERS, MessageReaderEntry, MessageWriterEntry,
};
use hs_domain::error::{Error, Result};
use hs_domain::ports::{
    BodyStream, Component, Element, ElementStream, Hints, MessageReader, MessageWriter,
    supports_media_type,
};
use hs_domain::value_objects::{ElementType, MediaType};

use super::{collect_body, is_utf8};
use crate::constants::{STRING_CODEC_NAME, STRING_CODEC_ORDER};

fn unsupported_charset(media_type: Option<&MediaType>) -> Option<Error> {
    let charset = media_type.and_then(MediaType::charset)?;
    (!is_utf8(charset)).then(|| Error::codec(format!("Unsupported charset '{charset}'")))
}

/// Reader decoding a text body into one `String`
///
/// # Example
///
/// ```
/// use hs_domain::ports::MessageReader;
/// use hs_domain::value_objects::{ElementType, MediaType};
/// use hs_providers::StringMessageReader;
///
/// let reader = StringMessageReader::new();
/// assert!(reader.can_read(&ElementType::of::<String>(), Some(&MediaType::text_plain())));
/// ```
#[derive(Debug, Clone)]
pub struct StringMessageReader {
    media_types: Vec<MediaType>,
    max_in_memory_size: usize,
}

impl StringMessageReader {
    /// Reader for `text/plain` and any other `text/*` body
    pub fn new() -> Self {
        Self::from_config(&CodecConfig::default())
    }

    /// Reader honoring the limits in `config`
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            media_types: vec![MediaType::text_plain(), MediaType::new("text", "*")],
            max_in_memory_size: config.max_in_memory_size,
        }
    }

    /// Also accept bodies of any media type
    pub fn all_media_types(mut self) -> Self {
        self.media_types.push(MediaType::all());
        self
    }
}

impl Default for StringMessageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageReader for StringMessageReader {
    fn reader_name(&self) -> &str {
        STRING_CODEC_NAME
    }

    fn can_read(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool {
        element.is::<String>() && supports_media_type(&self.media_types, media_type)
    }

    fn readable_media_types(&self) -> Vec<MediaType> {
        self.media_types.clone()
    }

    fn read(&self, element: &ElementType, body: BodyStream, hints: &Hints) -> ElementStream {
        if !element.is::<String>() {
            let err = Error::codec(format!("String reader cannot produce {element}"));
            return Box::pin(stream::once(future::ready(Err(err))));
        }
        if let Some(charset) = hints.get("charset").filter(|c| !is_utf8(c)) {
            let err = Error::codec(format!("Unsupported charset '{charset}'"));
            return Box::pin(stream::once(future::ready(Err(err))));
        }

        let limit = self.max_in_memory_size;
        Box::pin(stream::once(async move {
            let bytes = collect_body(body, limit).await?;
            let text = String::from_utf8(bytes)
                .map_err(|e| Error::codec(format!("Invalid UTF-8 body: {e}")))?;
            tracing::trace!(len = text.len(), "Decoded string body");
            Ok::<Element, Error>(Box::new(text))
        }))
    }
}

impl Component for StringMessageReader {
    fn as_message_reader(self: Arc<Self>) -> Option<Arc<dyn MessageReader>> {
        Some(self)
    }
}

/// Writer encoding `String` elements as UTF-8
#[derive(Debug, Clone)]
pub struct StringMessageWriter {
    media_types: Vec<MediaType>,
}

impl StringMessageWriter {
    /// Writer for `text/plain`
    pub fn new() -> Self {
        Self {
            media_types: vec![MediaType::text_plain()],
        }
    }
}

impl Default for StringMessageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageWriter for StringMessageWriter {
    fn writer_name(&self) -> &str {
        STRING_CODEC_NAME
    }

    fn can_write(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool {
        element.is::<String>() && supports_media_type(&self.media_types, media_type)
    }

    fn writable_media_types(&self) -> Vec<MediaType> {
        self.media_types.clone()
    }

    fn write(
        &self,
        input: ElementStream,
        _element: &ElementType,
        content_type: Option<&MediaType>,
        _hints: &Hints,
    ) -> BodyStream {
        if let Some(err) = unsupported_charset(content_type) {
            return Box::pin(stream::once(future::ready(Err(err))));
        }

        Box::pin(input.map(|item| -> Result<Vec<u8>> {
            let element = item?;
            let text = element
                .downcast::<String>()
                .map_err(|_| Error::codec("String writer received a non-String element"))?;
            Ok((*text).into_bytes())
        }))
    }
}

impl Component for StringMessageWriter {
    fn as_message_writer(self: Arc<Self>) -> Option<Arc<dyn MessageWriter>> {
        Some(self)
    }
}

#[linkme::distributed_slice(MESSAGE_READERS)]
static STRING_READER: MessageReaderEntry = MessageReaderEntry {
    name: STRING_CODEC_NAME,
    description: "UTF-8 text reader for text/plain and text/* bodies",
    order: STRING_CODEC_ORDER,
    default_codec: true,
    factory: |config: &CodecConfig| Ok(Arc::new(StringMessageReader::from_config(config))),
};

#[linkme::distributed_slice(MESSAGE_WRITERS)]
static STRING_WRITER: MessageWriterEntry = MessageWriterEntry {
    name: STRING_CODEC_NAME,
    description: "UTF-8 text writer for text/plain",
    order: STRING_CODEC_ORDER,
    default_codec: true,
    factory: |_config: &CodecConfig| Ok(Arc::new(StringMessageWriter::new())),
};
