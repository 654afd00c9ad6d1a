//! Message Codec Ports
//!
//! Contracts for the readers and writers a handler uses to turn request
//! bodies into typed elements and typed elements into response bodies.
//!
//! Bodies travel as streams of byte chunks and elements as streams of
//! type-erased values; a codec advertises through `can_read`/`can_write`
//! which element types and media types it accepts, so the registry can
//! pick the first matching one.

use std::any::Any;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::error::Result;
use crate::value_objects::{ElementType, MediaType};

/// A decoded (or to-be-encoded) value
pub type Element = Box<dyn Any + Send>;

/// Stream of body chunks
pub type BodyStream = BoxStream<'static, Result<Vec<u8>>>;

/// Stream of elements
pub type ElementStream = BoxStream<'static, Result<Element>>;

/// Additional codec hints, e.g. a log prefix or a charset override
pub type Hints = HashMap<String, String>;

/// Message Reader Port
///
/// Decodes a body stream into a stream of elements of a requested type.
///
/// # Example
///
/// ```ignore
/// use hs_domain::ports::MessageReader;
/// use hs_domain::value_objects::{ElementType, MediaType};
///
/// if reader.can_read(&ElementType::of::<String>(), Some(&MediaType::text_plain())) {
///     let mut elements = reader.read(&ElementType::of::<String>(), body, &hints);
/// }
/// ```
#[async_trait]
pub trait MessageReader: Send + Sync {
    /// Name used in logs and diagnostics
    fn reader_name(&self) -> &str;

    /// Whether this reader can decode `element` from a body of `media_type`
    ///
    /// `None` means the content type is unknown.
    fn can_read(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool;

    /// Media types this reader supports
    fn readable_media_types(&self) -> Vec<MediaType>;

    /// Decode `body` into a stream of elements
    fn read(&self, element: &ElementType, body: BodyStream, hints: &Hints) -> ElementStream;

    /// Decode `body` into at most one element
    async fn read_one(
        &self,
        element: &ElementType,
        body: BodyStream,
        hints: &Hints,
    ) -> Result<Option<Element>> {
        self.read(element, body, hints).next().await.transpose()
    }
}

/// Message Writer Port
///
/// Encodes a stream of elements into a body stream.
pub trait MessageWriter: Send + Sync {
    /// Name used in logs and diagnostics
    fn writer_name(&self) -> &str;

    /// Whether this writer can encode `element` as `media_type`
    ///
    /// `None` means any content type is acceptable.
    fn can_write(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool;

    /// Media types this writer supports
    fn writable_media_types(&self) -> Vec<MediaType>;

    /// Encode `input` into a body stream
    fn write(
        &self,
        input: ElementStream,
        element: &ElementType,
        content_type: Option<&MediaType>,
        hints: &Hints,
    ) -> BodyStream;
}

/// Whether any of `supported` is compatible with `requested`
///
/// Shared by codec implementations; an unknown media type always matches.
pub fn supports_media_type(supported: &[MediaType], requested: Option<&MediaType>) -> bool {
    match requested {
        None => true,
        Some(requested) => supported.iter().any(|m| m.is_compatible_with(requested)),
    }
}
