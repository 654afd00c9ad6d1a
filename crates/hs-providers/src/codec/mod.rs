//! Message codecs
//!
//! Readers buffer the whole body (bounded by `max_in_memory_size`) before
//! decoding it into a single element.

#[cfg(feature = "codec-json")]
pub mod json;
#[cfg(feature = "codec-string")]
pub mod string;

#[cfg(any(feature = "codec-string", feature = "codec-json"))]
use futures::StreamExt;
#[cfg(any(feature = "codec-string", feature = "codec-json"))]
use hs_domain::error::{Error, Result};
#[cfg(any(feature = "codec-string", feature = "codec-json"))]
use hs_domain::ports::BodyStream;

/// Concatenate `body`, failing once more than `max_in_memory_size` bytes arrive
#[cfg(any(feature = "codec-string", feature = "codec-json"))]
pub(crate) async fn collect_body(mut body: BodyStream, max_in_memory_size: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        if buffer.len() + chunk.len() > max_in_memory_size {
            return Err(Error::codec(format!(
                "Exceeded limit on max bytes to buffer: {max_in_memory_size}"
            )));
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

/// Whether `charset` names UTF-8
#[cfg(feature = "codec-string")]
pub(crate) fn is_utf8(charset: &str) -> bool {
    charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8")
}
