//! View Resolution Ports
//!
//! A view resolver maps a logical view name (as returned by a handler) to a
//! [`View`] able to render a model.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::MediaType;

/// Model passed to a view when rendering
pub type Model = serde_json::Map<String, serde_json::Value>;

/// Renderable view
#[async_trait]
pub trait View: Send + Sync {
    /// Media types this view can render
    fn supported_media_types(&self) -> Vec<MediaType>;

    /// Render `model` into a response body
    async fn render(&self, model: &Model, content_type: Option<&MediaType>) -> Result<Vec<u8>>;
}

/// View Resolver Port
///
/// Resolvers are consulted in registration order; `Ok(None)` means "not
/// mine" and lets the next resolver try.
#[async_trait]
pub trait ViewResolver: Send + Sync {
    /// Name used in logs and diagnostics
    fn resolver_name(&self) -> &str;

    /// Resolve `view_name` for an optional locale tag
    async fn resolve_view_name(
        &self,
        view_name: &str,
        locale: Option<&str>,
    ) -> Result<Option<Arc<dyn View>>>;
}
