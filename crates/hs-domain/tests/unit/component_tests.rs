//! Tests for capability discovery on container components

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream;
use hs_domain::Result;
use hs_domain::ports::{
    BodyStream, CapabilityKind, Component, ElementStream, Hints, MessageReader, View,
    ViewResolver,
};
use hs_domain::value_objects::{ElementType, MediaType};

struct EchoReader;

impl MessageReader for EchoReader {
    fn reader_name(&self) -> &str {
        "echo"
    }

    fn can_read(&self, _element: &ElementType, _media_type: Option<&MediaType>) -> bool {
        true
    }

    fn readable_media_types(&self) -> Vec<MediaType> {
        vec![MediaType::all()]
    }

    fn read(&self, _element: &ElementType, _body: BodyStream, _hints: &Hints) -> ElementStream {
        Box::pin(stream::empty())
    }
}

impl Component for EchoReader {
    fn as_message_reader(self: Arc<Self>) -> Option<Arc<dyn MessageReader>> {
        Some(self)
    }
}

struct NoViews;

#[async_trait]
impl ViewResolver for NoViews {
    fn resolver_name(&self) -> &str {
        "none"
    }

    async fn resolve_view_name(
        &self,
        _view_name: &str,
        _locale: Option<&str>,
    ) -> Result<Option<Arc<dyn View>>> {
        Ok(None)
    }
}

impl Component for NoViews {
    fn as_view_resolver(self: Arc<Self>) -> Option<Arc<dyn ViewResolver>> {
        Some(self)
    }
}

#[test]
fn test_component_advertises_only_its_capabilities() {
    let reader: Arc<dyn Component> = Arc::new(EchoReader);
    assert!(reader.clone().implements(CapabilityKind::MessageReader));
    assert!(!reader.clone().implements(CapabilityKind::MessageWriter));
    assert!(!reader.implements(CapabilityKind::ViewResolver));

    let resolver: Arc<dyn Component> = Arc::new(NoViews);
    assert!(resolver.clone().implements(CapabilityKind::ViewResolver));
    assert!(resolver.as_message_reader().is_none());
}

#[tokio::test]
async fn test_default_read_one_on_empty_stream() {
    let reader = EchoReader;
    let body: BodyStream = Box::pin(stream::empty());
    let element = reader
        .read_one(&ElementType::of::<String>(), body, &Hints::new())
        .await
        .expect("read_one should succeed");
    assert!(element.is_none());
}

#[test]
fn test_capability_kind_names() {
    let names: Vec<&str> = CapabilityKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["message_reader", "message_writer", "view_resolver"]);
    assert_eq!(CapabilityKind::ViewResolver.to_string(), "view_resolver");
}
