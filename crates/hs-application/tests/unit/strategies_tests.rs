//! Tests for the built handler strategies

use std::sync::Arc;

use hs_application::HandlerStrategies;
use hs_domain::ports::{MessageReader, MessageWriter, ViewResolver};
use hs_domain::value_objects::{ElementType, MediaType};

use crate::support::{
    BrokenViewResolver, DummyMessageReader, DummyMessageWriter, FixedViewResolver,
    UninitializedContainer, VecContainer, WritersUnavailableContainer, same_object,
};

#[test]
fn test_empty() {
    let strategies = HandlerStrategies::empty().build();

    assert!(strategies.message_readers().next().is_none());
    assert!(strategies.message_writers().next().is_none());
    assert!(strategies.view_resolvers().next().is_none());
    assert!(strategies.is_empty());
}

#[test]
fn test_default_is_empty() {
    assert!(HandlerStrategies::default().is_empty());
}

#[test]
fn test_explicit_reader_and_writer() {
    let reader: Arc<dyn MessageReader> = Arc::new(DummyMessageReader::new("dummy-reader"));
    let writer: Arc<dyn MessageWriter> = Arc::new(DummyMessageWriter::new("dummy-writer"));

    let strategies = HandlerStrategies::empty()
        .with_message_reader(reader.clone())
        .with_message_writer(writer.clone())
        .build();

    assert_eq!(strategies.message_readers().count(), 1);
    let first_reader = strategies.message_readers().next().expect("one reader");
    assert!(same_object(&first_reader, &reader));

    assert_eq!(strategies.message_writers().count(), 1);
    let first_writer = strategies.message_writers().next().expect("one writer");
    assert!(same_object(&first_writer, &writer));

    assert!(strategies.view_resolvers().next().is_none());
    assert!(!strategies.is_empty());
}

#[test]
fn test_accessors_are_restartable() {
    let strategies = HandlerStrategies::empty()
        .with_message_reader(Arc::new(DummyMessageReader::new("a")))
        .with_message_reader(Arc::new(DummyMessageReader::new("b")))
        .build();

    let first: Vec<String> = strategies
        .message_readers()
        .map(|r| r.reader_name().to_string())
        .collect();
    let second: Vec<String> = strategies
        .message_readers()
        .map(|r| r.reader_name().to_string())
        .collect();

    assert_eq!(first, second);
    assert_eq!(strategies.message_readers().len(), 2);
}

#[test]
fn test_independent_iterators() {
    let strategies = HandlerStrategies::empty()
        .with_message_reader(Arc::new(DummyMessageReader::new("a")))
        .with_message_reader(Arc::new(DummyMessageReader::new("b")))
        .build();

    let mut partially_consumed = strategies.message_readers();
    partially_consumed.next();

    let fresh: Vec<String> = strategies
        .message_readers()
        .map(|r| r.reader_name().to_string())
        .collect();
    assert_eq!(fresh, ["a", "b"]);
    assert_eq!(partially_consumed.len(), 1);
}

#[test]
fn test_registration_order_is_preserved() {
    let strategies = HandlerStrategies::empty()
        .with_message_reader(Arc::new(DummyMessageReader::new("a")))
        .with_message_reader(Arc::new(DummyMessageReader::new("b")))
        .with_message_writer(Arc::new(DummyMessageWriter::new("x")))
        .with_message_writer(Arc::new(DummyMessageWriter::new("y")))
        .build();

    let readers: Vec<String> = strategies
        .message_readers()
        .map(|r| r.reader_name().to_string())
        .collect();
    let writers: Vec<String> = strategies
        .message_writers()
        .map(|w| w.writer_name().to_string())
        .collect();

    assert_eq!(readers, ["a", "b"]);
    assert_eq!(writers, ["x", "y"]);
}

#[test]
fn test_of_container() {
    let container = VecContainer {
        readers: vec![Arc::new(DummyMessageReader::new("dummy-reader")) as Arc<dyn MessageReader>],
        writers: vec![Arc::new(DummyMessageWriter::new("dummy-writer")) as Arc<dyn MessageWriter>],
        view_resolvers: Vec::new(),
    };

    let strategies = HandlerStrategies::of(&container).expect("container is readable");

    assert!(
        strategies
            .message_readers()
            .all(|r| r.reader_name() == "dummy-reader")
    );
    assert!(
        strategies
            .message_writers()
            .all(|w| w.writer_name() == "dummy-writer")
    );
    assert_eq!(strategies.message_readers().count(), 1);
    assert_eq!(strategies.message_writers().count(), 1);
}

#[test]
fn test_of_uninitialized_container_fails() {
    let err = HandlerStrategies::of(&UninitializedContainer).expect_err("container is not ready");
    assert!(err.is_container_access());
    assert!(err.to_string().contains("not initialized"));
}

#[test]
fn test_of_fails_when_only_writers_are_unavailable() {
    let err = HandlerStrategies::of(&WritersUnavailableContainer)
        .expect_err("writer query fails");
    assert!(err.is_container_access());
    assert!(err.to_string().contains("writer singleton creation failed"));
}

#[test]
fn test_reader_for_picks_first_match() {
    let strategies = HandlerStrategies::empty()
        .with_message_reader(Arc::new(DummyMessageReader::for_media_type(
            "json",
            MediaType::application_json(),
        )))
        .with_message_reader(Arc::new(DummyMessageReader::new("text-1")))
        .with_message_reader(Arc::new(DummyMessageReader::new("text-2")))
        .build();

    let element = ElementType::of::<String>();
    let reader = strategies
        .reader_for(&element, Some(&MediaType::text_plain()))
        .expect("a text reader");
    assert_eq!(reader.reader_name(), "text-1");

    let any = strategies.reader_for(&element, None).expect("any reader");
    assert_eq!(any.reader_name(), "json");

    assert!(
        strategies
            .reader_for(&element, Some(&MediaType::text_html()))
            .is_none()
    );
}

#[test]
fn test_writer_for_picks_first_match() {
    let strategies = HandlerStrategies::empty()
        .with_message_writer(Arc::new(DummyMessageWriter::new("text")))
        .with_message_writer(Arc::new(DummyMessageWriter::for_media_type(
            "json",
            MediaType::application_json(),
        )))
        .build();

    let writer = strategies
        .writer_for(
            &ElementType::of::<String>(),
            Some(&MediaType::application_json()),
        )
        .expect("a json writer");
    assert_eq!(writer.writer_name(), "json");
}

#[tokio::test]
async fn test_resolve_view_in_registration_order() {
    let first: Arc<dyn ViewResolver> = Arc::new(FixedViewResolver {
        name: "first",
        views: vec!["home"],
    });
    let second: Arc<dyn ViewResolver> = Arc::new(FixedViewResolver {
        name: "second",
        views: vec!["home", "about"],
    });
    let strategies = HandlerStrategies::empty()
        .with_view_resolver(first)
        .with_view_resolver(second)
        .build();

    let model = hs_domain::ports::Model::new();

    let home = strategies
        .resolve_view("home", None)
        .await
        .expect("resolution succeeds")
        .expect("home exists");
    assert_eq!(home.render(&model, None).await.unwrap(), b"first:home");

    let about = strategies
        .resolve_view("about", Some("en"))
        .await
        .expect("resolution succeeds")
        .expect("about exists");
    assert_eq!(about.render(&model, None).await.unwrap(), b"second:about");

    let missing = strategies.resolve_view("missing", None).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_resolve_view_propagates_resolver_errors() {
    let strategies = HandlerStrategies::empty()
        .with_view_resolver(Arc::new(BrokenViewResolver))
        .with_view_resolver(Arc::new(FixedViewResolver {
            name: "fallback",
            views: vec!["home"],
        }))
        .build();

    let result = strategies.resolve_view("home", None).await;
    assert!(result.is_err());
}

#[test]
fn test_debug_lists_names() {
    let strategies = HandlerStrategies::empty()
        .with_message_reader(Arc::new(DummyMessageReader::new("dummy-reader")))
        .build();
    let debug = format!("{strategies:?}");
    assert!(debug.contains("dummy-reader"), "{debug}");
}
