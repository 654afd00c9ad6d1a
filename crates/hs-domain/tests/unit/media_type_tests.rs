//! Tests for media type matching as codecs use it

use hs_domain::ports::supports_media_type;
use hs_domain::value_objects::MediaType;

#[test]
fn test_text_wildcard_supported_by_plain_text_codec() {
    let supported = [MediaType::text_plain()];
    let requested: MediaType = "text/*".parse().expect("valid media type");
    assert!(supports_media_type(&supported, Some(&requested)));
}

#[test]
fn test_html_not_supported_by_json_codec() {
    let supported = [
        MediaType::application_json(),
        MediaType::parse("application/*+json").expect("valid media type"),
    ];
    assert!(!supports_media_type(&supported, Some(&MediaType::text_html())));
    assert!(supports_media_type(
        &supported,
        Some(&MediaType::parse("application/problem+json").expect("valid media type"))
    ));
}
