//! Provider constants

/// Registry name of the string codec
pub const STRING_CODEC_NAME: &str = "string";

/// Registry name of the JSON codec
pub const JSON_CODEC_NAME: &str = "json";

/// Registry position of the string codec among defaults
pub const STRING_CODEC_ORDER: i32 = 0;

/// Registry position of the JSON codec among defaults
pub const JSON_CODEC_ORDER: i32 = 10;

/// Default template suffix for the Tera view resolver
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".html";
