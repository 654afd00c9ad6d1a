//! Media type value object
//!
//! A `type/subtype` pair with optional parameters. Only the matching rules
//! the registry needs are implemented: wildcard inclusion and
//! compatibility, including structured-syntax suffixes such as `+json`.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wildcard used for both type and subtype
pub const WILDCARD: &str = "*";

/// `*/*`
pub const ALL_VALUE: &str = "*/*";
/// `text/plain`
pub const TEXT_PLAIN_VALUE: &str = "text/plain";
/// `text/html`
pub const TEXT_HTML_VALUE: &str = "text/html";
/// `application/json`
pub const APPLICATION_JSON_VALUE: &str = "application/json";

/// Media type such as `text/plain;charset=UTF-8`
///
/// Type, subtype and parameter names are case-insensitive and stored in
/// lowercase. Parameters do not take part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaType {
    type_: String,
    subtype: String,
    parameters: BTreeMap<String, String>,
}

impl MediaType {
    /// Create a media type without parameters
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            type_: type_.into().to_ascii_lowercase(),
            subtype: subtype.into().to_ascii_lowercase(),
            parameters: BTreeMap::new(),
        }
    }

    /// `*/*`
    pub fn all() -> Self {
        Self::new(WILDCARD, WILDCARD)
    }

    /// `text/plain`
    pub fn text_plain() -> Self {
        Self::new("text", "plain")
    }

    /// `text/html`
    pub fn text_html() -> Self {
        Self::new("text", "html")
    }

    /// `application/json`
    pub fn application_json() -> Self {
        Self::new("application", "json")
    }

    /// Parse a media type string
    ///
    /// A lone `*` is accepted as a shorthand for `*/*`. Parameter values
    /// may be quoted strings, which can contain `;` and escaped quotes.
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = split_parameters(value)?.into_iter();
        let full_type = parts.next().unwrap_or_default().trim();
        if full_type.is_empty() {
            return Err(Error::invalid_argument("media type must not be empty"));
        }

        let (type_, subtype) = if full_type == WILDCARD {
            (WILDCARD, WILDCARD)
        } else {
            full_type.split_once('/').ok_or_else(|| {
                Error::invalid_argument(format!("media type '{value}' does not contain '/'"))
            })?
        };

        if !is_token(type_) || !is_token(subtype) {
            return Err(Error::invalid_argument(format!(
                "media type '{value}' contains an invalid token"
            )));
        }
        if type_ == WILDCARD && subtype != WILDCARD {
            return Err(Error::invalid_argument(format!(
                "wildcard type is legal only in '*/*': '{value}'"
            )));
        }

        let mut media_type = Self::new(type_, subtype);
        for parameter in parts.map(str::trim).filter(|p| !p.is_empty()) {
            let (name, raw) = parameter.split_once('=').ok_or_else(|| {
                Error::invalid_argument(format!("parameter '{parameter}' does not contain '='"))
            })?;
            let name = name.trim();
            if !is_token(name) {
                return Err(Error::invalid_argument(format!(
                    "invalid parameter name '{name}' in '{value}'"
                )));
            }
            media_type
                .parameters
                .insert(name.to_ascii_lowercase(), unquote(raw.trim()));
        }
        Ok(media_type)
    }

    /// Add a parameter, replacing any previous value
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Primary type, e.g. `text`
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Subtype, e.g. `plain`
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Parameter value by (case-insensitive) name
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `charset` parameter, if any
    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

    /// Structured-syntax suffix, e.g. `json` for `application/vnd.api+json`
    pub fn subtype_suffix(&self) -> Option<&str> {
        self.subtype
            .rsplit_once('+')
            .map(|(_, suffix)| suffix)
            .filter(|suffix| !suffix.is_empty())
    }

    /// Whether the type is `*`
    pub fn is_wildcard_type(&self) -> bool {
        self.type_ == WILDCARD
    }

    /// Whether the subtype is `*` or starts with `*+`
    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD || self.subtype.starts_with("*+")
    }

    /// Whether neither type nor subtype is a wildcard
    pub fn is_concrete(&self) -> bool {
        !self.is_wildcard_type() && !self.is_wildcard_subtype()
    }

    /// Whether this media type includes `other`
    ///
    /// `text/*` includes `text/plain`, `application/*+json` includes
    /// `application/vnd.api+json`, but not the other way around.
    pub fn includes(&self, other: &MediaType) -> bool {
        if self.is_wildcard_type() {
            return true;
        }
        if self.type_ != other.type_ {
            return false;
        }
        if self.subtype == other.subtype || self.subtype == WILDCARD {
            return true;
        }
        match self.subtype.strip_prefix("*+") {
            Some(suffix) => other.subtype_suffix() == Some(suffix),
            None => false,
        }
    }

    /// Whether this media type and `other` overlap
    ///
    /// Symmetric counterpart of [`MediaType::includes`].
    pub fn is_compatible_with(&self, other: &MediaType) -> bool {
        self.includes(other) || other.includes(self)
    }

    /// The media type without its parameters
    pub fn without_parameters(&self) -> Self {
        Self::new(self.type_.clone(), self.subtype.clone())
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c))
}

/// Split on `;` outside quoted strings
fn split_parameters(value: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ';' if !quoted => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if quoted {
        return Err(Error::invalid_argument(format!(
            "unterminated quoted string in '{value}'"
        )));
    }
    parts.push(&value[start..]);
    Ok(parts)
}

fn unquote(value: &str) -> String {
    let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) else {
        return value.to_string();
    };
    let mut unquoted = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unquoted.extend(chars.next()),
            c => unquoted.push(c),
        }
    }
    unquoted
}

fn write_parameter_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if is_token(value) {
        return f.write_str(value);
    }
    f.write_char('"')?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, ";{name}=")?;
            write_parameter_value(f, value)?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MediaType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.to_string()
    }
}
