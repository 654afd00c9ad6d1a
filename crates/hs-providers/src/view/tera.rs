//! Tera view resolver
//!
//! Maps a view name to a Tera template named `prefix + name + suffix`.
//! When a locale is given, `prefix + name + "_" + locale + suffix` is tried
//! first.

use std::sync::Arc;

use async_trait::async_trait;
use hs_domain::error::{Error, Result};
use hs_domain::ports::{Component, Model, View, ViewResolver};
use hs_domain::value_objects::MediaType;
use ::tera::{Context, Tera};

use crate::constants::DEFAULT_TEMPLATE_SUFFIX;

/// View resolver backed by in-memory Tera templates
///
/// # Example
///
/// ```
/// use hs_providers::TeraViewResolver;
///
/// let resolver = TeraViewResolver::new()
///     .with_template("home.html", "<h1>{{ title }}</h1>")
///     .expect("template parses");
/// assert!(resolver.has_view("home"));
/// ```
#[derive(Clone)]
pub struct TeraViewResolver {
    tera: Arc<Tera>,
    prefix: String,
    suffix: String,
    content_type: MediaType,
}

impl TeraViewResolver {
    /// Resolver with no templates, no prefix and an `.html` suffix
    pub fn new() -> Self {
        Self {
            tera: Arc::new(Tera::default()),
            prefix: String::new(),
            suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
            content_type: MediaType::text_html(),
        }
    }

    /// Set the template name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the template name suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the media type rendered views produce
    pub fn with_content_type(mut self, content_type: MediaType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Register a template under its full name
    pub fn with_template(mut self, name: &str, source: &str) -> Result<Self> {
        Arc::make_mut(&mut self.tera)
            .add_raw_template(name, source)
            .map_err(|e| Error::view(format!("Failed to parse template '{name}': {e}")))?;
        Ok(self)
    }

    /// Register several templates at once
    ///
    /// Templates may reference each other regardless of order.
    pub fn with_templates<I, N, S>(mut self, templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        Arc::make_mut(&mut self.tera)
            .add_raw_templates(templates)
            .map_err(|e| Error::view(format!("Failed to parse templates: {e}")))?;
        Ok(self)
    }

    fn template_name(&self, view_name: &str, locale: Option<&str>) -> String {
        match locale {
            Some(locale) => format!("{}{}_{}{}", self.prefix, view_name, locale, self.suffix),
            None => format!("{}{}{}", self.prefix, view_name, self.suffix),
        }
    }

    fn find_template(&self, view_name: &str, locale: Option<&str>) -> Option<String> {
        let candidates = locale
            .map(|l| self.template_name(view_name, Some(l)))
            .into_iter()
            .chain(std::iter::once(self.template_name(view_name, None)));

        candidates
            .into_iter()
            .find(|candidate| self.tera.get_template_names().any(|n| n == candidate.as_str()))
    }

    /// Whether a template exists for `view_name` (without locale)
    pub fn has_view(&self, view_name: &str) -> bool {
        self.find_template(view_name, None).is_some()
    }
}

impl Default for TeraViewResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewResolver for TeraViewResolver {
    fn resolver_name(&self) -> &str {
        "tera"
    }

    async fn resolve_view_name(
        &self,
        view_name: &str,
        locale: Option<&str>,
    ) -> Result<Option<Arc<dyn View>>> {
        let Some(template) = self.find_template(view_name, locale) else {
            return Ok(None);
        };
        tracing::debug!(view = view_name, template = %template, "Resolved Tera template");

        let view: Arc<dyn View> = Arc::new(TeraView {
            tera: Arc::clone(&self.tera),
            template,
            content_type: self.content_type.clone(),
        });
        Ok(Some(view))
    }
}

impl Component for TeraViewResolver {
    fn as_view_resolver(self: Arc<Self>) -> Option<Arc<dyn ViewResolver>> {
        Some(self)
    }
}

/// A single resolved Tera template
struct TeraView {
    tera: Arc<Tera>,
    template: String,
    content_type: MediaType,
}

#[async_trait]
impl View for TeraView {
    fn supported_media_types(&self) -> Vec<MediaType> {
        vec![self.content_type.clone()]
    }

    async fn render(&self, model: &Model, content_type: Option<&MediaType>) -> Result<Vec<u8>> {
        if let Some(requested) = content_type
            && !requested.is_compatible_with(&self.content_type)
        {
            return Err(Error::view(format!(
                "Template '{}' renders {}, not {}",
                self.template, self.content_type, requested
            )));
        }

        let context = Context::from_serialize(model)
            .map_err(|e| Error::view(format!("Invalid model: {e}")))?;
        let rendered = self
            .tera
            .render(&self.template, &context)
            .map_err(|e| Error::view(format!("Failed to render '{}': {e}", self.template)))?;
        Ok(rendered.into_bytes())
    }
}
