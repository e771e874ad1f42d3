use url::Url;

use crate::args::HttpMethod;
use crate::error::{AppError, AppResult, HttpError};
use crate::http::RequestSpec;

/// Marker replaced by the user name.
pub const USER_MARKER: char = '*';
/// Marker replaced by the positional index.
pub const INDEX_MARKER: char = '#';

/// Values substituted into a template. Absent values leave their marker in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateParams<'a> {
    pub user: Option<&'a str>,
    pub index: Option<usize>,
}

impl<'a> TemplateParams<'a> {
    #[must_use]
    pub const fn user(user: &'a str, index: usize) -> Self {
        Self {
            user: Some(user),
            index: Some(index),
        }
    }
}

/// A URL or absolute path with optional `*` (user) and `#` (index) markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate {
    raw: String,
}

impl EndpointTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn render(&self, params: &TemplateParams<'_>) -> String {
        let index = params.index.map(|value| value.to_string());
        let mut output = String::with_capacity(self.raw.len());
        for ch in self.raw.chars() {
            match (ch, params.user, index.as_deref()) {
                (USER_MARKER, Some(user), _) => output.push_str(user),
                (INDEX_MARKER, _, Some(index)) => output.push_str(index),
                _ => output.push(ch),
            }
        }
        output
    }

    /// Renders the template and resolves it against `base`. Templates that are
    /// already absolute URLs ignore `base`.
    ///
    /// # Errors
    ///
    /// Returns an error when the rendered URL cannot be parsed or joined.
    pub fn resolve(
        &self,
        base: &Url,
        params: &TemplateParams<'_>,
        method: HttpMethod,
    ) -> AppResult<RequestSpec> {
        let rendered = self.render(params);
        if let Ok(url) = Url::parse(&rendered) {
            return Ok(RequestSpec::new(method, url));
        }
        if base.cannot_be_a_base() {
            return Err(AppError::http(HttpError::CannotBeABase {
                url: base.to_string(),
            }));
        }
        let url = base.join(&rendered).map_err(|err| {
            AppError::http(HttpError::JoinUrlFailed {
                url: rendered,
                source: err,
            })
        })?;
        Ok(RequestSpec::new(method, url))
    }
}

impl From<&str> for EndpointTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EndpointTemplate {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
