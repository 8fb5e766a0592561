//! Prefix/suffix decoration for resolver delegation.

use crate::resource::ResolvedResource;

use super::errors::ResolutionResult;
use super::ResourceResolver;

/// Wraps a resolver, concatenating a fixed prefix and suffix onto every path
/// before delegation, so callers can pass bare template names
/// (`"welcome"` instead of `"templates/welcome.html"`).
///
/// An empty prefix or suffix adds nothing.
pub struct RelativeResolver {
    delegate: Box<dyn ResourceResolver>,
    prefix: String,
    suffix: String,
}

impl RelativeResolver {
    pub fn new(
        delegate: impl ResourceResolver + 'static,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            delegate: Box::new(delegate),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    fn decorate(&self, path: &str) -> String {
        format!("{}{}{}", self.prefix, path, self.suffix)
    }
}

impl ResourceResolver for RelativeResolver {
    fn resolve(&self, path: &str) -> ResolutionResult<ResolvedResource> {
        self.delegate.resolve(&self.decorate(path))
    }

    fn supports(&self, path: &str) -> bool {
        self.delegate.supports(&self.decorate(path))
    }
}
