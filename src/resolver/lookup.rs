//! Scheme-to-resolver lookup mapping.

use std::collections::HashMap;

use crate::resource::ResolvedResource;

use super::errors::{ResolutionError, ResolutionResult};
use super::ResourceResolver;

/// Delimiter between the lookup prefix and the scheme-local path.
const LOOKUP_DELIMITER: char = ':';

/// Resolver that dispatches on the lookup prefix of the resource path.
///
/// The substring before the first `:` selects the delegate; everything after
/// it is passed through as the scheme-local path. A path without a delimiter
/// (or starting with one) uses the empty-string entry when registered.
///
/// A path whose scheme has no registered resolver is unsupported, not an
/// error; [`ResourceResolver::resolve`] on such a path fails with
/// [`ResolutionError::NoResolver`].
pub struct LookupResolver {
    mapping: HashMap<String, Box<dyn ResourceResolver>>,
}

impl LookupResolver {
    /// Start assembling a lookup table.
    #[must_use]
    pub fn builder() -> LookupResolverBuilder {
        LookupResolverBuilder::default()
    }

    /// The delegate registered for the path's lookup prefix, if any.
    #[must_use]
    pub fn resolver_for(&self, path: &str) -> Option<&dyn ResourceResolver> {
        let (lookup, _) = split_lookup(path);
        self.mapping.get(lookup).map(|resolver| resolver.as_ref())
    }
}

impl ResourceResolver for LookupResolver {
    fn resolve(&self, path: &str) -> ResolutionResult<ResolvedResource> {
        let (lookup, local) = split_lookup(path);
        let resolver = self
            .mapping
            .get(lookup)
            .ok_or_else(|| ResolutionError::NoResolver {
                lookup: lookup.to_string(),
                path: path.to_string(),
            })?;
        log::debug!("resolving '{path}' through lookup '{lookup}'");
        resolver.resolve(local)
    }

    fn supports(&self, path: &str) -> bool {
        let (lookup, local) = split_lookup(path);
        match self.mapping.get(lookup) {
            Some(resolver) => resolver.supports(local),
            None => {
                log::debug!("no resolver registered for lookup '{lookup}' (path: {path})");
                false
            }
        }
    }
}

/// Split a path into its lookup prefix and scheme-local remainder.
fn split_lookup(path: &str) -> (&str, &str) {
    path.split_once(LOOKUP_DELIMITER).unwrap_or(("", path))
}

/// Configuration-time assembly of the scheme-to-resolver table.
///
/// Registering a second resolver under the same lookup replaces the first.
/// Lookups must not contain the `:` delimiter; an entry that does can never
/// be selected.
#[derive(Default)]
pub struct LookupResolverBuilder {
    mapping: HashMap<String, Box<dyn ResourceResolver>>,
}

impl LookupResolverBuilder {
    /// Register a resolver for a lookup prefix, given without the delimiter.
    #[must_use]
    pub fn register(
        mut self,
        lookup: impl Into<String>,
        resolver: impl ResourceResolver + 'static,
    ) -> Self {
        self.mapping.insert(lookup.into(), Box::new(resolver));
        self
    }

    /// Register the resolver used for paths without a lookup prefix.
    #[must_use]
    pub fn default_resolver(self, resolver: impl ResourceResolver + 'static) -> Self {
        self.register("", resolver)
    }

    /// Finalize the table.
    #[must_use]
    pub fn build(self) -> LookupResolver {
        LookupResolver {
            mapping: self.mapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_delimiter_only() {
        assert_eq!(split_lookup("classpath:/x"), ("classpath", "/x"));
        assert_eq!(split_lookup("string:a:b"), ("string", "a:b"));
    }

    #[test]
    fn missing_delimiter_means_empty_lookup() {
        assert_eq!(split_lookup("/css/mail.css"), ("", "/css/mail.css"));
    }

    #[test]
    fn bare_delimiter_means_empty_lookup_and_path() {
        assert_eq!(split_lookup(":"), ("", ""));
        assert_eq!(split_lookup(":rest"), ("", "rest"));
    }
}
