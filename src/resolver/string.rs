//! Literal-content resolution.

use crate::resource::ResolvedResource;

use super::errors::ResolutionResult;
use super::ResourceResolver;

/// Treats the scheme-local path itself as the resource content.
///
/// Useful for one-off inline templates: `"string:Hello!"` resolves to the
/// bytes of `"Hello!"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringResolver;

impl ResourceResolver for StringResolver {
    fn resolve(&self, path: &str) -> ResolutionResult<ResolvedResource> {
        Ok(ResolvedResource::new(
            String::new(),
            path,
            path.as_bytes().to_vec(),
            "text/plain",
        ))
    }
}
