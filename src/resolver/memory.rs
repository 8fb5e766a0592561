//! Preloaded in-memory resources.
//!
//! The bundled-asset equivalent of a classpath: content registered once at
//! startup, typically from `include_bytes!` or generated templates.

use std::collections::HashMap;

use crate::resource::{media_type_for_path, ResolvedResource};

use super::errors::{ResolutionError, ResolutionResult};
use super::ResourceResolver;

/// Resolves paths against a fixed table of preloaded entries.
///
/// Conditional: `supports` accepts only registered paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content under a path, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(path.into(), content.into());
        self
    }
}

impl ResourceResolver for MemoryResolver {
    fn resolve(&self, path: &str) -> ResolutionResult<ResolvedResource> {
        let content = self
            .entries
            .get(path)
            .ok_or_else(|| ResolutionError::NotFound {
                path: path.to_string(),
            })?;
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Ok(ResolvedResource::new(
            name,
            path,
            content.clone(),
            media_type_for_path(path),
        ))
    }

    fn supports(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }
}
