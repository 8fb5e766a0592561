//! Filesystem-backed resource resolution.

use std::path::PathBuf;

use crate::resource::{media_type_for_path, ResolvedResource};

use super::errors::{ResolutionError, ResolutionResult};
use super::ResourceResolver;

/// Resolves paths against the filesystem, optionally under a base directory.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    base_dir: Option<PathBuf>,
}

impl FileResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every path relative to the given directory.
    #[must_use]
    pub fn rooted(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path.trim_start_matches('/')),
            None => PathBuf::from(path),
        }
    }
}

impl ResourceResolver for FileResolver {
    fn resolve(&self, path: &str) -> ResolutionResult<ResolvedResource> {
        let full = self.full_path(path);
        log::debug!("reading resource from file {}", full.display());
        let content = std::fs::read(&full).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ResolutionError::NotFound {
                path: full.display().to_string(),
            },
            _ => ResolutionError::Io {
                path: full.display().to_string(),
                source,
            },
        })?;
        let name = full
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
            .to_string();
        Ok(ResolvedResource::new(
            name,
            path,
            content,
            media_type_for_path(path),
        ))
    }
}
