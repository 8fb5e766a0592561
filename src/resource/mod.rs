//! Resolved resource content shared by the resolver and inliner layers.

/// A resource resolved to in-memory bytes.
///
/// Produced by the resolver layer, consumed by the inliners. Immutable once
/// resolved: inlining passes read it, they never write back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Short name of the resource, usually the last path segment.
    pub name: String,
    /// The scheme-local path the resource was resolved from.
    pub path: String,
    /// Raw content bytes.
    pub content: Vec<u8>,
    /// Media type of the content, e.g. `image/gif` or `text/css`.
    pub media_type: String,
}

impl ResolvedResource {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        content: Vec<u8>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content,
            media_type: media_type.into(),
        }
    }
}

/// A named byte payload carried as a message part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteResource {
    pub name: String,
    pub content: Vec<u8>,
}

impl ByteResource {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Media type derived from the path extension.
///
/// Covers the types that show up in email bodies; anything unknown falls
/// back to `application/octet-stream`.
#[must_use]
pub fn media_type_for_path(path: &str) -> &'static str {
    match std::path::Path::new(path)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("gif") => "image/gif",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css",
        Some("html" | "htm") => "text/html",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_from_extension() {
        assert_eq!(media_type_for_path("images/logo.GIF"), "image/gif");
        assert_eq!(media_type_for_path("css/mail.css"), "text/css");
        assert_eq!(media_type_for_path("no-extension"), "application/octet-stream");
    }
}
