//! Input and output types for the inlining passes.

use crate::attachment::Attachment;
use crate::resource::ResolvedResource;

use super::errors::InlineError;

/// An external stylesheet supplied to the CSS inliner: the path it was
/// resolved from plus its text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetResource {
    pub path: String,
    pub content: String,
}

impl StylesheetResource {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl TryFrom<&ResolvedResource> for StylesheetResource {
    type Error = InlineError;

    fn try_from(resource: &ResolvedResource) -> Result<Self, Self::Error> {
        let content =
            String::from_utf8(resource.content.clone()).map_err(|source| {
                InlineError::InvalidCssText {
                    path: resource.path.clone(),
                    source,
                }
            })?;
        Ok(Self::new(resource.path.clone(), content))
    }
}

/// An image referenced by the HTML body, resolved to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResource {
    pub name: String,
    pub path: String,
    pub content: Vec<u8>,
    pub media_type: String,
}

impl ImageResource {
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

impl From<ResolvedResource> for ImageResource {
    fn from(resource: ResolvedResource) -> Self {
        Self {
            name: resource.name,
            path: resource.path,
            content: resource.content,
            media_type: resource.media_type,
        }
    }
}

/// A parsed stylesheet rule: selector plus opaque declaration text.
///
/// Declarations are never parsed into individual properties; they are
/// concatenated verbatim so vendor syntax survives untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: String,
}

/// Result of an inlining pass: the rewritten document plus the attachments
/// generated for it (empty for the embed strategy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinedHtml {
    pub html: String,
    pub attachments: Vec<Attachment>,
}
