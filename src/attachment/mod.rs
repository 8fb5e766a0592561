//! Attachment records generated for images referenced by the HTML body.

use crate::resource::ByteResource;

/// How an attachment is presented in the outgoing multipart message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDisposition {
    /// Rendered inside the message body, referenced by content id.
    Inline,
    /// Offered as a downloadable file.
    Attachment,
}

impl std::fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentDisposition::Inline => write!(f, "inline"),
            ContentDisposition::Attachment => write!(f, "attachment"),
        }
    }
}

/// A message part to merge into the outgoing email.
///
/// `content_id` holds the full MIME Content-ID header value, angle brackets
/// included; the rewritten HTML references the bare id through `cid:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub resource: ByteResource,
    pub content_id: String,
    pub disposition: ContentDisposition,
}

impl Attachment {
    /// Inline attachment for the given content id (bare, without brackets).
    #[must_use]
    pub fn inline(resource: ByteResource, content_id: &str) -> Self {
        Self {
            resource,
            content_id: format!("<{content_id}>"),
            disposition: ContentDisposition::Inline,
        }
    }
}
