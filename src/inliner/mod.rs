//! HTML inlining engine.
//!
//! Rewrites a document so it is self-contained for email delivery: CSS rules
//! inlined into `style` attributes ([`CssInliner`]), image references either
//! embedded as base64 data URIs ([`EmbedImageInliner`]) or rewritten to
//! `cid:` references with attachment records ([`AttachImageInliner`]).
//!
//! CSS inlining runs first so the image pass operates on the final markup;
//! [`InlinePipeline`] wires the two together.
//!
//! Elements can opt out of a pass with [`SKIP_INLINE_ATTR`] and
//! [`SKIP_ATTACH_ATTR`] set to `"true"`.

pub mod attach;
pub mod css;
pub mod embed;
pub mod errors;
pub mod pipeline;
pub mod skip;
pub mod types;

pub use attach::AttachImageInliner;
pub use css::CssInliner;
pub use embed::EmbedImageInliner;
pub use errors::InlineError;
pub use pipeline::InlinePipeline;
pub use skip::{SKIP_ATTACH_ATTR, SKIP_INLINE_ATTR};
pub use types::{ImageResource, InlinedHtml, StyleRule, StylesheetResource};

use kuchiki::NodeRef;

/// Strategy rewriting image references into a message-local form.
pub trait ImageInliner: Send + Sync {
    /// Rewrite every non-opted-out `img` whose `src` equals a resource path.
    ///
    /// Malformed HTML is tolerated (best-effort parse); a resource matching
    /// zero elements is not an error, just unused.
    fn inline(&self, html: &str, images: &[ImageResource]) -> Result<InlinedHtml, InlineError>;
}

/// Serialize the rewritten document back to a string.
pub(crate) fn serialize(document: &NodeRef) -> Result<String, InlineError> {
    let mut output = Vec::new();
    document.serialize(&mut output)?;
    Ok(String::from_utf8(output)?)
}
