//! Embed strategy: image references rewritten to base64 data URIs.

use base64::Engine;
use kuchiki::traits::TendrilSink;

use super::errors::InlineError;
use super::skip;
use super::types::{ImageResource, InlinedHtml};
use super::ImageInliner;

/// Rewrites every matching `img` to a self-contained `data:` URI.
///
/// Produces no attachments. Re-running on its own output is a no-op: data
/// URIs never equal a resource path.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbedImageInliner;

impl EmbedImageInliner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageInliner for EmbedImageInliner {
    fn inline(&self, html: &str, images: &[ImageResource]) -> Result<InlinedHtml, InlineError> {
        let document = kuchiki::parse_html().one(html);

        for image in images {
            let Ok(matches) = document.select(&img_selector(&image.path)) else {
                log::warn!("skipping image with unselectable path '{}'", image.path);
                continue;
            };
            let uri = data_uri(image);
            // Attribute-only mutation: direct iteration is safe.
            for img in matches {
                if skip::is_attach_skipped(&img) {
                    continue;
                }
                img.attributes.borrow_mut().insert("src", uri.clone());
            }
        }

        Ok(InlinedHtml {
            html: super::serialize(&document)?,
            attachments: Vec::new(),
        })
    }
}

/// Selector matching `img` tags referencing exactly this path.
pub(super) fn img_selector(path: &str) -> String {
    format!("img[src=\"{path}\"]")
}

/// `data:{media_type};base64,{content}`, with the buffer sized up front.
fn data_uri(image: &ImageResource) -> String {
    let encoded_len = base64::encoded_len(image.content.len(), false).unwrap_or(0);
    let mut uri = String::with_capacity(encoded_len + image.media_type.len() + 13);
    uri.push_str("data:");
    uri.push_str(&image.media_type);
    uri.push_str(";base64,");
    base64::engine::general_purpose::STANDARD.encode_string(&image.content, &mut uri);
    uri
}
