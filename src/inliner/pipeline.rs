//! Combined transformation: CSS inlining first, then the image strategy.

use super::css::CssInliner;
use super::errors::InlineError;
use super::types::{ImageResource, InlinedHtml, StylesheetResource};
use super::ImageInliner;

/// The full transformation a message body goes through before delivery:
/// stylesheet rules inlined, then image references rewritten by the
/// configured strategy.
pub struct InlinePipeline {
    css: CssInliner,
    images: Box<dyn ImageInliner>,
}

impl InlinePipeline {
    pub fn new(images: impl ImageInliner + 'static) -> Self {
        Self {
            css: CssInliner::new(),
            images: Box::new(images),
        }
    }

    /// Transform the document and collect the attachments the caller merges
    /// into the outgoing message.
    pub fn process(
        &self,
        html: &str,
        stylesheets: &[StylesheetResource],
        images: &[ImageResource],
    ) -> Result<InlinedHtml, InlineError> {
        let css_inlined = self.css.inline(html, stylesheets)?;
        self.images.inline(&css_inlined, images)
    }
}
