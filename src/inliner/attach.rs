//! Attach strategy: image references rewritten to generated content ids,
//! with one attachment record per matched resource.

use kuchiki::traits::TendrilSink;

use crate::attachment::Attachment;
use crate::id_generator::IdGenerator;
use crate::resource::ByteResource;

use super::embed::img_selector;
use super::errors::InlineError;
use super::skip;
use super::types::{ImageResource, InlinedHtml};
use super::ImageInliner;

/// Rewrites every matching `img` to a `cid:` reference and generates one
/// inline attachment per matched resource.
///
/// A resource matching no `img` is skipped entirely. Several `img` tags
/// sharing one path share a single attachment and content id. Distinct
/// resource entries are never deduplicated, even when their bytes are
/// identical: each entry gets its own attachment and content id.
pub struct AttachImageInliner {
    id_generator: Box<dyn IdGenerator>,
}

impl AttachImageInliner {
    pub fn new(id_generator: impl IdGenerator + 'static) -> Self {
        Self {
            id_generator: Box::new(id_generator),
        }
    }
}

impl ImageInliner for AttachImageInliner {
    fn inline(&self, html: &str, images: &[ImageResource]) -> Result<InlinedHtml, InlineError> {
        let document = kuchiki::parse_html().one(html);
        let mut attachments = Vec::with_capacity(images.len());

        for image in images {
            let Ok(matches) = document.select(&img_selector(&image.path)) else {
                log::warn!("skipping image with unselectable path '{}'", image.path);
                continue;
            };
            let targets: Vec<_> = matches
                .filter(|img| !skip::is_attach_skipped(img))
                .collect();
            if targets.is_empty() {
                continue;
            }
            let content_id = self.id_generator.generate(&image.name);
            log::debug!("attaching '{}' as content id {content_id}", image.path);
            for img in &targets {
                img.attributes
                    .borrow_mut()
                    .insert("src", format!("cid:{content_id}"));
            }
            attachments.push(Attachment::inline(
                ByteResource::new(image.name.clone(), image.content.clone()),
                &content_id,
            ));
        }

        Ok(InlinedHtml {
            html: super::serialize(&document)?,
            attachments,
        })
    }
}
