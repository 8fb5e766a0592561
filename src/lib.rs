//! Content transformation for HTML email delivery.
//!
//! Email clients ignore `<style>` blocks and cannot fetch external
//! references, so a document must be made self-contained before it is sent:
//! stylesheet rules are inlined into `style` attributes, and referenced
//! images are either embedded as base64 data URIs or attached to the message
//! and referenced by content id.
//!
//! The crate is organised in three layers:
//! - [`resolver`] — lookup-prefix resource resolution (`"classpath:/x"`,
//!   `"file:/y"`, or bare paths through a default scheme)
//! - [`inliner`] — the CSS inliner and the two image inlining strategies
//!   (embed as data URI, attach with `cid:` references)
//! - [`id_generator`] — pluggable content-id generation for attachments
//!
//! ```
//! use premail::CssInliner;
//!
//! let inliner = CssInliner::new();
//! let html = inliner.inline(
//!     "<html><head><style>p {color:navy}</style></head><body><p>Hi</p></body></html>",
//!     &[],
//! )?;
//! assert!(html.contains("style=\"color:navy; \""));
//! # Ok::<(), premail::InlineError>(())
//! ```

pub mod attachment;
pub mod id_generator;
pub mod inliner;
pub mod resolver;
pub mod resource;

pub use attachment::{Attachment, ContentDisposition};
pub use id_generator::{HashIdGenerator, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use inliner::{
    AttachImageInliner, CssInliner, EmbedImageInliner, ImageInliner, ImageResource, InlineError,
    InlinePipeline, InlinedHtml, StyleRule, StylesheetResource, SKIP_ATTACH_ATTR, SKIP_INLINE_ATTR,
};
pub use resolver::{
    FileResolver, LookupResolver, LookupResolverBuilder, MemoryResolver, RelativeResolver,
    ResolutionError, ResourceResolver, StringResolver,
};
pub use resource::{ByteResource, ResolvedResource};
