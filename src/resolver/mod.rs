//! Lookup-prefix resource resolution.
//!
//! A resource path may carry a lookup prefix terminated by a single `:`,
//! selecting which resolver handles it: `"classpath:/css/mail.css"`,
//! `"file:/var/templates/mail.html"`, `"string:Hello"`. A path without a
//! delimiter is handled by the resolver registered under the empty scheme,
//! when one exists.
//!
//! The scheme table is assembled once at configuration time through
//! [`LookupResolverBuilder`] and read-only afterwards.

pub mod errors;
pub mod file;
pub mod lookup;
pub mod memory;
pub mod relative;
pub mod string;

pub use errors::{ResolutionError, ResolutionResult};
pub use file::FileResolver;
pub use lookup::{LookupResolver, LookupResolverBuilder};
pub use memory::MemoryResolver;
pub use relative::RelativeResolver;
pub use string::StringResolver;

use crate::resource::ResolvedResource;

/// Maps a resource path to resolved byte content.
pub trait ResourceResolver: Send + Sync {
    /// Resolve the path to its content.
    fn resolve(&self, path: &str) -> ResolutionResult<ResolvedResource>;

    /// Whether this resolver can handle the path.
    ///
    /// Unconditional resolvers accept everything (the default); conditional
    /// ones narrow it down, e.g. to the set of preloaded entries.
    fn supports(&self, _path: &str) -> bool {
        true
    }
}
