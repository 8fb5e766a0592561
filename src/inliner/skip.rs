//! Opt-out markers excluding elements from a transformation pass.
//!
//! The predicates are kept separate from the traversal code so new opt-out
//! rules never touch the rewriting algorithms.

use kuchiki::{ElementData, NodeDataRef};

/// Attribute excluding an element from CSS inlining.
pub const SKIP_INLINE_ATTR: &str = "data-skip-inline";

/// Attribute excluding an `img` from image inlining, both strategies.
pub const SKIP_ATTACH_ATTR: &str = "data-skip-attach";

const SKIP_VALUE: &str = "true";

/// Whether the element opted out of CSS inlining.
pub(crate) fn is_inline_skipped(element: &NodeDataRef<ElementData>) -> bool {
    has_marker(element, SKIP_INLINE_ATTR)
}

/// Whether the element opted out of image inlining.
pub(crate) fn is_attach_skipped(element: &NodeDataRef<ElementData>) -> bool {
    has_marker(element, SKIP_ATTACH_ATTR)
}

fn has_marker(element: &NodeDataRef<ElementData>, attribute: &str) -> bool {
    element.attributes.borrow().get(attribute) == Some(SKIP_VALUE)
}
