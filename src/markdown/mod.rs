//! Line-level Markdown primitives.
//!
//! - [`fence`]: fence marker detection and the `in_code` scan state
//! - [`escape`]: first-occurrence angle bracket escaping
//!
//! Both are pure and allocation-light; [`crate::escaper`] strings them
//! together into the document-level transformation.

mod escape;
mod fence;

pub use escape::{GT_ENTITY, LT_ENTITY, escape_first_angle_brackets};
pub use fence::{FENCE_MARKER, LineKind, ScanState, is_fence_marker};
