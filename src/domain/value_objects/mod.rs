//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod anchor;
pub mod rect;

pub use anchor::{Anchor, AnchorPair};
pub use rect::{Bounds, Insets, Size};
