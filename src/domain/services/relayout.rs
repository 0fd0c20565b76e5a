//! Anchor relayout engine
//!
//! Recomputes child bounds when a container's inner size changes. Each child
//! is handled on its own from its current bounds and anchor pair, so the
//! result for one child never depends on its siblings or on list order.

use crate::domain::entities::Control;
use crate::domain::value_objects::Size;

/// Reposition every child for an inner size change from `old` to `new`.
///
/// `old` must be the inner size that was in effect when the children were
/// last laid out. Hidden and disabled children are laid out too.
pub fn relayout<C: Control + ?Sized>(children: &mut [Box<C>], old: Size, new: Size) {
    for child in children.iter_mut() {
        let bounds = child.anchors().apply(child.bounds(), old, new);
        child.set_bounds(bounds);
    }
}
