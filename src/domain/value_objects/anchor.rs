//! Anchor value object - per-axis resize policy
//!
//! An anchor says which parts of a control track which parts of its
//! container when the container's inner size changes. Each control has one
//! anchor per axis and the two axes never interact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Size};
use crate::domain::errors::DomainError;

/// Resize policy for one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Fixed to the near edge (left/top)
    #[default]
    Min,
    /// Fixed to the far edge (right/bottom)
    Max,
    /// Fixed relative to the container midpoint
    Center,
    /// Both edges fixed; stretches with the container
    MinAndMax,
    /// Near edge fixed, far edge follows the midpoint
    MinAndCenter,
    /// Near edge follows the midpoint, far edge fixed
    MaxAndCenter,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Min,
        Anchor::Max,
        Anchor::Center,
        Anchor::MinAndMax,
        Anchor::MinAndCenter,
        Anchor::MaxAndCenter,
    ];

    /// Recompute `(position, extent)` on one axis for a container whose
    /// inner extent went from `old` to `new`.
    ///
    /// Centers use truncating division for both `old` and `new`, so the
    /// rounding never drifts across repeated passes. Results are not
    /// clamped and arithmetic wraps on overflow.
    pub fn apply(self, pos: i32, extent: i32, old: i32, new: i32) -> (i32, i32) {
        let delta = new.wrapping_sub(old);
        let old_center = old / 2;
        let new_center = new / 2;
        let center_delta = new_center.wrapping_sub(old_center);

        match self {
            Anchor::Min => (pos, extent),
            Anchor::Max => (pos.wrapping_add(delta), extent),
            Anchor::Center => (new_center.wrapping_sub(old_center.wrapping_sub(pos)), extent),
            Anchor::MinAndMax => (pos, extent.wrapping_add(delta)),
            Anchor::MinAndCenter => (pos, extent.wrapping_add(center_delta)),
            Anchor::MaxAndCenter => (
                pos.wrapping_add(center_delta),
                extent.wrapping_add(delta).wrapping_sub(center_delta),
            ),
        }
    }

    /// Kebab-case name used in form descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Min => "min",
            Anchor::Max => "max",
            Anchor::Center => "center",
            Anchor::MinAndMax => "min-and-max",
            Anchor::MinAndCenter => "min-and-center",
            Anchor::MaxAndCenter => "max-and-center",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Anchor::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| DomainError::Parse(format!("unknown anchor '{}'", s)))
    }
}

/// Horizontal and vertical anchors of one control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorPair {
    pub horizontal: Anchor,
    pub vertical: Anchor,
}

impl AnchorPair {
    pub fn new(horizontal: Anchor, vertical: Anchor) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Anchored to all four edges
    pub fn fill() -> Self {
        Self::new(Anchor::MinAndMax, Anchor::MinAndMax)
    }

    /// Compute new bounds for a control after its container's inner size
    /// changed from `old` to `new`.
    pub fn apply(&self, bounds: Bounds, old: Size, new: Size) -> Bounds {
        let (x, width) = self
            .horizontal
            .apply(bounds.x, bounds.width, old.width, new.width);
        let (y, height) = self
            .vertical
            .apply(bounds.y, bounds.height, old.height, new.height);
        Bounds::new(x, y, width, height)
    }
}

impl fmt::Display for AnchorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.horizontal, self.vertical)
    }
}
