//! Bounds and Size value objects
//!
//! Integer rectangles in container-local coordinates, matching the
//! pixel units the host window manager works in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Width and height of a container's inner content area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = DomainError;

    /// Parse `WIDTHxHEIGHT`, e.g. `800x600`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(|| DomainError::Parse(format!("expected WIDTHxHEIGHT, got '{}'", s)))?;
        let width = w
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::Parse(format!("bad width '{}': {}", w, e)))?;
        let height = h
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::Parse(format!("bad height '{}': {}", h, e)))?;
        Ok(Size::new(width, height))
    }
}

/// A control rectangle defined by position and size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Create bounds from position and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Border and chrome thickness around a container's content area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(amount: i32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Inner size left over from an outer size
    pub fn shrink(&self, outer: Size) -> Size {
        Size::new(
            outer.width - self.left - self.right,
            outer.height - self.top - self.bottom,
        )
    }

    /// Outer size needed around an inner size
    pub fn grow(&self, inner: Size) -> Size {
        Size::new(
            inner.width + self.left + self.right,
            inner.height + self.top + self.bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_size_and_display() {
        let b = Bounds::new(10, 20, 100, 50);

        assert_eq!(b.size(), Size::new(100, 50));
        assert_eq!(b.to_string(), "(10, 20, 100, 50)");
        assert_eq!(Size::new(800, 600).to_string(), "800x600");
    }

    #[test]
    fn test_size_parse() {
        assert_eq!("800x600".parse::<Size>().unwrap(), Size::new(800, 600));
        assert_eq!(" 10X-4 ".parse::<Size>().unwrap(), Size::new(10, -4));
        assert!("800".parse::<Size>().is_err());
        assert!("axb".parse::<Size>().is_err());
    }

    #[test]
    fn test_insets_shrink() {
        let insets = Insets::new(1, 20, 1, 1);
        assert_eq!(insets.shrink(Size::new(602, 421)), Size::new(600, 400));
        assert_eq!(insets.grow(Size::new(600, 400)), Size::new(602, 421));
    }
}
