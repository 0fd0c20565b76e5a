//! anchor-layout library
//!
//! Anchor-based relayout of child controls inside resizable containers.
//! Everything except `platform` is free of host windowing dependencies and
//! can be tested anywhere.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod domain;
pub mod platform;
pub mod shared;

pub use domain::{
    relayout, Anchor, AnchorPair, Bounds, Container, Control, ControlKind, DomainError,
    HostWindow, Insets, Size, Widget, WindowStack,
};
pub use shared::{ConfigError, FormConfig};
