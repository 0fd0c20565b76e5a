//! Platform abstraction layer
//!
//! Host adapters that commit control bounds to native windows. Currently
//! only Windows (win32) is supported.

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "windows")]
pub use win32::*;
