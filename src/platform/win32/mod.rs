//! Win32 platform implementation

pub mod window;

pub use window::{client_size, HwndHost};
