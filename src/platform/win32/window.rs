//! Win32 child window adapter
//!
//! Commits bounds computed by the relayout engine to native child windows.

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetClientRect, SetWindowPos, SWP_NOACTIVATE, SWP_NOZORDER,
};

use crate::domain::{Bounds, HostWindow, Size};

/// A native child window that follows committed bounds
pub struct HwndHost {
    hwnd: HWND,
}

impl HwndHost {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl HostWindow for HwndHost {
    fn move_to(&mut self, bounds: Bounds) {
        let result = unsafe {
            SetWindowPos(
                self.hwnd,
                HWND::default(),
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                SWP_NOACTIVATE | SWP_NOZORDER,
            )
        };
        if let Err(e) = result {
            log!("SetWindowPos(hwnd={:?}, {}) failed: {:?}", self.hwnd, bounds, e);
        }
    }
}

/// Get window client area size, the inner size for a top-level form
pub fn client_size(hwnd: HWND) -> Size {
    let mut rect = RECT::default();
    let result = unsafe { GetClientRect(hwnd, &mut rect) };
    if let Err(e) = result {
        log!("GetClientRect(hwnd={:?}) failed: {:?}", hwnd, e);
        return Size::ZERO;
    }
    Size::new(rect.right - rect.left, rect.bottom - rect.top)
}
