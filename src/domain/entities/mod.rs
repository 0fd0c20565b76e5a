//! Domain Entities - controls, containers and the window stack

pub mod container;
pub mod control;
pub mod window_stack;

pub use container::Container;
pub use control::{Control, ControlKind, HostWindow, Widget};
pub use window_stack::{Modality, WindowId, WindowStack};
