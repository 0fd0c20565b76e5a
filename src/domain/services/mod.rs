//! Domain Services - operations that span several entities

pub mod relayout;

pub use relayout::relayout;
