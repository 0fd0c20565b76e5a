//! Domain Layer - layout logic with no host dependencies
//!
//! This layer contains:
//! - **Entities**: controls, containers, the window stack
//! - **Value Objects**: anchors, bounds, sizes, insets
//! - **Domain Services**: the anchor relayout engine
//! - **Domain Errors**: error types for domain operations

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use services::relayout;
pub use value_objects::*;
