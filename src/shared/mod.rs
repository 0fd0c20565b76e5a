//! Shared Utilities Module
//!
//! Contains configuration shared by the library and the command-line tool.

pub mod config;

pub use config::{ConfigError, ControlSpec, FormConfig, FormSpec, LoggingConfig};
