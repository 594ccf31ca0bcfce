//! # Core Module
//!
//! Configuration and shared plumbing for the echoline client.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;

// Re-export commonly used items
pub use config::Config;
