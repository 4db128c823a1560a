//! Core utilities shared across the dashboard client
//!
//! - `fs`: small file helpers for the config file and rendered output

pub mod fs;

// Re-export commonly used items for convenience
pub use fs::{try_read_to_string, write_output, write_string};
