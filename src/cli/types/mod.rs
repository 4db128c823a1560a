//! Value types accepted on the command line.

pub mod format;

pub use format::OutputFormat;
