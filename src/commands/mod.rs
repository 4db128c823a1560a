//! Command implementations for the injury dashboard CLI

pub mod analysis;
pub mod common;
pub mod dashboard;
pub mod reference_lists;


pub use common::CommandContext;
