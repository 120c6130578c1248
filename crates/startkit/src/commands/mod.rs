//! CLI command implementations

pub mod start;
