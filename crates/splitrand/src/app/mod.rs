//! Application layer - Use case implementations
//!
//! This module drives generators through the dump and survey use cases.

pub mod args;
pub mod split_tree;
pub mod survey;
