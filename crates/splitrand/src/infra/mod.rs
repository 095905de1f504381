//! Infrastructure layer - Text output
//!
//! This module handles value formatting and writing dumps to streams and files.

pub mod dump_io;
pub mod format;
