//! Domain layer - Pure computational logic
//!
//! The generator and its mixing functions. No I/O.

pub mod bounded;
pub mod mix;
pub mod splittable;
