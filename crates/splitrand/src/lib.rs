//! splitrand - Bit-exact splittable PRNG
//!
//! This crate provides functionality to:
//! - Draw 64-bit, 32-bit and unit-interval values from a SplitMix generator
//! - Split generators into independent children
//! - Replay the fixed split-tree dump used to compare implementations
//!   against `java.util.SplittableRandom`

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::split_tree::{Node, Value, collect_split_tree, walk_split_tree};
pub use domain::bounded::BoundsError;
pub use domain::mix::{Jdk8, MixKind, Mixer, Murmur3};
pub use domain::splittable::SplittableRng;
pub use infra::dump_io::{render_split_tree, write_split_tree_with};
