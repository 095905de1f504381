//! Generator and dump constants
//!
//! Note: mixer multipliers are defined in domain/mix.rs next to the functions using them.

// =============================================================================
// Generator parameters
// =============================================================================

/// Default gamma for root generators (odd, 2^64 / golden ratio)
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Scale applied to the top 53 bits of a draw to land in [0, 1)
pub const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Number of low bits discarded when turning a 64-bit draw into a double
pub const DOUBLE_SHIFT: u32 = 64 - 53;

// =============================================================================
// Gamma repair parameters
// =============================================================================

/// Gammas with fewer bit transitions than this are repaired
pub const MIN_GAMMA_TRANSITIONS: u32 = 24;

/// Alternating pattern xor-ed into low-transition gammas (keeps bit 0 set)
pub const GAMMA_REPAIR_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

// =============================================================================
// Dump layout
// =============================================================================

/// Number of generators visited by the split-tree driver
pub const SPLIT_TREE_NODES: usize = 7;

/// Value kinds emitted per node (i64, i32, f64)
pub const VALUES_PER_ROUND: usize = 3;

/// Digits printed after the decimal point for doubles
pub const DOUBLE_PRECISION: usize = 11;
