//! Mixing functions
//!
//! A splittable generator walks a Weyl sequence and runs each state word
//! through a finalizer. Two constant sets are provided:
//!
//! - [`Jdk8`]: the constants of `java.util.SplittableRandom` (Stafford's
//!   "variant 13" for 64-bit output). Output of the dump tool is compared
//!   against Java, so this is the default.
//! - [`Murmur3`]: MurmurHash3 `fmix64` for 64-bit output, as in the original
//!   SplitMix paper, with a 32-bit fold in `mix_gamma`.
//!
//! Both sets share the gamma repair step: force the word odd, count bit
//! transitions, and flip alternating bits when there are fewer than 24.

use crate::constants::{GAMMA_REPAIR_MASK, MIN_GAMMA_TRANSITIONS};
use std::fmt::Debug;

// =============================================================================
// Multipliers
// =============================================================================

/// MurmurHash3 fmix64 multipliers
const MURMUR_M1: u64 = 0xFF51_AFD7_ED55_8CCD;
const MURMUR_M2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Stafford variant 13 multipliers (JDK `mix64`)
const STAFFORD13_M1: u64 = 0xBF58_476D_1CE4_E5B9;
const STAFFORD13_M2: u64 = 0x94D0_49BB_1331_11EB;

/// JDK `mix32` multipliers
const JDK_MIX32_M1: u64 = 0x62A9_D9ED_7997_05F5;
const JDK_MIX32_M2: u64 = 0xCB24_D0A5_C88C_35B3;

// =============================================================================
// Mixer trait
// =============================================================================

/// A complete set of finalizers for a splittable generator
///
/// Implementors are zero-sized markers; the generator is generic over them,
/// so the choice is made at compile time.
pub trait Mixer: Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Short name used on the command line and in logs
    const NAME: &'static str;

    /// Finalize a state word into a 64-bit output
    fn mix64(z: u64) -> u64;

    /// Finalize a state word into a 32-bit output
    fn mix32(z: u64) -> u32;

    /// Derive an odd, well-dispersed gamma from a raw state word
    fn mix_gamma(z: u64) -> u64;
}

/// Constants of `java.util.SplittableRandom`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Jdk8;

/// MurmurHash3-based constants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3;

impl Mixer for Jdk8 {
    const NAME: &'static str = "jdk8";

    #[inline]
    fn mix64(z: u64) -> u64 {
        let z = (z ^ (z >> 30)).wrapping_mul(STAFFORD13_M1);
        let z = (z ^ (z >> 27)).wrapping_mul(STAFFORD13_M2);
        z ^ (z >> 31)
    }

    #[inline]
    fn mix32(z: u64) -> u32 {
        let z = (z ^ (z >> 33)).wrapping_mul(JDK_MIX32_M1);
        ((z ^ (z >> 28)).wrapping_mul(JDK_MIX32_M2) >> 32) as u32
    }

    #[inline]
    fn mix_gamma(z: u64) -> u64 {
        let z = murmur_rounds(z);
        repair_gamma((z ^ (z >> 33)) | 1)
    }
}

impl Mixer for Murmur3 {
    const NAME: &'static str = "murmur3";

    #[inline]
    fn mix64(z: u64) -> u64 {
        let z = murmur_rounds(z);
        z ^ (z >> 33)
    }

    #[inline]
    fn mix32(z: u64) -> u32 {
        let z = (z ^ (z >> 33)).wrapping_mul(MURMUR_M1);
        ((z ^ (z >> 33)).wrapping_mul(MURMUR_M2) >> 32) as u32
    }

    #[inline]
    fn mix_gamma(z: u64) -> u64 {
        let z = murmur_rounds(z);
        repair_gamma((z ^ (z >> 32)) | 1)
    }
}

// =============================================================================
// Shared steps
// =============================================================================

/// The two multiply/xor-shift rounds of fmix64, without the final xor-shift
#[inline]
fn murmur_rounds(z: u64) -> u64 {
    let z = (z ^ (z >> 33)).wrapping_mul(MURMUR_M1);
    (z ^ (z >> 33)).wrapping_mul(MURMUR_M2)
}

/// Flip alternating bits of an odd candidate with too few bit transitions
#[inline]
fn repair_gamma(z: u64) -> u64 {
    let transitions = (z ^ (z >> 1)).count_ones();
    if transitions < MIN_GAMMA_TRANSITIONS {
        z ^ GAMMA_REPAIR_MASK
    } else {
        z
    }
}

// =============================================================================
// Runtime selection
// =============================================================================

/// Runtime tag for a [`Mixer`], used where the choice comes from input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MixKind {
    #[default]
    Jdk8,
    Murmur3,
}

impl MixKind {
    /// All supported kinds, in display order
    pub const ALL: [MixKind; 2] = [MixKind::Jdk8, MixKind::Murmur3];

    /// Command-line name of this kind
    pub fn name(self) -> &'static str {
        match self {
            MixKind::Jdk8 => Jdk8::NAME,
            MixKind::Murmur3 => Murmur3::NAME,
        }
    }

    /// Look up a kind by its command-line name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for MixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GOLDEN_GAMMA;

    #[test]
    fn test_jdk8_mix64_known_values() {
        assert_eq!(Jdk8::mix64(0), 0);
        assert_eq!(Jdk8::mix64(1), 0x5692_161D_100B_05E5);
        // First SplitMix64 output for seed 0
        assert_eq!(Jdk8::mix64(GOLDEN_GAMMA), 0xE220_A839_7B1D_CDAF);
        assert_eq!(Jdk8::mix64(0xDEAD_BEEF), 0x4E06_2702_EC92_9EEA);
    }

    #[test]
    fn test_jdk8_mix32_known_values() {
        assert_eq!(Jdk8::mix32(0), 0);
        assert_eq!(Jdk8::mix32(1), 0x171C_67A5);
        assert_eq!(Jdk8::mix32(GOLDEN_GAMMA), 0x30F1_39DD);
        assert_eq!(Jdk8::mix32(0xDEAD_BEEF), 0x6F3B_8303);
    }

    #[test]
    fn test_jdk8_mix_gamma_known_values() {
        // Zero has a single transition after forcing odd, so it gets repaired
        assert_eq!(Jdk8::mix_gamma(0), 0xAAAA_AAAA_AAAA_AAAB);
        assert_eq!(Jdk8::mix_gamma(1), 0xB456_BCFC_34C2_CB2D);
        assert_eq!(Jdk8::mix_gamma(GOLDEN_GAMMA), 0x9CA0_66F1_A4AB_2EEB);
        assert_eq!(Jdk8::mix_gamma(0xDEAD_BEEF), 0xD24B_D59F_862A_1DAD);
    }

    #[test]
    fn test_murmur3_mix64_is_fmix64() {
        assert_eq!(Murmur3::mix64(0), 0);
        assert_eq!(Murmur3::mix64(1), 0xB456_BCFC_34C2_CB2C);
        assert_eq!(Murmur3::mix64(GOLDEN_GAMMA), 0x9CA0_66F1_A4AB_2EEA);
        assert_eq!(Murmur3::mix64(0xDEAD_BEEF), 0xD24B_D59F_862A_1DAC);
    }

    #[test]
    fn test_murmur3_mix32_is_high_half_of_rounds() {
        for z in [0u64, 1, GOLDEN_GAMMA, 0xDEAD_BEEF, u64::MAX] {
            assert_eq!(Murmur3::mix32(z), (murmur_rounds(z) >> 32) as u32);
        }
        assert_eq!(Murmur3::mix32(1), 0xB456_BCFC);
    }

    #[test]
    fn test_murmur3_mix_gamma_known_values() {
        assert_eq!(Murmur3::mix_gamma(0), 0xAAAA_AAAA_AAAA_AAAB);
        assert_eq!(Murmur3::mix_gamma(1), 0xB456_BCFC_DABF_29AF);
        assert_eq!(Murmur3::mix_gamma(GOLDEN_GAMMA), 0x9CA0_66F1_765B_7B63);
        assert_eq!(Murmur3::mix_gamma(0xDEAD_BEEF), 0xD24B_D59F_3D44_22FD);
    }

    #[test]
    fn test_repair_gamma_preserves_oddness() {
        // 1 has one transition; the repaired value must stay odd
        let repaired = repair_gamma(1);
        assert_eq!(repaired, 0xAAAA_AAAA_AAAA_AAAB);
        assert_eq!(repaired & 1, 1);

        // A well-dispersed odd word passes through untouched
        assert_eq!(repair_gamma(GOLDEN_GAMMA), GOLDEN_GAMMA);
    }

    #[test]
    fn test_mix_gamma_always_odd() {
        let mut z = 0u64;
        for _ in 0..10_000 {
            assert_eq!(Jdk8::mix_gamma(z) & 1, 1, "jdk8 even gamma for {:#x}", z);
            assert_eq!(Murmur3::mix_gamma(z) & 1, 1, "murmur3 even gamma for {:#x}", z);
            z = z.wrapping_add(GOLDEN_GAMMA);
        }
    }

    #[test]
    fn test_mix_kind_names() {
        assert_eq!(MixKind::from_name("jdk8"), Some(MixKind::Jdk8));
        assert_eq!(MixKind::from_name("murmur3"), Some(MixKind::Murmur3));
        assert_eq!(MixKind::from_name("xorshift"), None);
        assert_eq!(MixKind::default(), MixKind::Jdk8);
        assert_eq!(MixKind::Murmur3.to_string(), "murmur3");
    }
}
