//! Golden split-tree dumps
//!
//! The `jdk8.*` files are output of `java.util.SplittableRandom`; the
//! `murmur3.*` file uses the MurmurHash3 finalizer constants, which Java does
//! not ship, and was produced from an independent model of that mixer.
//!
//! Each file holds the full split-tree dump (7 nodes x 3 kinds x count lines)
//! for one `(mixer, count, seed)`.

use splitrand::{MixKind, render_split_tree};

const JDK8_COUNT2_SEED0: &str = include_str!("data/jdk8.count2.seed0.out.txt");
const JDK8_COUNT4_SEED_AAAA: &str =
    include_str!("data/jdk8.count4.seed-6148914691236517206.out.txt");
const MURMUR3_COUNT2_SEED0: &str = include_str!("data/murmur3.count2.seed0.out.txt");

fn assert_matches_reference(reference: &str, kind: MixKind, seed: i64, count: usize) {
    let expected: Vec<&str> = reference.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    assert_eq!(expected.len(), 7 * 3 * count, "reference length");

    let output = render_split_tree(kind, seed, count).unwrap();
    let actual: Vec<&str> = output.lines().collect();
    assert_eq!(actual.len(), expected.len(), "output length");

    for (i, (a, e)) in actual.iter().zip(&expected).enumerate() {
        assert_eq!(a, e, "mismatch at line {}", i + 1);
    }
}

#[test]
fn jdk8_count2_seed0_matches_reference() {
    assert_matches_reference(JDK8_COUNT2_SEED0, MixKind::Jdk8, 0, 2);
}

#[test]
fn jdk8_count4_alternating_seed_matches_reference() {
    // 0xAAAAAAAAAAAAAAAA as a signed long
    assert_matches_reference(JDK8_COUNT4_SEED_AAAA, MixKind::Jdk8, -6148914691236517206, 4);
}

#[test]
fn murmur3_count2_seed0_matches_reference() {
    assert_matches_reference(MURMUR3_COUNT2_SEED0, MixKind::Murmur3, 0, 2);
}

#[test]
fn shorter_count_is_not_a_prefix_of_the_tree() {
    // Split points move with count, so only the root block is shared
    let two = render_split_tree(MixKind::Jdk8, 0, 2).unwrap();
    let four = render_split_tree(MixKind::Jdk8, 0, 4).unwrap();
    let two: Vec<&str> = two.lines().collect();
    let four: Vec<&str> = four.lines().collect();

    assert_eq!(two[0..2], four[0..2]);
    assert_ne!(two[6..8], four[12..14]);
}
