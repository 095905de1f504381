//! Seed survey
//!
//! Runs the split-tree for a range of seeds in parallel and checks, for every
//! generator produced, that its gamma is odd, and for every seed, that the
//! continued root stream and the split stream start differently.

use crate::app::split_tree::{Node, Value, walk_split_tree};
use crate::domain::mix::{Jdk8, MixKind, Mixer, Murmur3};
use crate::domain::splittable::SplittableRng;
use rayon::prelude::*;
use std::convert::Infallible;
use tracing::{debug, info};

#[cfg(feature = "fx-hash")]
type GammaSet = rustc_hash::FxHashSet<u64>;

#[cfg(not(feature = "fx-hash"))]
type GammaSet = std::collections::HashSet<u64>;

/// Aggregated survey result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyReport {
    /// Number of root seeds walked
    pub seeds_checked: u64,
    /// Number of generator instances whose gamma was checked
    pub generators_checked: u64,
    /// Gammas with bit 0 clear (must be zero)
    pub even_gammas: u64,
    /// Seeds where the continued and split streams drew the same first value
    pub continuation_collisions: u64,
    /// Distinct gamma values seen across all seeds
    pub distinct_gammas: usize,
}

impl SurveyReport {
    /// The gamma invariant held for every generator
    pub fn passed(&self) -> bool {
        self.even_gammas == 0
    }
}

/// Per-seed observations
#[derive(Debug, Clone, Default)]
struct SeedSurvey {
    gammas: Vec<u64>,
    collision: bool,
}

/// Partial aggregate built by one rayon worker
#[derive(Default)]
struct Partial {
    seeds: u64,
    generators: u64,
    even: u64,
    collisions: u64,
    gammas: GammaSet,
}

impl Partial {
    fn add(mut self, seed: SeedSurvey) -> Self {
        self.seeds += 1;
        self.generators += seed.gammas.len() as u64;
        self.even += seed.gammas.iter().filter(|&&g| g & 1 == 0).count() as u64;
        self.collisions += u64::from(seed.collision);
        self.gammas.extend(seed.gammas);
        self
    }

    fn merge(mut self, mut other: Self) -> Self {
        self.seeds += other.seeds;
        self.generators += other.generators;
        self.even += other.even;
        self.collisions += other.collisions;
        if self.gammas.len() < other.gammas.len() {
            std::mem::swap(&mut self.gammas, &mut other.gammas);
        }
        self.gammas.extend(other.gammas);
        self
    }
}

/// Survey `seed_count` consecutive seeds starting at `start_seed`
///
/// Each seed contributes the four generators alive after the split-tree walk
/// plus a chain of `depth` repeated splits from a fresh root.
pub fn survey_seeds<M: Mixer>(start_seed: u64, seed_count: u64, depth: usize) -> SurveyReport {
    let partial = (0..seed_count)
        .into_par_iter()
        .map(|i| survey_seed::<M>(start_seed.wrapping_add(i), depth))
        .fold(Partial::default, Partial::add)
        .reduce(Partial::default, Partial::merge);

    let report = SurveyReport {
        seeds_checked: partial.seeds,
        generators_checked: partial.generators,
        even_gammas: partial.even,
        continuation_collisions: partial.collisions,
        distinct_gammas: partial.gammas.len(),
    };

    info!(
        mixer = M::NAME,
        seeds = report.seeds_checked,
        generators = report.generators_checked,
        even_gammas = report.even_gammas,
        collisions = report.continuation_collisions,
        distinct_gammas = report.distinct_gammas,
        "survey finished"
    );
    report
}

/// [`survey_seeds`] with the mixer chosen at runtime
pub fn survey_seeds_with(kind: MixKind, start_seed: u64, seed_count: u64, depth: usize) -> SurveyReport {
    match kind {
        MixKind::Jdk8 => survey_seeds::<Jdk8>(start_seed, seed_count, depth),
        MixKind::Murmur3 => survey_seeds::<Murmur3>(start_seed, seed_count, depth),
    }
}

fn survey_seed<M: Mixer>(seed: u64, depth: usize) -> SeedSurvey {
    let mut first_l = None;
    let mut first_r = None;

    let walked = walk_split_tree(SplittableRng::<M>::new(seed), 1, |node, value| {
        match (node, value) {
            (Node::L, Value::Long(v)) => first_l = Some(v),
            (Node::R, Value::Long(v)) => first_r = Some(v),
            _ => {}
        }
        Ok::<(), Infallible>(())
    });
    let leaves = match walked {
        Ok(leaves) => leaves,
        Err(never) => match never {},
    };

    let mut gammas = Vec::with_capacity(4 + depth);
    gammas.extend(leaves.gammas());

    let mut current = SplittableRng::<M>::new(seed);
    for _ in 0..depth {
        current = current.split();
        gammas.push(current.gamma());
    }

    let collision = first_l == first_r;
    if collision {
        debug!(seed, "continuation and split streams collide");
    }

    SeedSurvey { gammas, collision }
}
