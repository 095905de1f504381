//! Split-tree dump driver
//!
//! Replays a fixed sequence of draws and splits so that two implementations
//! of the generator can be compared value by value:
//!
//! ```text
//! root            dump
//! l = root        r = l.split()     dump l, dump r
//! ll = l          lr = ll.split()   dump ll, dump lr
//! rl = r          rr = rl.split()   dump rl, dump rr
//! ```
//!
//! `l` continues the root's stream while `r` is split from it; the two must
//! diverge. Each dump draws `count` i64, then `count` i32, then `count` f64.

use crate::constants::{SPLIT_TREE_NODES, VALUES_PER_ROUND};
use crate::domain::mix::Mixer;
use crate::domain::splittable::SplittableRng;
use std::convert::Infallible;
use tracing::debug;

/// Upper bound on preallocated entries in [`collect_split_tree`]
const MAX_PREALLOC: usize = 1 << 16;

/// Position of a dump in the split-tree, in visiting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Root,
    L,
    R,
    LL,
    LR,
    RL,
    RR,
}

impl Node {
    /// All nodes in visiting order
    pub const ALL: [Node; SPLIT_TREE_NODES] = [
        Node::Root,
        Node::L,
        Node::R,
        Node::LL,
        Node::LR,
        Node::RL,
        Node::RR,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Node::Root => "root",
            Node::L => "l",
            Node::R => "r",
            Node::LL => "ll",
            Node::LR => "lr",
            Node::RL => "rl",
            Node::RR => "rr",
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One drawn value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Long(i64),
    Int(i32),
    Double(f64),
}

/// Generators alive after the walk
///
/// `ll` is the root instance, continued through `l`; `rl` is the instance
/// split off as `r`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitTreeLeaves<M: Mixer> {
    pub ll: SplittableRng<M>,
    pub lr: SplittableRng<M>,
    pub rl: SplittableRng<M>,
    pub rr: SplittableRng<M>,
}

impl<M: Mixer> SplitTreeLeaves<M> {
    /// Gammas of the four distinct instances
    pub fn gammas(&self) -> [u64; 4] {
        [
            self.ll.gamma(),
            self.lr.gamma(),
            self.rl.gamma(),
            self.rr.gamma(),
        ]
    }
}

/// Walk the split-tree, passing every drawn value to `emit` in order
///
/// Stops at the first error returned by `emit`.
pub fn walk_split_tree<M, E, F>(
    root: SplittableRng<M>,
    count: usize,
    mut emit: F,
) -> Result<SplitTreeLeaves<M>, E>
where
    M: Mixer,
    F: FnMut(Node, Value) -> Result<(), E>,
{
    let mut root = root;
    dump_node(Node::Root, &mut root, count, &mut emit)?;

    let mut l = root;
    let mut r = l.split();
    dump_node(Node::L, &mut l, count, &mut emit)?;
    dump_node(Node::R, &mut r, count, &mut emit)?;

    let mut ll = l;
    let mut lr = ll.split();
    dump_node(Node::LL, &mut ll, count, &mut emit)?;
    dump_node(Node::LR, &mut lr, count, &mut emit)?;

    let mut rl = r;
    let mut rr = rl.split();
    dump_node(Node::RL, &mut rl, count, &mut emit)?;
    dump_node(Node::RR, &mut rr, count, &mut emit)?;

    Ok(SplitTreeLeaves { ll, lr, rl, rr })
}

/// Walk the split-tree and collect every value in order
pub fn collect_split_tree<M: Mixer>(root: SplittableRng<M>, count: usize) -> Vec<(Node, Value)> {
    let total = count.saturating_mul(SPLIT_TREE_NODES * VALUES_PER_ROUND);
    let mut values = Vec::with_capacity(total.min(MAX_PREALLOC));

    let walked = walk_split_tree(root, count, |node, value| {
        values.push((node, value));
        Ok::<(), Infallible>(())
    });
    match walked {
        Ok(_) => values,
        Err(never) => match never {},
    }
}

/// Number of values a walk with `count` emits
pub fn split_tree_len(count: usize) -> usize {
    count.saturating_mul(SPLIT_TREE_NODES * VALUES_PER_ROUND)
}

fn dump_node<M, E, F>(
    node: Node,
    rng: &mut SplittableRng<M>,
    count: usize,
    emit: &mut F,
) -> Result<(), E>
where
    M: Mixer,
    F: FnMut(Node, Value) -> Result<(), E>,
{
    debug!(
        %node,
        state = rng.state(),
        gamma = rng.gamma(),
        count,
        "dumping split-tree node"
    );

    for v in rng.iter_i64().take(count) {
        emit(node, Value::Long(v))?;
    }
    for v in rng.iter_i32().take(count) {
        emit(node, Value::Int(v))?;
    }
    for v in rng.iter_f64().take(count) {
        emit(node, Value::Double(v))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GOLDEN_GAMMA;
    use crate::domain::mix::{Jdk8, Murmur3};

    fn values_of(values: &[(Node, Value)], node: Node) -> Vec<Value> {
        values
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, v)| *v)
            .collect()
    }

    #[test]
    fn test_count_zero_emits_nothing() {
        let values = collect_split_tree(SplittableRng::<Jdk8>::new(0), 0);
        assert!(values.is_empty());
    }

    #[test]
    fn test_value_count_and_node_order() {
        let count = 3;
        let values = collect_split_tree(SplittableRng::<Jdk8>::new(1), count);
        assert_eq!(values.len(), split_tree_len(count));

        for (i, node) in Node::ALL.iter().enumerate() {
            let chunk = &values[i * 3 * count..(i + 1) * 3 * count];
            assert!(chunk.iter().all(|(n, _)| n == node), "node {} out of order", node);
        }
    }

    #[test]
    fn test_value_kinds_per_node() {
        let values = collect_split_tree(SplittableRng::<Jdk8>::new(9), 2);
        for node in Node::ALL {
            let kinds: Vec<&str> = values_of(&values, node)
                .iter()
                .map(|v| match v {
                    Value::Long(_) => "long",
                    Value::Int(_) => "int",
                    Value::Double(_) => "double",
                })
                .collect();
            assert_eq!(kinds, ["long", "long", "int", "int", "double", "double"]);
        }
    }

    #[test]
    fn test_root_dump_mixes_weyl_sequence() {
        let values = collect_split_tree(SplittableRng::<Jdk8>::new(0), 2);
        let root = values_of(&values, Node::Root);

        let z = |k: u64| GOLDEN_GAMMA.wrapping_mul(k);
        assert_eq!(root[0], Value::Long(Jdk8::mix64(z(1)) as i64));
        assert_eq!(root[1], Value::Long(Jdk8::mix64(z(2)) as i64));
        assert_eq!(root[2], Value::Int(Jdk8::mix32(z(3)) as i32));
        assert_eq!(root[3], Value::Int(Jdk8::mix32(z(4)) as i32));
    }

    #[test]
    fn test_continuation_follows_root_stream() {
        let count = 2;
        let values = collect_split_tree(SplittableRng::<Jdk8>::new(77), count);

        // Root draws 3 * count values, then split consumes two more steps
        let mut replay = SplittableRng::<Jdk8>::new(77);
        for _ in 0..3 * count + 2 {
            replay.next_u64();
        }
        assert_eq!(values_of(&values, Node::L)[0], Value::Long(replay.next_i64()));
    }

    #[test]
    fn test_continuation_and_split_diverge() {
        for seed in [0u64, 1, 42, u64::MAX, GOLDEN_GAMMA] {
            let values = collect_split_tree(SplittableRng::<Murmur3>::new(seed), 4);
            assert_ne!(
                values_of(&values, Node::L),
                values_of(&values, Node::R),
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_leaves_have_odd_gammas() {
        let leaves = walk_split_tree(SplittableRng::<Jdk8>::new(3), 1, |_, _| Ok::<(), ()>(()))
            .unwrap();
        assert_eq!(leaves.ll.gamma(), GOLDEN_GAMMA);
        for gamma in leaves.gammas() {
            assert_eq!(gamma & 1, 1);
        }
    }

    #[test]
    fn test_emit_error_stops_walk() {
        let mut seen = 0;
        let result = walk_split_tree(SplittableRng::<Jdk8>::new(3), 5, |node, _| {
            seen += 1;
            if node == Node::R { Err("sink closed") } else { Ok(()) }
        });
        assert_eq!(result, Err("sink closed"));
        // root and l dumped fully, first value of r
        assert_eq!(seen, 2 * 15 + 1);
    }

    #[test]
    fn test_node_labels() {
        let labels: Vec<String> = Node::ALL.iter().map(|n| n.to_string()).collect();
        assert_eq!(labels, ["root", "l", "r", "ll", "lr", "rl", "rr"]);
    }
}
