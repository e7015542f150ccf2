use crate::Partition;
use std::{collections::HashMap, hash::Hash};

pub fn nmi<A, B>(detected: &Partition<A>, truth: &Partition<B>) -> f64
where
    A: Copy + Eq + Hash,
    B: Copy + Eq + Hash,
{
    // labelings are joined by node id; nodes known to only one side drop out
    let mut joint: HashMap<(A, B), usize, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());
    let mut left: HashMap<A, usize, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());
    let mut right: HashMap<B, usize, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());
    let mut n = 0usize;
    for (v, a) in detected.iter() {
        let Some(b) = truth.get(v) else {
            continue;
        };
        *joint.entry((*a, *b)).or_insert(0) += 1;
        *left.entry(*a).or_insert(0) += 1;
        *right.entry(*b).or_insert(0) += 1;
        n += 1;
    }
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let h_left = entropy(left.values().copied(), n);
    let h_right = entropy(right.values().copied(), n);

    let mut mi = 0.0;
    for ((a, b), cnt) in joint.iter() {
        let p_ab = *cnt as f64 / n;
        let p_a = *left.get(a).unwrap() as f64 / n;
        let p_b = *right.get(b).unwrap() as f64 / n;
        mi += p_ab * (p_ab / (p_a * p_b)).ln();
    }

    let denom = h_left + h_right;
    if denom > 0.0 {
        2.0 * mi / denom
    } else {
        // two constant labelings agree perfectly
        1.0
    }
}

fn entropy(counts: impl Iterator<Item = usize>, n: f64) -> f64 {
    counts
        .map(|c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum()
}
