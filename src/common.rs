use algograph::graph::*;
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

pub type Partition<C> = HashMap<VertexId, C, ahash::RandomState>;
pub type EdgeWeights = HashMap<EdgeId, f64, ahash::RandomState>;

pub fn communities<C: Copy + Eq + Hash>(
    partition: &Partition<C>,
) -> HashMap<C, HashSet<VertexId, ahash::RandomState>, ahash::RandomState> {
    let mut groups: HashMap<C, HashSet<VertexId, ahash::RandomState>, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());
    for (v, c) in partition.iter() {
        groups
            .entry(*c)
            .or_insert_with(|| HashSet::with_hasher(ahash::RandomState::new()))
            .insert(*v);
    }
    groups
}

pub fn volume<G: QueryableGraph>(graph: &G, s: &HashSet<VertexId, ahash::RandomState>) -> usize {
    let mut res = 0;
    for u in s.iter() {
        res += graph.out_edges(u).count();
    }
    res
}
