use crate::{communities, EdgeWeights, Partition};
use algograph::graph::*;
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

pub fn conductance<G, C>(
    graph: &G,
    partition: &Partition<C>,
) -> HashMap<C, f64, ahash::RandomState>
where
    G: QueryableGraph + DirectedOrNot,
    C: Copy + Eq + Hash,
{
    weighted_conductance(graph, partition, &EdgeWeights::default())
}

pub fn weighted_conductance<G, C>(
    graph: &G,
    partition: &Partition<C>,
    weights: &EdgeWeights,
) -> HashMap<C, f64, ahash::RandomState>
where
    G: QueryableGraph + DirectedOrNot,
    C: Copy + Eq + Hash,
{
    communities(partition)
        .into_iter()
        .map(|(c, members)| (c, community_conductance(graph, &members, weights)))
        .collect()
}

pub fn community_conductance<G>(
    graph: &G,
    community: &HashSet<VertexId, ahash::RandomState>,
    weights: &EdgeWeights,
) -> f64
where
    G: QueryableGraph + DirectedOrNot,
{
    // An edge with both endpoints inside the community contributes to
    // `internal` once per endpoint on undirected graphs.
    let mut internal = 0.0;
    let mut boundary = 0.0;
    let mut neighbors: HashSet<VertexId, ahash::RandomState> =
        HashSet::with_hasher(ahash::RandomState::new());
    for u in community.iter() {
        assert!(graph.contains_vertex(u), "vertex out of graph: {u:?}");
        neighbors.clear();
        for e in graph.out_edges(u) {
            // parallel edges collapse into a single neighbor
            if !neighbors.insert(e.sink) {
                continue;
            }
            let w = if G::DIRECTED_OR_NOT {
                weights.get(&e.id).copied().unwrap_or(1.0)
            } else {
                1.0
            };
            if community.contains(&e.sink) {
                internal += w;
            } else {
                boundary += w;
            }
        }
    }
    if internal == 0.0 {
        1.0
    } else {
        2.0 * boundary / (2.0 * internal + boundary)
    }
}
