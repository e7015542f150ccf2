use crate::{communities, volume, Partition};
use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

pub fn modularity<G, C>(graph: &G, partition: &Partition<C>) -> f64
where
    G: QueryableGraph,
    C: Copy + Eq + Hash,
{
    let m = graph.edge_size() as f64;
    if m == 0.0 {
        return 0.0;
    }
    let mut intra: HashMap<C, usize, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());
    for e in graph.iter_edges() {
        let (Some(cu), Some(cv)) = (partition.get(&e.source), partition.get(&e.sink)) else {
            continue;
        };
        if cu == cv {
            *intra.entry(*cu).or_insert(0) += 1;
        }
    }
    let mut q = 0.0;
    for (c, members) in communities(partition).iter() {
        let m_c = intra.get(c).copied().unwrap_or(0) as f64;
        let vol_c = volume(graph, members) as f64;
        q += m_c / m - (vol_c / (2.0 * m)).powi(2);
    }
    q
}
