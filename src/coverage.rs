use crate::{communities, volume, Partition};
use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

pub fn coverage<G, C>(graph: &G, partition: &Partition<C>) -> HashMap<C, f64, ahash::RandomState>
where
    G: QueryableGraph,
    C: Copy + Eq + Hash,
{
    let groups = communities(partition);
    let mut internal: HashMap<C, usize, ahash::RandomState> =
        HashMap::with_hasher(ahash::RandomState::new());
    for e in graph.iter_edges() {
        let (Some(cu), Some(cv)) = (partition.get(&e.source), partition.get(&e.sink)) else {
            continue;
        };
        if cu == cv {
            *internal.entry(*cu).or_insert(0) += 1;
        }
    }
    groups
        .iter()
        .map(|(c, members)| {
            let vol = volume(graph, members);
            let score = if vol == 0 {
                0.0
            } else {
                let m_c = internal.get(c).copied().unwrap_or(0);
                m_c as f64 / vol as f64
            };
            (*c, score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge_community() {
        let mut g = undirected::TreeBackedGraph::new();
        let u = g.add_vertex();
        let v = g.add_vertex();
        g.add_edge(u, v);

        let mut partition: Partition<usize> = Partition::default();
        partition.insert(u, 0);
        partition.insert(v, 0);

        // one internal edge against a volume of 2
        let scores = coverage(&g, &partition);
        assert_eq!(*scores.get(&0).unwrap(), 0.5);
    }

    #[test]
    fn edgeless_community_scores_zero() {
        let mut g = undirected::TreeBackedGraph::new();
        let u = g.add_vertex();
        let v = g.add_vertex();
        let w = g.add_vertex();
        g.add_edge(u, v);

        let mut partition: Partition<usize> = Partition::default();
        partition.insert(u, 0);
        partition.insert(v, 0);
        partition.insert(w, 1);

        let scores = coverage(&g, &partition);
        assert_eq!(*scores.get(&1).unwrap(), 0.0);
    }

    #[test]
    fn bridged_cliques() {
        const N: usize = 4;

        let mut g = undirected::TreeBackedGraph::new();
        let mut partition: Partition<usize> = Partition::default();
        let vs0 = add_clique(&mut g, N);
        let vs1 = add_clique(&mut g, N);
        for v in vs0.iter() {
            partition.insert(*v, 0);
        }
        for v in vs1.iter() {
            partition.insert(*v, 1);
        }
        g.add_edge(*vs0.first().unwrap(), *vs1.first().unwrap());

        // per clique: 6 internal edges, volume 13 with the bridge endpoint
        let scores = coverage(&g, &partition);
        for c in [0, 1] {
            let s = *scores.get(&c).unwrap();
            assert!((s - 6.0 / 13.0).abs() < 1e-9, "community {c}: {s}");
        }
    }

    #[test]
    fn empty_partition_yields_empty_result() {
        let g = undirected::TreeBackedGraph::new();
        let partition: Partition<usize> = Partition::default();
        assert!(coverage(&g, &partition).is_empty());
    }

    fn add_clique<G: GrowableGraph>(g: &mut G, n: usize) -> Vec<VertexId> {
        assert!(n > 0, "{n}");
        let v0 = g.add_vertex();
        let mut vs = vec![v0];
        for _ in 1..n {
            let v = g.add_vertex();
            vs.push(v);
        }
        let mut it0 = vs.iter();
        while let Some(v1) = it0.next() {
            for v2 in it0.clone() {
                g.add_edge(*v1, *v2);
            }
        }
        vs
    }
}
