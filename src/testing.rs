//! Helpers shared by the unit tests of this crate

use std::ops::Range;

use rand::Rng;

use crate::{gens::*, prelude::*};

/// Installs `env_logger` for the current test binary; repeated calls are fine
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a random weighted digraph with keys `0..n` and without self-loops
pub fn random_weighted_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    weights: Range<i64>,
    acyclic: bool,
) -> KeyedGraph<Node, i64> {
    WeightedGnp::new()
        .nodes(n)
        .prob(p)
        .weights(weights)
        .acyclic(acyclic)
        .graph(rng)
}

/// Decides acyclicity independently of DFS by repeatedly removing nodes without incoming edges
pub fn is_acyclic_by_peeling<G: AdjacencyList>(graph: &G) -> bool {
    let mut in_degree = vec![0usize; graph.len()];
    for Edge(_, v) in graph.edges() {
        in_degree[v as usize] += 1;
    }

    let mut sources = graph
        .vertices()
        .filter(|&u| in_degree[u as usize] == 0)
        .collect::<Vec<_>>();
    let mut removed = 0;
    while let Some(u) = sources.pop() {
        removed += 1;
        for v in graph.neighbors_of(u) {
            in_degree[v as usize] -= 1;
            if in_degree[v as usize] == 0 {
                sources.push(v);
            }
        }
    }

    removed == graph.vertices().count()
}

/// All-pairs shortest path distances by Floyd-Warshall, `None` = unreachable.
/// On negative cycles, distances saturate at `i64::MIN` instead of overflowing.
pub fn floyd_warshall(graph: &KeyedGraph<Node, i64>) -> Vec<Vec<Option<i64>>> {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];
    for u in 0..n {
        dist[u][u] = Some(0);
    }
    for WeightedEdge(u, v, w) in graph.weighted_edges() {
        let entry = &mut dist[u as usize][v as usize];
        *entry = Some(entry.map_or(w, |d: i64| d.min(w)));
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    // negative cycles push distances down every pass
                    let through = a.saturating_add(b);
                    if dist[i][j].is_none_or(|d| through < d) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floyd_warshall_saturates_on_negative_cycles() {
        let graph: KeyedGraph<Node, i64> =
            KeyedGraph::from_weighted_edges(3, [(0, 1, i64::MIN / 2), (1, 0, -1), (1, 2, 5)]);
        let dist = floyd_warshall(&graph);

        assert!(dist[0][0].is_some_and(|d| d < 0));
        assert!(dist[1][2].is_some_and(|d| d < 0));
        assert_eq!(dist[2][0], None);
        assert_eq!(dist[2][2], Some(0));
    }
}
