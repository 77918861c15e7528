/*!
# Maximum Flow (Edmonds-Karp)

Maximum `s`-`t` flows on capacitated digraphs: the weight of every edge is read as its capacity.

## Core concepts
- The [`ResidualNetwork`] is an owned copy of the input in which the weight of `(u, v)` is the
  capacity that is still available from `u` to `v`. Edges without remaining capacity are
  removed; reverse edges are created when flow is first pushed over an edge.
- [`EdmondsKarp`] is an iterator: every call to `next()` searches a shortest augmenting path by
  BFS, pushes the bottleneck capacity along it and yields the [`Augmentation`]. The iterator
  ends once `t` is unreachable in the residual network.
- The flow over an input edge `(u, v)` with capacity `c` is `max(0, c - r)` where `r` is the
  remaining residual capacity of `(u, v)` (`0` if the residual edge vanished).

The input graph is never modified.

```rust
use wgraphs::{prelude::*, algo::*};

let mut graph: KeyedGraph<&str, i64> = KeyedGraph::new();
graph.add_dir_edge("S", "A", 3);
graph.add_dir_edge("A", "B", 2);
graph.add_dir_edge("B", "T", 3);

let s = graph.node_of(&"S").unwrap();
let t = graph.node_of(&"T").unwrap();

let flow = graph.max_flow(s, t);
assert_eq!(flow.weight_of_keys(&"S", &"A"), Some(2));
assert_eq!(flow.weight_of_keys(&"A", &"B"), Some(2));
assert_eq!(flow.weight_of_keys(&"B", &"T"), Some(2));
assert_eq!(graph.max_flow_value(s, t), 2);
```
*/

use std::fmt::Debug;

use log::{debug, trace};

use super::*;

/// Residual capacities of a flow network.
///
/// Stores every node's outgoing residual edges as `(neighbor, remaining capacity)` pairs in the
/// neighbor order of the graph it was created from; reverse edges are appended when created.
/// All stored capacities are strictly positive.
#[derive(Clone)]
pub struct ResidualNetwork<W> {
    adjacency: Vec<Vec<(Node, W)>>,
    number_of_edges: NumEdges,
}

impl<W: Weight> ResidualNetwork<W> {
    /// Copies all edges of `graph` with positive capacity
    pub fn new<G>(graph: &G) -> Self
    where
        G: WeightedAdjacencyList<W>,
    {
        let mut adjacency = vec![Vec::new(); graph.len()];
        let mut number_of_edges = 0;
        for WeightedEdge(u, v, c) in graph.weighted_edges() {
            if c.is_positive() {
                adjacency[u as usize].push((v, c));
                number_of_edges += 1;
            }
        }

        Self {
            adjacency,
            number_of_edges,
        }
    }

    /// Pushes `amount` units of flow over the residual edge `(u, v)`: its capacity decreases
    /// (the edge vanishes at zero) and the capacity of `(v, u)` increases.
    /// ** Panics if `(u, v)` is not a residual edge **
    pub fn push_flow(&mut self, u: Node, v: Node, amount: W) {
        let remaining = self
            .weight_of(u, v)
            .unwrap_or_else(|| panic!("({u},{v}) is not a residual edge"))
            - amount;

        if remaining.is_positive() {
            self.set_weight(u, v, remaining);
        } else {
            self.try_remove_edge(u, v);
        }

        self.add_to_weight(v, u, amount);
    }
}

impl<W: Weight> GraphNodeOrder for ResidualNetwork<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.adjacency.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<W: Weight> GraphEdgeOrder for ResidualNetwork<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl<W: Weight> AdjacencyList for ResidualNetwork<W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }
}

impl<W: Weight> WeightedAdjacencyList<W> for ResidualNetwork<W> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.adjacency[u as usize].iter().copied()
    }
}

impl<W: Weight> AdjacencyTest for ResidualNetwork<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency[u as usize].iter().any(|&(x, _)| x == v)
    }
}

impl<W: Weight> WeightedEdgeEditing<W> for ResidualNetwork<W> {
    fn set_weight(&mut self, u: Node, v: Node, weight: W) -> Option<W> {
        assert!((v as usize) < self.adjacency.len());
        let neighbors = &mut self.adjacency[u as usize];
        if let Some((_, w)) = neighbors.iter_mut().find(|(x, _)| *x == v) {
            return Some(std::mem::replace(w, weight));
        }

        neighbors.push((v, weight));
        self.number_of_edges += 1;
        None
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<W> {
        let neighbors = &mut self.adjacency[u as usize];
        let pos = neighbors.iter().position(|&(x, _)| x == v)?;
        self.number_of_edges -= 1;
        Some(neighbors.remove(pos).1)
    }
}

impl<W: Weight> Debug for ResidualNetwork<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.vertices()
                    .map(|u| (u, self.weighted_neighbors_of(u).collect_vec())),
            )
            .finish()
    }
}

/// A single augmentation of [`EdmondsKarp`]
#[derive(Debug, Clone, PartialEq)]
pub struct Augmentation<W> {
    /// Shortest augmenting path `[s, ..., t]` in the residual network
    pub path: Vec<Node>,
    /// Amount of flow pushed along the path
    pub bottleneck: W,
}

/// Implementation of the Edmonds-Karp algorithm.
///
/// Each iteration finds a shortest augmenting path in the residual network and augments along
/// it. Consume the iterator (or call [`EdmondsKarp::run_to_completion`]) to obtain a maximum
/// flow.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph: KeyedGraph<Node, u32> = KeyedGraph::from_weighted_edges(
///     4,
///     [(0, 1, 2), (0, 2, 2), (1, 3, 1), (2, 3, 3), (1, 2, 1)],
/// );
///
/// let mut ek = EdmondsKarp::new(&graph, 0, 3);
/// let paths = ek.by_ref().map(|aug| aug.path).collect::<Vec<_>>();
/// assert_eq!(paths, vec![vec![0, 1, 3], vec![0, 2, 3], vec![0, 1, 2, 3]]);
/// assert_eq!(ek.total_flow(), 4);
/// assert_eq!(ek.source_side(), vec![0]);
/// ```
pub struct EdmondsKarp<W> {
    residual: ResidualNetwork<W>,
    source: Node,
    target: Node,
    total_flow: W,
    augmentations: usize,
    exhausted: bool,
}

impl<W: Weight> EdmondsKarp<W> {
    /// Creates the residual network of `graph` for an `s`-`t` flow
    /// ** Panics if `s >= n` or `t >= n` **
    pub fn new<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: WeightedAdjacencyList<W>,
    {
        assert!(s < graph.number_of_nodes() && t < graph.number_of_nodes());
        Self {
            residual: ResidualNetwork::new(graph),
            source: s,
            target: t,
            total_flow: W::zero(),
            augmentations: 0,
            exhausted: s == t,
        }
    }

    /// Returns the current residual network
    pub fn residual_network(&self) -> &ResidualNetwork<W> {
        &self.residual
    }

    /// Returns the value of the flow pushed so far
    pub fn total_flow(&self) -> W {
        self.total_flow
    }

    /// Augments until no augmenting path is left and returns the value of the maximum flow
    pub fn run_to_completion(&mut self) -> W {
        self.by_ref().for_each(drop);
        self.total_flow
    }

    /// Returns the flow over an input edge `(u, v)` with capacity `capacity` according to the
    /// current residual network
    pub fn flow_on_edge(&self, u: Node, v: Node, capacity: W) -> W {
        let residual = self.residual.weight_of(u, v).unwrap_or(W::zero());
        (capacity - residual).positive_part()
    }

    /// Runs to completion and returns the nodes reachable from `s` in the final residual
    /// network in BFS order, i.e. the source side of a minimum `s`-`t` cut
    pub fn source_side(&mut self) -> Vec<Node> {
        self.run_to_completion();
        BreadthFirstTree::new(&self.residual, self.source)
            .reached()
            .collect()
    }
}

impl<W: Weight> Iterator for EdmondsKarp<W> {
    type Item = Augmentation<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let path = BreadthFirstTree::new(&self.residual, self.source).path_to(self.target);
        let bottleneck = path.as_ref().and_then(|path| {
            path.windows(2)
                .filter_map(|e| self.residual.weight_of(e[0], e[1]))
                .reduce(W::min_weight)
        });

        let (Some(path), Some(bottleneck)) = (path, bottleneck) else {
            self.exhausted = true;
            debug!(
                "Edmonds-Karp from {} to {}: flow {:?} after {} augmentations",
                self.source, self.target, self.total_flow, self.augmentations
            );
            return None;
        };

        for e in path.windows(2) {
            self.residual.push_flow(e[0], e[1], bottleneck);
        }
        self.total_flow = self.total_flow + bottleneck;
        self.augmentations += 1;
        trace!("Augment {bottleneck:?} along {path:?}");

        Some(Augmentation { path, bottleneck })
    }
}

/// Maximum flow shortcuts directly on capacitated graphs
pub trait MaxFlow<W: Weight>: WeightedAdjacencyList<W> {
    /// Returns a fresh [`EdmondsKarp`] iterator for an `s`-`t` flow
    fn edmonds_karp(&self, s: Node, t: Node) -> EdmondsKarp<W> {
        EdmondsKarp::new(self, s, t)
    }

    /// Returns the value of a maximum `s`-`t` flow
    fn max_flow_value(&self, s: Node, t: Node) -> W {
        EdmondsKarp::new(self, s, t).run_to_completion()
    }

    /// Computes a maximum `s`-`t` flow and returns a copy of the graph with the same edges,
    /// each weighted with the flow it carries (`0` if none)
    fn max_flow(&self, s: Node, t: Node) -> Self
    where
        Self: Clone + WeightedEdgeEditing<W>,
    {
        let mut ek = EdmondsKarp::new(self, s, t);
        ek.run_to_completion();

        let mut flow = self.clone();
        for WeightedEdge(u, v, c) in self.weighted_edges() {
            flow.set_weight(u, v, ek.flow_on_edge(u, v, c));
        }
        flow
    }
}

impl<G, W> MaxFlow<W> for G
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Checks capacity bounds and conservation; returns the net outflow of `s`
    fn check_flow(
        graph: &KeyedGraph<Node, i64>,
        flow: &KeyedGraph<Node, i64>,
        s: Node,
        t: Node,
    ) -> i64 {
        assert_eq!(graph.edges().collect_vec(), flow.edges().collect_vec());

        let mut balance = vec![0i64; graph.len()];
        for WeightedEdge(u, v, f) in flow.weighted_edges() {
            let c = graph.weight_of(u, v).unwrap();
            assert!(0 <= f && f <= c.max(0));
            balance[u as usize] -= f;
            balance[v as usize] += f;
        }

        for u in graph.vertices() {
            if u != s && u != t {
                assert_eq!(balance[u as usize], 0);
            }
        }
        -balance[s as usize]
    }

    #[test]
    fn residual_network_strips_non_positive_edges() {
        let graph: KeyedGraph<Node, i64> =
            KeyedGraph::from_weighted_edges(3, [(0, 1, 0), (0, 2, -1), (1, 2, 5)]);
        let mut residual = ResidualNetwork::new(&graph);
        assert_eq!(residual.number_of_edges(), 1);
        assert!(!residual.has_edge(0, 1));

        residual.push_flow(1, 2, 2);
        assert_eq!(residual.weight_of(1, 2), Some(3));
        assert_eq!(residual.weight_of(2, 1), Some(2));

        residual.push_flow(1, 2, 3);
        assert!(!residual.has_edge(1, 2));
        assert_eq!(residual.weight_of(2, 1), Some(5));
    }

    #[test]
    fn chain_example() {
        let mut graph: KeyedGraph<&str, i64> = KeyedGraph::new();
        graph.add_dir_edge("S", "A", 3);
        graph.add_dir_edge("A", "B", 2);
        graph.add_dir_edge("B", "T", 3);

        let s = graph.node_of(&"S").unwrap();
        let t = graph.node_of(&"T").unwrap();

        let augmentations = graph.edmonds_karp(s, t).collect_vec();
        assert_eq!(
            augmentations,
            vec![Augmentation {
                path: vec![s, 1, 2, t],
                bottleneck: 2
            }]
        );

        let flow = graph.max_flow(s, t);
        assert_eq!(
            flow.keyed_edges(),
            vec![("S", "A", 2), ("A", "B", 2), ("B", "T", 2)]
        );
        // input untouched
        assert_eq!(graph.weight_of_keys(&"S", &"A"), Some(3));
    }

    #[test]
    fn source_equals_target() {
        let graph: KeyedGraph<Node, i64> =
            KeyedGraph::from_weighted_edges(2, [(0, 1, 4), (1, 0, 4)]);
        let mut ek = graph.edmonds_karp(0, 0);
        assert!(ek.next().is_none());
        assert_eq!(ek.total_flow(), 0);
        assert_eq!(graph.max_flow(0, 0).keyed_edges(), vec![(0, 1, 0), (1, 0, 0)]);
    }

    #[test]
    fn unreachable_target_and_float_capacities() {
        let graph: KeyedGraph<Node, f64> =
            KeyedGraph::from_weighted_edges(4, [(0, 1, 1.5), (1, 0, 0.5), (3, 2, 1.0)]);
        assert_eq!(graph.max_flow_value(0, 2), 0.0);

        let graph: KeyedGraph<Node, f64> =
            KeyedGraph::from_weighted_edges(3, [(0, 1, 1.5), (1, 2, 0.5), (0, 2, 0.25)]);
        assert_eq!(graph.max_flow_value(0, 2), 0.75);
    }

    #[test]
    fn antiparallel_edges() {
        let graph: KeyedGraph<Node, i64> = KeyedGraph::from_weighted_edges(
            4,
            [(0, 1, 3), (1, 2, 2), (2, 1, 1), (2, 3, 3), (0, 2, 1)],
        );
        let flow = graph.max_flow(0, 3);
        assert_eq!(check_flow(&graph, &flow, 0, 3), 3);
    }

    #[test]
    fn random_max_flows() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        for n in [2, 6, 15, 30] {
            for _ in 0..20 {
                let graph = random_weighted_graph(rng, n, 0.25, -2..10, false);
                let (s, t) = (0, n - 1);

                let mut ek = graph.edmonds_karp(s, t);
                let augmentations = ek.by_ref().collect_vec();
                let value = ek.total_flow();

                // augmenting paths never get shorter
                assert!(
                    augmentations
                        .windows(2)
                        .all(|w| w[0].path.len() <= w[1].path.len())
                );
                assert!(augmentations.iter().all(|a| a.bottleneck > 0));
                assert_eq!(augmentations.iter().map(|a| a.bottleneck).sum::<i64>(), value);

                // no augmenting path is left
                assert!(!ek.residual_network().is_reachable(s, t));

                let flow = graph.max_flow(s, t);
                assert_eq!(check_flow(&graph, &flow, s, t), value);

                // max-flow equals the capacity of the cut found
                let side = ek.source_side();
                let mut in_side = vec![false; n as usize];
                side.iter().for_each(|&u| in_side[u as usize] = true);
                let cut = graph
                    .weighted_edges()
                    .filter(|e| in_side[e.0 as usize] && !in_side[e.1 as usize])
                    .map(|e| e.2.max(0))
                    .sum::<i64>();
                assert_eq!(cut, value);
            }
        }
    }
}
