/*!
Single-source shortest paths with possibly negative edge weights.

[`BellmanFord`] relaxes all edges in rounds. Each round starts from a copy of the previous
round's distances and relaxes every edge `(u, v, w)` with the *previous* distance of `u`
(Jacobi style), so after round `i` the distance of every node is the weight of a lightest walk
with at most `i` edges.

- The simple variant runs `n - 1` rounds and never looks for negative cycles.
- The early-stop variant runs at most `n` rounds. It stops as soon as a round changes nothing.
  Otherwise it searches the current *parent graph* (every node points to its parent) for a
  cycle. Any such cycle is a negative cycle of the input, and is reported as a witness in
  edge direction of the input.

[`ShortestPaths::find_negative_cycle`] runs the early-stop variant from a [`SuperSource`] and
thereby finds negative cycles anywhere in the graph, not only those reachable from a source.

# Example
```
use wgraphs::{prelude::*, algo::*};

let graph: KeyedGraph<Node, i64> =
    KeyedGraph::from_weighted_edges(4, [(0, 1, 4), (0, 2, 1), (2, 1, -2), (1, 3, 1)]);
let result = graph.bellman_ford_early_stop(0);

assert_eq!(result.distances, vec![Some(0), Some(-1), Some(1), Some(0)]);
assert_eq!(result.path_to(3), Some(vec![0, 2, 1, 3]));
assert!(!result.negative_cycle);
```
*/

use std::marker::PhantomData;

use log::{debug, trace};

use super::*;

/// Outcome of a [`BellmanFord`] run
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordResult<W> {
    /// Distance of every node from the source after the last round; `None` if unreachable
    pub distances: Vec<Option<W>>,
    /// Node through which the last improvement of each node's distance was made
    pub parents: Vec<Option<Node>>,
    /// Index of the last round that was executed (`0` if no round ran)
    pub rounds: NumNodes,
    /// *true* if the early-stop variant detected a negative cycle
    pub negative_cycle: bool,
    /// Negative cycle in edge direction; empty unless `negative_cycle`
    pub witness: Vec<Node>,
}

impl<W: Weight> BellmanFordResult<W> {
    /// Returns the distance of `u`, `None` if unreachable
    pub fn distance_to(&self, u: Node) -> Option<W> {
        self.distances[u as usize]
    }

    /// Follows parents from `u` and returns the path `[source, ..., u]`.
    /// Returns `None` if `u` is unreachable or the parent chain of `u` runs into a cycle.
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        self.distances[u as usize]?;

        let mut path = vec![u];
        let mut v = u;
        while let Some(p) = self.parents[v as usize] {
            if path.len() > self.parents.len() {
                return None;
            }
            path.push(p);
            v = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Bellman-Ford shortest paths from a single source (Builder / Setter pattern).
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph: KeyedGraph<Node, i64> =
///     KeyedGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, -3), (2, 1, 1)]);
///
/// let simple = BellmanFord::new(&graph, 0).run();
/// assert_eq!(simple.rounds, 2);
/// assert!(!simple.negative_cycle);
///
/// let early = BellmanFord::new(&graph, 0).early_stop(true).run();
/// assert!(early.negative_cycle);
/// assert_eq!(early.witness, vec![2, 1]);
/// ```
pub struct BellmanFord<'a, G, W> {
    graph: &'a G,
    source: Node,
    early_stop: bool,
    _weight: PhantomData<W>,
}

impl<'a, G, W> BellmanFord<'a, G, W>
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
    /// Prepares a run of the simple variant from `source`
    /// ** Panics if `source >= n` **
    pub fn new(graph: &'a G, source: Node) -> Self {
        assert!(source < graph.number_of_nodes());
        Self {
            graph,
            source,
            early_stop: false,
            _weight: PhantomData,
        }
    }

    /// Switches between the simple variant (`false`, default) and the early-stop variant with
    /// negative cycle detection (`true`)
    pub fn early_stop(mut self, early_stop: bool) -> Self {
        self.early_stop = early_stop;
        self
    }

    /// Executes the configured variant
    pub fn run(&self) -> BellmanFordResult<W> {
        let n = self.graph.number_of_nodes();
        let max_rounds = if self.early_stop {
            n
        } else {
            n.saturating_sub(1)
        };

        let mut distances = vec![None; n as usize];
        distances[self.source as usize] = Some(W::zero());
        let mut parents = vec![None; n as usize];
        let mut parent_graph = ParentGraph::new(n);

        let mut rounds = 0;
        let mut changed = false;
        let mut witness = Vec::new();

        for round in 1..=max_rounds {
            rounds = round;

            let mut next = distances.clone();
            let mut improvements = 0usize;
            for u in self.graph.vertices() {
                let Some(du) = distances[u as usize] else {
                    continue;
                };

                for (v, w) in self.graph.weighted_neighbors_of(u) {
                    let candidate = du + w;
                    if next[v as usize].is_none_or(|dv| candidate < dv) {
                        next[v as usize] = Some(candidate);
                        parents[v as usize] = Some(u);
                        improvements += 1;
                        if self.early_stop {
                            parent_graph.set_parent(v, u);
                        }
                    }
                }
            }
            distances = next;
            changed = improvements > 0;
            trace!("Bellman-Ford round {round}: {improvements} improvements");

            if !self.early_stop {
                continue;
            }
            if !changed {
                break;
            }

            witness = parent_graph.find_cycle();
            if !witness.is_empty() {
                break;
            }
        }

        let negative_cycle = self.early_stop && changed;
        if negative_cycle {
            witness.reverse();
            debug!(
                "Bellman-Ford from {} found a negative cycle of length {} in round {rounds}",
                self.source,
                witness.len()
            );
        } else {
            witness.clear();
        }

        debug!(
            "Bellman-Ford from {} on n={} finished after {rounds} rounds",
            self.source, n
        );

        BellmanFordResult {
            distances,
            parents,
            rounds,
            negative_cycle,
            witness,
        }
    }
}

/// Owned graph in which every node has at most one outgoing edge: the edge to its current
/// Bellman-Ford parent. Nodes appear in `vertices()` in the order they first took part in an
/// edge, which fixes the roots of the cycle search.
struct ParentGraph {
    parent: Vec<Option<Node>>,
    present: Vec<bool>,
    order: Vec<Node>,
}

impl ParentGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            parent: vec![None; n as usize],
            present: vec![false; n as usize],
            order: Vec::new(),
        }
    }

    fn insert(&mut self, u: Node) {
        if !self.present[u as usize] {
            self.present[u as usize] = true;
            self.order.push(u);
        }
    }

    /// Replaces the out-edge of `v` by `v -> u`
    fn set_parent(&mut self, v: Node, u: Node) {
        self.insert(v);
        self.insert(u);
        self.parent[v as usize] = Some(u);
    }
}

impl GraphNodeOrder for ParentGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.parent.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().copied()
    }
}

impl AdjacencyList for ParentGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.parent[u as usize].into_iter()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.parent[u as usize].is_some() as NumNodes
    }
}

impl IndexedAdjacencyList for ParentGraph {
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        match self.parent[u as usize] {
            Some(p) if i == 0 => p,
            _ => panic!("Node {u} has no neighbor at position {i}"),
        }
    }
}

/// Shortest path shortcuts directly on weighted graphs
pub trait ShortestPaths<W: Weight>: WeightedAdjacencyList<W> {
    /// Runs the simple Bellman-Ford variant from `source`. See [`BellmanFord`].
    /// ** Panics if `source >= n` **
    fn bellman_ford_simple(&self, source: Node) -> BellmanFordResult<W> {
        BellmanFord::new(self, source).run()
    }

    /// Runs the early-stop Bellman-Ford variant from `source`. See [`BellmanFord`].
    /// ** Panics if `source >= n` **
    fn bellman_ford_early_stop(&self, source: Node) -> BellmanFordResult<W> {
        BellmanFord::new(self, source).early_stop(true).run()
    }

    /// Returns a negative cycle (in edge direction) anywhere in the graph, or `None` if there
    /// is none
    fn find_negative_cycle(&self) -> Option<Vec<Node>> {
        let view: SuperSource<'_, Self, W> = SuperSource::new(self);
        let result = BellmanFord::new(&view, view.source())
            .early_stop(true)
            .run();

        result.negative_cycle.then_some(result.witness)
    }

    /// Returns *true* if the graph contains a cycle of negative total weight
    fn has_negative_cycle(&self) -> bool {
        self.find_negative_cycle().is_some()
    }
}

impl<G, W> ShortestPaths<W> for G
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
}
