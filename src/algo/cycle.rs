/*!
Cycle detection by depth-first search.

[`CycleDetection::find_cycle`] runs a three-coloured DFS (see [`DepthFirstSearch`]) and stops at
the first edge that points to a gray node, i.e. to a node still on the DFS stack. The parent
chain from the current node back to that gray node is the cycle. Since the search visits roots
in `vertices()` order and neighbors in stored order, the reported cycle is deterministic.

[`CycleDetection::check_cycle`] verifies a witness and returns its total weight.
*/

use std::ops::ControlFlow;

use fxhash::FxHashSet;

use super::*;

/// Cycle detection and verification directly on graphs
pub trait CycleDetection: IndexedAdjacencyList {
    /// Returns the nodes of some directed cycle `[v, ..., u]` such that each node has an edge to
    /// its successor and `u` has an edge to `v`. Here `v` is the first node found to close a
    /// cycle. Returns an empty vector iff the graph is acyclic.
    ///
    /// A self-loop `(u, u)` is reported as the cycle `[u]`.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph: KeyedGraph<&str, i64> = KeyedGraph::new();
    /// graph.add_unit_edge("A", "B");
    /// graph.add_unit_edge("B", "C");
    /// graph.add_unit_edge("C", "A");
    ///
    /// let cycle = graph.find_cycle();
    /// assert_eq!(graph.keys_of(cycle), vec!["A", "B", "C"]);
    /// ```
    fn find_cycle(&self) -> Vec<Node> {
        let mut dfs = DepthFirstSearch::new(self);
        let result = dfs.run(|event, parents| match event {
            DfsEvent::BackEdge { from, to } => ControlFlow::Break(close_cycle(parents, from, to)),
            _ => ControlFlow::Continue(()),
        });

        match result {
            ControlFlow::Break(cycle) => cycle,
            ControlFlow::Continue(()) => Vec::new(),
        }
    }

    /// Returns *true* if the graph contains no directed cycle
    fn is_acyclic(&self) -> bool {
        self.find_cycle().is_empty()
    }

    /// Returns the total weight of `cycle` if it is a directed cycle of this graph, i.e. it is
    /// non-empty, contains no node twice, and every node has an edge to its successor (the
    /// last node to the first one). Returns `None` otherwise.
    fn check_cycle<W>(&self, cycle: &[Node]) -> Option<W>
    where
        Self: WeightedAdjacencyList<W>,
        W: Weight,
    {
        if cycle.is_empty() || cycle.iter().any(|&u| u >= self.number_of_nodes()) {
            return None;
        }

        let mut seen = FxHashSet::default();
        if !cycle.iter().all(|u| seen.insert(*u)) {
            return None;
        }

        cycle
            .iter()
            .zip(cycle.iter().cycle().skip(1))
            .try_fold(W::zero(), |total, (&u, &v)| Some(total + self.weight_of(u, v)?))
    }
}

impl<G: IndexedAdjacencyList> CycleDetection for G {}

/// Walks the parent chain from `u` back to its gray ancestor `v` and returns `[v, ..., u]`
fn close_cycle(parents: &[Option<Node>], u: Node, v: Node) -> Vec<Node> {
    let mut cycle = vec![u];
    let mut x = u;
    while x != v {
        match parents[x as usize] {
            Some(p) => {
                cycle.push(p);
                x = p;
            }
            None => break,
        }
    }
    cycle.reverse();
    cycle
}
