/*!
# Graph Operations

Node-level traits shared by all graph representations. Algorithms are written against these
traits rather than a concrete type, so the same cycle detector runs on the graph store, on a
Bellman-Ford parent graph, and on a view with an additional super source.
*/

use std::ops::Range;

use crate::{edge::*, node::*, weight::Weight};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph, i.e. the exclusive upper bound on node ids
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// Representations may skip ids in `0..n` (e.g. nodes that are not part of a parent graph yet)
    /// and may yield nodes in an order other than ascending.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns the range `0..n` of all node ids.
    /// In contrast to `self.vertices()`, the returned range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    ///
    /// This is bookkeeping only. No algorithm of this crate relies on it.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for (out-)neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex in stored order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph, ordered by source in `vertices()`-order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Counts the edges by iterating over all neighborhoods
    fn count_edges(&self) -> usize {
        self.vertices().map(|u| self.degree_of(u) as usize).sum()
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }
}

/// Random access into a neighborhood. Iterative traversals store `(node, position)` frames
/// and resume a neighborhood from a position.
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the ith neighbor (0-indexed) of a given vertex
    /// ** Panics if `u >= n` or `i >= degree_of(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;
}

/// Getters for weighted neighborhoods
pub trait WeightedAdjacencyList<W: Weight>: AdjacencyList {
    /// Returns an iterator over `(neighbor, weight)` of a given vertex in stored order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_;

    /// Returns the weight of edge `(u, v)` if it exists.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<W> {
        self.weighted_neighbors_of(u)
            .find_map(|(x, w)| (x == v).then_some(w))
    }

    /// Returns an iterator over weighted outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all weighted edges, ordered by source in `vertices()`-order
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.vertices().flat_map(move |u| self.weighted_edges_of(u))
    }

    /// Sum of the weights of all outgoing edges of `u`
    fn out_weight_of(&self, u: Node) -> W {
        self.weighted_neighbors_of(u)
            .fold(W::zero(), |acc, (_, w)| acc + w)
    }
}

/// Tests for single edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* exactly if the graph contains the directed edge `(u, v)`
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* exactly if the graph contains the self-loop `(u, u)`
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Provides functions to insert, reweight and delete weighted edges between existing nodes
pub trait WeightedEdgeEditing<W: Weight>: WeightedAdjacencyList<W> {
    /// Sets the weight of edge `(u, v)`, inserting the edge if it did not exist.
    /// Returns the previous weight if the edge existed.
    /// ** Panics if `u, v >= n` **
    fn set_weight(&mut self, u: Node, v: Node, weight: W) -> Option<W>;

    /// Removes edge `(u, v)` and returns its weight if it existed.
    /// ** Panics if `u, v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<W>;

    /// Adds `delta` to the weight of edge `(u, v)`. A missing edge is treated as weight zero
    /// and therefore created with weight `delta`. Returns the new weight.
    /// ** Panics if `u, v >= n` **
    fn add_to_weight(&mut self, u: Node, v: Node, delta: W) -> W {
        let new = self.weight_of(u, v).map_or(delta, |w| w + delta);
        self.set_weight(u, v, new);
        new
    }
}
