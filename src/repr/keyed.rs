use std::fmt::Debug;

use fxhash::{FxBuildHasher, FxHashMap};
use itertools::Itertools;

use super::*;

/// Directed, weighted graph over arbitrary node keys.
///
/// Keys are mapped to dense ids `0..n` in insertion order. Each node stores its outgoing edges
/// as a list of `(neighbor, weight)` pairs in insertion order; this order is the stored neighbor
/// order every traversal of this crate follows.
///
/// Cloning a `KeyedGraph` produces a deep copy that shares no state with the original.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph: KeyedGraph<(i64, i64), i64> = KeyedGraph::new();
/// assert!(graph.add_dir_edge((0, 0), (0, 1), 4));
/// assert!(!graph.add_dir_edge((0, 0), (0, 1), 7)); // overwrites
///
/// assert_eq!(graph.number_of_nodes(), 2);
/// assert_eq!(graph.number_of_edges(), 1);
/// assert_eq!(graph.weight_of_keys(&(0, 0), &(0, 1)), Some(7));
/// ```
#[derive(Clone)]
pub struct KeyedGraph<K, W = i64> {
    keys: Vec<K>,
    index: FxHashMap<K, Node>,
    adjacency: Vec<Vec<(Node, W)>>,
    number_of_edges: NumEdges,
}

impl<K: NodeKey, W: Weight> Default for KeyedGraph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey, W: Weight> KeyedGraph<K, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `node_hint` nodes
    pub fn with_capacity(node_hint: usize) -> Self {
        Self {
            keys: Vec::with_capacity(node_hint),
            index: FxHashMap::with_capacity_and_hasher(node_hint, FxBuildHasher::default()),
            adjacency: Vec::with_capacity(node_hint),
            number_of_edges: 0,
        }
    }

    /// Inserts a node with the given key and returns its id.
    /// If the key is already present, nothing changes and the existing id is returned.
    pub fn add_node(&mut self, key: K) -> Node {
        if let Some(&u) = self.index.get(&key) {
            return u;
        }

        let u = self.keys.len() as Node;
        assert!(u < INVALID_NODE, "Too many nodes");
        self.keys.push(key.clone());
        self.index.insert(key, u);
        self.adjacency.push(Vec::new());
        u
    }

    /// Inserts the directed edge `(u, v)` with the given weight; both endpoints are added if
    /// absent. If the edge already exists, only its weight is overwritten.
    /// Returns *true* if the edge is new.
    pub fn add_dir_edge(&mut self, u: K, v: K, weight: W) -> bool {
        let u = self.add_node(u);
        let v = self.add_node(v);
        self.set_weight(u, v, weight).is_none()
    }

    /// Inserts the directed edge `(u, v)` with weight one.
    /// See [`KeyedGraph::add_dir_edge`].
    pub fn add_unit_edge(&mut self, u: K, v: K) -> bool {
        self.add_dir_edge(u, v, W::one())
    }

    /// Inserts both directed edges `(u, v)` and `(v, u)` with the same weight.
    /// Returns the number of newly created edges.
    pub fn add_undir_edge(&mut self, u: K, v: K, weight: W) -> NumEdges {
        self.add_dir_edge(u.clone(), v.clone(), weight) as NumEdges
            + self.add_dir_edge(v, u, weight) as NumEdges
    }

    /// Returns the id of a key if it is part of the graph
    pub fn node_of(&self, key: &K) -> Option<Node> {
        self.index.get(key).copied()
    }

    /// Returns *true* if the key is part of the graph
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the key of a node id
    /// ** Panics if `u >= n` **
    pub fn key_of(&self, u: Node) -> &K {
        &self.keys[u as usize]
    }

    /// Translates a sequence of node ids (e.g. a cycle witness) into keys
    /// ** Panics if any `u >= n` **
    pub fn keys_of<I>(&self, nodes: I) -> Vec<K>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().map(|u| self.key_of(u).clone()).collect()
    }

    /// Iterates over all keys in insertion order, i.e. `keys().nth(u)` is the key of node `u`
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter()
    }

    /// Returns the weight of edge `(u, v)` given by keys, if both keys and the edge exist
    pub fn weight_of_keys(&self, u: &K, v: &K) -> Option<W> {
        self.weight_of(self.node_of(u)?, self.node_of(v)?)
    }

    /// Iterates over `(neighbor key, weight)` of a key in stored order.
    /// Yields nothing if the key is not part of the graph.
    pub fn weighted_neighbors_of_key<'a>(
        &'a self,
        u: &K,
    ) -> impl Iterator<Item = (&'a K, W)> + 'a {
        self.node_of(u)
            .into_iter()
            .flat_map(move |u| self.adjacency[u as usize].iter())
            .map(move |&(v, w)| (self.key_of(v), w))
    }

    /// Returns all edges as `(key, key, weight)`-triples ordered by source insertion order
    pub fn keyed_edges(&self) -> Vec<(K, K, W)> {
        self.weighted_edges()
            .map(|WeightedEdge(u, v, w)| (self.key_of(u).clone(), self.key_of(v).clone(), w))
            .collect_vec()
    }
}

impl<W: Weight> KeyedGraph<Node, W> {
    /// Creates a graph with nodes `0..n` (keys equal ids) and the given weighted edges
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_weighted_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        let mut graph = Self::with_capacity(n as usize);
        for u in 0..n {
            graph.add_node(u);
        }

        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            assert!(u < n && v < n, "Edge ({u},{v}) references a node outside of 0..{n}");
            graph.set_weight(u, v, w);
        }

        graph
    }

    /// Creates a graph with nodes `0..n` and the given edges, each with weight one
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        Self::from_weighted_edges(
            n,
            edges
                .into_iter()
                .map(|e| Into::<Edge>::into(e).with_weight(W::one())),
        )
    }
}

impl<K: NodeKey, W: Weight> GraphNodeOrder for KeyedGraph<K, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.keys.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<K: NodeKey, W: Weight> GraphEdgeOrder for KeyedGraph<K, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl<K: NodeKey, W: Weight> AdjacencyList for KeyedGraph<K, W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }
}

impl<K: NodeKey, W: Weight> IndexedAdjacencyList for KeyedGraph<K, W> {
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.adjacency[u as usize][i as usize].0
    }
}

impl<K: NodeKey, W: Weight> WeightedAdjacencyList<W> for KeyedGraph<K, W> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.adjacency[u as usize].iter().copied()
    }
}

impl<K: NodeKey, W: Weight> AdjacencyTest for KeyedGraph<K, W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency[u as usize].iter().any(|&(x, _)| x == v)
    }
}

impl<K: NodeKey, W: Weight> WeightedEdgeEditing<W> for KeyedGraph<K, W> {
    fn set_weight(&mut self, u: Node, v: Node, weight: W) -> Option<W> {
        assert!((v as usize) < self.keys.len());
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
        // keep the order of the remaining neighbors
        Some(neighbors.remove(pos).1)
    }
}

impl<K: NodeKey, W: Weight> Debug for KeyedGraph<K, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.vertices().map(|u| {
                (
                    self.key_of(u),
                    self.weighted_neighbors_of(u)
                        .map(|(v, w)| (self.key_of(v), w))
                        .collect_vec(),
                )
            }))
            .finish()
    }
}
