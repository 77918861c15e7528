/*!
Graph traversals and the structures derived from them.

This module provides:
- [`BreadthFirstTree`]: a BFS from a single start node recording parents, hop distances and
  the nodes of each BFS layer.
- [`DepthFirstSearch`]: an explicit-stack, three-coloured DFS over *all* nodes which reports
  [`DfsEvent`]s to a visitor. The visitor can stop the search early by returning
  [`ControlFlow::Break`].
- [`DepthFirstForest`]: discovery / finish timestamps and parents of a complete DFS.
- A [`Traversal`] trait that exposes the above directly as methods on graphs.

Both searches follow the graph's `vertices()` order for roots and the stored neighbor order
within a neighborhood, so results are reproducible.
*/

use super::*;
use std::{collections::VecDeque, ops::ControlFlow};

/// Result of a breadth-first search from a single start node.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph: KeyedGraph<Node, i64> =
///     KeyedGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let tree = graph.bfs_tree(0);
///
/// assert_eq!(tree.distance_to(3), Some(2));
/// assert_eq!(tree.path_to(3), Some(vec![0, 1, 3]));
/// assert_eq!(tree.layers(), &[vec![0], vec![1, 2], vec![3]]);
/// ```
#[derive(Debug, Clone)]
pub struct BreadthFirstTree {
    start: Node,
    parents: Vec<Option<Node>>,
    distances: Vec<Option<NumNodes>>,
    layers: Vec<Vec<Node>>,
}

impl BreadthFirstTree {
    /// Runs a BFS on `graph` starting in `start`
    /// ** Panics if `start >= n` **
    pub fn new<G: AdjacencyList>(graph: &G, start: Node) -> Self {
        let n = graph.len();
        assert!((start as usize) < n);

        let mut parents = vec![None; n];
        let mut distances = vec![None; n];
        let mut layers: Vec<Vec<Node>> = Vec::new();
        let mut queue = VecDeque::with_capacity(n);

        distances[start as usize] = Some(0);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            let du = distances[u as usize].unwrap_or_default();
            if layers.len() <= du as usize {
                layers.push(Vec::new());
            }
            layers[du as usize].push(u);

            for v in graph.neighbors_of(u) {
                if distances[v as usize].is_none() {
                    distances[v as usize] = Some(du + 1);
                    parents[v as usize] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        Self {
            start,
            parents,
            distances,
            layers,
        }
    }

    /// Returns the start node of the search
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns the parent array; the start node and unreachable nodes have no parent
    pub fn parents(&self) -> &[Option<Node>] {
        &self.parents
    }

    /// Returns the parent of `u` in the BFS tree
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parents[u as usize]
    }

    /// Returns the hop distance of every node, `None` if unreachable
    pub fn distances(&self) -> &[Option<NumNodes>] {
        &self.distances
    }

    /// Returns the hop distance from the start node to `u`, `None` if unreachable
    pub fn distance_to(&self, u: Node) -> Option<NumNodes> {
        self.distances[u as usize]
    }

    /// Returns the nodes grouped by their distance; `layers()[0] == [start]`
    pub fn layers(&self) -> &[Vec<Node>] {
        &self.layers
    }

    /// Returns *true* if `u` was reached
    pub fn is_reachable(&self, u: Node) -> bool {
        self.distances[u as usize].is_some()
    }

    /// Returns the tree path `[start, ..., u]` or `None` if `u` was not reached
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        self.distances[u as usize]?;

        let mut path = vec![u];
        let mut v = u;
        while let Some(p) = self.parents[v as usize] {
            path.push(p);
            v = p;
        }
        path.reverse();
        Some(path)
    }

    /// Iterates over all reached nodes in BFS order
    pub fn reached(&self) -> impl Iterator<Item = Node> + '_ {
        self.layers.iter().flatten().copied()
    }
}

/// State of a node during a depth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Not discovered yet
    White,
    /// Discovered and still on the stack
    Gray,
    /// All neighbors processed
    Black,
}

/// Events reported by [`DepthFirstSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// `node` turned gray; `parent` is `None` for roots
    Discover { node: Node, parent: Option<Node> },
    /// The edge `(from, to)` points to a gray node, i.e. closes a cycle
    BackEdge { from: Node, to: Node },
    /// `node` turned black
    Finish(Node),
}

/// Iterative three-coloured depth-first search over all nodes of a graph.
///
/// Roots are taken in `vertices()` order; neighborhoods are processed in stored order.
/// The search keeps an explicit stack of `(node, next neighbor position)` frames, so its depth
/// is only bounded by memory.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph: KeyedGraph<Node, i64> = KeyedGraph::from_edges(3, [(0, 1), (1, 2), (2, 1)]);
/// let mut dfs = DepthFirstSearch::new(&graph);
///
/// let back_edge = dfs.run(|event, _| match event {
///     DfsEvent::BackEdge { from, to } => ControlFlow::Break((from, to)),
///     _ => ControlFlow::Continue(()),
/// });
/// assert_eq!(back_edge, ControlFlow::Break((2, 1)));
/// ```
pub struct DepthFirstSearch<'a, G> {
    graph: &'a G,
    colors: Vec<Color>,
    parents: Vec<Option<Node>>,
    stack: Vec<(Node, NumNodes)>,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    /// Prepares a search with all nodes white
    pub fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            colors: vec![Color::White; n],
            parents: vec![None; n],
            stack: Vec::new(),
        }
    }

    /// Runs the search until all nodes are black or `visit` breaks.
    ///
    /// `visit` receives each event together with the current parent array. Upon a
    /// [`DfsEvent::BackEdge`] `(u, v)`, the parent chain from `u` leads back to `v`.
    pub fn run<B, F>(&mut self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(DfsEvent, &[Option<Node>]) -> ControlFlow<B>,
    {
        let graph = self.graph;
        for root in graph.vertices() {
            if self.colors[root as usize] != Color::White {
                continue;
            }

            self.colors[root as usize] = Color::Gray;
            visit(
                DfsEvent::Discover {
                    node: root,
                    parent: None,
                },
                &self.parents,
            )?;
            self.stack.push((root, 0));

            while let Some(frame) = self.stack.last_mut() {
                let u = frame.0;
                if frame.1 < graph.degree_of(u) {
                    let v = graph.ith_neighbor(u, frame.1);
                    frame.1 += 1;

                    match self.colors[v as usize] {
                        Color::White => {
                            self.colors[v as usize] = Color::Gray;
                            self.parents[v as usize] = Some(u);
                            self.stack.push((v, 0));
                            visit(
                                DfsEvent::Discover {
                                    node: v,
                                    parent: Some(u),
                                },
                                &self.parents,
                            )?;
                        }
                        Color::Gray => {
                            visit(DfsEvent::BackEdge { from: u, to: v }, &self.parents)?;
                        }
                        Color::Black => {}
                    }
                } else {
                    self.stack.pop();
                    self.colors[u as usize] = Color::Black;
                    visit(DfsEvent::Finish(u), &self.parents)?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Returns the colour of `u` in the current state of the search
    pub fn color_of(&self, u: Node) -> Color {
        self.colors[u as usize]
    }

    /// Returns the parent array of the current state of the search
    pub fn parents(&self) -> &[Option<Node>] {
        &self.parents
    }
}

/// Discovery and finish timestamps of a complete depth-first search.
///
/// A single clock starts at `0` and ticks on every discovery and every finish, so for `n`
/// nodes the timestamps are a permutation of `0..2n` (restricted to the nodes in `vertices()`).
#[derive(Debug, Clone)]
pub struct DepthFirstForest {
    discovered: Vec<Option<NumNodes>>,
    finished: Vec<Option<NumNodes>>,
    parents: Vec<Option<Node>>,
}

impl DepthFirstForest {
    /// Runs a complete DFS on `graph`
    pub fn new<G: IndexedAdjacencyList>(graph: &G) -> Self {
        let n = graph.len();
        let mut discovered = vec![None; n];
        let mut finished = vec![None; n];
        let mut time: NumNodes = 0;

        let mut dfs = DepthFirstSearch::new(graph);
        let _ = dfs.run(|event, _| -> ControlFlow<()> {
            match event {
                DfsEvent::Discover { node, .. } => discovered[node as usize] = Some(time),
                DfsEvent::Finish(node) => finished[node as usize] = Some(time),
                DfsEvent::BackEdge { .. } => return ControlFlow::Continue(()),
            }
            time += 1;
            ControlFlow::Continue(())
        });

        Self {
            discovered,
            finished,
            parents: dfs.parents,
        }
    }

    /// Discovery time of every node
    pub fn discovered(&self) -> &[Option<NumNodes>] {
        &self.discovered
    }

    /// Finish time of every node
    pub fn finished(&self) -> &[Option<NumNodes>] {
        &self.finished
    }

    /// Parent of every node in the DFS forest, `None` for roots
    pub fn parents(&self) -> &[Option<Node>] {
        &self.parents
    }

    /// Returns the roots of the forest in the order they were started
    pub fn roots(&self) -> Vec<Node> {
        let mut roots = (0..self.parents.len() as Node)
            .filter(|&u| {
                self.discovered[u as usize].is_some() && self.parents[u as usize].is_none()
            })
            .collect_vec();
        roots.sort_by_key(|&u| self.discovered[u as usize]);
        roots
    }
}

/// Traversal shortcuts directly on graphs
pub trait Traversal: AdjacencyList {
    /// Runs a BFS from `start`. See [`BreadthFirstTree`].
    fn bfs_tree(&self, start: Node) -> BreadthFirstTree {
        BreadthFirstTree::new(self, start)
    }

    /// Returns *true* if there is a directed path from `u` to `v`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        BreadthFirstTree::new(self, u).is_reachable(v)
    }

    /// Runs a complete DFS. See [`DepthFirstForest`].
    fn dfs_forest(&self) -> DepthFirstForest
    where
        Self: IndexedAdjacencyList,
    {
        DepthFirstForest::new(self)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bfs_on_path_and_unreachable() {
        let graph: KeyedGraph<Node, i64> = KeyedGraph::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
        let tree = graph.bfs_tree(0);

        assert_eq!(tree.start(), 0);
        assert_eq!(tree.distances(), &[Some(0), Some(1), Some(2), None, None]);
        assert_eq!(tree.parents(), &[None, Some(0), Some(1), None, None]);
        assert_eq!(tree.path_to(4), None);
        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.reached().collect_vec(), vec![0, 1, 2]);
        assert!(graph.is_reachable(3, 4));
        assert!(!graph.is_reachable(4, 3));
    }

    #[test]
    fn bfs_distances_are_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(123);
        for _ in 0..30 {
            let graph = random_weighted_graph(rng, 20, 0.15, -5..10, false);
            let tree = graph.bfs_tree(0);

            for WeightedEdge(u, v, _) in graph.weighted_edges() {
                if let Some(du) = tree.distance_to(u) {
                    let dv = tree.distance_to(v).unwrap();
                    assert!(dv <= du + 1);
                }
            }

            for u in tree.reached() {
                let path = tree.path_to(u).unwrap();
                assert_eq!(path.len() as NumNodes, tree.distance_to(u).unwrap() + 1);
                assert!(path.windows(2).all(|w| graph.has_edge(w[0], w[1])));
            }
        }
    }

    #[test]
    fn dfs_events_in_stored_order() {
        let graph: KeyedGraph<Node, i64> =
            KeyedGraph::from_edges(4, [(0, 2), (0, 1), (1, 0), (3, 3)]);
        let mut events = Vec::new();
        let flow = DepthFirstSearch::new(&graph).run(|event, _| -> ControlFlow<()> {
            events.push(event);
            ControlFlow::Continue(())
        });

        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(
            events,
            vec![
                DfsEvent::Discover {
                    node: 0,
                    parent: None,
                },
                DfsEvent::Discover {
                    node: 2,
                    parent: Some(0),
                },
                DfsEvent::Finish(2),
                DfsEvent::Discover {
                    node: 1,
                    parent: Some(0),
                },
                DfsEvent::BackEdge { from: 1, to: 0 },
                DfsEvent::Finish(1),
                DfsEvent::Finish(0),
                DfsEvent::Discover {
                    node: 3,
                    parent: None,
                },
                DfsEvent::BackEdge { from: 3, to: 3 },
                DfsEvent::Finish(3),
            ]
        );
    }

    #[test]
    fn dfs_forest_timestamps() {
        let graph: KeyedGraph<Node, i64> = KeyedGraph::from_edges(4, [(0, 1), (1, 2), (3, 1)]);
        let forest = graph.dfs_forest();

        assert_eq!(forest.discovered(), &[Some(0), Some(1), Some(2), Some(6)]);
        assert_eq!(forest.finished(), &[Some(5), Some(4), Some(3), Some(7)]);
        assert_eq!(forest.parents(), &[None, Some(0), Some(1), None]);
        assert_eq!(forest.roots(), vec![0, 3]);
    }

    #[test]
    fn dfs_forest_parenthesis_structure() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for _ in 0..30 {
            let graph = random_weighted_graph(rng, 25, 0.1, 1..2, false);
            let forest = graph.dfs_forest();

            for u in graph.vertices() {
                let times = |x: Node| {
                    (
                        forest.discovered()[x as usize].unwrap(),
                        forest.finished()[x as usize].unwrap(),
                    )
                };

                let (du, fu) = times(u);
                assert!(du < fu);
                if let Some(p) = forest.parents()[u as usize] {
                    let (dp, fp) = times(p);
                    assert!(dp < du && fu < fp);
                    assert!(graph.has_edge(p, u));
                }
            }
        }
    }
}
