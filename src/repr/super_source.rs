use std::marker::PhantomData;

use super::*;

/// Read-only view of a graph with one additional node, the *super source*.
///
/// The super source gets id `n` (the number of nodes of the underlying graph) and an edge of
/// weight zero to every original node `0..n` in ascending order. It has no incoming edges, so it
/// never lies on a cycle. All other nodes and edges are those of the underlying graph.
///
/// Running a single-source algorithm from the super source reaches every node of the graph
/// without copying or modifying it.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let graph: KeyedGraph<Node, i64> = KeyedGraph::from_weighted_edges(2, [(0, 1, 5)]);
/// let view = SuperSource::new(&graph);
///
/// assert_eq!(view.number_of_nodes(), 3);
/// assert_eq!(view.source(), 2);
/// assert_eq!(view.weighted_neighbors_of(2).collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
/// assert_eq!(view.weight_of(0, 1), Some(5));
/// ```
pub struct SuperSource<'a, G, W> {
    graph: &'a G,
    _weight: PhantomData<W>,
}

impl<'a, G, W> SuperSource<'a, G, W>
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
    /// Creates the view over `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            _weight: PhantomData,
        }
    }

    /// Returns the id of the super source
    pub fn source(&self) -> Node {
        self.graph.number_of_nodes()
    }

    /// Returns the underlying graph
    pub fn inner(&self) -> &'a G {
        self.graph
    }
}

impl<G, W> GraphNodeOrder for SuperSource<'_, G, W>
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes() + 1
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph
            .vertices()
            .chain(std::iter::once(self.source()))
    }
}

impl<G, W> AdjacencyList for SuperSource<'_, G, W>
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        if u == self.source() {
            self.graph.number_of_nodes()
        } else {
            self.graph.degree_of(u)
        }
    }
}

impl<G, W> IndexedAdjacencyList for SuperSource<'_, G, W>
where
    G: WeightedAdjacencyList<W> + IndexedAdjacencyList,
    W: Weight,
{
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        if u == self.source() {
            assert!(i < self.graph.number_of_nodes());
            i
        } else {
            self.graph.ith_neighbor(u, i)
        }
    }
}

impl<G, W> WeightedAdjacencyList<W> for SuperSource<'_, G, W>
where
    G: WeightedAdjacencyList<W>,
    W: Weight,
{
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        let source = self.source();
        assert!(u <= source);

        // only one of both halves is non-empty
        let from_source = (u == source)
            .then(|| self.graph.vertices_range().map(|v| (v, W::zero())))
            .into_iter()
            .flatten();
        let from_graph = (u != source)
            .then(|| self.graph.weighted_neighbors_of(u))
            .into_iter()
            .flatten();

        from_source.chain(from_graph)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn super_source_reaches_everything() {
        let mut graph: KeyedGraph<&str, i64> = KeyedGraph::new();
        graph.add_dir_edge("a", "b", -1);
        graph.add_node("c");

        let view = SuperSource::new(&graph);
        let s = view.source();
        assert_eq!(s, 3);
        assert_eq!(view.vertices().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(view.degree_of(s), 3);
        assert_eq!(view.neighbors_of(s).collect_vec(), vec![0, 1, 2]);
        assert_eq!(view.ith_neighbor(s, 2), 2);
        assert_eq!(view.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(view.degree_of(2), 0);
        assert_eq!(view.weighted_edges().count(), 4);

        // the view does not touch the graph
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 1);
    }
}
