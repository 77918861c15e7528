use std::ops::Range;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a node
    AvgDeg(f64),
}

/// Weighted `G(n,p)` digraphs: every possible edge `(u, v)` with `u != v` is generated with
/// probability `p` independently and receives a weight drawn uniformly from the weight range.
///
/// If `acyclic` is set, only edges `(u, v)` with `u < v` are considered, so `0..n` is a
/// topological order of the result.
///
/// Edges are emitted ordered by source, then target.
#[derive(Debug, Clone)]
pub struct WeightedGnp<W> {
    n: NumNodes,
    p: GnpType,
    weights: Range<W>,
    acyclic: bool,
    self_loops: bool,
}

impl<W: Weight> Default for WeightedGnp<W> {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            weights: W::one()..(W::one() + W::one()),
            acyclic: false,
            self_loops: false,
        }
    }
}

impl<W: Weight + SampleUniform> WeightedGnp<W> {
    /// Creates a new generator with unit weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob));
        self.p = GnpType::Prob(prob);
        self
    }

    /// Sets the half-open range weights are drawn from
    /// ** Panics if the range is empty **
    pub fn weights(mut self, weights: Range<W>) -> Self {
        assert!(weights.start < weights.end, "Empty weight range");
        self.weights = weights;
        self
    }

    /// Restricts the generator to edges `(u, v)` with `u < v`
    pub fn acyclic(mut self, acyclic: bool) -> Self {
        self.acyclic = acyclic;
        self
    }

    /// Allows self-loops `(u, u)`; ignored for acyclic graphs
    pub fn self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of WeightedGnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let candidates = if self.acyclic {
                    (self.n as f64 - 1.0) / 2.0
                } else {
                    self.n as f64 - 1.0
                };
                let p = if candidates > 0.0 { d / candidates } else { 0.0 };
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl<W> NumNodesGen for WeightedGnp<W> {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl<W> AverageDegreeGen for WeightedGnp<W> {
    /// Updates `p` such that every node has `deg` outgoing edges in expectation.
    /// The conversion is done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl<W: Weight + SampleUniform> WeightedGraphGenerator<W> for WeightedGnp<W> {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng,
    {
        let p = self.probability();
        let (n, acyclic, self_loops) = (self.n, self.acyclic, self.self_loops);
        let weights = self.weights.clone();

        (0..n)
            .flat_map(move |u| {
                let first = if acyclic { u + 1 } else { 0 };
                (first..n).map(move |v| (u, v))
            })
            .filter(move |&(u, v)| u != v || self_loops)
            .filter_map(move |(u, v)| {
                rng.random_bool(p)
                    .then(|| WeightedEdge(u, v, rng.random_range(weights.clone())))
            })
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn weights_and_endpoints_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for acyclic in [false, true] {
            let edges = WeightedGnp::new()
                .nodes(40)
                .prob(0.2)
                .weights(-3i64..4)
                .acyclic(acyclic)
                .generate(rng);

            assert!(!edges.is_empty());
            for WeightedEdge(u, v, w) in edges {
                assert!(u < 40 && v < 40);
                assert!((-3..4).contains(&w));
                assert_ne!(u, v);
                if acyclic {
                    assert!(u < v);
                }
            }
        }
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let generator = WeightedGnp::<f64>::new().nodes(10);

        assert!(generator.clone().prob(0.0).generate(rng).is_empty());
        assert_eq!(generator.clone().prob(1.0).generate(rng).len(), 90);
        assert_eq!(
            generator.clone().prob(1.0).self_loops(true).generate(rng).len(),
            100
        );
        assert_eq!(generator.prob(1.0).acyclic(true).generate(rng).len(), 45);
    }

    #[test]
    fn stream_is_lazy_and_matches_generate() {
        let generator = WeightedGnp::new().nodes(30).prob(0.3).weights(0i64..10);

        let all = generator.generate(&mut Pcg64Mcg::seed_from_u64(9));
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let prefix = generator.stream(rng).take(5).collect::<Vec<_>>();
        assert_eq!(prefix, all[..5]);

        // only the prefix was drawn, so the generator state differs from a full run
        let mut after_full = Pcg64Mcg::seed_from_u64(9);
        generator.generate(&mut after_full);
        assert_ne!(rng.random::<u64>(), after_full.random::<u64>());
    }

    #[test]
    fn graph_has_all_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        let graph: KeyedGraph<Node, u32> = KeyedGraph::weighted_gnp(rng, 15, 0.0, 1..5);
        assert_eq!(graph.number_of_nodes(), 15);
        assert_eq!(graph.number_of_edges(), 0);
    }
}
