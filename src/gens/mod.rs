/*!
# Graph Generators

Seeded random weighted digraphs. They drive the randomized tests of this crate but are public,
so callers can produce instances for their own experiments.

Generators follow a builder pattern:

1. Create a generator instance (e.g. `WeightedGnp::new()`).
2. Set parameters (e.g. `.nodes(n).prob(p).weights(-5..10)`).
3. Generate edges via `generate()` / `stream()`, or a whole graph via `graph()`.

```rust
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use wgraphs::{prelude::*, gens::*, algo::*};

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph: KeyedGraph<Node, i64> = WeightedGnp::new()
    .nodes(30)
    .avg_deg(3.0)
    .weights(-10..10)
    .acyclic(true)
    .graph(rng);

assert_eq!(graph.number_of_nodes(), 30);
assert!(graph.find_cycle().is_empty());
```
*/

use rand::{Rng, distr::uniform::SampleUniform};

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average (out-)degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random weighted edge generator.
pub trait WeightedGraphGenerator<W: Weight> {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<W>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng;

    /// Number of nodes the generated edges refer to
    fn number_of_nodes(&self) -> NumNodes;

    /// Generates a graph with keys `0..n` from the generated edges
    fn graph<R>(&self, rng: &mut R) -> KeyedGraph<Node, W>
    where
        R: Rng,
    {
        KeyedGraph::from_weighted_edges(self.number_of_nodes(), self.stream(rng))
    }
}

/// Shortcuts for building whole graphs from the models above
pub trait RandomWeightedGraph<W: Weight + SampleUniform>: Sized {
    /// Creates a `G(n,p)` digraph without self-loops whose weights are drawn uniformly from
    /// `weights`
    fn weighted_gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: std::ops::Range<W>) -> Self
    where
        R: Rng;

    /// Same as [`RandomWeightedGraph::weighted_gnp`] but only with edges `u -> v` for `u < v`
    fn weighted_dag<R>(rng: &mut R, n: NumNodes, p: f64, weights: std::ops::Range<W>) -> Self
    where
        R: Rng;
}

impl<W> RandomWeightedGraph<W> for KeyedGraph<Node, W>
where
    W: Weight + SampleUniform,
{
    fn weighted_gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: std::ops::Range<W>) -> Self
    where
        R: Rng,
    {
        WeightedGnp::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .graph(rng)
    }

    fn weighted_dag<R>(rng: &mut R, n: NumNodes, p: f64, weights: std::ops::Range<W>) -> Self
    where
        R: Rng,
    {
        WeightedGnp::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .acyclic(true)
            .graph(rng)
    }
}
