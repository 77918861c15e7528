/*!
`wgraphs` is a small graph library for **w**eighted, keyed directed graphs and a handful of classical
algorithms on top of them:

- cycle detection by a three-coloured depth-first search,
- Bellman-Ford shortest paths which certify negative cycles with an explicit witness,
- Edmonds-Karp maximum flow on a residual network,
- two reductions to maximum flow (a parity matching puzzle and matrix rounding).

# Representation

Nodes are addressed by arbitrary **keys** (`u32`, `String`, `(i64, i64)`, a tagged enum, ...).
Any key that is `Clone + Eq + Hash + Debug` is a [`NodeKey`](crate::node::NodeKey).
Internally, every key is mapped to a dense id `Node = u32` in the order the keys were inserted,
and all algorithms operate on these dense ids. This keeps per-node state in plain vectors and
makes traversal orders reproducible: nodes are visited in insertion order and neighbors in the
order their edges were inserted.

Every edge carries a single weight `W: Weight`, which is interpreted as cost (shortest paths)
or capacity (flows). Integer and floating point types both work.

See [`repr::KeyedGraph`] for the graph store itself.

# Design

Algorithms are provided as configurable structs (Builder / Setter pattern) which are then run
on a borrowed graph. The most common use-cases are additionally available as traits implemented
on graphs directly:

```rust
use wgraphs::{prelude::*, algo::*};

let mut graph: KeyedGraph<&str, i64> = KeyedGraph::new();
graph.add_dir_edge("a", "b", 1);
graph.add_dir_edge("b", "c", -3);
graph.add_dir_edge("c", "a", 1);

let cycle = graph.find_negative_cycle().unwrap();
assert_eq!(graph.check_cycle(&cycle), Some(-1));
```

No algorithm ever modifies its input graph; max-flow works on a private residual copy.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes nodes, edges, weights, basic graph operations and the graph store,
- [`algo`] includes traversals, cycle detection, shortest paths and network flow,
- [`reductions`] includes the problems solved by reduction to maximum flow,
- [`io`] includes readers and writers for edge lists, matrices and coordinate lists.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod reductions;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod weight;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation
/// traits as well as the graph store.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*, weight::*};
}
